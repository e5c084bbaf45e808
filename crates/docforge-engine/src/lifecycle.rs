use std::sync::Arc;

use docforge_core::{Document, DocumentId, FieldValues, OwnerId, TemplateId, render};
use docforge_store::{DocumentStore, EntityKind, Store};

use crate::error::{EngineError, Result};
use crate::registry::TemplateRegistry;

/// Creates and serves generated documents. Documents are written once and
/// never modified.
#[derive(Clone)]
pub struct DocumentManager {
    store: Arc<dyn Store>,
    registry: TemplateRegistry,
}

impl DocumentManager {
    pub fn new(store: Arc<dyn Store>, registry: TemplateRegistry) -> Self {
        Self { store, registry }
    }

    /// Render `template_id` with `values` and persist the result as a
    /// completed document owned by `owner`.
    ///
    /// A blank title falls back to the template's display name.
    pub async fn generate(
        &self,
        owner: OwnerId,
        template_id: TemplateId,
        values: &FieldValues,
        title: Option<String>,
    ) -> Result<Document> {
        let template = self.registry.get(template_id).await?;

        let content = match render(&template.body, &template.fields, values) {
            Ok(content) => content,
            Err(err) => {
                let err = EngineError::from(err);
                tracing::info!(
                    event = "document_rejected",
                    template_id = %template_id,
                    owner_id = %owner,
                    reason = %err
                );
                return Err(err);
            }
        };

        let title = title.filter(|title| !title.trim().is_empty());
        let document = Document::completed(owner, &template, title, content);
        self.store.insert_document(&document).await?;

        tracing::info!(
            event = "document_generated",
            document_id = %document.id,
            template_id = %template_id,
            owner_id = %document.owner_id,
            field_count = template.fields.len()
        );
        Ok(document)
    }

    /// Fetch a document for its owner.
    ///
    /// A document owned by someone else is reported exactly like a missing one.
    pub async fn get(&self, id: DocumentId, owner: &OwnerId) -> Result<Document> {
        match self.store.find_document(id).await? {
            Some(document) if &document.owner_id == owner => Ok(document),
            Some(_) => {
                tracing::debug!(
                    event = "document_lookup_denied",
                    document_id = %id,
                    owner_id = %owner
                );
                Err(EngineError::not_found(EntityKind::Document, id))
            }
            None => Err(EngineError::not_found(EntityKind::Document, id)),
        }
    }

    /// Documents owned by `owner`, newest first.
    pub async fn list_for_owner(&self, owner: &OwnerId) -> Result<Vec<Document>> {
        Ok(self.store.list_documents_for_owner(owner).await?)
    }
}
