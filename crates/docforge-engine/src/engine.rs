use std::sync::Arc;

use docforge_core::{Document, DocumentId, FieldValues, NewTemplate, OwnerId, Template, TemplateId};
use docforge_store::Store;

use crate::error::Result;
use crate::lifecycle::DocumentManager;
use crate::registry::TemplateRegistry;

/// Entry point wiring the registry and the document manager to one backend.
///
/// Exposes the operations a transport layer maps to requests.
#[derive(Clone)]
pub struct DocumentEngine {
    registry: TemplateRegistry,
    documents: DocumentManager,
}

impl DocumentEngine {
    pub fn new(store: Arc<dyn Store>) -> Self {
        let registry = TemplateRegistry::new(Arc::clone(&store));
        let documents = DocumentManager::new(store, registry.clone());
        Self {
            registry,
            documents,
        }
    }

    pub fn registry(&self) -> &TemplateRegistry {
        &self.registry
    }

    pub async fn register_template(&self, new: NewTemplate) -> Result<Template> {
        self.registry.register(new).await
    }

    pub async fn get_template(&self, id: TemplateId) -> Result<Template> {
        self.registry.get(id).await
    }

    pub async fn list_templates(&self) -> Result<Vec<Template>> {
        self.registry.list().await
    }

    pub async fn preview(&self, id: TemplateId, values: &FieldValues) -> Result<String> {
        self.registry.preview(id, values).await
    }

    pub async fn generate_document(
        &self,
        owner: OwnerId,
        template_id: TemplateId,
        values: &FieldValues,
        title: Option<String>,
    ) -> Result<Document> {
        self.documents
            .generate(owner, template_id, values, title)
            .await
    }

    pub async fn get_document(&self, id: DocumentId, owner: &OwnerId) -> Result<Document> {
        self.documents.get(id, owner).await
    }

    pub async fn list_documents_for_owner(&self, owner: &OwnerId) -> Result<Vec<Document>> {
        self.documents.list_for_owner(owner).await
    }
}
