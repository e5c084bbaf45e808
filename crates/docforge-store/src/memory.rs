use async_trait::async_trait;
use tokio::sync::RwLock;

use docforge_core::{Document, DocumentId, OwnerId, Template, TemplateId};

use crate::error::{EntityKind, Result, StoreError};
use crate::store::{DocumentStore, TemplateStore};

/// Process-local store. Listings are newest first by `created_at`; entities
/// sharing a timestamp come back most recently inserted first.
#[derive(Debug, Default)]
pub struct MemoryStore {
    templates: RwLock<Vec<Template>>,
    documents: RwLock<Vec<Document>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TemplateStore for MemoryStore {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn insert_template(&self, template: &Template) -> Result<()> {
        let mut templates = self.templates.write().await;
        if templates.iter().any(|existing| existing.id == template.id) {
            return Err(StoreError::Conflict {
                kind: EntityKind::Template,
                id: template.id.to_string(),
            });
        }
        templates.push(template.clone());
        Ok(())
    }

    async fn find_template(&self, id: TemplateId) -> Result<Option<Template>> {
        let templates = self.templates.read().await;
        Ok(templates.iter().find(|template| template.id == id).cloned())
    }

    async fn list_templates(&self) -> Result<Vec<Template>> {
        let templates = self.templates.read().await;
        let mut listed: Vec<Template> = templates.iter().rev().cloned().collect();
        listed.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(listed)
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn insert_document(&self, document: &Document) -> Result<()> {
        let mut documents = self.documents.write().await;
        if documents.iter().any(|existing| existing.id == document.id) {
            return Err(StoreError::Conflict {
                kind: EntityKind::Document,
                id: document.id.to_string(),
            });
        }
        documents.push(document.clone());
        Ok(())
    }

    async fn find_document(&self, id: DocumentId) -> Result<Option<Document>> {
        let documents = self.documents.read().await;
        Ok(documents.iter().find(|document| document.id == id).cloned())
    }

    async fn list_documents_for_owner(&self, owner: &OwnerId) -> Result<Vec<Document>> {
        let documents = self.documents.read().await;
        let mut listed: Vec<Document> = documents
            .iter()
            .rev()
            .filter(|document| &document.owner_id == owner)
            .cloned()
            .collect();
        listed.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(listed)
    }
}
