use async_trait::async_trait;

use docforge_core::{Document, DocumentId, OwnerId, Template, TemplateId};

use crate::error::Result;

/// Append-only template persistence.
#[async_trait]
pub trait TemplateStore: Send + Sync {
    /// Backend identifier (e.g. `memory`, `postgres`).
    fn backend(&self) -> &'static str;

    /// Persist a new template atomically. Fails with `Conflict` if the id exists.
    async fn insert_template(&self, template: &Template) -> Result<()>;

    async fn find_template(&self, id: TemplateId) -> Result<Option<Template>>;

    /// All templates, most recently registered first.
    async fn list_templates(&self) -> Result<Vec<Template>>;
}

/// Append-only document persistence.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Persist a new document atomically. Fails with `Conflict` if the id exists.
    async fn insert_document(&self, document: &Document) -> Result<()>;

    async fn find_document(&self, id: DocumentId) -> Result<Option<Document>>;

    /// Documents owned by `owner`, newest first.
    async fn list_documents_for_owner(&self, owner: &OwnerId) -> Result<Vec<Document>>;
}

/// A backend serving both entity kinds.
pub trait Store: TemplateStore + DocumentStore {}

impl<T: TemplateStore + DocumentStore> Store for T {}
