use std::time::Duration;

use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use docforge_core::{Document, DocumentId, OwnerId, Template, TemplateId};

use crate::error::{EntityKind, Result};
use crate::store::{DocumentStore, TemplateStore};

mod mapper;
mod queries;

/// Store backed by PostgreSQL tables `docforge_templates` and `docforge_documents`.
#[derive(Debug, Clone)]
pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    /// Create a store using a pre-configured pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connect to `database_url` with a bounded pool.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(Duration::from_secs(10))
            .connect(database_url)
            .await?;
        Ok(Self::new(pool))
    }

    /// Create tables and indexes if they do not exist yet.
    pub async fn migrate(&self) -> Result<()> {
        queries::migrate(&self.pool).await?;
        tracing::info!(event = "store_migrated", backend = "postgres");
        Ok(())
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl TemplateStore for PostgresStore {
    fn backend(&self) -> &'static str {
        "postgres"
    }

    async fn insert_template(&self, template: &Template) -> Result<()> {
        queries::insert_template(&self.pool, template)
            .await
            .map_err(|err| {
                mapper::map_insert_error(err, EntityKind::Template, template.id.to_string())
            })
    }

    async fn find_template(&self, id: TemplateId) -> Result<Option<Template>> {
        let row = queries::find_template(&self.pool, id.0).await?;
        Ok(row.map(mapper::map_template))
    }

    async fn list_templates(&self) -> Result<Vec<Template>> {
        let rows = queries::list_templates(&self.pool).await?;
        Ok(rows.into_iter().map(mapper::map_template).collect())
    }
}

#[async_trait]
impl DocumentStore for PostgresStore {
    async fn insert_document(&self, document: &Document) -> Result<()> {
        queries::insert_document(&self.pool, document)
            .await
            .map_err(|err| {
                mapper::map_insert_error(err, EntityKind::Document, document.id.to_string())
            })
    }

    async fn find_document(&self, id: DocumentId) -> Result<Option<Document>> {
        queries::find_document(&self.pool, id.0)
            .await?
            .map(mapper::map_document)
            .transpose()
    }

    async fn list_documents_for_owner(&self, owner: &OwnerId) -> Result<Vec<Document>> {
        queries::list_documents_for_owner(&self.pool, owner.as_str())
            .await?
            .into_iter()
            .map(mapper::map_document)
            .collect()
    }
}
