use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;

use docforge_core::{Document, DocumentId, OwnerId, Template, TemplateId};

use crate::atomic::{is_temp_file, write_bytes_new};
use crate::error::{EntityKind, Result, StoreError};
use crate::store::{DocumentStore, TemplateStore};

/// Directory-backed store: one pretty-printed JSON file per entity.
///
/// Layout: `<root>/templates/<id>.json` and `<root>/documents/<id>.json`.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn dir(&self, kind: EntityKind) -> PathBuf {
        match kind {
            EntityKind::Template => self.root.join("templates"),
            EntityKind::Document => self.root.join("documents"),
        }
    }

    fn entity_path(&self, kind: EntityKind, id: &str) -> PathBuf {
        self.dir(kind).join(format!("{id}.json"))
    }

    async fn insert<T: Serialize + Sync>(
        &self,
        kind: EntityKind,
        id: String,
        value: &T,
    ) -> Result<()> {
        let data = serde_json::to_vec_pretty(value)?;
        let path = self.entity_path(kind, &id);
        blocking(move || match write_bytes_new(&path, &data) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::AlreadyExists => {
                Err(StoreError::Conflict { kind, id })
            }
            Err(err) => Err(StoreError::Io(err)),
        })
        .await
    }

    async fn find<T>(&self, kind: EntityKind, id: String) -> Result<Option<T>>
    where
        T: DeserializeOwned + Send + 'static,
    {
        let path = self.entity_path(kind, &id);
        blocking(move || {
            if !path.exists() {
                return Ok(None);
            }
            read_entity(&path).map(Some)
        })
        .await
    }

    async fn load_all<T>(&self, kind: EntityKind) -> Result<Vec<T>>
    where
        T: DeserializeOwned + Send + 'static,
    {
        let dir = self.dir(kind);
        blocking(move || {
            if !dir.exists() {
                return Ok(Vec::new());
            }
            let mut entities = Vec::new();
            for entry in std::fs::read_dir(&dir)? {
                let path = entry?.path();
                if is_temp_file(&path) || path.extension().is_none_or(|ext| ext != "json") {
                    continue;
                }
                entities.push(read_entity(&path)?);
            }
            Ok(entities)
        })
        .await
    }
}

#[async_trait]
impl TemplateStore for FileStore {
    fn backend(&self) -> &'static str {
        "file"
    }

    async fn insert_template(&self, template: &Template) -> Result<()> {
        self.insert(EntityKind::Template, template.id.to_string(), template)
            .await
    }

    async fn find_template(&self, id: TemplateId) -> Result<Option<Template>> {
        self.find(EntityKind::Template, id.to_string()).await
    }

    async fn list_templates(&self) -> Result<Vec<Template>> {
        let mut templates: Vec<Template> = self.load_all(EntityKind::Template).await?;
        templates.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(templates)
    }
}

#[async_trait]
impl DocumentStore for FileStore {
    async fn insert_document(&self, document: &Document) -> Result<()> {
        self.insert(EntityKind::Document, document.id.to_string(), document)
            .await
    }

    async fn find_document(&self, id: DocumentId) -> Result<Option<Document>> {
        self.find(EntityKind::Document, id.to_string()).await
    }

    async fn list_documents_for_owner(&self, owner: &OwnerId) -> Result<Vec<Document>> {
        let mut documents: Vec<Document> = self.load_all(EntityKind::Document).await?;
        documents.retain(|document| &document.owner_id == owner);
        documents.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(documents)
    }
}

fn read_entity<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read(path)?;
    serde_json::from_slice(&content)
        .map_err(|err| StoreError::Corrupt(format!("{}: {err}", path.display())))
}

async fn blocking<T, F>(task: F) -> Result<T>
where
    F: FnOnce() -> Result<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(task)
        .await
        .map_err(|err| StoreError::Io(std::io::Error::other(err)))?
}
