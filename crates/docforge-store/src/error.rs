use std::fmt;

use thiserror::Error;

/// Kind of persisted entity, used in error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Template,
    Document,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Template => f.write_str("template"),
            EntityKind::Document => f.write_str("document"),
        }
    }
}

/// Infrastructure failures raised by a persistence backend.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),
    /// The identifier is already taken; entities are never overwritten.
    #[error("{kind} already exists: {id}")]
    Conflict { kind: EntityKind, id: String },
    /// Stored data could not be decoded into an entity.
    #[error("corrupt record: {0}")]
    Corrupt(String),
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
