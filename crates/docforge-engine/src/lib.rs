//! Template registry and document lifecycle on top of a persistence backend.

pub mod catalog;
pub mod engine;
pub mod error;
pub mod lifecycle;
pub mod registry;

pub use catalog::{builtin_templates, seed_catalog};
pub use engine::DocumentEngine;
pub use error::{EngineError, ErrorKind, Result};
pub use lifecycle::DocumentManager;
pub use registry::TemplateRegistry;

pub use docforge_core::{
    Document, DocumentId, FieldValues, NewTemplate, OwnerId, Template, TemplateId,
};
