//! Core contracts and the rendering pipeline for Docforge.
//!
//! This crate defines the template and document types, the placeholder
//! parser, the field validator and the substitution renderer. Nothing here
//! performs I/O; persistence lives in `docforge-store`.

pub mod error;
pub mod model;
pub mod placeholder;
pub mod render;
pub mod validation;

pub use error::{RenderError, Result, TemplateError};
pub use model::{
    Document, DocumentId, DocumentStatus, FieldValues, NewTemplate, OwnerId, Template, TemplateId,
};
pub use placeholder::{Segment, extract_placeholders, tokenize};
pub use render::render;
pub use validation::{
    FieldPartition, check_declared_fields, check_definition, missing_fields, partition_fields,
};

/// Current contract version for serialized templates and documents.
pub const CONTRACT_VERSION: &str = "0.1";
