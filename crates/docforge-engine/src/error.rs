use docforge_core::{RenderError, TemplateError};
use docforge_store::{EntityKind, StoreError};
use thiserror::Error;

/// Errors surfaced by engine operations. None of them are retried.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The template definition is inconsistent.
    #[error("invalid template definition: {0}")]
    Validation(#[from] TemplateError),
    /// The template or document does not exist for this caller.
    #[error("{kind} not found: {id}")]
    NotFound { kind: EntityKind, id: String },
    /// Declared fields without a value, in declared order.
    #[error("incomplete submission, missing fields: {}", .fields.join(", "))]
    MissingFields { fields: Vec<String> },
    /// Opaque persistence failure.
    #[error("storage error: {0}")]
    Store(#[from] StoreError),
}

impl EngineError {
    pub(crate) fn not_found(kind: EntityKind, id: impl ToString) -> Self {
        EngineError::NotFound {
            kind,
            id: id.to_string(),
        }
    }

    /// Classification a transport layer maps to its responses.
    pub fn kind(&self) -> ErrorKind {
        match self {
            EngineError::Validation(_) => ErrorKind::InvalidTemplate,
            EngineError::NotFound { .. } => ErrorKind::NotFound,
            EngineError::MissingFields { .. } => ErrorKind::IncompleteSubmission,
            EngineError::Store(_) => ErrorKind::Infrastructure,
        }
    }
}

impl From<RenderError> for EngineError {
    fn from(err: RenderError) -> Self {
        match err {
            RenderError::MissingFields(fields) => EngineError::MissingFields { fields },
        }
    }
}

/// Caller-facing error classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad template definition.
    InvalidTemplate,
    /// Submission lacks declared fields.
    IncompleteSubmission,
    NotFound,
    Infrastructure,
}

impl ErrorKind {
    /// True when the caller's input caused the failure.
    pub fn is_client_error(self) -> bool {
        !matches!(self, ErrorKind::Infrastructure)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::InvalidTemplate => "invalid_template",
            ErrorKind::IncompleteSubmission => "incomplete_submission",
            ErrorKind::NotFound => "not_found",
            ErrorKind::Infrastructure => "infrastructure",
        }
    }
}

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;
