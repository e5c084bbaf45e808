use thiserror::Error;

/// A template definition that cannot be registered.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    /// The declared field list and the body's placeholders disagree.
    #[error(
        "declared fields do not match body placeholders (undeclared: [{}], unused: [{}])",
        .undeclared.join(", "),
        .unused.join(", ")
    )]
    FieldMismatch {
        /// Placeholders present in the body but not declared.
        undeclared: Vec<String>,
        /// Declared names with no placeholder in the body.
        unused: Vec<String>,
    },
    /// The same name appears more than once in the declared list.
    #[error("field declared more than once: {0}")]
    DuplicateField(String),
    /// The display name is empty or whitespace.
    #[error("template name must not be empty")]
    EmptyName,
}

/// Rendering failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// Declared fields with no supplied value, in declared order.
    #[error("missing fields: {}", .0.join(", "))]
    MissingFields(Vec<String>),
}

/// Convenience alias for template-definition results.
pub type Result<T> = std::result::Result<T, TemplateError>;
