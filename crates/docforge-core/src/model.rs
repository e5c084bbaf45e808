use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Caller-supplied values keyed by placeholder name.
///
/// Scoped to one render request and never persisted on its own.
pub type FieldValues = BTreeMap<String, String>;

macro_rules! uuid_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
            JsonSchema,
        )]
        #[serde(transparent)]
        pub struct $name(pub Uuid);

        impl $name {
            /// Generate a fresh random identifier.
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                Uuid::parse_str(value).map(Self)
            }
        }
    };
}

uuid_id!(
    /// Unique, immutable template identifier.
    TemplateId
);

uuid_id!(
    /// Unique document identifier.
    DocumentId
);

/// Opaque identity of the caller a document belongs to.
///
/// Issued and verified by the identity collaborator; never interpreted here.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct OwnerId(pub String);

impl OwnerId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OwnerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A registered, immutable document template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Template {
    pub id: TemplateId,
    /// Display name, also the default title of generated documents.
    pub name: String,
    pub description: Option<String>,
    /// Free-form category tag (e.g. `labor_arbitration`).
    pub category: Option<String>,
    /// Text containing zero or more `{field}` placeholders.
    pub body: String,
    /// Distinct placeholder names in first-occurrence order.
    pub fields: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// Author input for registering a template.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct NewTemplate {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    pub body: String,
    /// Optional declared field list; derived from the body when absent.
    #[serde(default)]
    pub fields: Option<Vec<String>>,
}

impl NewTemplate {
    pub fn new(name: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            body: body.into(),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields = Some(fields.into_iter().map(Into::into).collect());
        self
    }
}

/// Lifecycle status of a generated document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum DocumentStatus {
    /// Reserved for partial-save flows; never produced by the engine.
    Draft,
    Completed,
}

impl DocumentStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            DocumentStatus::Draft => "draft",
            DocumentStatus::Completed => "completed",
        }
    }
}

impl fmt::Display for DocumentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocumentStatus {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "draft" => Ok(DocumentStatus::Draft),
            "completed" => Ok(DocumentStatus::Completed),
            other => Err(format!("unknown document status: {other}")),
        }
    }
}

/// A rendered document bound to its template and owner. Append-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Document {
    pub id: DocumentId,
    pub owner_id: OwnerId,
    pub template_id: TemplateId,
    pub title: String,
    /// Rendered text with every placeholder resolved.
    pub content: String,
    pub status: DocumentStatus,
    pub created_at: DateTime<Utc>,
}

impl Document {
    /// Build a completed document from already-rendered content.
    ///
    /// The title falls back to the template's display name.
    pub fn completed(
        owner_id: OwnerId,
        template: &Template,
        title: Option<String>,
        content: String,
    ) -> Self {
        Self {
            id: DocumentId::new(),
            owner_id,
            template_id: template.id,
            title: title.unwrap_or_else(|| template.name.clone()),
            content,
            status: DocumentStatus::Completed,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_serializes_lowercase() {
        let json = serde_json::to_string(&DocumentStatus::Completed).expect("serialize status");
        assert_eq!(json, "\"completed\"");
        assert_eq!("draft".parse::<DocumentStatus>(), Ok(DocumentStatus::Draft));
    }

    #[test]
    fn identifiers_round_trip_through_strings() {
        let id = TemplateId::new();
        let parsed: TemplateId = id.to_string().parse().expect("parse id");
        assert_eq!(parsed, id);
        assert!("not-a-uuid".parse::<DocumentId>().is_err());
    }
}
