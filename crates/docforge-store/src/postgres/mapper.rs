use docforge_core::{Document, DocumentId, DocumentStatus, OwnerId, Template, TemplateId};

use super::queries::{DocumentRow, TemplateRow};
use crate::error::{EntityKind, Result, StoreError};

pub fn map_template(row: TemplateRow) -> Template {
    Template {
        id: TemplateId(row.id),
        name: row.name,
        description: row.description,
        category: row.category,
        body: row.body,
        fields: row.fields.0,
        created_at: row.created_at,
    }
}

pub fn map_document(row: DocumentRow) -> Result<Document> {
    let status: DocumentStatus = row.status.parse().map_err(StoreError::Corrupt)?;
    Ok(Document {
        id: DocumentId(row.id),
        owner_id: OwnerId(row.owner_id),
        template_id: TemplateId(row.template_id),
        title: row.title,
        content: row.content,
        status,
        created_at: row.created_at,
    })
}

/// Primary-key violations become `Conflict`; everything else stays a database error.
pub fn map_insert_error(err: sqlx::Error, kind: EntityKind, id: String) -> StoreError {
    if let sqlx::Error::Database(db) = &err {
        if db.is_unique_violation() {
            return StoreError::Conflict { kind, id };
        }
    }
    StoreError::Db(err)
}
