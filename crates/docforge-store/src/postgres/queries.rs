use chrono::{DateTime, Utc};
use sqlx::PgPool;
use sqlx::types::Json;
use uuid::Uuid;

use docforge_core::{Document, Template};

const MIGRATIONS: &[&str] = &[
    r#"
    create table if not exists docforge_templates (
      id uuid primary key,
      seq bigserial not null,
      name text not null,
      description text,
      category text,
      body text not null,
      fields jsonb not null,
      created_at timestamptz not null
    )
    "#,
    r#"
    create table if not exists docforge_documents (
      id uuid primary key,
      seq bigserial not null,
      owner_id text not null,
      template_id uuid not null references docforge_templates (id),
      title text not null,
      content text not null,
      status text not null,
      created_at timestamptz not null
    )
    "#,
    r#"
    create index if not exists docforge_documents_owner_idx
      on docforge_documents (owner_id, created_at desc, seq desc)
    "#,
];

#[derive(Debug, sqlx::FromRow)]
pub struct TemplateRow {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub body: String,
    pub fields: Json<Vec<String>>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, sqlx::FromRow)]
pub struct DocumentRow {
    pub id: Uuid,
    pub owner_id: String,
    pub template_id: Uuid,
    pub title: String,
    pub content: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

pub async fn migrate(pool: &PgPool) -> Result<(), sqlx::Error> {
    for statement in MIGRATIONS {
        sqlx::query(statement).execute(pool).await?;
    }
    Ok(())
}

pub async fn insert_template(pool: &PgPool, template: &Template) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        insert into docforge_templates (id, name, description, category, body, fields, created_at)
        values ($1, $2, $3, $4, $5, $6, $7)
        "#,
    )
    .bind(template.id.0)
    .bind(&template.name)
    .bind(&template.description)
    .bind(&template.category)
    .bind(&template.body)
    .bind(Json(&template.fields))
    .bind(template.created_at)
    .execute(pool)
    .await?;
    Ok(())
}

pub async fn find_template(pool: &PgPool, id: Uuid) -> Result<Option<TemplateRow>, sqlx::Error> {
    sqlx::query_as::<_, TemplateRow>(
        r#"
        select id, name, description, category, body, fields, created_at
        from docforge_templates
        where id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn list_templates(pool: &PgPool) -> Result<Vec<TemplateRow>, sqlx::Error> {
    sqlx::query_as::<_, TemplateRow>(
        r#"
        select id, name, description, category, body, fields, created_at
        from docforge_templates
        order by created_at desc, seq desc
        "#,
    )
    .fetch_all(pool)
    .await
}

pub async fn insert_document(pool: &PgPool, document: &Document) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        insert into docforge_documents
          (id, owner_id, template_id, title, content, status, created_at)
        values ($1, $2, $3, $4, $5, $6, $7)
        "#,
    )
    .bind(document.id.0)
    .bind(document.owner_id.as_str())
    .bind(document.template_id.0)
    .bind(&document.title)
    .bind(&document.content)
    .bind(document.status.as_str())
    .bind(document.created_at)
    .execute(pool)
    .await?;
    Ok(())
}

pub async fn find_document(pool: &PgPool, id: Uuid) -> Result<Option<DocumentRow>, sqlx::Error> {
    sqlx::query_as::<_, DocumentRow>(
        r#"
        select id, owner_id, template_id, title, content, status, created_at
        from docforge_documents
        where id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn list_documents_for_owner(
    pool: &PgPool,
    owner_id: &str,
) -> Result<Vec<DocumentRow>, sqlx::Error> {
    sqlx::query_as::<_, DocumentRow>(
        r#"
        select id, owner_id, template_id, title, content, status, created_at
        from docforge_documents
        where owner_id = $1
        order by created_at desc, seq desc
        "#,
    )
    .bind(owner_id)
    .fetch_all(pool)
    .await
}
