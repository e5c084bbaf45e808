use std::sync::Arc;

use chrono::Utc;

use docforge_core::{FieldValues, NewTemplate, Template, TemplateId, check_definition, render};
use docforge_store::{EntityKind, Store, TemplateStore};

use crate::error::{EngineError, Result};

/// Append-only catalog of templates.
#[derive(Clone)]
pub struct TemplateRegistry {
    store: Arc<dyn Store>,
}

impl TemplateRegistry {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    /// Validate and persist a template under a fresh identifier.
    ///
    /// A declared field list must name exactly the body's placeholders
    /// (order ignored); the stored list is always in first-occurrence order.
    pub async fn register(&self, new: NewTemplate) -> Result<Template> {
        let fields = match check_definition(&new) {
            Ok(fields) => fields,
            Err(err) => {
                tracing::warn!(event = "template_rejected", name = %new.name, reason = %err);
                return Err(EngineError::Validation(err));
            }
        };

        let template = Template {
            id: TemplateId::new(),
            name: new.name,
            description: new.description,
            category: new.category,
            body: new.body,
            fields,
            created_at: Utc::now(),
        };
        self.store.insert_template(&template).await?;

        tracing::info!(
            event = "template_registered",
            template_id = %template.id,
            field_count = template.fields.len(),
            backend = self.store.backend()
        );
        Ok(template)
    }

    pub async fn get(&self, id: TemplateId) -> Result<Template> {
        self.store
            .find_template(id)
            .await?
            .ok_or_else(|| EngineError::not_found(EntityKind::Template, id))
    }

    /// All templates, most recently registered first.
    pub async fn list(&self) -> Result<Vec<Template>> {
        Ok(self.store.list_templates().await?)
    }

    /// Render a registered template without persisting anything.
    pub async fn preview(&self, id: TemplateId, values: &FieldValues) -> Result<String> {
        let template = self.get(id).await?;
        Ok(render(&template.body, &template.fields, values)?)
    }
}
