use std::sync::Arc;

use docforge_core::TemplateError;
use docforge_engine::{
    DocumentEngine, EngineError, ErrorKind, FieldValues, NewTemplate, TemplateId, seed_catalog,
};
use docforge_store::{FileStore, MemoryStore};

fn engine() -> DocumentEngine {
    DocumentEngine::new(Arc::new(MemoryStore::new()))
}

#[tokio::test]
async fn register_derives_fields_when_omitted() {
    let engine = engine();
    let template = engine
        .register_template(NewTemplate::new("Debt", "Hello {name}, you owe {amount} yuan."))
        .await
        .expect("register");

    assert_eq!(template.fields, vec!["name", "amount"]);
    assert_eq!(engine.get_template(template.id).await.expect("get"), template);
}

#[tokio::test]
async fn register_rejects_declared_fields_that_disagree_with_body() {
    let engine = engine();
    let err = engine
        .register_template(
            NewTemplate::new("Debt", "Hello {name}, you owe {amount} yuan.").with_fields(["name"]),
        )
        .await
        .expect_err("mismatch must be rejected");

    assert_eq!(err.kind(), ErrorKind::InvalidTemplate);
    assert!(matches!(
        err,
        EngineError::Validation(TemplateError::FieldMismatch { ref undeclared, ref unused })
            if undeclared == &["amount".to_string()] && unused.is_empty()
    ));
    assert!(engine.list_templates().await.expect("list").is_empty());
}

#[tokio::test]
async fn unknown_template_is_not_found() {
    let err = engine()
        .get_template(TemplateId::new())
        .await
        .expect_err("absent");
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[tokio::test]
async fn list_returns_newest_first_and_is_repeatable() {
    let engine = engine();
    let mut registered = Vec::new();
    for name in ["first", "second", "third"] {
        let template = engine
            .register_template(NewTemplate::new(name, "{x}"))
            .await
            .expect("register");
        registered.push(template.id);
    }
    registered.reverse();

    for _ in 0..2 {
        let ids: Vec<TemplateId> = engine
            .list_templates()
            .await
            .expect("list")
            .iter()
            .map(|template| template.id)
            .collect();
        assert_eq!(ids, registered);
    }
}

#[tokio::test]
async fn preview_renders_without_persisting_documents() {
    let engine = engine();
    let template = engine
        .register_template(NewTemplate::new("Greeting", "Hi {who}"))
        .await
        .expect("register");
    let values: FieldValues = [("who".to_string(), "Wang Wu".to_string())].into();

    let text = engine.preview(template.id, &values).await.expect("preview");
    assert_eq!(text, "Hi Wang Wu");

    let err = engine
        .preview(template.id, &FieldValues::new())
        .await
        .expect_err("missing");
    assert_eq!(err.kind(), ErrorKind::IncompleteSubmission);
}

#[tokio::test]
async fn seeding_registers_builtins_once() {
    let dir = tempfile::tempdir().expect("tempdir");
    let engine = DocumentEngine::new(Arc::new(FileStore::new(dir.path())));

    let seeded = seed_catalog(engine.registry()).await.expect("seed");
    assert_eq!(seeded.len(), 3);
    assert_eq!(seeded[0].fields.len(), 14);

    let again = seed_catalog(engine.registry()).await.expect("seed again");
    assert!(again.is_empty());
    assert_eq!(engine.list_templates().await.expect("list").len(), 3);
}
