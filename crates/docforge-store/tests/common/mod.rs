#![allow(dead_code)]

use chrono::{DateTime, Duration, SubsecRound, Utc};
use docforge_core::{Document, DocumentId, DocumentStatus, OwnerId, Template, TemplateId};
use docforge_store::{DocumentStore, Store, StoreError, TemplateStore};

pub fn template(name: &str, minutes_ago: i64) -> Template {
    Template {
        id: TemplateId::new(),
        name: name.to_string(),
        description: Some(format!("{name} description")),
        category: Some("labor".to_string()),
        body: "Dear {name}".to_string(),
        fields: vec!["name".to_string()],
        created_at: timestamp(minutes_ago),
    }
}

pub fn document(owner: &str, template: &Template, minutes_ago: i64) -> Document {
    Document {
        id: DocumentId::new(),
        owner_id: OwnerId::new(owner),
        template_id: template.id,
        title: template.name.clone(),
        content: "Dear Zhang San".to_string(),
        status: DocumentStatus::Completed,
        created_at: timestamp(minutes_ago),
    }
}

/// Microsecond precision, so values survive a round trip through Postgres.
fn timestamp(minutes_ago: i64) -> DateTime<Utc> {
    (Utc::now() - Duration::minutes(minutes_ago)).trunc_subsecs(6)
}

/// Behaviour every backend must share.
pub async fn exercise_store<S: Store>(store: &S) {
    let older = template("Arbitration application", 10);
    let newer = template("Wage complaint", 1);
    store.insert_template(&older).await.expect("insert older");
    store.insert_template(&newer).await.expect("insert newer");

    let listed = store.list_templates().await.expect("list templates");
    let ids: Vec<TemplateId> = listed.iter().map(|template| template.id).collect();
    assert_eq!(ids, vec![newer.id, older.id]);

    let found = store.find_template(older.id).await.expect("find template");
    assert_eq!(found, Some(older.clone()));
    assert_eq!(
        store.find_template(TemplateId::new()).await.expect("find missing"),
        None
    );

    let duplicate = store.insert_template(&older).await;
    assert!(matches!(duplicate, Err(StoreError::Conflict { .. })));

    let first = document("owner-a", &older, 5);
    let second = document("owner-a", &newer, 2);
    let foreign = document("owner-b", &older, 1);
    for doc in [&first, &second, &foreign] {
        store.insert_document(doc).await.expect("insert document");
    }

    let owned = store
        .list_documents_for_owner(&OwnerId::new("owner-a"))
        .await
        .expect("list owner documents");
    let ids: Vec<DocumentId> = owned.iter().map(|doc| doc.id).collect();
    assert_eq!(ids, vec![second.id, first.id]);

    let found = store.find_document(foreign.id).await.expect("find document");
    assert_eq!(found, Some(foreign.clone()));

    let duplicate = store.insert_document(&first).await;
    assert!(matches!(duplicate, Err(StoreError::Conflict { .. })));

    assert!(
        store
            .list_documents_for_owner(&OwnerId::new("nobody"))
            .await
            .expect("list empty")
            .is_empty()
    );
}
