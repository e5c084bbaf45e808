mod common;

use anyhow::{Context, Result};
use docforge_store::PostgresStore;
use std::env;

fn database_url() -> Result<String> {
    env::var("TEST_DATABASE_URL").context("set TEST_DATABASE_URL for postgres store tests")
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn postgres_store_honours_store_contract() -> Result<()> {
    let store = PostgresStore::connect(&database_url()?, 5)
        .await
        .context("connecting to Postgres")?;
    store.migrate().await.context("migrating")?;

    sqlx::query("truncate docforge_documents, docforge_templates")
        .execute(store.pool())
        .await
        .context("resetting tables")?;

    common::exercise_store(&store).await;
    Ok(())
}
