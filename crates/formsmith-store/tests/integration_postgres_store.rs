use std::env;
use std::time::Duration;

use anyhow::{Context, Result};
use formsmith_core::{FieldDefinition, FieldType};
use formsmith_store::{FormStore, NewForm, PostgresStore, StoreError};
use serde_json::json;
use uuid::Uuid;

fn database_url() -> Option<String> {
    env::var("TEST_DATABASE_URL")
        .or_else(|_| env::var("DATABASE_URL"))
        .ok()
}

fn sample_form(slug: &str) -> NewForm {
    NewForm {
        user_id: "user_integration".to_string(),
        title: "Integration Survey".to_string(),
        fields: vec![FieldDefinition {
            id: "q1".to_string(),
            kind: FieldType::Text,
            label: "Question".to_string(),
            placeholder: None,
            required: Some(true),
            options: None,
            validation: None,
        }],
        slug: slug.to_string(),
    }
}

#[tokio::test]
async fn round_trips_forms_and_responses() -> Result<()> {
    let Some(db_url) = database_url() else {
        eprintln!("skipping: set TEST_DATABASE_URL or DATABASE_URL for integration tests");
        return Ok(());
    };

    let store = PostgresStore::connect(&db_url)
        .await
        .context("connecting to Postgres")?;
    store.ensure_schema().await?;
    store.ensure_schema().await.context("ensure_schema rerun")?;

    let slug = format!("it-{}", Uuid::new_v4());
    let created = store.create_form(sample_form(&slug)).await?;
    assert!(!created.is_published);
    assert_eq!(created.fields.len(), 1);

    let by_slug = store
        .find_form(&slug)
        .await?
        .context("form should resolve by slug")?;
    assert_eq!(by_slug.id, created.id);

    let by_id_text = store
        .find_form(&created.id.to_string())
        .await?
        .context("form should resolve by id text")?;
    assert_eq!(by_id_text.id, created.id);

    store
        .create_response(created.id, json!({"q1": "older"}))
        .await?;
    tokio::time::sleep(Duration::from_millis(20)).await;
    let newer = store
        .create_response(created.id, json!({"q1": "newer"}))
        .await?;

    let responses = store.list_responses(created.id).await?;
    assert_eq!(responses.len(), 2);
    assert_eq!(responses[0].id, newer.id);
    assert_eq!(responses[0].data, json!({"q1": "newer"}));

    let listed = store.list_forms("user_integration").await?;
    let entry = listed
        .iter()
        .find(|entry| entry.form.id == created.id)
        .context("created form should be listed")?;
    assert_eq!(entry.response_count, 2);

    let published = store
        .set_published(created.id, true)
        .await?
        .context("form should still exist")?;
    assert!(published.is_published);

    let conflict = store.create_form(sample_form(&slug)).await;
    assert!(matches!(conflict, Err(StoreError::SlugTaken(_))));

    Ok(())
}
