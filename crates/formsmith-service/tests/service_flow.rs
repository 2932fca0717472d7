use std::sync::Arc;

use async_trait::async_trait;
use formsmith_ai::{AiError, ChatMessage, ChatModel, SchemaGenerator};
use formsmith_service::{FormService, ServiceError, StaticAuthenticator};
use formsmith_store::MemoryStore;
use serde_json::{json, Value};

fn feedback_schema() -> Value {
    json!({
        "title": "Feedback",
        "fields": [
            {"id": "q1", "type": "text", "label": "Name", "required": true},
            {"id": "q2", "type": "textarea", "label": "Comments"}
        ]
    })
}

fn service(user: &str) -> FormService<MemoryStore> {
    FormService::new(MemoryStore::new(), StaticAuthenticator::user(user))
}

#[tokio::test]
async fn create_form_persists_and_resolves_by_slug() {
    let service = service("user_1");
    let created = service
        .create_form(&feedback_schema())
        .await
        .expect("create form");

    assert_eq!(created.title, "Feedback");
    assert!(created.slug.starts_with("feedback-"));

    let form = service.get_form(&created.slug).await.expect("lookup");
    assert_eq!(form.id, created.form_id);
    assert!(!form.is_published);

    let listed = service.list_forms().await.expect("list");
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].response_count, 0);
}

#[tokio::test]
async fn create_form_rejects_invalid_schema_with_full_report() {
    let service = service("user_1");
    let invalid = json!({
        "title": "Broken",
        "fields": [
            {"id": "a", "type": "text", "label": "A"},
            {"id": "A", "type": "select", "label": "B"}
        ]
    });

    let err = service.create_form(&invalid).await.unwrap_err();
    assert_eq!(err.http_status(), 400);
    match err {
        ServiceError::InvalidSchema(report) => {
            assert_eq!(
                err_codes(&report),
                vec!["duplicate_field_id", "missing_options"]
            );
        }
        other => panic!("expected InvalidSchema, got {other:?}"),
    }
}

fn err_codes(report: &formsmith_core::ValidationReport) -> Vec<String> {
    report.issues.iter().map(|issue| issue.code.clone()).collect()
}

#[tokio::test]
async fn anonymous_callers_cannot_create_or_list() {
    let service = FormService::new(MemoryStore::new(), StaticAuthenticator::anonymous());

    let err = service.create_form(&feedback_schema()).await.unwrap_err();
    assert!(matches!(err, ServiceError::Unauthorized));
    assert_eq!(err.http_status(), 401);

    let err = service.list_forms().await.unwrap_err();
    assert!(matches!(err, ServiceError::Unauthorized));
}

#[tokio::test]
async fn submissions_enforce_required_fields() {
    let service = service("user_1");
    let created = service.create_form(&feedback_schema()).await.expect("create");

    let err = service
        .submit_response(&created.slug, json!({}))
        .await
        .unwrap_err();
    assert!(matches!(
        &err,
        ServiceError::MissingRequiredField { field_id, .. } if field_id == "q1"
    ));
    assert!(err.to_string().contains("q1"));
    assert_eq!(err.http_status(), 400);

    let record = service
        .submit_response(&created.slug, json!({"q1": "Ada"}))
        .await
        .expect("submit");
    assert_eq!(record.data["q1"], "Ada");

    let responses = service.list_responses(&created.slug).await.expect("list");
    assert_eq!(responses.len(), 1);
}

#[tokio::test]
async fn submissions_reject_non_object_data_and_absent_forms() {
    let service = service("user_1");
    let created = service.create_form(&feedback_schema()).await.expect("create");

    let err = service
        .submit_response(&created.slug, json!("not an object"))
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::InvalidRequest(_)));

    let err = service
        .submit_response("no-such-form", json!({"q1": "x"}))
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::FormNotFound));
    assert_eq!(err.http_status(), 404);

    let err = service.get_form("   ").await.unwrap_err();
    assert!(matches!(err, ServiceError::InvalidRequest(_)));
}

#[tokio::test]
async fn publishing_requires_ownership() {
    let store = Arc::new(MemoryStore::new());
    let owner = FormService::new(Arc::clone(&store), StaticAuthenticator::user("owner"));
    let created = owner.create_form(&feedback_schema()).await.expect("create");

    let published = owner
        .publish_form(created.form_id, true)
        .await
        .expect("publish");
    assert!(published.is_published);

    let intruder = FormService::new(store, StaticAuthenticator::user("intruder"));
    let err = intruder
        .publish_form(created.form_id, false)
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::Unauthorized));
}

#[tokio::test]
async fn export_short_circuits_on_zero_responses() {
    let service = service("user_1");
    let created = service.create_form(&feedback_schema()).await.expect("create");

    // Even with a bogus selector, the no-responses rejection wins.
    let err = service
        .export_responses(&created.slug, Some("pdf"))
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::NoResponses));
    assert_eq!(err.http_status(), 404);
}

#[tokio::test]
async fn export_rejects_unknown_formats_when_responses_exist() {
    let service = service("user_1");
    let created = service.create_form(&feedback_schema()).await.expect("create");
    service
        .submit_response(&created.slug, json!({"q1": "Ada"}))
        .await
        .expect("submit");

    let err = service
        .export_responses(&created.slug, Some("pdf"))
        .await
        .unwrap_err();
    assert!(matches!(&err, ServiceError::UnsupportedFormat(name) if name == "pdf"));
    assert_eq!(err.http_status(), 400);
}

#[tokio::test]
async fn export_defaults_to_csv_and_names_the_artifact() {
    let service = service("user_1");
    let created = service.create_form(&feedback_schema()).await.expect("create");
    service
        .submit_response(&created.slug, json!({"q1": "Ada", "q2": "Great form"}))
        .await
        .expect("submit");

    let artifact = service
        .export_responses(&created.slug, None)
        .await
        .expect("export");

    assert_eq!(artifact.mime_type, "text/csv; charset=utf-8");
    assert_eq!(artifact.file_name, "feedback-responses.csv");

    let text = String::from_utf8(artifact.content).expect("utf8 csv");
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("q1,q2,submitted_at"));
    assert_eq!(lines.clone().count(), 1);
    assert!(lines.next().expect("data row").starts_with("Ada,Great form,"));
}

#[tokio::test]
async fn export_requires_an_owning_caller() {
    let store = Arc::new(MemoryStore::new());
    let owner = FormService::new(Arc::clone(&store), StaticAuthenticator::user("owner"));
    let created = owner.create_form(&feedback_schema()).await.expect("create");
    owner
        .submit_response(&created.slug, json!({"q1": "Ada"}))
        .await
        .expect("submit");

    // A different user sees the same public form but cannot export it.
    let intruder = FormService::new(store, StaticAuthenticator::user("intruder"));
    assert!(intruder.get_form(&created.slug).await.is_ok());

    let err = intruder
        .export_responses(&created.slug, None)
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::Unauthorized));
}

struct ScriptedModel {
    reply: String,
}

#[async_trait]
impl ChatModel for ScriptedModel {
    fn model_id(&self) -> &str {
        "scripted"
    }

    async fn complete(&self, _messages: Vec<ChatMessage>) -> Result<String, AiError> {
        Ok(self.reply.clone())
    }
}

fn generator(reply: Value) -> SchemaGenerator<Box<dyn ChatModel>> {
    SchemaGenerator::new(Box::new(ScriptedModel {
        reply: reply.to_string(),
    }) as Box<dyn ChatModel>)
    .expect("build generator")
}

#[tokio::test]
async fn generate_form_validates_model_output_before_persisting() {
    let service = service("user_1").with_generator(generator(feedback_schema()));

    let created = service.generate_form("a feedback form").await.expect("generate");
    assert_eq!(created.title, "Feedback");
    assert_eq!(service.list_forms().await.expect("list").len(), 1);
}

#[tokio::test]
async fn generate_form_rejects_invalid_model_output() {
    let service = service("user_1").with_generator(generator(json!({
        "title": "Bad",
        "fields": [{"id": "c", "type": "checkbox", "label": "Pick", "options": []}]
    })));

    let err = service.generate_form("a form").await.unwrap_err();
    match err {
        ServiceError::InvalidSchema(report) => {
            assert!(report.with_code("missing_options").next().is_some());
        }
        other => panic!("expected InvalidSchema, got {other:?}"),
    }

    // Nothing was persisted.
    assert!(service.list_forms().await.expect("list").is_empty());
}

#[tokio::test]
async fn generate_form_guards_prompt_and_generator_presence() {
    let without_generator = service("user_1");
    let err = without_generator.generate_form("a form").await.unwrap_err();
    assert!(matches!(err, ServiceError::GeneratorUnavailable));

    let with_generator = service("user_1").with_generator(generator(feedback_schema()));
    let err = with_generator.generate_form("   ").await.unwrap_err();
    assert!(matches!(err, ServiceError::InvalidRequest(_)));
}
