use formsmith_ai::{ChatModel, SchemaGenerator};
use formsmith_core::{parse_form_schema, FormSchema};
use formsmith_export::{ExportArtifact, ExportError, ExportFormat, ExportRequest, ExportedResponse};
use formsmith_store::{FormRecord, FormStore, FormWithCount, NewForm, ResponseRecord};
use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

use crate::auth::{Authenticator, Identity};
use crate::error::{Result, ServiceError};
use crate::slug::form_slug;

/// Identifiers of a freshly persisted form.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedForm {
    pub form_id: Uuid,
    pub slug: String,
    pub title: String,
}

/// The form-builder API as a library.
///
/// Every method mirrors one route of the original HTTP surface, with the
/// same guard ordering. All state lives behind the injected capabilities,
/// so calls are independent and safe to run concurrently.
pub struct FormService<S> {
    store: S,
    auth: Box<dyn Authenticator>,
    generator: Option<SchemaGenerator<Box<dyn ChatModel>>>,
}

impl<S: FormStore> FormService<S> {
    /// Build a service without AI generation.
    pub fn new(store: S, auth: impl Authenticator + 'static) -> Self {
        Self {
            store,
            auth: Box::new(auth),
            generator: None,
        }
    }

    /// Attach a schema generator, enabling [`FormService::generate_form`].
    pub fn with_generator(mut self, generator: SchemaGenerator<Box<dyn ChatModel>>) -> Self {
        self.generator = Some(generator);
        self
    }

    /// Generate a form from a natural-language prompt and persist it.
    ///
    /// The model's output is treated as fully untrusted and strict-validated
    /// before anything is stored; the raw completion is never persisted.
    pub async fn generate_form(&self, prompt: &str) -> Result<CreatedForm> {
        let identity = self.require_identity().await?;

        if prompt.trim().is_empty() {
            return Err(ServiceError::InvalidRequest(
                "prompt must not be empty".to_string(),
            ));
        }

        let generator = self
            .generator
            .as_ref()
            .ok_or(ServiceError::GeneratorUnavailable)?;

        tracing::info!(event = "generation_started", model = %generator.model_id());
        let candidate = generator.generate(prompt).await?;

        let schema = parse_form_schema(&candidate)
            .map_err(|err| ServiceError::InvalidSchema(err.report))?;

        self.persist_schema(&identity, schema).await
    }

    /// Validate a directly supplied schema document and persist it.
    pub async fn create_form(&self, schema_json: &Value) -> Result<CreatedForm> {
        let identity = self.require_identity().await?;

        let schema = parse_form_schema(schema_json)
            .map_err(|err| ServiceError::InvalidSchema(err.report))?;

        self.persist_schema(&identity, schema).await
    }

    /// Public lookup of a form by id or slug.
    pub async fn get_form(&self, id_or_slug: &str) -> Result<FormRecord> {
        if id_or_slug.trim().is_empty() {
            return Err(ServiceError::InvalidRequest(
                "form id or slug must not be empty".to_string(),
            ));
        }

        self.store
            .find_form(id_or_slug)
            .await?
            .ok_or(ServiceError::FormNotFound)
    }

    /// The caller's forms, newest first, with their response counts.
    pub async fn list_forms(&self) -> Result<Vec<FormWithCount>> {
        let identity = self.require_identity().await?;
        Ok(self.store.list_forms(&identity.user_id).await?)
    }

    /// Set the published flag on a form the caller owns.
    pub async fn publish_form(&self, form_id: Uuid, published: bool) -> Result<FormRecord> {
        let identity = self.require_identity().await?;
        let form = self
            .store
            .find_form_by_id(form_id)
            .await?
            .ok_or(ServiceError::FormNotFound)?;
        self.require_owner(&identity, &form)?;

        let updated = self
            .store
            .set_published(form_id, published)
            .await?
            .ok_or(ServiceError::FormNotFound)?;

        tracing::info!(event = "form_publish_set", form_id = %form_id, published = published);
        Ok(updated)
    }

    /// Accept a public submission against a form.
    ///
    /// Every stored field marked required must be present as a key of
    /// `data`; the rejection names the first missing field by id and label.
    /// Accepted submissions are stored verbatim and never mutated.
    pub async fn submit_response(&self, id_or_slug: &str, data: Value) -> Result<ResponseRecord> {
        let form = self.get_form(id_or_slug).await?;

        let Value::Object(entries) = &data else {
            return Err(ServiceError::InvalidRequest(
                "response data must be a json object".to_string(),
            ));
        };

        for field in &form.fields {
            if field.is_required() && !entries.contains_key(&field.id) {
                return Err(ServiceError::MissingRequiredField {
                    field_id: field.id.clone(),
                    label: field.label.clone(),
                });
            }
        }

        let record = self.store.create_response(form.id, data).await?;
        tracing::info!(event = "response_submitted", form_id = %form.id, response_id = %record.id);
        Ok(record)
    }

    /// Responses for a form, newest first.
    pub async fn list_responses(&self, id_or_slug: &str) -> Result<Vec<ResponseRecord>> {
        let form = self.get_form(id_or_slug).await?;
        Ok(self.store.list_responses(form.id).await?)
    }

    /// Export a form's responses as a downloadable artifact.
    ///
    /// Zero stored responses short-circuits before the format selector is
    /// even resolved, so "nothing to export" and "bad format" stay distinct.
    pub async fn export_responses(
        &self,
        id_or_slug: &str,
        format: Option<&str>,
    ) -> Result<ExportArtifact> {
        let identity = self.require_identity().await?;
        let form = self.get_form(id_or_slug).await?;
        self.require_owner(&identity, &form)?;

        let responses = self.store.list_responses(form.id).await?;
        if responses.is_empty() {
            return Err(ServiceError::NoResponses);
        }

        let selector = format.unwrap_or("csv");
        let format = ExportFormat::parse(selector).map_err(|err| match err {
            ExportError::UnsupportedFormat(name) => ServiceError::UnsupportedFormat(name),
            other => ServiceError::Export(other),
        })?;

        let request = ExportRequest {
            form_title: form.title,
            responses: responses
                .into_iter()
                .map(|record| ExportedResponse {
                    data: record.data,
                    created_at: record.created_at,
                })
                .collect(),
        };

        let artifact = format.export(&request)?;
        tracing::info!(
            event = "export_produced",
            form_id = %form.id,
            format = selector,
            file_name = %artifact.file_name,
        );
        Ok(artifact)
    }

    async fn require_identity(&self) -> Result<Identity> {
        self.auth
            .current_identity()
            .await
            .ok_or(ServiceError::Unauthorized)
    }

    fn require_owner(&self, identity: &Identity, form: &FormRecord) -> Result<()> {
        if form.user_id == identity.user_id {
            Ok(())
        } else {
            Err(ServiceError::Unauthorized)
        }
    }

    async fn persist_schema(&self, identity: &Identity, schema: FormSchema) -> Result<CreatedForm> {
        let slug = form_slug(&schema.title);
        let record = self
            .store
            .create_form(NewForm {
                user_id: identity.user_id.clone(),
                title: schema.title,
                fields: schema.fields,
                slug,
            })
            .await?;

        tracing::info!(event = "form_created", form_id = %record.id, slug = %record.slug);
        Ok(CreatedForm {
            form_id: record.id,
            slug: record.slug,
            title: record.title,
        })
    }
}
