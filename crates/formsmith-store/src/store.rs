use async_trait::async_trait;
use serde_json::Value;
use uuid::Uuid;

use crate::errors::Result;
use crate::record::{FormRecord, FormWithCount, NewForm, ResponseRecord};

/// Trait implemented by persistence backends for forms and responses.
#[async_trait]
pub trait FormStore: Send + Sync {
    /// Persist a new unpublished form and return the stored record.
    async fn create_form(&self, form: NewForm) -> Result<FormRecord>;

    /// Look up a form by id.
    async fn find_form_by_id(&self, id: Uuid) -> Result<Option<FormRecord>>;

    /// Look up a form matching either its id or its slug.
    async fn find_form(&self, id_or_slug: &str) -> Result<Option<FormRecord>>;

    /// All forms owned by a user, newest first, with response counts.
    async fn list_forms(&self, user_id: &str) -> Result<Vec<FormWithCount>>;

    /// Set a form's published flag; `None` when the form does not exist.
    async fn set_published(&self, id: Uuid, published: bool) -> Result<Option<FormRecord>>;

    /// Persist a submission against a form.
    async fn create_response(&self, form_id: Uuid, data: Value) -> Result<ResponseRecord>;

    /// All responses for a form, newest first.
    async fn list_responses(&self, form_id: Uuid) -> Result<Vec<ResponseRecord>>;
}

#[async_trait]
impl<S: FormStore + ?Sized> FormStore for std::sync::Arc<S> {
    async fn create_form(&self, form: NewForm) -> Result<FormRecord> {
        (**self).create_form(form).await
    }

    async fn find_form_by_id(&self, id: Uuid) -> Result<Option<FormRecord>> {
        (**self).find_form_by_id(id).await
    }

    async fn find_form(&self, id_or_slug: &str) -> Result<Option<FormRecord>> {
        (**self).find_form(id_or_slug).await
    }

    async fn list_forms(&self, user_id: &str) -> Result<Vec<FormWithCount>> {
        (**self).list_forms(user_id).await
    }

    async fn set_published(&self, id: Uuid, published: bool) -> Result<Option<FormRecord>> {
        (**self).set_published(id, published).await
    }

    async fn create_response(&self, form_id: Uuid, data: Value) -> Result<ResponseRecord> {
        (**self).create_response(form_id, data).await
    }

    async fn list_responses(&self, form_id: Uuid) -> Result<Vec<ResponseRecord>> {
        (**self).list_responses(form_id).await
    }
}
