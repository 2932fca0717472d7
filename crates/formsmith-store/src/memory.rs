use chrono::Utc;
use serde_json::Value;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::errors::{Result, StoreError};
use crate::record::{FormRecord, FormWithCount, NewForm, ResponseRecord};
use crate::store::FormStore;

/// In-memory store used by tests and offline runs.
///
/// Listings walk the vectors in reverse insertion order, which is newest
/// first since records are appended.
#[derive(Debug, Default)]
pub struct MemoryStore {
    forms: RwLock<Vec<FormRecord>>,
    responses: RwLock<Vec<ResponseRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl FormStore for MemoryStore {
    async fn create_form(&self, form: NewForm) -> Result<FormRecord> {
        let mut forms = self.forms.write().await;
        if forms.iter().any(|existing| existing.slug == form.slug) {
            return Err(StoreError::SlugTaken(form.slug));
        }

        let record = FormRecord {
            id: Uuid::new_v4(),
            user_id: form.user_id,
            title: form.title,
            fields: form.fields,
            is_published: false,
            slug: form.slug,
            created_at: Utc::now(),
        };
        forms.push(record.clone());
        Ok(record)
    }

    async fn find_form_by_id(&self, id: Uuid) -> Result<Option<FormRecord>> {
        let forms = self.forms.read().await;
        Ok(forms.iter().find(|form| form.id == id).cloned())
    }

    async fn find_form(&self, id_or_slug: &str) -> Result<Option<FormRecord>> {
        let forms = self.forms.read().await;
        Ok(forms
            .iter()
            .find(|form| form.id.to_string() == id_or_slug || form.slug == id_or_slug)
            .cloned())
    }

    async fn list_forms(&self, user_id: &str) -> Result<Vec<FormWithCount>> {
        let forms = self.forms.read().await;
        let responses = self.responses.read().await;

        Ok(forms
            .iter()
            .rev()
            .filter(|form| form.user_id == user_id)
            .map(|form| FormWithCount {
                form: form.clone(),
                response_count: responses
                    .iter()
                    .filter(|response| response.form_id == form.id)
                    .count() as i64,
            })
            .collect())
    }

    async fn set_published(&self, id: Uuid, published: bool) -> Result<Option<FormRecord>> {
        let mut forms = self.forms.write().await;
        match forms.iter_mut().find(|form| form.id == id) {
            Some(form) => {
                form.is_published = published;
                Ok(Some(form.clone()))
            }
            None => Ok(None),
        }
    }

    async fn create_response(&self, form_id: Uuid, data: Value) -> Result<ResponseRecord> {
        let record = ResponseRecord {
            id: Uuid::new_v4(),
            form_id,
            data,
            created_at: Utc::now(),
        };
        self.responses.write().await.push(record.clone());
        Ok(record)
    }

    async fn list_responses(&self, form_id: Uuid) -> Result<Vec<ResponseRecord>> {
        let responses = self.responses.read().await;
        Ok(responses
            .iter()
            .rev()
            .filter(|response| response.form_id == form_id)
            .cloned()
            .collect())
    }
}
