use chrono::{DateTime, Utc};
use formsmith_core::FieldDefinition;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// A stored form. Wire casing matches the public API payloads.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormRecord {
    pub id: Uuid,
    /// Identifier of the owning user, as issued by the identity provider.
    pub user_id: String,
    pub title: String,
    pub fields: Vec<FieldDefinition>,
    pub is_published: bool,
    /// Human-readable identifier used in share links.
    pub slug: String,
    pub created_at: DateTime<Utc>,
}

/// A stored submission. Data is kept verbatim as submitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseRecord {
    pub id: Uuid,
    pub form_id: Uuid,
    pub data: Value,
    pub created_at: DateTime<Utc>,
}

/// A form plus its stored response count, as listed on dashboards.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormWithCount {
    #[serde(flatten)]
    pub form: FormRecord,
    pub response_count: i64,
}

/// Payload for persisting a new form.
///
/// Ids and timestamps are assigned by the store; forms start unpublished.
#[derive(Debug, Clone)]
pub struct NewForm {
    pub user_id: String,
    pub title: String,
    pub fields: Vec<FieldDefinition>,
    pub slug: String,
}
