use chrono::{DateTime, Utc};
use serde_json::Value;

/// A stored response handed to the exporter.
#[derive(Debug, Clone)]
pub struct ExportedResponse {
    /// Submitted answers keyed by field id.
    pub data: Value,
    /// Server-side submission time.
    pub created_at: DateTime<Utc>,
}

/// Everything the exporter needs to produce one artifact.
///
/// Responses are serialized in the order given; callers are expected to
/// supply them in descending submission time.
#[derive(Debug, Clone)]
pub struct ExportRequest {
    /// Title of the form the responses belong to.
    pub form_title: String,
    pub responses: Vec<ExportedResponse>,
}

/// A finished export artifact ready for a download boundary.
#[derive(Debug, Clone)]
pub struct ExportArtifact {
    pub content: Vec<u8>,
    pub mime_type: &'static str,
    pub file_name: String,
}

impl ExportArtifact {
    /// `Content-Disposition` header value for attachment downloads.
    pub fn content_disposition(&self) -> String {
        format!("attachment; filename=\"{}\"", self.file_name)
    }
}
