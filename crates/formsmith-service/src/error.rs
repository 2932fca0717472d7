use formsmith_core::ValidationReport;
use thiserror::Error;

/// Errors raised by the service boundary.
///
/// Each variant maps onto a stable HTTP-equivalent status via
/// [`ServiceError::http_status`]. Nothing is retried and nothing is
/// swallowed; callers relay these verbatim.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// No caller identity was available for an operation that needs one.
    #[error("unauthorized")]
    Unauthorized,
    /// The named form does not exist.
    #[error("form not found")]
    FormNotFound,
    /// A request argument was malformed before any capability was touched.
    #[error("invalid request: {0}")]
    InvalidRequest(String),
    /// A submission omitted a field the form marks as required.
    #[error("required field missing: {field_id} ({label})")]
    MissingRequiredField { field_id: String, label: String },
    /// A candidate schema failed validation; the report lists every issue.
    #[error("invalid form schema: {0}")]
    InvalidSchema(ValidationReport),
    /// Export was requested for a form with zero stored responses.
    #[error("no responses to export")]
    NoResponses,
    /// The export format selector is not in the format table.
    #[error("unsupported export format: {0}")]
    UnsupportedFormat(String),
    /// No schema generator was configured for this service.
    #[error("form generation is not available")]
    GeneratorUnavailable,
    #[error("export error: {0}")]
    Export(#[from] formsmith_export::ExportError),
    #[error("store error: {0}")]
    Store(#[from] formsmith_store::StoreError),
    #[error("model error: {0}")]
    Model(#[from] formsmith_ai::AiError),
}

impl ServiceError {
    /// HTTP status a web adapter should answer with.
    pub fn http_status(&self) -> u16 {
        match self {
            ServiceError::Unauthorized => 401,
            ServiceError::FormNotFound | ServiceError::NoResponses => 404,
            ServiceError::InvalidRequest(_)
            | ServiceError::MissingRequiredField { .. }
            | ServiceError::InvalidSchema(_)
            | ServiceError::UnsupportedFormat(_) => 400,
            ServiceError::GeneratorUnavailable
            | ServiceError::Export(_)
            | ServiceError::Store(_)
            | ServiceError::Model(_) => 500,
        }
    }
}

/// Convenience alias for results returned by the service.
pub type Result<T> = std::result::Result<T, ServiceError>;
