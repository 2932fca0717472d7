use thiserror::Error;

/// Errors emitted by the response exporter.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The requested selector is not in the format table.
    #[error("unsupported export format: {0}")]
    UnsupportedFormat(String),
    /// A response's data was not a JSON object.
    #[error("response at index {row} is not a json object")]
    RowNotObject { row: usize },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}
