use crate::errors::ExportError;
use crate::filename::file_name;
use crate::model::{ExportArtifact, ExportRequest};
use crate::normalize::normalize_responses;
use crate::output;

/// Supported export formats.
///
/// The set is closed: adding a format means adding a variant and its
/// serializer here, and every caller picks it up through [`ExportFormat::parse`]
/// without further changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    /// Format used when a request does not name one.
    pub const DEFAULT: ExportFormat = ExportFormat::Csv;

    /// Resolve a format selector such as `csv`.
    pub fn parse(selector: &str) -> Result<ExportFormat, ExportError> {
        match selector {
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            other => Err(ExportError::UnsupportedFormat(other.to_string())),
        }
    }

    /// Selector names of every supported format.
    pub fn supported() -> &'static [&'static str] {
        &["csv", "json"]
    }

    /// MIME type of artifacts produced in this format.
    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "text/csv; charset=utf-8",
            ExportFormat::Json => "application/json",
        }
    }

    /// File extension without the leading dot.
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }

    /// Normalize and serialize a request into a downloadable artifact.
    ///
    /// An empty response list is tolerated and produces a header-only or
    /// empty artifact; refusing to export nothing is the caller's policy.
    pub fn export(&self, request: &ExportRequest) -> Result<ExportArtifact, ExportError> {
        let rows = normalize_responses(&request.responses)?;
        let content = match self {
            ExportFormat::Csv => output::csv::write_rows(&rows)?,
            ExportFormat::Json => output::json::write_rows(&rows)?,
        };

        Ok(ExportArtifact {
            content,
            mime_type: self.mime_type(),
            file_name: file_name(&request.form_title, *self),
        })
    }
}
