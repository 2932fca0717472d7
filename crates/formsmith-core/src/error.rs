use std::fmt;

use thiserror::Error;

/// Structured validation issue with location and the offending field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    /// Machine-readable code (`malformed_schema`, `duplicate_field_id`,
    /// `missing_options`).
    pub code: String,
    /// JSON pointer to the offending location in the input document.
    pub path: String,
    /// Human-readable description of the violation.
    pub message: String,
    /// Id of the field the issue belongs to, when one applies.
    pub field: Option<String>,
}

impl ValidationIssue {
    /// Create a new validation issue.
    pub fn new(
        code: impl Into<String>,
        path: impl Into<String>,
        message: impl Into<String>,
        field: Option<String>,
    ) -> Self {
        Self {
            code: code.into(),
            path: path.into(),
            message: message.into(),
            field,
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}: {}", self.code, self.path, self.message)?;
        if let Some(field) = &self.field {
            write!(f, " (field '{field}')")?;
        }
        Ok(())
    }
}

/// Aggregated validation report listing every violated constraint.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    pub issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    /// Returns true when no violations were recorded.
    pub fn is_ok(&self) -> bool {
        self.issues.is_empty()
    }

    /// Add an issue to the report.
    pub fn push(&mut self, issue: ValidationIssue) {
        self.issues.push(issue);
    }

    /// Issues matching a given code.
    pub fn with_code<'a>(&'a self, code: &'a str) -> impl Iterator<Item = &'a ValidationIssue> {
        self.issues.iter().filter(move |issue| issue.code == code)
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, issue) in self.issues.iter().enumerate() {
            if idx > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{issue}")?;
        }
        Ok(())
    }
}

/// Error raised by the strict parsing mode, carrying the full report.
#[derive(Debug, Clone, Error)]
#[error("invalid form schema: {report}")]
pub struct SchemaError {
    pub report: ValidationReport,
}

impl From<ValidationReport> for SchemaError {
    fn from(report: ValidationReport) -> Self {
        Self { report }
    }
}
