use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

use crate::errors::ExportError;
use crate::model::ExportedResponse;

/// Flattened view of one response: answers at the top level plus a
/// human-readable submission timestamp.
pub type NormalizedRow = Map<String, Value>;

/// Key carrying the rendered submission time in every normalized row.
pub const SUBMITTED_AT_KEY: &str = "submitted_at";

/// Flatten responses for serialization.
///
/// Each response's `data` object becomes the top level of its row and a
/// `submitted_at` string rendered in UTC replaces the raw timestamp, which
/// never appears in the flattened view. A response whose data is not a JSON
/// object is reported with its index.
pub fn normalize_responses(
    responses: &[ExportedResponse],
) -> Result<Vec<NormalizedRow>, ExportError> {
    let mut rows = Vec::with_capacity(responses.len());

    for (idx, response) in responses.iter().enumerate() {
        let Value::Object(data) = &response.data else {
            return Err(ExportError::RowNotObject { row: idx });
        };
        let mut row = data.clone();
        row.insert(
            SUBMITTED_AT_KEY.to_string(),
            Value::String(format_submitted_at(&response.created_at)),
        );
        rows.push(row);
    }

    Ok(rows)
}

fn format_submitted_at(at: &DateTime<Utc>) -> String {
    at.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}
