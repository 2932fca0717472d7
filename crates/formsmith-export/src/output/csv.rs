use std::collections::HashSet;

use serde_json::Value;

use crate::errors::ExportError;
use crate::normalize::{NormalizedRow, SUBMITTED_AT_KEY};

/// Serialize normalized rows as CSV.
///
/// The header is the union of keys across all rows in first-seen order with
/// `submitted_at` always last; rows missing a column get an empty cell.
pub fn write_rows(rows: &[NormalizedRow]) -> Result<Vec<u8>, ExportError> {
    let header = header_columns(rows);

    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(&header)?;

    for row in rows {
        let record: Vec<String> = header
            .iter()
            .map(|column| row.get(column).map(render_cell).unwrap_or_default())
            .collect();
        writer.write_record(&record)?;
    }

    writer.flush()?;
    let content = writer.into_inner().map_err(|err| err.into_error())?;
    Ok(content)
}

fn header_columns(rows: &[NormalizedRow]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut columns = Vec::new();

    for row in rows {
        for key in row.keys() {
            if key == SUBMITTED_AT_KEY {
                continue;
            }
            if seen.insert(key.clone()) {
                columns.push(key.clone());
            }
        }
    }

    columns.push(SUBMITTED_AT_KEY.to_string());
    columns
}

fn render_cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        Value::Bool(_) | Value::Number(_) => value.to_string(),
        Value::Array(items) => items
            .iter()
            .map(render_cell)
            .collect::<Vec<_>>()
            .join(", "),
        Value::Object(_) => value.to_string(),
    }
}
