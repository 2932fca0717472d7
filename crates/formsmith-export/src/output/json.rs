use crate::errors::ExportError;
use crate::normalize::NormalizedRow;

/// Serialize normalized rows as a pretty-printed JSON array.
pub fn write_rows(rows: &[NormalizedRow]) -> Result<Vec<u8>, ExportError> {
    let mut content = serde_json::to_vec_pretty(rows)?;
    content.push(b'\n');
    Ok(content)
}
