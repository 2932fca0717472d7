use crate::format::ExportFormat;

/// Derive the artifact base name from a form title.
///
/// The title is lowercased, internal whitespace runs collapse to single
/// underscores, and anything outside `[a-z0-9_]` is stripped. An empty
/// result falls back to the literal `export`.
pub fn file_base_name(title: &str) -> String {
    let base: String = title
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
        .chars()
        .filter(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || *ch == '_')
        .collect();

    if base.is_empty() {
        "export".to_string()
    } else {
        base
    }
}

/// Full artifact file name, `{base}-responses.{ext}`.
pub fn file_name(title: &str, format: ExportFormat) -> String {
    format!("{}-responses.{}", file_base_name(title), format.extension())
}
