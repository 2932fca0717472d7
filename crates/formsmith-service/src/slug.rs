/// Derive a share-link slug from a form title.
///
/// The title is lowercased and non-alphanumeric runs collapse to single
/// hyphens; an empty result falls back to `form`. A short random suffix
/// keeps slugs unique across forms with the same title.
pub fn form_slug(title: &str) -> String {
    let mut base = String::new();
    let mut pending_sep = false;

    for ch in title.to_lowercase().chars() {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            if pending_sep && !base.is_empty() {
                base.push('-');
            }
            pending_sep = false;
            base.push(ch);
        } else {
            pending_sep = true;
        }
    }

    if base.is_empty() {
        base.push_str("form");
    }

    format!("{base}-{}", short_id())
}

fn short_id() -> String {
    let id = uuid::Uuid::new_v4().to_string();
    match id.split('-').next() {
        Some(part) if !part.is_empty() => part.to_string(),
        _ => id,
    }
}
