use crate::element::{ElementKind, ElementSnapshot};

/// Resolve the text to announce for an element, if any.
///
/// Images speak only their alt text; a missing alt never falls back to a
/// generic "image" announcement. Every other kind speaks its `aria-label`,
/// or its trimmed text content, behind the kind's role prefix.
pub fn resolve(snapshot: &ElementSnapshot) -> Option<String> {
    if snapshot.kind == ElementKind::Image {
        return snapshot
            .alt_text
            .as_deref()
            .filter(|alt| !alt.trim().is_empty())
            .map(str::to_string);
    }

    let base = snapshot
        .aria_label
        .as_deref()
        .map(str::trim)
        .filter(|label| !label.is_empty())
        .unwrap_or_else(|| snapshot.text_content.trim());

    if base.is_empty() {
        return None;
    }

    Some(match snapshot.kind.role_prefix() {
        Some(prefix) => format!("{prefix}{base}"),
        None => base.to_string(),
    })
}
