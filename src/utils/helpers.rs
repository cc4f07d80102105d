//! Helper functions and utilities
//!
//! This module contains common helper functions used throughout the client.

/// Canonical form of a status or role label.
///
/// Every case-insensitive comparison of server-provided labels goes through
/// this function, so event status and participant role can never drift apart.
pub fn normalize_label(label: &str) -> String {
    label.trim().to_lowercase()
}

/// Join an uploaded image path onto the API base URL.
///
/// Leading slashes of the path are dropped so `/uploads/a.png` and
/// `uploads/a.png` resolve to the same address.
pub fn resolve_image_url(base_url: &str, image_path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        image_path.trim_start_matches('/')
    )
}

/// Truncate text to a maximum number of characters with an ellipsis
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let head: String = text.chars().take(max_chars).collect();
        format!("{}…", head)
    }
}

/// Case-insensitive substring search; an empty term matches everything
pub fn matches_search(haystack: &str, term: &str) -> bool {
    let term = term.trim();
    if term.is_empty() {
        return true;
    }
    haystack.to_lowercase().contains(&term.to_lowercase())
}
