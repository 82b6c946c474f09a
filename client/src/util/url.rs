//! Scheme checks for user-entered links before they reach `href`/`src`.
//!
//! Item links and images are free text written by any signed-in user, so
//! only web URLs and same-origin paths are rendered as live links.

#[cfg(test)]
#[path = "url_test.rs"]
mod url_test;

use crate::net::types::PLACEHOLDER_IMAGE;

/// `raw` trimmed when it is an `http(s)://` URL or a root-relative path,
/// else `None`.
#[must_use]
pub fn safe_href(raw: &str) -> Option<&str> {
    let url = raw.trim();
    let lower = url.get(..8).unwrap_or(url).to_ascii_lowercase();
    let web = lower.starts_with("https://") || lower.starts_with("http://");
    let rooted = url.starts_with('/') && !url.starts_with("//") && !url.starts_with("/\\");
    (web || rooted).then_some(url)
}

/// Image source for `raw`, falling back to the placeholder image.
#[must_use]
pub fn safe_image_src(raw: &str) -> &str {
    safe_href(raw).unwrap_or(PLACEHOLDER_IMAGE)
}
