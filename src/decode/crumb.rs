//! Crumb extraction from the quote history page.
//!
//! The history page embeds its data stores as a JSON blob inside a `<script>` tag. The
//! crumb sits in `CrumbStore` and is JSON-escaped there (`/` is written as `\u002F`). This is
//! the most fragile step of the client: if Yahoo stops embedding the store, or serves a
//! consent page instead, this is the only place that needs to change.

use std::sync::LazyLock;

use regex::Regex;

use crate::core::YfError;

/// Marker around the embedded token, e.g. `"CrumbStore":{"crumb":"AbC/d"},`.
const CRUMB_MARKER_PATTERN: &str = r#"CrumbStore":\{"crumb":"(?P<crumb>.+?)"\},"#;

static CRUMB_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(CRUMB_MARKER_PATTERN).expect("crumb marker pattern is valid"));

/// Extract the session crumb from the body of a quote history page.
///
/// The returned token is unescaped and ready to be placed in a query string.
///
/// # Errors
///
/// `YfError::CrumbNotFound` if the page has no crumb marker, `YfError::Json` if the captured
/// token is not a valid JSON string literal.
pub fn extract_crumb(body: &str) -> Result<String, YfError> {
    let raw = CRUMB_MARKER
        .captures(body)
        .and_then(|c| c.name("crumb"))
        .ok_or(YfError::CrumbNotFound)?
        .as_str();

    let crumb: String = serde_json::from_str(&format!("\"{raw}\""))?;
    if crumb.is_empty() {
        return Err(YfError::CrumbNotFound);
    }
    Ok(crumb)
}
