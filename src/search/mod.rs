use url::Url;
use url::form_urlencoded;

use crate::core::client::SEARCH_QUERY_SUFFIX;
use crate::core::net;
use crate::decode::transform_search_result;
use crate::{SearchResult, YfClient, YfError};

/* ---------------- Public API ---------------- */

/// Searches for symbols matching a term.
///
/// # Errors
///
/// Returns `YfError::InvalidArgument` for a blank term (no request is sent), otherwise any
/// network or decode error of the single search request.
pub async fn search(client: &YfClient, term: &str) -> Result<Vec<SearchResult>, YfError> {
    let term = term.trim();
    if term.is_empty() {
        return Err(YfError::InvalidArgument("search term must not be empty".into()));
    }

    let url = search_url(client.base_search(), term)?;
    let body = net::get_text(client, &url, "search").await?;
    transform_search_result(&body)
}

/* ---------------- Internal helpers ---------------- */

/// The search-assist resource takes the term inside its path, so it is appended to the
/// base as text rather than through `Url::join`.
fn search_url(base: &Url, term: &str) -> Result<Url, YfError> {
    let encoded: String = form_urlencoded::byte_serialize(term.as_bytes()).collect();
    Ok(Url::parse(&format!(
        "{}{encoded}?{SEARCH_QUERY_SUFFIX}",
        base.as_str()
    ))?)
}
