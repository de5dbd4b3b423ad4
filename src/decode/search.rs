use serde_json::Value;

use super::field;

use crate::core::conversions::{non_empty_string, optional_string};
use crate::core::{AssetKind, InvalidValueError, SearchResult, YfError};

/// Location of the suggestion list in the search-assist payload.
const SEARCH_ITEMS_PATH: &[&str] = &["data", "items"];

/// Decode a search-assist response.
///
/// Suggestions without a symbol, name, exchange or type are dropped; the provider
/// routinely returns a few incomplete ones. Order is preserved.
///
/// # Errors
///
/// `YfError::Json` if the body is not JSON, `YfError::MissingData` if `data.items` is absent.
pub fn transform_search_result(body: &str) -> Result<Vec<SearchResult>, YfError> {
    let root: Value = serde_json::from_str(body)?;
    let items = super::array_at(&root, SEARCH_ITEMS_PATH)?;

    Ok(items
        .iter()
        .filter_map(|item| match search_result_from(item) {
            Ok(r) => Some(r),
            Err(_e) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(error = %_e, "dropping incomplete search suggestion");
                None
            }
        })
        .collect())
}

fn search_result_from(item: &Value) -> Result<SearchResult, InvalidValueError> {
    let symbol = non_empty_string(field(item, "symbol"))?;
    let name = non_empty_string(field(item, "name"))?;
    let exchange = non_empty_string(field(item, "exch"))?;
    let Ok(kind) = non_empty_string(field(item, "type"))?.parse::<AssetKind>();

    Ok(SearchResult {
        symbol,
        name,
        exchange,
        kind,
        // display strings are cosmetic; a malformed one is not worth losing the suggestion
        exchange_display: optional_string(field(item, "exchDisp")).ok().flatten(),
        type_display: optional_string(field(item, "typeDisp")).ok().flatten(),
    })
}
