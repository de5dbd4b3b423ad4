//! Pure decoders from raw response bodies to typed results.
//!
//! Each function takes the text of one response and performs no I/O. The JSON paths, CSV
//! header and crumb marker they rely on are reverse-engineered from Yahoo's pages and are
//! kept as named constants next to the code that reads them.

mod crumb;
mod history;
mod quotes;
mod search;

pub use crumb::extract_crumb;
pub use history::transform_historical_data_result;
pub use quotes::transform_quotes;
pub use search::transform_search_result;

use serde_json::Value;

use crate::core::YfError;

static NULL: Value = Value::Null;

/// Field of a JSON object, with absent keys read as `null`.
fn field<'a>(obj: &'a Value, key: &str) -> &'a Value {
    obj.get(key).unwrap_or(&NULL)
}

/// Walks `path` from `root`, requiring every step to exist, and the leaf to be an array.
fn array_at<'a>(root: &'a Value, path: &[&str]) -> Result<&'a Vec<Value>, YfError> {
    let mut node = root;
    for key in path {
        node = node
            .get(key)
            .ok_or_else(|| YfError::MissingData(format!("missing `{}`", path.join("."))))?;
    }
    node.as_array()
        .ok_or_else(|| YfError::MissingData(format!("`{}` is not an array", path.join("."))))
}
