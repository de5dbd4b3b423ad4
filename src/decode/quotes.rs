use std::collections::BTreeMap;

use serde_json::{Map, Value};

use super::field;
use crate::core::conversions::{decimal, integer, non_empty_string, optional_string, timestamp};
use crate::core::models::KnownQuoteFields;
use crate::core::{AssetKind, MarketState, Quote, QuoteValue, YfError};

/// Location of the quote list in the v7 quote payload.
const QUOTES_RESULT_PATH: &[&str] = &["quoteResponse", "result"];

/// Decode a v7 quote response into one [`Quote`] per result entry, in response order.
///
/// Every scalar field of an entry is kept under its provider key. Known fields are
/// additionally coerced into typed values; a known field that is present but malformed
/// fails the whole decode, as does an entry without a symbol.
///
/// # Errors
///
/// `YfError::Json` for invalid JSON, `YfError::MissingData` if `quoteResponse.result` is
/// absent or an entry is not an object, `YfError::InvalidValue` for a malformed field.
pub fn transform_quotes(body: &str) -> Result<Vec<Quote>, YfError> {
    let root: Value = serde_json::from_str(body)?;
    super::array_at(&root, QUOTES_RESULT_PATH)?
        .iter()
        .map(quote_from)
        .collect()
}

fn quote_from(entry: &Value) -> Result<Quote, YfError> {
    let obj = entry
        .as_object()
        .ok_or_else(|| YfError::MissingData("quote entry is not an object".into()))?;

    let symbol = non_empty_string(field(entry, "symbol"))?;
    let known = known_fields(entry)?;

    Ok(Quote::new(symbol, known, scalar_fields(obj)))
}

/// Coerces the fields with typed accessors. Absent or `null` fields stay `None`.
fn known_fields(entry: &Value) -> Result<KnownQuoteFields, YfError> {
    let text = |key: &str| optional_string(field(entry, key));
    let dec = |key: &str| decimal(field(entry, key));
    let int = |key: &str| integer(field(entry, key));

    Ok(KnownQuoteFields {
        short_name: text("shortName")?,
        long_name: text("longName")?,
        currency: text("currency")?,
        exchange: text("exchange")?,
        full_exchange_name: text("fullExchangeName")?,
        quote_type: text("quoteType")?.map(|s| {
            let Ok(kind) = s.parse::<AssetKind>();
            kind
        }),
        market_state: text("marketState")?.map(|s| {
            let Ok(state) = s.parse::<MarketState>();
            state
        }),
        price: dec("regularMarketPrice")?,
        previous_close: dec("regularMarketPreviousClose")?,
        open: dec("regularMarketOpen")?,
        day_high: dec("regularMarketDayHigh")?,
        day_low: dec("regularMarketDayLow")?,
        change: dec("regularMarketChange")?,
        change_percent: dec("regularMarketChangePercent")?,
        bid: dec("bid")?,
        ask: dec("ask")?,
        volume: int("regularMarketVolume")?,
        market_cap: int("marketCap")?,
        market_time: timestamp(field(entry, "regularMarketTime"))?,
    })
}

/// Every scalar of the entry under its provider key. Nested objects/arrays and `null`s are
/// not part of the open field set. Numbers outside the decimal range are kept as text.
fn scalar_fields(obj: &Map<String, Value>) -> BTreeMap<String, QuoteValue> {
    let mut fields = BTreeMap::new();
    for (key, value) in obj {
        let v = match value {
            Value::Bool(b) => QuoteValue::Bool(*b),
            Value::String(s) => QuoteValue::Text(s.clone()),
            Value::Number(n) => match n.as_i64() {
                Some(i) => QuoteValue::Integer(i),
                None => decimal(value).ok().flatten().map_or_else(
                    || QuoteValue::Text(n.to_string()),
                    QuoteValue::Decimal,
                ),
            },
            Value::Null | Value::Array(_) | Value::Object(_) => continue,
        };
        fields.insert(key.clone(), v);
    }
    fields
}
