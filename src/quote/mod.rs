use url::Url;

use crate::core::net;
use crate::decode::transform_quotes;
use crate::{Quote, YfClient, YfError};

/// Suffix that turns a concatenated currency pair into a quote symbol (`USDEUR=X`).
pub const CURRENCY_SYMBOL_SUFFIX: &str = "=X";

/* ---------------- Public API ---------------- */

/// Fetch quotes for one or more symbols with a single v7 request.
///
/// An empty symbol list returns an empty result without touching the network.
///
/// # Errors
///
/// `YfError::InvalidArgument` if a symbol is blank, otherwise any network or decode error.
pub async fn quotes<I, S>(client: &YfClient, symbols: I) -> Result<Vec<Quote>, YfError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let symbols = normalize_symbols(symbols)?;
    if symbols.is_empty() {
        return Ok(Vec::new());
    }

    let url = quotes_url(client.base_quote_v7(), &symbols);
    let body = net::get_text(client, &url, "quote_v7").await?;
    transform_quotes(&body)
}

/// Fetch the quote of a single symbol; `None` when the provider returns no result for it.
///
/// # Errors
///
/// Same as [`quotes`].
pub async fn quote(client: &YfClient, symbol: &str) -> Result<Option<Quote>, YfError> {
    Ok(quotes(client, [symbol]).await?.into_iter().next())
}

/// Fetch exchange rates for `(from, to)` currency pairs, e.g. `("USD", "EUR")`.
///
/// Each pair is queried as the quote symbol `FROMTO=X`.
///
/// # Errors
///
/// `YfError::InvalidArgument` if a currency code is blank, otherwise as [`quotes`].
pub async fn exchange_rates<I, A, B>(client: &YfClient, pairs: I) -> Result<Vec<Quote>, YfError>
where
    I: IntoIterator<Item = (A, B)>,
    A: AsRef<str>,
    B: AsRef<str>,
{
    let symbols = pairs
        .into_iter()
        .map(|(from, to)| currency_pair_symbol(from.as_ref(), to.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;
    quotes(client, symbols).await
}

/// Build the quote symbol for a currency pair: `("USD", "EUR")` becomes `USDEUR=X`.
///
/// # Errors
///
/// `YfError::InvalidArgument` if either code is blank.
pub fn currency_pair_symbol(from: &str, to: &str) -> Result<String, YfError> {
    let (from, to) = (from.trim(), to.trim());
    if from.is_empty() || to.is_empty() {
        return Err(YfError::InvalidArgument(
            "currency codes must not be empty".into(),
        ));
    }
    Ok(format!("{from}{to}{CURRENCY_SYMBOL_SUFFIX}"))
}

/* ---------------- Internal helpers ---------------- */

fn normalize_symbols<I, S>(symbols: I) -> Result<Vec<String>, YfError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    symbols
        .into_iter()
        .map(|s| {
            let s = s.as_ref().trim();
            if s.is_empty() {
                Err(YfError::InvalidArgument("symbol must not be empty".into()))
            } else {
                Ok(s.to_string())
            }
        })
        .collect()
}

fn quotes_url(base: &Url, symbols: &[String]) -> Url {
    let mut url = base.clone();
    url.query_pairs_mut()
        .append_pair("symbols", &symbols.join(","));
    url
}
