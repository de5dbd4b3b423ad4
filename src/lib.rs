//! yfinance-api: async Yahoo Finance client.
//!
//! Symbol search, historical prices, quotes and currency exchange rates, decoded from
//! Yahoo's undocumented endpoints into typed values.
//!
//! ```no_run
//! # async fn run() -> Result<(), yfinance_api::YfError> {
//! let client = yfinance_api::YfClient::default();
//! let hits = client.search("Apple").await?;
//! let quotes = client.get_quotes(["AAPL", "MSFT"]).await?;
//! let usd_eur = client.get_exchange_rate("USD", "EUR").await?;
//! # Ok(())
//! # }
//! ```
//!
//! The decoders in [`decode`] are pure functions over response bodies and can be used on
//! their own, e.g. to parse recorded responses.

mod api;
pub mod core;
pub mod decode;
pub mod history;
pub mod quote;
pub mod search;

pub use crate::core::{
    AssetKind, HistoricalDataPoint, HistoricalSeries, HttpResponse, HttpTransport, Interval,
    InvalidValueError, MarketState, Quote, QuoteValue, ReqwestTransport, RowWarning,
    SearchResult, ValueKind, YfClient, YfClientBuilder, YfError,
};
pub use history::HistoryBuilder;
pub use quote::{CURRENCY_SYMBOL_SUFFIX, currency_pair_symbol, exchange_rates, quotes};
pub use search::search;
