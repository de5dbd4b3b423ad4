use std::collections::BTreeMap;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::core::YfError;

/// The type of instrument a symbol refers to.
///
/// Parses both the one-letter codes of the search endpoint (`S`, `E`, `I`, ...) and the
/// spelled-out `quoteType` values of the quote endpoint (`EQUITY`, `ETF`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum AssetKind {
    Equity,
    Etf,
    Index,
    MutualFund,
    Future,
    Currency,
    Cryptocurrency,
    Option,
    /// Any code not listed above, kept verbatim.
    Other(String),
}

impl FromStr for AssetKind {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_ascii_uppercase().as_str() {
            "S" | "EQUITY" | "STOCK" => Self::Equity,
            "E" | "ETF" => Self::Etf,
            "I" | "INDEX" => Self::Index,
            "M" | "MUTUALFUND" | "FUND" => Self::MutualFund,
            "F" | "FUTURE" | "FUTURES" => Self::Future,
            "C" | "CURRENCY" => Self::Currency,
            "CRYPTOCURRENCY" => Self::Cryptocurrency,
            "O" | "OPTION" => Self::Option,
            _ => Self::Other(s.trim().to_string()),
        })
    }
}

/// Trading session reported by the quote endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum MarketState {
    PrePre,
    Pre,
    Regular,
    Post,
    PostPost,
    Closed,
    Other(String),
}

impl FromStr for MarketState {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_ascii_uppercase().as_str() {
            "PREPRE" => Self::PrePre,
            "PRE" => Self::Pre,
            "REGULAR" => Self::Regular,
            "POST" => Self::Post,
            "POSTPOST" => Self::PostPost,
            "CLOSED" => Self::Closed,
            _ => Self::Other(s.trim().to_string()),
        })
    }
}

/// Bar size for historical data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Interval {
    Day,
    Week,
    Month,
}

impl Interval {
    pub(crate) const fn as_str(self) -> &'static str {
        match self {
            Self::Day => "1d",
            Self::Week => "1wk",
            Self::Month => "1mo",
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Interval {
    type Err = YfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1d" | "day" => Ok(Self::Day),
            "1wk" | "week" => Ok(Self::Week),
            "1mo" | "month" => Ok(Self::Month),
            other => Err(YfError::InvalidArgument(format!(
                "interval must be one of: 1d, 1wk, 1mo (got `{other}`)"
            ))),
        }
    }
}

/// One suggestion returned by the symbol search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    pub symbol: String,
    pub name: String,
    /// Exchange code, e.g. `NMS`.
    pub exchange: String,
    pub kind: AssetKind,
    /// Human readable exchange name, e.g. `NASDAQ`.
    pub exchange_display: Option<String>,
    /// Human readable instrument type, e.g. `Equity`.
    pub type_display: Option<String>,
}

/// One row of a historical price series.
///
/// Price fields are `None` where the provider published its missing-data marker, which
/// happens on market holidays and for very old data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoricalDataPoint {
    pub date: NaiveDate,
    pub open: Option<Decimal>,
    pub high: Option<Decimal>,
    pub low: Option<Decimal>,
    pub close: Option<Decimal>,
    pub adj_close: Option<Decimal>,
    pub volume: Option<i64>,
}

/// A row of the download body that was not turned into a data point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowWarning {
    /// 1-based line number in the response body.
    pub line: u64,
    pub reason: String,
}

/// Decoded historical series, ascending by date with unique dates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct HistoricalSeries {
    pub points: Vec<HistoricalDataPoint>,
    /// Rows skipped while decoding. Non-fatal.
    pub warnings: Vec<RowWarning>,
}

impl HistoricalSeries {
    #[must_use]
    pub fn skipped_rows(&self) -> usize {
        self.warnings.len()
    }

    #[must_use]
    pub fn into_points(self) -> Vec<HistoricalDataPoint> {
        self.points
    }
}

/// A scalar value from a quote payload, kept under its provider key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum QuoteValue {
    Integer(i64),
    /// Written as a JSON number with its exact digits.
    Decimal(#[serde(with = "rust_decimal::serde::arbitrary_precision")] Decimal),
    Text(String),
    Bool(bool),
}

impl QuoteValue {
    #[must_use]
    pub fn as_decimal(&self) -> Option<Decimal> {
        match self {
            Self::Integer(i) => Some(Decimal::from(*i)),
            Self::Decimal(d) => Some(*d),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(i) => Some(*i),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

/// Typed view of the quote fields this crate knows about. Filled by the decoder.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) struct KnownQuoteFields {
    pub(crate) short_name: Option<String>,
    pub(crate) long_name: Option<String>,
    pub(crate) currency: Option<String>,
    pub(crate) exchange: Option<String>,
    pub(crate) full_exchange_name: Option<String>,
    pub(crate) quote_type: Option<AssetKind>,
    pub(crate) market_state: Option<MarketState>,
    pub(crate) price: Option<Decimal>,
    pub(crate) previous_close: Option<Decimal>,
    pub(crate) open: Option<Decimal>,
    pub(crate) day_high: Option<Decimal>,
    pub(crate) day_low: Option<Decimal>,
    pub(crate) change: Option<Decimal>,
    pub(crate) change_percent: Option<Decimal>,
    pub(crate) bid: Option<Decimal>,
    pub(crate) ask: Option<Decimal>,
    pub(crate) volume: Option<i64>,
    pub(crate) market_cap: Option<i64>,
    pub(crate) market_time: Option<DateTime<Utc>>,
}

/// A quote snapshot.
///
/// The provider decides which fields a quote carries. Every scalar it sent is available
/// through [`Quote::get`] under the provider's key; the common ones also have typed
/// accessors. Serializes as the flat provider field map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Quote {
    #[serde(skip)]
    symbol: String,
    #[serde(skip)]
    known: KnownQuoteFields,
    #[serde(flatten)]
    fields: BTreeMap<String, QuoteValue>,
}

impl Quote {
    pub(crate) const fn new(
        symbol: String,
        known: KnownQuoteFields,
        fields: BTreeMap<String, QuoteValue>,
    ) -> Self {
        Self {
            symbol,
            known,
            fields,
        }
    }

    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Raw lookup by provider key, e.g. `"fiftyTwoWeekHigh"`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&QuoteValue> {
        self.fields.get(key)
    }

    /// All scalar fields of the response, keyed by provider name.
    #[must_use]
    pub const fn fields(&self) -> &BTreeMap<String, QuoteValue> {
        &self.fields
    }

    /// `regularMarketPrice`
    #[must_use]
    pub const fn price(&self) -> Option<Decimal> {
        self.known.price
    }

    /// `regularMarketPreviousClose`
    #[must_use]
    pub const fn previous_close(&self) -> Option<Decimal> {
        self.known.previous_close
    }

    #[must_use]
    pub const fn open(&self) -> Option<Decimal> {
        self.known.open
    }

    #[must_use]
    pub const fn day_high(&self) -> Option<Decimal> {
        self.known.day_high
    }

    #[must_use]
    pub const fn day_low(&self) -> Option<Decimal> {
        self.known.day_low
    }

    #[must_use]
    pub const fn change(&self) -> Option<Decimal> {
        self.known.change
    }

    /// Percent, not a fraction: `1.25` means 1.25 %.
    #[must_use]
    pub const fn change_percent(&self) -> Option<Decimal> {
        self.known.change_percent
    }

    #[must_use]
    pub const fn bid(&self) -> Option<Decimal> {
        self.known.bid
    }

    #[must_use]
    pub const fn ask(&self) -> Option<Decimal> {
        self.known.ask
    }

    #[must_use]
    pub const fn volume(&self) -> Option<i64> {
        self.known.volume
    }

    #[must_use]
    pub const fn market_cap(&self) -> Option<i64> {
        self.known.market_cap
    }

    /// Time of the last regular-session trade.
    #[must_use]
    pub const fn market_time(&self) -> Option<DateTime<Utc>> {
        self.known.market_time
    }

    #[must_use]
    pub fn currency(&self) -> Option<&str> {
        self.known.currency.as_deref()
    }

    #[must_use]
    pub const fn market_state(&self) -> Option<&MarketState> {
        self.known.market_state.as_ref()
    }

    #[must_use]
    pub const fn quote_type(&self) -> Option<&AssetKind> {
        self.known.quote_type.as_ref()
    }

    #[must_use]
    pub fn exchange(&self) -> Option<&str> {
        self.known.exchange.as_deref()
    }

    #[must_use]
    pub fn full_exchange_name(&self) -> Option<&str> {
        self.known.full_exchange_name.as_deref()
    }

    #[must_use]
    pub fn short_name(&self) -> Option<&str> {
        self.known.short_name.as_deref()
    }

    #[must_use]
    pub fn long_name(&self) -> Option<&str> {
        self.known.long_name.as_deref()
    }
}
