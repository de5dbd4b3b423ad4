//! The flat operation set on [`YfClient`].
//!
//! Each method validates its arguments before any request is sent, then delegates to the
//! feature module that owns the request sequence.

use chrono::NaiveDate;

use crate::history::HistoryBuilder;
use crate::{HistoricalSeries, Interval, Quote, SearchResult, YfClient, YfError, quote, search};

impl YfClient {
    /// Search for symbols by company name, ticker or keyword.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` for a blank term; network and decode errors otherwise.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn search(&self, term: &str) -> Result<Vec<SearchResult>, YfError> {
        search::search(self, term).await
    }

    /// Daily, weekly or monthly prices for `symbol` between `start` and `end`.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use yfinance_api::{Interval, YfClient};
    /// # use chrono::NaiveDate;
    /// # async fn run() -> Result<(), yfinance_api::YfError> {
    /// let client = YfClient::default();
    /// let series = client
    ///     .get_historical_data(
    ///         "AAPL",
    ///         Interval::Day,
    ///         NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
    ///         NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
    ///     )
    ///     .await?;
    /// for p in &series.points {
    ///     println!("{} close={:?}", p.date, p.close);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    ///
    /// `InvalidArgument` for a blank symbol and `InvalidDates` when `start > end`, both before
    /// any request; see [`HistoryBuilder::fetch`] for the rest.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn get_historical_data(
        &self,
        symbol: &str,
        interval: Interval,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<HistoricalSeries, YfError> {
        HistoryBuilder::new(self, symbol)
            .interval(interval)
            .between(start, end)
            .fetch()
            .await
    }

    /// Quote for one symbol, or `None` if the provider does not know it.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` for a blank symbol; network and decode errors otherwise.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn get_quote(&self, symbol: &str) -> Result<Option<Quote>, YfError> {
        quote::quote(self, symbol).await
    }

    /// Quotes for several symbols in one request. Unknown symbols are simply absent from the
    /// result.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if any symbol is blank; network and decode errors otherwise.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, symbols), err))]
    pub async fn get_quotes<I, S>(&self, symbols: I) -> Result<Vec<Quote>, YfError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        quote::quotes(self, symbols).await
    }

    /// Exchange rate quote for converting `from` into `to`, e.g. `("USD", "EUR")`.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` for a blank currency code; network and decode errors otherwise.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn get_exchange_rate(&self, from: &str, to: &str) -> Result<Option<Quote>, YfError> {
        Ok(quote::exchange_rates(self, [(from, to)])
            .await?
            .into_iter()
            .next())
    }

    /// Exchange rate quotes for several currency pairs in one request.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` for a blank currency code; network and decode errors otherwise.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, pairs), err))]
    pub async fn get_exchange_rates<I, A, B>(&self, pairs: I) -> Result<Vec<Quote>, YfError>
    where
        I: IntoIterator<Item = (A, B)>,
        A: AsRef<str>,
        B: AsRef<str>,
    {
        quote::exchange_rates(self, pairs).await
    }
}
