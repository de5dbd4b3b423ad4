//! Historical prices via the crumb-authenticated CSV download.
//!
//! A download takes two requests. The quote history page is fetched first and the session
//! crumb is read out of it; the download URL is then requested with that crumb. The second
//! request is never sent if the first one fails or yields no crumb. Crumbs are not reused
//! across calls.

use chrono::NaiveDate;
use url::Url;
use url::form_urlencoded;

use crate::core::net;
use crate::decode::{extract_crumb, transform_historical_data_result};
use crate::{HistoricalSeries, Interval, YfClient, YfError};

/// Builder for a historical price download.
///
/// Defaults to daily bars. Both bounds must be set before [`fetch`](Self::fetch).
///
/// The start date is inclusive. Whether the end date is included depends on the provider:
/// it is sent as midnight UTC of that day, and Yahoo has answered both ways over time.
#[derive(Debug)]
pub struct HistoryBuilder<'a> {
    client: &'a YfClient,
    symbol: String,
    interval: Interval,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
}

impl<'a> HistoryBuilder<'a> {
    pub fn new(client: &'a YfClient, symbol: impl Into<String>) -> Self {
        Self {
            client,
            symbol: symbol.into(),
            interval: Interval::Day,
            start: None,
            end: None,
        }
    }

    #[must_use]
    pub const fn interval(mut self, interval: Interval) -> Self {
        self.interval = interval;
        self
    }

    /// Set the date range. `start` must not be after `end`.
    #[must_use]
    pub const fn between(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.start = Some(start);
        self.end = Some(end);
        self
    }

    /// Validate the request, then fetch the crumb page and the CSV download.
    ///
    /// # Errors
    ///
    /// Argument errors (`InvalidArgument`, `InvalidDates`) are returned before any request.
    /// Network errors of either request are returned unchanged; `CrumbNotFound` if the page
    /// carries no crumb; decode errors of the CSV body otherwise.
    pub async fn fetch(self) -> Result<HistoricalSeries, YfError> {
        let symbol = self.symbol.trim();
        if symbol.is_empty() {
            return Err(YfError::InvalidArgument("symbol must not be empty".into()));
        }
        let (Some(start), Some(end)) = (self.start, self.end) else {
            return Err(YfError::InvalidArgument(
                "history: start and end dates are required".into(),
            ));
        };
        if start > end {
            return Err(YfError::InvalidDates);
        }

        let page_url = history_page_url(self.client.base_history_page(), symbol)?;
        let page = net::get_text(self.client, &page_url, "history_page").await?;
        let crumb = extract_crumb(&page)?;

        let data_url = download_url(
            self.client.base_download(),
            symbol,
            start,
            end,
            self.interval,
            &crumb,
        )?;
        let body = net::get_text(self.client, &data_url, "history_download").await?;
        transform_historical_data_result(&body)
    }
}

/* ---------------- Internal helpers ---------------- */

fn encode_segment(symbol: &str) -> String {
    form_urlencoded::byte_serialize(symbol.as_bytes()).collect()
}

/// Midnight UTC of `date`, as unix seconds.
fn unix_seconds(date: NaiveDate) -> i64 {
    date.and_time(chrono::NaiveTime::MIN).and_utc().timestamp()
}

fn history_page_url(base: &Url, symbol: &str) -> Result<Url, YfError> {
    let mut url = base.join(&format!("{}/history", encode_segment(symbol)))?;
    url.query_pairs_mut().append_pair("p", symbol);
    Ok(url)
}

fn download_url(
    base: &Url,
    symbol: &str,
    start: NaiveDate,
    end: NaiveDate,
    interval: Interval,
    crumb: &str,
) -> Result<Url, YfError> {
    let mut url = base.join(&encode_segment(symbol))?;
    url.query_pairs_mut()
        .append_pair("period1", &unix_seconds(start).to_string())
        .append_pair("period2", &unix_seconds(end).to_string())
        .append_pair("interval", interval.as_str())
        .append_pair("events", "history")
        .append_pair("crumb", crumb);
    Ok(url)
}
