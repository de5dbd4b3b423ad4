//! Public client surface + builder.
//! Endpoint defaults live in `constants`.

mod constants;

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use url::Url;

use crate::core::YfError;
use crate::core::transport::{HttpTransport, ReqwestTransport};
use constants::{
    DEFAULT_BASE_DOWNLOAD, DEFAULT_BASE_HISTORY_PAGE, DEFAULT_BASE_QUOTE_V7, DEFAULT_BASE_SEARCH,
    USER_AGENT,
};

pub(crate) use constants::SEARCH_QUERY_SUFFIX;

/// Handle to the Yahoo Finance endpoints.
///
/// Cheap to clone; clones share the transport (and with it the connection pool and cookie
/// store). Holds no other mutable state, so concurrent calls on one client are independent.
#[derive(Clone)]
pub struct YfClient {
    transport: Arc<dyn HttpTransport>,
    base_search: Url,
    base_history_page: Url,
    base_download: Url,
    base_quote_v7: Url,
}

impl fmt::Debug for YfClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("YfClient")
            .field("base_search", &self.base_search.as_str())
            .field("base_history_page", &self.base_history_page.as_str())
            .field("base_download", &self.base_download.as_str())
            .field("base_quote_v7", &self.base_quote_v7.as_str())
            .finish_non_exhaustive()
    }
}

impl Default for YfClient {
    fn default() -> Self {
        Self::builder().build().expect("default client")
    }
}

impl YfClient {
    /// Create a new builder.
    #[must_use]
    pub fn builder() -> YfClientBuilder {
        YfClientBuilder::default()
    }

    /// Client with default endpoints over a caller-supplied transport.
    ///
    /// # Panics
    ///
    /// Panics if one of the built-in endpoint constants is not a valid URL, which would be a
    /// bug in this crate.
    #[must_use]
    pub fn with_transport(transport: Arc<dyn HttpTransport>) -> Self {
        Self::builder()
            .transport(transport)
            .build()
            .expect("built-in endpoints are valid URLs")
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn transport(&self) -> &dyn HttpTransport {
        self.transport.as_ref()
    }
    pub(crate) const fn base_search(&self) -> &Url {
        &self.base_search
    }
    pub(crate) const fn base_history_page(&self) -> &Url {
        &self.base_history_page
    }
    pub(crate) const fn base_download(&self) -> &Url {
        &self.base_download
    }
    pub(crate) const fn base_quote_v7(&self) -> &Url {
        &self.base_quote_v7
    }
}

/* ----------------------- Builder ----------------------- */

/// Builder for [`YfClient`].
///
/// Every setting is optional. Transport settings (`user_agent`, timeouts, `http_client`) are
/// ignored when a custom [`HttpTransport`] is supplied.
#[derive(Default)]
pub struct YfClientBuilder {
    user_agent: Option<String>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    http: Option<Client>,
    transport: Option<Arc<dyn HttpTransport>>,

    base_search: Option<Url>,
    base_history_page: Option<Url>,
    base_download: Option<Url>,
    base_quote_v7: Option<Url>,
}

impl YfClientBuilder {
    /// Override the User-Agent.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Set a global request timeout (overall). Default: none.
    #[must_use]
    pub const fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    #[must_use]
    pub const fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Use a preconfigured `reqwest::Client` (proxy, custom TLS, ...). Enable its cookie store:
    /// the history crumb is only valid together with the session cookie of the page it came from.
    #[must_use]
    pub fn http_client(mut self, http: Client) -> Self {
        self.http = Some(http);
        self
    }

    /// Route every request through a custom transport.
    #[must_use]
    pub fn transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Override the search-assist base. The urlencoded term is appended to it verbatim.
    #[must_use]
    pub fn base_search(mut self, url: Url) -> Self {
        self.base_search = Some(url);
        self
    }

    /// Override the quote page base used to obtain a crumb (e.g., `https://finance.yahoo.com/quote/`).
    #[must_use]
    pub fn base_history_page(mut self, url: Url) -> Self {
        self.base_history_page = Some(url);
        self
    }

    /// Override the CSV download base (e.g., `https://query1.finance.yahoo.com/v7/finance/download/`).
    #[must_use]
    pub fn base_download(mut self, url: Url) -> Self {
        self.base_download = Some(url);
        self
    }

    /// Override the v7 quote endpoint (e.g., `https://query1.finance.yahoo.com/v7/finance/quote`).
    #[must_use]
    pub fn base_quote_v7(mut self, url: Url) -> Self {
        self.base_quote_v7 = Some(url);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns `YfError::Url` if a default endpoint fails to parse and `YfError::Http` if the
    /// underlying `reqwest::Client` cannot be constructed.
    pub fn build(self) -> Result<YfClient, YfError> {
        let base_search = match self.base_search {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_SEARCH)?,
        };
        let base_history_page = match self.base_history_page {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_HISTORY_PAGE)?,
        };
        let base_download = match self.base_download {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_DOWNLOAD)?,
        };
        let base_quote_v7 = match self.base_quote_v7 {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_QUOTE_V7)?,
        };

        let transport: Arc<dyn HttpTransport> = match (self.transport, self.http) {
            (Some(t), _) => t,
            (None, Some(http)) => Arc::new(ReqwestTransport::new(http)),
            (None, None) => {
                let mut httpb = Client::builder()
                    .user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT))
                    .cookie_store(true);

                if let Some(t) = self.timeout {
                    httpb = httpb.timeout(t);
                }
                if let Some(ct) = self.connect_timeout {
                    httpb = httpb.connect_timeout(ct);
                }

                Arc::new(ReqwestTransport::new(httpb.build()?))
            }
        };

        Ok(YfClient {
            transport,
            base_search,
            base_history_page,
            base_download,
            base_quote_v7,
        })
    }
}
