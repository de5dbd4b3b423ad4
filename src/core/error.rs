use thiserror::Error;

use crate::core::conversions::InvalidValueError;

/// The primary error type for all fallible operations in this crate.
///
/// Variants fall into four groups: caller arguments, network, decoding and client
/// construction. [`YfError::is_argument`], [`YfError::is_network`] and
/// [`YfError::is_decode`] classify a value without matching on every variant.
#[derive(Debug, Error)]
pub enum YfError {
    /// A caller-supplied argument violates a precondition. Raised before any request is sent.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// An invalid date range was provided for a historical data request (start must not be after end).
    #[error("invalid date range: start must be before end")]
    InvalidDates,

    /// An error occurred during an HTTP request.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A custom transport failed to produce a response.
    #[error("transport error: {0}")]
    Transport(String),

    /// The requested resource was not found (HTTP 404).
    #[error("Not found at {url}")]
    NotFound {
        /// The URL that was not found.
        url: String,
    },

    /// The server is rate-limiting requests (HTTP 429).
    #[error("Rate limited at {url}")]
    RateLimited {
        /// The URL that returned the rate-limiting error.
        url: String,
    },

    /// The server returned a 5xx status code.
    #[error("Server error {status} at {url}")]
    ServerError {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// The server returned an unexpected or unsuccessful HTTP status code.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// The response body is not valid JSON.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// The response body is not valid CSV.
    #[error("CSV parse error: {0}")]
    Csv(#[from] csv::Error),

    /// The body parsed, but an expected path or header is absent. Usually means the provider
    /// changed the shape of its response.
    #[error("Data format unexpected or missing field: {0}")]
    MissingData(String),

    /// The history page did not contain the embedded crumb marker.
    #[error("crumb marker not found in page body")]
    CrumbNotFound,

    /// A field failed type coercion.
    #[error("invalid value: {0}")]
    InvalidValue(#[from] InvalidValueError),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),
}

impl YfError {
    /// `true` for errors raised by input validation.
    #[must_use]
    pub const fn is_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_) | Self::InvalidDates)
    }

    /// `true` for transport failures and non-2xx responses.
    #[must_use]
    pub const fn is_network(&self) -> bool {
        matches!(
            self,
            Self::Http(_)
                | Self::Transport(_)
                | Self::NotFound { .. }
                | Self::RateLimited { .. }
                | Self::ServerError { .. }
                | Self::Status { .. }
        )
    }

    /// `true` when a response was received but did not match the expected schema.
    #[must_use]
    pub const fn is_decode(&self) -> bool {
        matches!(
            self,
            Self::Json(_)
                | Self::Csv(_)
                | Self::MissingData(_)
                | Self::CrumbNotFound
                | Self::InvalidValue(_)
        )
    }

    pub(crate) fn from_status(status: u16, url: &url::Url) -> Self {
        let url = url.to_string();
        match status {
            404 => Self::NotFound { url },
            429 => Self::RateLimited { url },
            500..=599 => Self::ServerError { status, url },
            _ => Self::Status { status, url },
        }
    }
}
