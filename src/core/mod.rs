//! Core components of the `yfinance-api` client.
//!
//! This module contains the foundational building blocks of the library, including:
//! - The main [`YfClient`] and its builder.
//! - The primary [`YfError`] type.
//! - Shared data models like [`Quote`] and [`HistoricalDataPoint`].
//! - Value coercion and the transport abstraction.

/// The main client (`YfClient`), builder, and configuration.
pub mod client;
/// Coercion of loosely typed provider fields into strict values.
pub mod conversions;
/// The primary error type (`YfError`) for the crate.
pub mod error;
/// Data models returned by the public operations.
pub mod models;
/// The `HttpTransport` seam and its reqwest implementation.
pub mod transport;

pub(crate) mod net;

// convenient re-exports so most code can just `use crate::core::YfClient`
pub use client::{YfClient, YfClientBuilder};
pub use conversions::{InvalidValueError, ValueKind};
pub use error::YfError;
pub use models::{
    AssetKind, HistoricalDataPoint, HistoricalSeries, Interval, MarketState, Quote, QuoteValue,
    RowWarning, SearchResult,
};
pub use transport::{HttpResponse, HttpTransport, ReqwestTransport};
