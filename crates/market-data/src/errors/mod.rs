//! Error types and failure classification for the market data crate.
//!
//! This module provides:
//! - [`MarketDataError`]: The main error enum for all gateway operations
//! - [`ErrorKind`]: Classification used by callers to pick a response status

use serde_json::Value;
use thiserror::Error;

/// Errors that can occur during gateway operations.
///
/// Each variant is classified into an [`ErrorKind`] via the [`kind`](Self::kind)
/// method. None of them is retried inside this crate.
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// The upstream call failed: network error, non-success status, or a
    /// payload that could not be parsed into the expected structure.
    #[error("Transport error: {provider} - {message}")]
    Transport {
        /// The provider that was called
        provider: String,
        /// Description of the failure
        message: String,
    },

    /// The provider answered with a well-formed payload that holds no result
    /// for the requested instrument.
    #[error("No data")]
    NoData {
        /// The upstream payload as received
        raw: Value,
    },

    /// A policy value (range thresholds, etc.) was rejected at construction.
    #[error("Invalid policy: {message}")]
    InvalidPolicy {
        /// Description of the violated constraint
        message: String,
    },
}

/// Coarse classification of a [`MarketDataError`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// Provider unreachable or answered with something unusable.
    Transport,
    /// Provider reachable, nothing for this instrument.
    NoData,
    /// Local misconfiguration; never produced while serving a request.
    Configuration,
}

impl MarketDataError {
    /// Build a transport failure for `provider`.
    pub fn transport(provider: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Transport {
            provider: provider.into(),
            message: message.into(),
        }
    }

    /// Returns the classification for this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use papertrade_market_data::errors::{ErrorKind, MarketDataError};
    ///
    /// let error = MarketDataError::transport("YAHOO", "connection refused");
    /// assert_eq!(error.kind(), ErrorKind::Transport);
    ///
    /// let error = MarketDataError::NoData { raw: serde_json::json!({}) };
    /// assert_eq!(error.kind(), ErrorKind::NoData);
    /// ```
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Transport { .. } => ErrorKind::Transport,
            Self::NoData { .. } => ErrorKind::NoData,
            Self::InvalidPolicy { .. } => ErrorKind::Configuration,
        }
    }
}
