//! Market data models
//!
//! This module contains the core data types for gateway operations:
//! - `types` - Type aliases for common identifiers (MarketSuffix)
//! - `instrument` - Internal ticker and provider symbol identities
//! - `query` - Request shape, query kinds and provider range tokens
//! - `quote` - Canonical response types (snapshot, bar series, earnings)

mod instrument;
mod query;
mod quote;
mod types;

pub use instrument::{ExternalSymbol, Ticker};
pub use query::{MarketRequest, QueryKind, RangeToken, SnapshotSource, DEFAULT_HISTORY_DAYS};
pub use quote::{EarningsEvent, HistoricalBar, HistorySeries, QuoteSnapshot};
pub use types::MarketSuffix;
