//! Papertrade Market Data Crate
//!
//! Quote, history and earnings lookups for Nordic equities, backed by the
//! Yahoo Finance public endpoints.
//!
//! # Architecture
//!
//! ```text
//! +------------------+
//! |  MarketRequest   |  (ticker, kind, days, debug)
//! +------------------+
//!          |
//!          v
//! +------------------+     +------------------+
//! |  ResolverChain   | --> |  ExternalSymbol  |  (curated table, then rule)
//! +------------------+     +------------------+
//!          |
//!          v
//! +------------------+
//! |  RangeSelector   |  (lookback window)
//! +------------------+
//!          |
//!          v
//! +------------------+
//! |   QuoteClient    |  (one upstream call)
//! +------------------+
//!          |
//!          v
//! +------------------+     +------------------+
//! |    Normalizer    | --> | GatewayResponse  |
//! +------------------+     +------------------+
//! ```
//!
//! # Core Types
//!
//! - [`MarketGateway`] - Runs one request end to end
//! - [`Ticker`] - Internal ticker, e.g. "VOLV B"
//! - [`ExternalSymbol`] - Provider symbol, e.g. "VOLV-B.ST"
//! - [`QuoteSnapshot`], [`HistorySeries`], [`EarningsEvent`] - Output records
//! - [`MarketDataError`] - Transport and no-data failures

pub mod errors;
pub mod gateway;
pub mod models;
pub mod normalize;
pub mod provider;
pub mod range;
pub mod resolver;

pub use errors::{ErrorKind, MarketDataError};
pub use gateway::{GatewayResponse, MarketGateway};

pub use models::{
    EarningsEvent, ExternalSymbol, HistoricalBar, HistorySeries, MarketRequest, QueryKind,
    QuoteSnapshot, RangeToken, SnapshotSource, Ticker, DEFAULT_HISTORY_DAYS,
};

pub use normalize::{ClosePreference, ResponseNormalizer};
pub use range::{RangePolicy, RangeSelector, DEFAULT_HISTORY_THRESHOLDS};

pub use resolver::{
    ResolutionSource, ResolvedSymbol, Resolver, ResolverChain, RulesResolver, SymbolResolver,
    SymbolTable,
};

pub use provider::yahoo::YahooClient;
pub use provider::{PayloadFamily, QuoteClient, RawPayload};
