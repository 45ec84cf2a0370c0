//! Rules resolver - deterministic separator/suffix resolution.
//!
//! This resolver converts internal tickers mechanically: the space between
//! root and share class becomes a hyphen and the market suffix is appended.
//! It never declines, which is what makes the chain total.

use std::borrow::Cow;

use tracing::debug;

use crate::models::{MarketSuffix, Ticker};

use super::symbol_table::derive_symbol;
use super::traits::{ResolutionSource, ResolvedSymbol, Resolver};

/// Default market suffix (Nasdaq Stockholm on Yahoo Finance).
pub const DEFAULT_MARKET_SUFFIX: &str = ".ST";

/// Resolves provider symbols from the mechanical rule.
///
/// - `"VOLV B"` -> `"VOLV-B.ST"`
/// - `"CAMX"` -> `"CAMX.ST"`
pub struct RulesResolver {
    suffix: MarketSuffix,
}

impl RulesResolver {
    /// Create a new RulesResolver with the default market suffix.
    pub fn new() -> Self {
        Self::with_suffix(Cow::Borrowed(DEFAULT_MARKET_SUFFIX))
    }

    /// Create a RulesResolver with a custom market suffix.
    pub fn with_suffix(suffix: impl Into<MarketSuffix>) -> Self {
        Self {
            suffix: suffix.into(),
        }
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// Derive the provider symbol for any ticker.
    pub fn derive(&self, ticker: &Ticker) -> ResolvedSymbol {
        let symbol = derive_symbol(ticker, &self.suffix);
        debug!("Derived {} for {} from rules", symbol, ticker);

        ResolvedSymbol {
            symbol,
            source: ResolutionSource::Rules,
        }
    }
}

impl Default for RulesResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl Resolver for RulesResolver {
    fn resolve(&self, ticker: &Ticker) -> Option<ResolvedSymbol> {
        Some(self.derive(ticker))
    }
}
