//! Resolution traits for the market data crate.
//!
//! Defines the core abstractions for turning internal tickers into
//! provider-specific symbols.

use crate::models::{ExternalSymbol, Ticker};

/// Resolution result containing the provider symbol and its source.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ResolvedSymbol {
    /// The provider-specific symbol.
    pub symbol: ExternalSymbol,
    /// Where this resolution came from.
    pub source: ResolutionSource,
}

/// Indicates how a ticker was resolved.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ResolutionSource {
    /// From the curated ticker table.
    Curated,
    /// From the mechanical separator/suffix rule.
    Rules,
}

/// Individual resolver in the resolution chain.
///
/// Resolvers are tried in order until one returns a result.
/// Returning `None` means this resolver cannot handle the ticker,
/// and the chain should try the next resolver.
pub trait Resolver: Send + Sync {
    /// Attempt to resolve a provider symbol for `ticker`.
    fn resolve(&self, ticker: &Ticker) -> Option<ResolvedSymbol>;
}

/// Main symbol resolver interface.
///
/// Unlike [`Resolver::resolve`], this is total: every ticker maps to some symbol.
pub trait SymbolResolver: Send + Sync {
    fn resolve(&self, ticker: &Ticker) -> ResolvedSymbol;
}
