//! Resolver chain - composite resolver that tries resolvers in order.
//!
//! The resolver chain is the main entry point for symbol resolution. It
//! combines multiple resolvers and tries them in order until one succeeds.

use std::sync::Arc;

use crate::models::Ticker;

use super::curated_resolver::CuratedResolver;
use super::rules_resolver::RulesResolver;
use super::symbol_table::SymbolTable;
use super::traits::{ResolvedSymbol, Resolver, SymbolResolver};

/// Composite resolver that tries multiple resolvers in order.
///
/// The resolution order is:
/// 1. Curated table (exact match)
/// 2. Mechanical rule (always answers)
///
/// The chain stops at the first resolver that returns a result.
///
/// # Example
///
/// ```
/// use papertrade_market_data::models::Ticker;
/// use papertrade_market_data::resolver::{ResolverChain, SymbolResolver};
///
/// let chain = ResolverChain::new();
/// assert_eq!(chain.resolve(&Ticker::from("VOLV B")).symbol.as_str(), "VOLV-B.ST");
/// assert_eq!(chain.resolve(&Ticker::from("OMXS30")).symbol.as_str(), "^OMX");
/// ```
pub struct ResolverChain {
    resolvers: Vec<Box<dyn Resolver>>,
    rules_resolver: RulesResolver,
}

impl ResolverChain {
    /// Create a new ResolverChain with the built-in table and `.ST` suffix.
    pub fn new() -> Self {
        Self::with_parts(SymbolTable::curated(), RulesResolver::new())
    }

    /// Create a ResolverChain over a custom table and rules resolver.
    pub fn with_parts(table: Arc<SymbolTable>, rules_resolver: RulesResolver) -> Self {
        Self {
            resolvers: vec![Box::new(CuratedResolver::with_table(table))],
            rules_resolver,
        }
    }

    /// Add a custom resolver to the chain.
    ///
    /// The resolver is added before the rules resolver (which is always last).
    pub fn add_resolver(&mut self, resolver: Box<dyn Resolver>) {
        self.resolvers.push(resolver);
    }
}

impl Default for ResolverChain {
    fn default() -> Self {
        Self::new()
    }
}

impl SymbolResolver for ResolverChain {
    fn resolve(&self, ticker: &Ticker) -> ResolvedSymbol {
        for resolver in &self.resolvers {
            if let Some(resolved) = resolver.resolve(ticker) {
                return resolved;
            }
        }

        self.rules_resolver.derive(ticker)
    }
}
