//! Curated resolver - resolves from the curated ticker table.
//!
//! This is the first resolver in the chain. Its entries may contradict the
//! mechanical rule and always take precedence over it.

use std::sync::Arc;

use tracing::debug;

use crate::models::Ticker;

use super::symbol_table::{lookup_curated, SymbolTable};
use super::traits::{ResolutionSource, ResolvedSymbol, Resolver};

/// Resolves provider symbols from an immutable [`SymbolTable`].
///
/// # Resolution Order
///
/// This resolver is typically first in the chain:
/// 1. CuratedResolver (this) - exact-match table lookup
/// 2. RulesResolver - separator/suffix derivation
pub struct CuratedResolver {
    table: Arc<SymbolTable>,
}

impl CuratedResolver {
    /// Create a resolver over the shared built-in table.
    pub fn new() -> Self {
        Self::with_table(SymbolTable::curated())
    }

    /// Create a resolver over a custom table.
    pub fn with_table(table: Arc<SymbolTable>) -> Self {
        Self { table }
    }
}

impl Default for CuratedResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl Resolver for CuratedResolver {
    fn resolve(&self, ticker: &Ticker) -> Option<ResolvedSymbol> {
        let symbol = lookup_curated(&self.table, ticker)?;
        debug!("Resolved {} to {} from curated table", ticker, symbol);

        Some(ResolvedSymbol {
            symbol,
            source: ResolutionSource::Curated,
        })
    }
}
