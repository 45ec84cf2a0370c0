//! Symbol resolution for the quote provider.
//!
//! This module provides the resolver chain that converts internal tickers
//! (e.g., "VOLV B") to provider-specific symbols (e.g., "VOLV-B.ST").
//!
//! # Architecture
//!
//! The resolver uses a chain of responsibility pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      ResolverChain                           │
//! │                                                              │
//! │  ┌────────────────────────────────────────────────────────┐ │
//! │  │ 1. Curated Resolver (SymbolTable)                       │ │
//! │  │    - Exact match on the internal ticker                 │ │
//! │  │    - Index codes and irregular provider names           │ │
//! │  └────────────────────────────────────────────────────────┘ │
//! │                           │ miss                             │
//! │                           ▼                                  │
//! │  ┌────────────────────────────────────────────────────────┐ │
//! │  │ 2. Rules Resolver (deterministic)                       │ │
//! │  │    - spaces -> hyphens, then market suffix              │ │
//! │  └────────────────────────────────────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Resolution is total: the rules resolver answers for every ticker, so
//! [`SymbolResolver::resolve`] never fails.

mod chain;
mod curated_resolver;
mod rules_resolver;
mod symbol_table;
mod traits;

pub use chain::ResolverChain;
pub use curated_resolver::CuratedResolver;
pub use rules_resolver::{RulesResolver, DEFAULT_MARKET_SUFFIX};
pub use symbol_table::{derive_symbol, lookup_curated, SymbolTable, CURATED_SYMBOLS};
pub use traits::{ResolutionSource, ResolvedSymbol, Resolver, SymbolResolver};
