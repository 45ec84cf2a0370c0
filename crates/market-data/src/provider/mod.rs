//! Quote client abstraction and the Yahoo Finance implementation.
//!
//! This module contains:
//! - The [`QuoteClient`] trait the gateway fetches through
//! - [`RawPayload`], the parsed-but-unnormalized upstream body
//! - The Yahoo Finance client
//!
//! Clients receive an already resolved [`ExternalSymbol`](crate::models::ExternalSymbol)
//! and an already selected window. Resolution and range selection happen
//! before the client is called.

mod payload;
mod traits;

pub mod yahoo;

pub use payload::{PayloadFamily, RawPayload, UpstreamDocument};
pub use traits::QuoteClient;
