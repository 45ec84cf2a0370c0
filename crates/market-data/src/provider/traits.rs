//! Quote client trait definition.

use async_trait::async_trait;

use crate::errors::MarketDataError;
use crate::models::{ExternalSymbol, QueryKind, RangeToken};

use super::payload::RawPayload;

/// Trait for upstream quote clients.
///
/// One call to [`fetch`](Self::fetch) issues exactly one upstream request.
/// Implementations never retry; every failure to obtain a parseable payload
/// is reported as [`MarketDataError::Transport`].
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use papertrade_market_data::provider::{PayloadFamily, QuoteClient, RawPayload};
///
/// struct FixtureClient {
///     body: String,
/// }
///
/// #[async_trait]
/// impl QuoteClient for FixtureClient {
///     fn id(&self) -> &'static str {
///         "FIXTURE"
///     }
///
///     async fn fetch(
///         &self,
///         _symbol: &ExternalSymbol,
///         _kind: QueryKind,
///         _range: RangeToken,
///     ) -> Result<RawPayload, MarketDataError> {
///         RawPayload::parse(PayloadFamily::Chart, self.body.clone())
///     }
/// }
/// ```
#[async_trait]
pub trait QuoteClient: Send + Sync {
    /// Identifier used in logs and transport errors, e.g. "YAHOO".
    fn id(&self) -> &'static str;

    /// Fetch the raw payload for `symbol`.
    ///
    /// `kind` picks the endpoint family and `range` the lookback window.
    async fn fetch(
        &self,
        symbol: &ExternalSymbol,
        kind: QueryKind,
        range: RangeToken,
    ) -> Result<RawPayload, MarketDataError>;
}
