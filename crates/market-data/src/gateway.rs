//! Request orchestration.
//!
//! One request runs `resolve -> select range -> fetch -> normalize`. Debug
//! requests stop after the fetch and hand back the upstream body untouched.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use crate::errors::MarketDataError;
use crate::models::{EarningsEvent, HistorySeries, MarketRequest, QueryKind, QuoteSnapshot};
use crate::normalize::ResponseNormalizer;
use crate::provider::QuoteClient;
use crate::range::RangeSelector;
use crate::resolver::{ResolverChain, SymbolResolver};

/// Successful outcome of a gateway request.
#[derive(Clone, Debug, PartialEq)]
pub enum GatewayResponse {
    Snapshot(QuoteSnapshot),
    History(HistorySeries),
    Earnings(EarningsEvent),
    /// Upstream body exactly as received (debug passthrough).
    Raw(String),
}

/// Serves market data requests through a single quote client.
///
/// Holds no per-request state and can be shared across tasks.
pub struct MarketGateway {
    client: Arc<dyn QuoteClient>,
    resolver: ResolverChain,
    selector: RangeSelector,
    normalizer: ResponseNormalizer,
}

impl MarketGateway {
    /// Gateway with the built-in symbol table, default range thresholds and
    /// adjusted-close preference.
    pub fn new(client: Arc<dyn QuoteClient>) -> Self {
        Self {
            client,
            resolver: ResolverChain::new(),
            selector: RangeSelector::default(),
            normalizer: ResponseNormalizer::default(),
        }
    }

    pub fn with_resolver(mut self, resolver: ResolverChain) -> Self {
        self.resolver = resolver;
        self
    }

    pub fn with_selector(mut self, selector: RangeSelector) -> Self {
        self.selector = selector;
        self
    }

    pub fn with_normalizer(mut self, normalizer: ResponseNormalizer) -> Self {
        self.normalizer = normalizer;
        self
    }

    /// Handle a request as of the current instant.
    pub async fn handle(&self, request: &MarketRequest) -> Result<GatewayResponse, MarketDataError> {
        self.handle_at(request, Utc::now()).await
    }

    /// Handle a request, judging earnings dates against `now`.
    pub async fn handle_at(
        &self,
        request: &MarketRequest,
        now: DateTime<Utc>,
    ) -> Result<GatewayResponse, MarketDataError> {
        let resolved = self.resolver.resolve(&request.ticker);
        let range = self.selector.select(request.kind, request.days);
        debug!(
            "Resolved {} -> {} ({:?}), range {}",
            request.ticker, resolved.symbol, resolved.source, range
        );

        let payload = self
            .client
            .fetch(&resolved.symbol, request.kind, range)
            .await
            .inspect_err(|e| {
                warn!(
                    "{} fetch for {} via {} failed: {}",
                    request.kind,
                    resolved.symbol,
                    self.client.id(),
                    e
                )
            })?;

        if request.debug {
            info!("Returning raw {} payload for {}", request.kind, resolved.symbol);
            return Ok(GatewayResponse::Raw(payload.into_body()));
        }

        let response = match request.kind {
            QueryKind::Price => self.normalizer.snapshot(&payload).map(GatewayResponse::Snapshot),
            QueryKind::History => self.normalizer.history(&payload).map(GatewayResponse::History),
            QueryKind::Earnings => self
                .normalizer
                .earnings(&payload, now)
                .map(GatewayResponse::Earnings),
        };

        if let Err(MarketDataError::NoData { .. }) = &response {
            info!("No {} data for {}", request.kind, resolved.symbol);
        }
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;
    use crate::models::{ExternalSymbol, RangeToken};
    use crate::provider::{PayloadFamily, RawPayload};
    use async_trait::async_trait;
    use chrono::{NaiveDate, TimeZone};
    use std::sync::Mutex;

    /// Serves a fixed body and records what it was asked for.
    struct StubClient {
        body: Option<&'static str>,
        calls: Mutex<Vec<(String, QueryKind, RangeToken)>>,
    }

    impl StubClient {
        fn serving(body: &'static str) -> Arc<Self> {
            Arc::new(Self {
                body: Some(body),
                calls: Mutex::new(Vec::new()),
            })
        }

        fn failing() -> Arc<Self> {
            Arc::new(Self {
                body: None,
                calls: Mutex::new(Vec::new()),
            })
        }

        fn calls(&self) -> Vec<(String, QueryKind, RangeToken)> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl QuoteClient for StubClient {
        fn id(&self) -> &'static str {
            "STUB"
        }

        async fn fetch(
            &self,
            symbol: &ExternalSymbol,
            kind: QueryKind,
            range: RangeToken,
        ) -> Result<RawPayload, MarketDataError> {
            self.calls
                .lock()
                .unwrap()
                .push((symbol.to_string(), kind, range));

            let family = match kind {
                QueryKind::Earnings => PayloadFamily::Summary,
                _ => PayloadFamily::Chart,
            };
            match self.body {
                Some(body) => RawPayload::parse(family, body),
                None => Err(MarketDataError::transport("STUB", "connection refused")),
            }
        }
    }

    const VOLVO_CHART: &str = r#"{"chart":{"result":[{"meta":{"regularMarketPrice":295.5,"regularMarketChangePercent":1.2,"regularMarketVolume":1000000}}],"error":null}}"#;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 4, 1, 12, 0, 0).unwrap()
    }

    #[tokio::test]
    async fn test_price_for_share_class_ticker() {
        let client = StubClient::serving(VOLVO_CHART);
        let gateway = MarketGateway::new(client.clone());

        let response = gateway
            .handle_at(&MarketRequest::new("VOLV B", QueryKind::Price), now())
            .await
            .unwrap();

        assert_eq!(
            response,
            GatewayResponse::Snapshot(QuoteSnapshot {
                price: 295.5,
                change_pct: 1.2,
                volume: 1_000_000,
            })
        );
        assert_eq!(
            client.calls(),
            vec![("VOLV-B.ST".to_string(), QueryKind::Price, RangeToken::OneDay)]
        );
    }

    #[tokio::test]
    async fn test_history_range_and_curated_symbol() {
        let client = StubClient::serving(r#"{"chart":{"result":[{"timestamp":[]}]}}"#);
        let gateway = MarketGateway::new(client.clone());

        let response = gateway
            .handle_at(
                &MarketRequest::new("OMXS30", QueryKind::History).with_days(200),
                now(),
            )
            .await
            .unwrap();

        assert_eq!(response, GatewayResponse::History(HistorySeries::default()));
        assert_eq!(
            client.calls(),
            vec![("^OMX".to_string(), QueryKind::History, RangeToken::OneYear)]
        );
    }

    #[tokio::test]
    async fn test_earnings_uses_supplied_clock() {
        let client = StubClient::serving(
            r#"{"quoteSummary":{"result":[{"calendarEvents":{"earnings":{"earningsDate":[{"raw":1706169600},{"raw":1713942000}]}}}]}}"#,
        );
        let gateway = MarketGateway::new(client);

        let response = gateway
            .handle_at(&MarketRequest::new("VOLV B", QueryKind::Earnings), now())
            .await
            .unwrap();

        assert_eq!(
            response,
            GatewayResponse::Earnings(EarningsEvent {
                earnings_date: NaiveDate::from_ymd_opt(2024, 4, 24),
            })
        );
    }

    #[tokio::test]
    async fn test_debug_returns_body_verbatim() {
        let chart = "{ \"chart\" : { \"result\" : [] } }";
        let summary = "{ \"quoteSummary\" : { \"result\" : [ ] , \"error\" : null } }";

        for (kind, body) in [
            (QueryKind::Price, chart),
            (QueryKind::History, chart),
            (QueryKind::Earnings, summary),
        ] {
            let gateway = MarketGateway::new(StubClient::serving(body));
            let response = gateway
                .handle_at(&MarketRequest::new("VOLV B", kind).with_debug(true), now())
                .await
                .unwrap();
            assert_eq!(response, GatewayResponse::Raw(body.to_string()));
        }
    }

    #[tokio::test]
    async fn test_empty_result_is_no_data() {
        let client = StubClient::serving(r#"{"chart":{"result":[],"error":null}}"#);
        let gateway = MarketGateway::new(client);

        let err = gateway
            .handle_at(&MarketRequest::new("NOPE", QueryKind::Price), now())
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::NoData);
    }

    #[tokio::test]
    async fn test_transport_failure_propagates() {
        let client = StubClient::failing();
        let gateway = MarketGateway::new(client.clone());

        let err = gateway
            .handle_at(&MarketRequest::new("VOLV B", QueryKind::History), now())
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Transport);
        assert_eq!(client.calls().len(), 1);
    }
}
