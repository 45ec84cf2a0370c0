//! Yahoo Finance quote client.
//!
//! Talks to two public endpoint families:
//! - chart, for snapshots and daily bar history
//! - quoteSummary, for earnings calendars and (optionally) snapshots
//!
//! Requests carry browser-like headers; Yahoo throttles or rejects bare
//! HTTP clients.

pub mod models;

use async_trait::async_trait;
use reqwest::header::{self, HeaderMap, HeaderValue};
use tracing::{debug, warn};
use urlencoding::encode;

use crate::errors::MarketDataError;
use crate::models::{ExternalSymbol, QueryKind, RangeToken, SnapshotSource};
use crate::provider::{PayloadFamily, QuoteClient, RawPayload};

/// Provider identifier used in logs and errors.
pub const YAHOO_PROVIDER_ID: &str = "YAHOO";

/// Public Yahoo Finance query host.
pub const DEFAULT_BASE_URL: &str = "https://query1.finance.yahoo.com";

const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
const ACCEPT_JSON: &str = "application/json";
const ACCEPT_LANGUAGE: &str = "en-US,en;q=0.9";

// ============================================================================
// Endpoints
// ============================================================================

/// A concrete Yahoo endpoint for one request.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum YahooEndpoint {
    /// `/v8/finance/chart/{symbol}` with daily bars over `range`.
    Chart { range: RangeToken },
    /// `/v11/finance/quoteSummary/{symbol}` for the given modules.
    QuoteSummary { modules: &'static str },
}

impl YahooEndpoint {
    pub fn family(&self) -> PayloadFamily {
        match self {
            Self::Chart { .. } => PayloadFamily::Chart,
            Self::QuoteSummary { .. } => PayloadFamily::Summary,
        }
    }
}

// ============================================================================
// Yahoo Client
// ============================================================================

/// Yahoo Finance quote client.
///
/// Holds one pooled `reqwest::Client`; cloning the client is cheap and shares
/// the pool.
#[derive(Clone, Debug)]
pub struct YahooClient {
    client: reqwest::Client,
    base_url: String,
    snapshot_source: SnapshotSource,
}

impl YahooClient {
    /// Create a client against the public Yahoo host.
    pub fn new() -> Result<Self, MarketDataError> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Create a client against a custom host (mirrors, test servers).
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, MarketDataError> {
        Ok(Self {
            client: build_http_client()?,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            snapshot_source: SnapshotSource::default(),
        })
    }

    /// Choose which endpoint backs price queries.
    pub fn with_snapshot_source(mut self, source: SnapshotSource) -> Self {
        self.snapshot_source = source;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn snapshot_source(&self) -> SnapshotSource {
        self.snapshot_source
    }

    /// Endpoint used for a query kind and window.
    pub fn endpoint_for(&self, kind: QueryKind, range: RangeToken) -> YahooEndpoint {
        match (kind, self.snapshot_source) {
            (QueryKind::Earnings, _) => YahooEndpoint::QuoteSummary {
                modules: "calendarEvents",
            },
            (QueryKind::Price, SnapshotSource::Summary) => {
                YahooEndpoint::QuoteSummary { modules: "price" }
            }
            (QueryKind::Price, SnapshotSource::Chart) | (QueryKind::History, _) => {
                YahooEndpoint::Chart { range }
            }
        }
    }

    /// Full request URL for `symbol` on `endpoint`.
    pub fn url_for(&self, symbol: &ExternalSymbol, endpoint: YahooEndpoint) -> String {
        let symbol = encode(symbol.as_str());
        match endpoint {
            YahooEndpoint::Chart { range } => format!(
                "{}/v8/finance/chart/{}?interval=1d&range={}",
                self.base_url, symbol, range
            ),
            YahooEndpoint::QuoteSummary { modules } => format!(
                "{}/v11/finance/quoteSummary/{}?modules={}",
                self.base_url, symbol, modules
            ),
        }
    }
}

fn build_http_client() -> Result<reqwest::Client, MarketDataError> {
    let mut headers = HeaderMap::new();
    headers.insert(header::USER_AGENT, HeaderValue::from_static(BROWSER_USER_AGENT));
    headers.insert(header::ACCEPT, HeaderValue::from_static(ACCEPT_JSON));
    headers.insert(
        header::ACCEPT_LANGUAGE,
        HeaderValue::from_static(ACCEPT_LANGUAGE),
    );

    reqwest::Client::builder()
        .default_headers(headers)
        .build()
        .map_err(|e| {
            MarketDataError::transport(
                YAHOO_PROVIDER_ID,
                format!("Failed to initialize HTTP client: {}", e),
            )
        })
}

#[async_trait]
impl QuoteClient for YahooClient {
    fn id(&self) -> &'static str {
        YAHOO_PROVIDER_ID
    }

    async fn fetch(
        &self,
        symbol: &ExternalSymbol,
        kind: QueryKind,
        range: RangeToken,
    ) -> Result<RawPayload, MarketDataError> {
        let endpoint = self.endpoint_for(kind, range);
        let url = self.url_for(symbol, endpoint);
        debug!("Fetching {} {} from {}", kind, symbol, url);

        let response = self.client.get(&url).send().await.map_err(|e| {
            warn!("Yahoo request for {} failed: {}", symbol, e);
            MarketDataError::transport(YAHOO_PROVIDER_ID, format!("Request failed: {}", e))
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!("Yahoo returned status {} for {}", status.as_u16(), symbol);
            return Err(MarketDataError::transport(
                YAHOO_PROVIDER_ID,
                format!("Upstream returned status {}", status.as_u16()),
            ));
        }

        let body = response.text().await.map_err(|e| {
            MarketDataError::transport(
                YAHOO_PROVIDER_ID,
                format!("Failed to read response body: {}", e),
            )
        })?;

        RawPayload::parse(endpoint.family(), body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;
    use crate::provider::UpstreamDocument;
    use httpmock::prelude::*;

    const CHART_BODY: &str = r#"{"chart":{"result":[{"meta":{"regularMarketPrice":295.5,"regularMarketChangePercent":1.2,"regularMarketVolume":1000000}}],"error":null}}"#;

    fn volvo() -> ExternalSymbol {
        ExternalSymbol::new("VOLV-B.ST")
    }

    #[test]
    fn test_endpoint_selection() {
        let client = YahooClient::new().unwrap();

        assert_eq!(
            client.endpoint_for(QueryKind::Price, RangeToken::OneDay),
            YahooEndpoint::Chart {
                range: RangeToken::OneDay
            }
        );
        assert_eq!(
            client.endpoint_for(QueryKind::History, RangeToken::OneYear),
            YahooEndpoint::Chart {
                range: RangeToken::OneYear
            }
        );
        assert_eq!(
            client.endpoint_for(QueryKind::Earnings, RangeToken::OneDay),
            YahooEndpoint::QuoteSummary {
                modules: "calendarEvents"
            }
        );
    }

    #[test]
    fn test_summary_snapshot_source() {
        let client = YahooClient::new()
            .unwrap()
            .with_snapshot_source(SnapshotSource::Summary);
        assert_eq!(
            client.endpoint_for(QueryKind::Price, RangeToken::OneDay),
            YahooEndpoint::QuoteSummary { modules: "price" }
        );
    }

    #[test]
    fn test_url_building_encodes_symbol() {
        let client = YahooClient::with_base_url("http://localhost:1234/").unwrap();

        assert_eq!(
            client.url_for(
                &volvo(),
                YahooEndpoint::Chart {
                    range: RangeToken::SixMonths
                }
            ),
            "http://localhost:1234/v8/finance/chart/VOLV-B.ST?interval=1d&range=6mo"
        );
        assert_eq!(
            client.url_for(
                &ExternalSymbol::new("^OMX"),
                YahooEndpoint::QuoteSummary {
                    modules: "calendarEvents"
                }
            ),
            "http://localhost:1234/v11/finance/quoteSummary/%5EOMX?modules=calendarEvents"
        );
    }

    #[tokio::test]
    async fn test_fetch_chart_sends_browser_headers() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/v8/finance/chart/VOLV-B.ST")
                    .query_param("interval", "1d")
                    .query_param("range", "1d")
                    .header("user-agent", BROWSER_USER_AGENT)
                    .header("accept", ACCEPT_JSON)
                    .header("accept-language", ACCEPT_LANGUAGE);
                then.status(200)
                    .header("content-type", "application/json")
                    .body(CHART_BODY);
            })
            .await;

        let client = YahooClient::with_base_url(server.base_url()).unwrap();
        let payload = client
            .fetch(&volvo(), QueryKind::Price, RangeToken::OneDay)
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(payload.body(), CHART_BODY);
        assert!(matches!(payload.document(), UpstreamDocument::Chart(_)));
    }

    #[tokio::test]
    async fn test_fetch_earnings_hits_summary() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/v11/finance/quoteSummary/VOLV-B.ST")
                    .query_param("modules", "calendarEvents");
                then.status(200)
                    .body(r#"{"quoteSummary":{"result":[{}],"error":null}}"#);
            })
            .await;

        let client = YahooClient::with_base_url(server.base_url()).unwrap();
        let payload = client
            .fetch(&volvo(), QueryKind::Earnings, RangeToken::OneDay)
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(payload.family(), PayloadFamily::Summary);
    }

    #[tokio::test]
    async fn test_non_success_status_is_transport() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/v8/finance/chart/VOLV-B.ST");
                then.status(404)
                    .body(r#"{"chart":{"result":null,"error":{"code":"Not Found"}}}"#);
            })
            .await;

        let client = YahooClient::with_base_url(server.base_url()).unwrap();
        let err = client
            .fetch(&volvo(), QueryKind::History, RangeToken::OneYear)
            .await
            .unwrap_err();

        mock.assert_hits_async(1).await;
        assert_eq!(err.kind(), ErrorKind::Transport);
    }

    #[tokio::test]
    async fn test_unparseable_body_is_transport() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/v8/finance/chart/VOLV-B.ST");
                then.status(200).body("Too Many Requests");
            })
            .await;

        let client = YahooClient::with_base_url(server.base_url()).unwrap();
        let err = client
            .fetch(&volvo(), QueryKind::Price, RangeToken::OneDay)
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Transport);
    }

    #[tokio::test]
    async fn test_unreachable_host_is_transport() {
        // Port 9 (discard) is closed on test hosts.
        let client = YahooClient::with_base_url("http://127.0.0.1:9").unwrap();
        let err = client
            .fetch(&volvo(), QueryKind::Price, RangeToken::OneDay)
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Transport);
    }
}
