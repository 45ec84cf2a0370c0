//! Upstream payloads as received from the quote provider.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::errors::MarketDataError;

use super::yahoo::models::{YahooChartResponse, YahooQuoteSummaryResponse};
use super::yahoo::YAHOO_PROVIDER_ID;

/// Endpoint family a payload was fetched from.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PayloadFamily {
    /// Time series with a `meta` snapshot block.
    Chart,
    /// Module-based summary document.
    Summary,
}

/// Typed view of a payload, decoded leniently.
#[derive(Debug)]
pub enum UpstreamDocument {
    Chart(YahooChartResponse),
    Summary(YahooQuoteSummaryResponse),
}

impl UpstreamDocument {
    pub fn family(&self) -> PayloadFamily {
        match self {
            Self::Chart(_) => PayloadFamily::Chart,
            Self::Summary(_) => PayloadFamily::Summary,
        }
    }
}

/// One upstream response body, kept three ways.
///
/// `body` is the exact text the provider sent and is what debug passthrough
/// returns. `json` is the parsed tree attached to `NoData` errors. `document`
/// is the typed view the normalizer reads.
#[derive(Debug)]
pub struct RawPayload {
    body: String,
    json: Value,
    document: UpstreamDocument,
}

impl RawPayload {
    /// Parse a response body of the given family.
    ///
    /// Fails with a transport error when the body is not JSON or does not fit
    /// the family's structure. Missing fields are not an error here.
    pub fn parse(family: PayloadFamily, body: impl Into<String>) -> Result<Self, MarketDataError> {
        let body = body.into();
        let json: Value = serde_json::from_str(&body).map_err(|e| {
            MarketDataError::transport(YAHOO_PROVIDER_ID, format!("Invalid JSON payload: {}", e))
        })?;

        let document = match family {
            PayloadFamily::Chart => UpstreamDocument::Chart(decode(&json)?),
            PayloadFamily::Summary => UpstreamDocument::Summary(decode(&json)?),
        };

        Ok(Self {
            body,
            json,
            document,
        })
    }

    /// The body exactly as received.
    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn json(&self) -> &Value {
        &self.json
    }

    pub fn document(&self) -> &UpstreamDocument {
        &self.document
    }

    pub fn family(&self) -> PayloadFamily {
        self.document.family()
    }

    pub fn into_body(self) -> String {
        self.body
    }

    /// Build the `NoData` error for this payload.
    pub fn no_data(&self) -> MarketDataError {
        MarketDataError::NoData {
            raw: self.json.clone(),
        }
    }
}

fn decode<T: DeserializeOwned>(json: &Value) -> Result<T, MarketDataError> {
    T::deserialize(json).map_err(|e| {
        MarketDataError::transport(
            YAHOO_PROVIDER_ID,
            format!("Unexpected payload structure: {}", e),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;

    #[test]
    fn test_parse_keeps_body_verbatim() {
        let body = "{ \"chart\" : { \"result\" : [ ] } }";
        let payload = RawPayload::parse(PayloadFamily::Chart, body).unwrap();

        assert_eq!(payload.body(), body);
        assert_eq!(payload.family(), PayloadFamily::Chart);
        assert_eq!(payload.json()["chart"]["result"], serde_json::json!([]));
    }

    #[test]
    fn test_parse_rejects_non_json() {
        let err = RawPayload::parse(PayloadFamily::Chart, "<html>rate limited</html>").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Transport);
    }

    #[test]
    fn test_parse_rejects_wrong_root_type() {
        let err = RawPayload::parse(PayloadFamily::Summary, "[1, 2, 3]").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Transport);
    }

    #[test]
    fn test_parse_accepts_unrelated_object() {
        // Structure is lenient; absence is judged later.
        let payload = RawPayload::parse(PayloadFamily::Summary, r#"{"finance": null}"#).unwrap();
        match payload.document() {
            UpstreamDocument::Summary(doc) => assert!(doc.quote_summary.is_none()),
            other => panic!("unexpected document: {:?}", other),
        }
    }

    #[test]
    fn test_no_data_carries_parsed_payload() {
        let payload =
            RawPayload::parse(PayloadFamily::Chart, r#"{"chart": {"result": null}}"#).unwrap();
        match payload.no_data() {
            MarketDataError::NoData { raw } => {
                assert_eq!(raw, serde_json::json!({"chart": {"result": null}}))
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
