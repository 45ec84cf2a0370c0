use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Internal instrument identifier as used by the dashboard and the trading agent.
///
/// An uppercase root optionally followed by a space and a share-class letter,
/// e.g. `"VOLV B"` or `"ABB"`. Tickers arrive per request and are never stored here.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Ticker(Arc<str>);

impl Ticker {
    /// Build a ticker from request input. Surrounding whitespace is dropped;
    /// inner separators are kept as-is.
    pub fn new(raw: impl AsRef<str>) -> Self {
        Self(Arc::from(raw.as_ref().trim()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Ticker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Ticker {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Ticker {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<Ticker> for String {
    fn from(value: Ticker) -> Self {
        value.0.to_string()
    }
}

/// Quote-provider symbol for an instrument (e.g. `"VOLV-B.ST"`, `"^OMX"`).
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct ExternalSymbol(Arc<str>);

impl ExternalSymbol {
    pub fn new(symbol: impl Into<Arc<str>>) -> Self {
        Self(symbol.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ExternalSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for ExternalSymbol {
    fn from(value: String) -> Self {
        Self(Arc::from(value))
    }
}

impl From<ExternalSymbol> for String {
    fn from(value: ExternalSymbol) -> Self {
        value.0.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticker_trims_outer_whitespace_only() {
        let ticker = Ticker::new("  VOLV B ");
        assert_eq!(ticker.as_str(), "VOLV B");
    }

    #[test]
    fn test_ticker_serializes_as_plain_string() {
        let ticker = Ticker::from("SEB A");
        assert_eq!(serde_json::to_string(&ticker).unwrap(), "\"SEB A\"");
    }

    #[test]
    fn test_external_symbol_display() {
        let symbol = ExternalSymbol::new("VOLV-B.ST");
        assert_eq!(symbol.to_string(), "VOLV-B.ST");
    }
}
