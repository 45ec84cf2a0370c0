use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::instrument::Ticker;

/// Default lookback for history requests that don't name a day count.
pub const DEFAULT_HISTORY_DAYS: i64 = 365;

/// Kind of data a caller asks the gateway for.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryKind {
    /// Current price / change / volume snapshot.
    #[default]
    Price,
    /// Daily OHLCV bar series.
    History,
    /// Next scheduled earnings date.
    Earnings,
}

impl QueryKind {
    /// Parse the inbound `type` query value.
    ///
    /// Anything that is not `history` or `earnings` is a price query, including
    /// a missing or unknown value.
    pub fn from_param(param: Option<&str>) -> Self {
        match param.map(str::trim) {
            Some("history") => Self::History,
            Some("earnings") => Self::Earnings,
            _ => Self::Price,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Price => "price",
            Self::History => "history",
            Self::Earnings => "earnings",
        }
    }
}

impl fmt::Display for QueryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Provider-supported lookback windows, declared in ascending order of size.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RangeToken {
    #[serde(rename = "1d")]
    OneDay,
    #[serde(rename = "5d")]
    FiveDays,
    #[serde(rename = "1mo")]
    OneMonth,
    #[serde(rename = "3mo")]
    ThreeMonths,
    #[serde(rename = "6mo")]
    SixMonths,
    #[serde(rename = "1y")]
    OneYear,
    #[serde(rename = "2y")]
    TwoYears,
    #[serde(rename = "5y")]
    FiveYears,
    #[serde(rename = "10y")]
    TenYears,
    #[serde(rename = "max")]
    Max,
}

impl RangeToken {
    /// All tokens, smallest first.
    pub const ALL: [RangeToken; 10] = [
        Self::OneDay,
        Self::FiveDays,
        Self::OneMonth,
        Self::ThreeMonths,
        Self::SixMonths,
        Self::OneYear,
        Self::TwoYears,
        Self::FiveYears,
        Self::TenYears,
        Self::Max,
    ];

    /// Wire value used in the provider's `range` parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OneDay => "1d",
            Self::FiveDays => "5d",
            Self::OneMonth => "1mo",
            Self::ThreeMonths => "3mo",
            Self::SixMonths => "6mo",
            Self::OneYear => "1y",
            Self::TwoYears => "2y",
            Self::FiveYears => "5y",
            Self::TenYears => "10y",
            Self::Max => "max",
        }
    }

    /// Number of days the window is counted as covering when picking a range.
    ///
    /// Day-based windows are exact. Month and year windows use a nominal
    /// length: `3mo` counts as 90 days to match the history thresholds even
    /// though some three-month spans on the calendar are shorter.
    pub fn coverage_days(&self) -> u32 {
        match self {
            Self::OneDay => 1,
            Self::FiveDays => 5,
            Self::OneMonth => 28,
            Self::ThreeMonths => 90,
            Self::SixMonths => 181,
            Self::OneYear => 365,
            Self::TwoYears => 730,
            Self::FiveYears => 1826,
            Self::TenYears => 3652,
            Self::Max => u32::MAX,
        }
    }

    /// Shortest available window.
    pub fn shortest() -> Self {
        Self::ALL[0]
    }

    /// Largest available window.
    pub fn largest() -> Self {
        Self::ALL[Self::ALL.len() - 1]
    }
}

impl fmt::Display for RangeToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RangeToken {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|token| token.as_str() == s)
            .ok_or_else(|| format!("unknown range token: {}", s))
    }
}

/// Which upstream endpoint family backs snapshot queries.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SnapshotSource {
    /// `meta` block of the chart endpoint.
    #[default]
    Chart,
    /// `price` module of the quoteSummary endpoint.
    Summary,
}

impl FromStr for SnapshotSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "chart" => Ok(Self::Chart),
            "summary" => Ok(Self::Summary),
            other => Err(format!("unknown snapshot source: {}", other)),
        }
    }
}

/// One inbound gateway request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MarketRequest {
    pub ticker: Ticker,
    pub kind: QueryKind,
    /// Requested lookback in days; only meaningful for history queries.
    pub days: i64,
    /// Return the upstream payload verbatim instead of normalizing it.
    pub debug: bool,
}

impl MarketRequest {
    pub fn new(ticker: impl Into<Ticker>, kind: QueryKind) -> Self {
        Self {
            ticker: ticker.into(),
            kind,
            days: DEFAULT_HISTORY_DAYS,
            debug: false,
        }
    }

    pub fn with_days(mut self, days: i64) -> Self {
        self.days = days;
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}
