use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Current price reading for an instrument.
///
/// Every field is zero when the provider omits it.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct QuoteSnapshot {
    /// Last regular-market price
    pub price: f64,

    /// Percent change as reported by the provider
    pub change_pct: f64,

    /// Regular-market volume
    pub volume: u64,
}

/// One daily OHLCV bar.
///
/// `close` is always resolved; bars without one never leave the normalizer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoricalBar {
    /// UTC calendar date of the bar
    pub date: NaiveDate,
    pub open: Option<f64>,
    pub high: Option<f64>,
    pub low: Option<f64>,
    /// Adjusted close when available, raw close otherwise
    pub close: f64,
    pub volume: Option<u64>,
}

/// Daily bar series, ascending by date without duplicates.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct HistorySeries {
    pub data: Vec<HistoricalBar>,
}

impl HistorySeries {
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Next scheduled earnings disclosure, if any is known.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EarningsEvent {
    pub earnings_date: Option<NaiveDate>,
}
