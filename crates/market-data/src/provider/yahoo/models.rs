//! Yahoo Finance API response models.
//!
//! Two endpoint families are modelled:
//! - chart (`/v8/finance/chart`): parallel OHLCV arrays plus a `meta` block
//! - quoteSummary (`/v11/finance/quoteSummary`): nested modules, here `price`
//!   and `calendarEvents`
//!
//! Every field is optional. Yahoo drops keys and sends `null` or `{}` freely,
//! and absence is handled by the normalizer, not by deserialization. A type
//! mismatch still fails to deserialize.

use serde::Deserialize;

// ============================================================================
// Chart endpoint
// ============================================================================

/// Main response wrapper for chart API
#[derive(Debug, Default, Deserialize)]
pub struct YahooChartResponse {
    pub chart: Option<YahooChart>,
}

/// Chart container
#[derive(Debug, Default, Deserialize)]
pub struct YahooChart {
    pub result: Option<Vec<YahooChartResult>>,
    // Note: error field exists in API; a missing result is what we act on
}

/// Individual result from chart API
#[derive(Debug, Default, Deserialize)]
pub struct YahooChartResult {
    pub meta: Option<YahooChartMeta>,
    /// Unix seconds, one per bar
    pub timestamp: Option<Vec<Option<i64>>>,
    pub indicators: Option<YahooIndicators>,
}

/// Snapshot fields carried in the chart `meta` block
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YahooChartMeta {
    pub currency: Option<String>,
    pub symbol: Option<String>,
    pub regular_market_price: Option<f64>,
    pub regular_market_change_percent: Option<f64>,
    pub regular_market_volume: Option<f64>,
}

/// Indicator arrays, positionally aligned with `timestamp`
#[derive(Debug, Default, Deserialize)]
pub struct YahooIndicators {
    #[serde(default)]
    pub quote: Vec<YahooQuoteArrays>,
    pub adjclose: Option<Vec<YahooAdjClose>>,
}

/// Raw OHLCV arrays; entries are `null` where Yahoo has no value
#[derive(Debug, Default, Deserialize)]
pub struct YahooQuoteArrays {
    pub open: Option<Vec<Option<f64>>>,
    pub high: Option<Vec<Option<f64>>>,
    pub low: Option<Vec<Option<f64>>>,
    pub close: Option<Vec<Option<f64>>>,
    pub volume: Option<Vec<Option<f64>>>,
}

/// Dividend/split adjusted close array
#[derive(Debug, Default, Deserialize)]
pub struct YahooAdjClose {
    pub adjclose: Option<Vec<Option<f64>>>,
}

// ============================================================================
// quoteSummary endpoint
// ============================================================================

/// Main response wrapper for quoteSummary API
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YahooQuoteSummaryResponse {
    pub quote_summary: Option<YahooQuoteSummary>,
}

/// Quote summary container
#[derive(Debug, Default, Deserialize)]
pub struct YahooQuoteSummary {
    pub result: Option<Vec<YahooQuoteSummaryResult>>,
}

/// Individual result from quoteSummary API
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YahooQuoteSummaryResult {
    pub price: Option<YahooPriceData>,
    pub calendar_events: Option<YahooCalendarEvents>,
}

/// Price module from quoteSummary API
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YahooPriceData {
    pub currency: Option<String>,
    pub regular_market_price: Option<YahooPriceDetail>,
    pub regular_market_change_percent: Option<YahooPriceDetail>,
    pub regular_market_volume: Option<YahooPriceDetail>,
}

/// Price detail with raw and formatted values
#[derive(Debug, Default, Deserialize, Clone)]
pub struct YahooPriceDetail {
    pub raw: Option<f64>,
    // Note: fmt field exists but we only use raw values
}

/// calendarEvents module
#[derive(Debug, Default, Deserialize)]
pub struct YahooCalendarEvents {
    pub earnings: Option<YahooEarningsCalendar>,
}

/// Earnings section of calendarEvents
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YahooEarningsCalendar {
    /// Estimated or confirmed report dates; may include past ones
    #[serde(default)]
    pub earnings_date: Vec<YahooDateDetail>,
}

/// Date detail: Unix seconds in `raw`, display string in `fmt`
#[derive(Debug, Default, Deserialize, Clone)]
pub struct YahooDateDetail {
    pub raw: Option<i64>,
    pub fmt: Option<String>,
}
