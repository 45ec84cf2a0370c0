//! Named coercions from loose upstream values to output fields.
//!
//! Every place an absent or out-of-range upstream value becomes a default
//! goes through one of these functions.

use chrono::{DateTime, NaiveDate};

/// Snapshot price; absent means zero.
pub fn snapshot_price_or_zero(value: Option<f64>) -> f64 {
    finite(value).unwrap_or(0.0)
}

/// Snapshot percent change; absent means zero.
pub fn snapshot_change_pct_or_zero(value: Option<f64>) -> f64 {
    finite(value).unwrap_or(0.0)
}

/// Snapshot volume; absent or negative means zero.
pub fn snapshot_volume_or_zero(value: Option<f64>) -> u64 {
    bar_volume(value).unwrap_or(0)
}

/// Bar price; absent stays absent.
pub fn bar_price(value: Option<f64>) -> Option<f64> {
    finite(value)
}

/// Bar volume, rounded to a whole share count.
pub fn bar_volume(value: Option<f64>) -> Option<u64> {
    finite(value)
        .filter(|v| *v >= 0.0)
        .map(|v| v.round() as u64)
}

/// Unix seconds to a UTC calendar date.
pub fn timestamp_to_date(seconds: i64) -> Option<NaiveDate> {
    DateTime::from_timestamp(seconds, 0).map(|dt| dt.date_naive())
}

fn finite(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}
