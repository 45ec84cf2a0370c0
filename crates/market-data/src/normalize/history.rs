use tracing::warn;

use crate::models::{HistoricalBar, HistorySeries};
use crate::provider::yahoo::models::{YahooChartResponse, YahooQuoteArrays};

use super::coerce::{bar_price, bar_volume, timestamp_to_date};
use super::ClosePreference;

/// Bar series from the chart arrays. `None` when the chart has no result.
pub(crate) fn from_chart(
    doc: &YahooChartResponse,
    preference: ClosePreference,
) -> Option<HistorySeries> {
    let result = doc.chart.as_ref()?.result.as_ref()?.first()?;

    let timestamps = result.timestamp.as_deref().unwrap_or_default();
    let indicators = result.indicators.as_ref();
    let quote = indicators.and_then(|i| i.quote.first());
    let adjclose = indicators
        .and_then(|i| i.adjclose.as_ref())
        .and_then(|a| a.first())
        .and_then(|a| a.adjclose.as_deref());

    let mut data = Vec::with_capacity(timestamps.len());
    let mut dropped = 0usize;

    for (i, timestamp) in timestamps.iter().copied().enumerate() {
        let Some(date) = timestamp.and_then(timestamp_to_date) else {
            dropped += 1;
            continue;
        };

        let raw_close = bar_price(at(quote.and_then(|q| q.close.as_deref()), i));
        let adj_close = bar_price(at(adjclose, i));
        let Some(close) = resolve_close(adj_close, raw_close, preference) else {
            dropped += 1;
            continue;
        };

        data.push(HistoricalBar {
            date,
            open: bar_price(column(quote, i, |q| q.open.as_deref())),
            high: bar_price(column(quote, i, |q| q.high.as_deref())),
            low: bar_price(column(quote, i, |q| q.low.as_deref())),
            close,
            volume: bar_volume(column(quote, i, |q| q.volume.as_deref())),
        });
    }

    if dropped > 0 {
        warn!("Dropped {} of {} bars without a usable close", dropped, timestamps.len());
    }

    ensure_ascending(&mut data);
    Some(HistorySeries { data })
}

fn resolve_close(
    adjusted: Option<f64>,
    raw: Option<f64>,
    preference: ClosePreference,
) -> Option<f64> {
    match preference {
        ClosePreference::PreferAdjusted => adjusted.or(raw),
        ClosePreference::RawOnly => raw,
    }
}

fn at(series: Option<&[Option<f64>]>, i: usize) -> Option<f64> {
    series.and_then(|s| s.get(i).copied().flatten())
}

fn column<'a>(
    quote: Option<&'a YahooQuoteArrays>,
    i: usize,
    pick: impl Fn(&'a YahooQuoteArrays) -> Option<&'a [Option<f64>]>,
) -> Option<f64> {
    at(quote.and_then(pick), i)
}

/// Leaves ordered input untouched; otherwise stable-sorts by date and keeps
/// the last bar seen for each date.
fn ensure_ascending(bars: &mut Vec<HistoricalBar>) {
    if bars.windows(2).all(|w| w[0].date < w[1].date) {
        return;
    }

    warn!("Upstream bars out of order or duplicated; sorting {}", bars.len());
    bars.sort_by_key(|bar| bar.date);

    let mut deduped: Vec<HistoricalBar> = Vec::with_capacity(bars.len());
    for bar in bars.drain(..) {
        match deduped.last_mut() {
            Some(last) if last.date == bar.date => *last = bar,
            _ => deduped.push(bar),
        }
    }
    *bars = deduped;
}
