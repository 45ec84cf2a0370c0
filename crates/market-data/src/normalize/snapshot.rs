use crate::models::QuoteSnapshot;
use crate::provider::yahoo::models::{YahooChartResponse, YahooQuoteSummaryResponse};

use super::coerce::{snapshot_change_pct_or_zero, snapshot_price_or_zero, snapshot_volume_or_zero};

/// Snapshot from the chart `meta` block. `None` when the chart has no result.
pub(crate) fn from_chart(doc: &YahooChartResponse) -> Option<QuoteSnapshot> {
    let result = doc.chart.as_ref()?.result.as_ref()?.first()?;
    let meta = result.meta.as_ref();

    Some(QuoteSnapshot {
        price: snapshot_price_or_zero(meta.and_then(|m| m.regular_market_price)),
        change_pct: snapshot_change_pct_or_zero(
            meta.and_then(|m| m.regular_market_change_percent),
        ),
        volume: snapshot_volume_or_zero(meta.and_then(|m| m.regular_market_volume)),
    })
}

/// Snapshot from the summary `price` module. `None` when the summary has no result.
pub(crate) fn from_summary(doc: &YahooQuoteSummaryResponse) -> Option<QuoteSnapshot> {
    let result = doc.quote_summary.as_ref()?.result.as_ref()?.first()?;
    let price = result.price.as_ref();

    Some(QuoteSnapshot {
        price: snapshot_price_or_zero(
            price.and_then(|p| p.regular_market_price.as_ref()?.raw),
        ),
        change_pct: snapshot_change_pct_or_zero(
            price.and_then(|p| p.regular_market_change_percent.as_ref()?.raw),
        ),
        volume: snapshot_volume_or_zero(
            price.and_then(|p| p.regular_market_volume.as_ref()?.raw),
        ),
    })
}
