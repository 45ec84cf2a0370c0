use chrono::{DateTime, Utc};

use crate::models::EarningsEvent;
use crate::provider::yahoo::models::YahooQuoteSummaryResponse;

use super::coerce::timestamp_to_date;

/// Next earnings date at or after `now`. `None` when the summary has no result.
///
/// A result without a calendar, or with only past dates, yields an event with
/// no date.
pub(crate) fn from_summary(
    doc: &YahooQuoteSummaryResponse,
    now: DateTime<Utc>,
) -> Option<EarningsEvent> {
    let result = doc.quote_summary.as_ref()?.result.as_ref()?.first()?;
    let now = now.timestamp();

    let next = result
        .calendar_events
        .as_ref()
        .and_then(|c| c.earnings.as_ref())
        .into_iter()
        .flat_map(|e| e.earnings_date.iter())
        .filter_map(|d| d.raw)
        .filter(|raw| *raw >= now)
        .min();

    Some(EarningsEvent {
        earnings_date: next.and_then(timestamp_to_date),
    })
}
