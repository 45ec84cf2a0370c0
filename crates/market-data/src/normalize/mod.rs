//! Conversion of upstream payloads into output records.
//!
//! Normalization is pure: the same payload (and, for earnings, the same
//! instant) always yields the same result. A payload whose result node is
//! absent or empty becomes [`MarketDataError::NoData`] carrying the payload.

pub mod coerce;
mod earnings;
mod history;
mod snapshot;

use chrono::{DateTime, Utc};

use crate::errors::MarketDataError;
use crate::models::{EarningsEvent, HistorySeries, QuoteSnapshot};
use crate::provider::yahoo::YAHOO_PROVIDER_ID;
use crate::provider::{PayloadFamily, RawPayload, UpstreamDocument};

/// Which close a history bar reports.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ClosePreference {
    /// Adjusted close when present at that index, raw close otherwise.
    #[default]
    PreferAdjusted,
    /// Always the raw close.
    RawOnly,
}

/// Turns [`RawPayload`]s into snapshots, bar series and earnings events.
#[derive(Clone, Copy, Debug, Default)]
pub struct ResponseNormalizer {
    close_preference: ClosePreference,
}

impl ResponseNormalizer {
    pub fn new(close_preference: ClosePreference) -> Self {
        Self { close_preference }
    }

    pub fn close_preference(&self) -> ClosePreference {
        self.close_preference
    }

    pub fn snapshot(&self, payload: &RawPayload) -> Result<QuoteSnapshot, MarketDataError> {
        let snapshot = match payload.document() {
            UpstreamDocument::Chart(doc) => snapshot::from_chart(doc),
            UpstreamDocument::Summary(doc) => snapshot::from_summary(doc),
        };
        snapshot.ok_or_else(|| payload.no_data())
    }

    pub fn history(&self, payload: &RawPayload) -> Result<HistorySeries, MarketDataError> {
        match payload.document() {
            UpstreamDocument::Chart(doc) => {
                history::from_chart(doc, self.close_preference).ok_or_else(|| payload.no_data())
            }
            UpstreamDocument::Summary(_) => Err(unexpected_family(PayloadFamily::Chart, payload)),
        }
    }

    pub fn earnings(
        &self,
        payload: &RawPayload,
        now: DateTime<Utc>,
    ) -> Result<EarningsEvent, MarketDataError> {
        match payload.document() {
            UpstreamDocument::Summary(doc) => {
                earnings::from_summary(doc, now).ok_or_else(|| payload.no_data())
            }
            UpstreamDocument::Chart(_) => Err(unexpected_family(PayloadFamily::Summary, payload)),
        }
    }
}

fn unexpected_family(expected: PayloadFamily, payload: &RawPayload) -> MarketDataError {
    MarketDataError::transport(
        YAHOO_PROVIDER_ID,
        format!(
            "Expected {:?} payload, got {:?}",
            expected,
            payload.family()
        ),
    )
}
