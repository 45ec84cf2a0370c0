//! Lookback window selection.
//!
//! Maps a query kind and a requested day count onto one of the provider's
//! [`RangeToken`] windows. History queries get the smallest window that
//! covers the request; snapshot and earnings queries always get the
//! shortest window.

use tracing::debug;

use crate::errors::MarketDataError;
use crate::models::{QueryKind, RangeToken};

/// Default history thresholds: `(max days, window)`, ascending.
pub const DEFAULT_HISTORY_THRESHOLDS: &[(u32, RangeToken)] = &[
    (90, RangeToken::ThreeMonths),
    (180, RangeToken::SixMonths),
    (365, RangeToken::OneYear),
    (730, RangeToken::TwoYears),
    (1826, RangeToken::FiveYears),
    (3652, RangeToken::TenYears),
];

/// Threshold table used for history queries.
///
/// A request for `days` picks the first threshold with `days <= max_days`;
/// past the last threshold it picks `fallback`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RangePolicy {
    thresholds: Vec<(u32, RangeToken)>,
    fallback: RangeToken,
}

impl RangePolicy {
    /// Build a validated policy.
    ///
    /// Thresholds must be strictly ascending in both day count and window,
    /// every window must cover its own threshold, and `fallback` must be
    /// larger than every listed window.
    pub fn new(
        thresholds: Vec<(u32, RangeToken)>,
        fallback: RangeToken,
    ) -> Result<Self, MarketDataError> {
        for (days, token) in &thresholds {
            if token.coverage_days() < *days {
                return Err(MarketDataError::InvalidPolicy {
                    message: format!(
                        "window {} covers {} days, less than its threshold {}",
                        token,
                        token.coverage_days(),
                        days
                    ),
                });
            }
        }

        for pair in thresholds.windows(2) {
            let ((d1, t1), (d2, t2)) = (pair[0], pair[1]);
            if d1 >= d2 || t1 >= t2 {
                return Err(MarketDataError::InvalidPolicy {
                    message: format!(
                        "thresholds must ascend: ({}, {}) then ({}, {})",
                        d1, t1, d2, t2
                    ),
                });
            }
        }

        if let Some((_, last)) = thresholds.last() {
            if fallback <= *last {
                return Err(MarketDataError::InvalidPolicy {
                    message: format!("fallback {} must be larger than {}", fallback, last),
                });
            }
        }

        Ok(Self {
            thresholds,
            fallback,
        })
    }

    pub fn thresholds(&self) -> &[(u32, RangeToken)] {
        &self.thresholds
    }

    pub fn fallback(&self) -> RangeToken {
        self.fallback
    }

    /// Smallest configured window that covers `days`.
    pub fn window_for(&self, days: i64) -> RangeToken {
        self.thresholds
            .iter()
            .find(|(max_days, _)| days <= i64::from(*max_days))
            .map(|(_, token)| *token)
            .unwrap_or(self.fallback)
    }
}

impl Default for RangePolicy {
    fn default() -> Self {
        Self {
            thresholds: DEFAULT_HISTORY_THRESHOLDS.to_vec(),
            fallback: RangeToken::largest(),
        }
    }
}

/// Chooses the provider window for a request.
#[derive(Clone, Debug, Default)]
pub struct RangeSelector {
    policy: RangePolicy,
}

impl RangeSelector {
    pub fn new(policy: RangePolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &RangePolicy {
        &self.policy
    }

    /// Pick the window for `kind` and a requested day count.
    ///
    /// `days` only matters for history queries. Zero or negative counts
    /// select the first threshold.
    pub fn select(&self, kind: QueryKind, days: i64) -> RangeToken {
        let token = match kind {
            QueryKind::Price | QueryKind::Earnings => RangeToken::shortest(),
            QueryKind::History => self.policy.window_for(days),
        };
        debug!("Selected range {} for {} query ({} days)", token, kind, days);
        token
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_and_earnings_use_shortest() {
        let selector = RangeSelector::default();
        for days in [-5, 0, 30, 365, 10_000] {
            assert_eq!(selector.select(QueryKind::Price, days), RangeToken::OneDay);
            assert_eq!(
                selector.select(QueryKind::Earnings, days),
                RangeToken::OneDay
            );
        }
    }

    #[test]
    fn test_history_buckets() {
        let selector = RangeSelector::default();
        assert_eq!(
            selector.select(QueryKind::History, 1),
            RangeToken::ThreeMonths
        );
        assert_eq!(
            selector.select(QueryKind::History, 90),
            RangeToken::ThreeMonths
        );
        assert_eq!(
            selector.select(QueryKind::History, 91),
            RangeToken::SixMonths
        );
        assert_eq!(
            selector.select(QueryKind::History, 180),
            RangeToken::SixMonths
        );
        assert_eq!(
            selector.select(QueryKind::History, 365),
            RangeToken::OneYear
        );
        assert_eq!(
            selector.select(QueryKind::History, 366),
            RangeToken::TwoYears
        );
        assert_eq!(
            selector.select(QueryKind::History, 100_000),
            RangeToken::Max
        );
    }

    #[test]
    fn test_two_hundred_days_picks_one_year_not_six_months() {
        let selector = RangeSelector::default();
        assert_eq!(
            selector.select(QueryKind::History, 200),
            RangeToken::OneYear
        );
    }

    #[test]
    fn test_non_positive_days_pick_first_bucket() {
        let selector = RangeSelector::default();
        assert_eq!(
            selector.select(QueryKind::History, 0),
            RangeToken::ThreeMonths
        );
        assert_eq!(
            selector.select(QueryKind::History, -30),
            RangeToken::ThreeMonths
        );
    }

    #[test]
    fn test_history_selection_is_monotonic_and_covering() {
        let selector = RangeSelector::default();
        let mut previous = RangeToken::shortest();

        for days in 1..=5000_i64 {
            let token = selector.select(QueryKind::History, days);
            assert!(token >= previous, "window shrank at {} days", days);
            assert!(
                i64::from(token.coverage_days()) >= days,
                "{} does not cover {} days",
                token,
                days
            );
            previous = token;
        }
    }

    #[test]
    fn test_custom_policy() {
        let policy = RangePolicy::new(
            vec![(28, RangeToken::OneMonth), (365, RangeToken::OneYear)],
            RangeToken::FiveYears,
        )
        .unwrap();
        let selector = RangeSelector::new(policy);

        assert_eq!(selector.select(QueryKind::History, 20), RangeToken::OneMonth);
        assert_eq!(selector.select(QueryKind::History, 200), RangeToken::OneYear);
        assert_eq!(
            selector.select(QueryKind::History, 400),
            RangeToken::FiveYears
        );
    }

    #[test]
    fn test_policy_rejects_undersized_window() {
        let result = RangePolicy::new(vec![(200, RangeToken::SixMonths)], RangeToken::Max);
        assert!(matches!(result, Err(MarketDataError::InvalidPolicy { .. })));
    }

    #[test]
    fn test_policy_rejects_unordered_thresholds() {
        let result = RangePolicy::new(
            vec![(180, RangeToken::SixMonths), (90, RangeToken::ThreeMonths)],
            RangeToken::Max,
        );
        assert!(matches!(result, Err(MarketDataError::InvalidPolicy { .. })));
    }

    #[test]
    fn test_policy_rejects_small_fallback() {
        let result = RangePolicy::new(vec![(365, RangeToken::OneYear)], RangeToken::SixMonths);
        assert!(matches!(result, Err(MarketDataError::InvalidPolicy { .. })));
    }

    #[test]
    fn test_default_policy_passes_validation() {
        let validated = RangePolicy::new(
            DEFAULT_HISTORY_THRESHOLDS.to_vec(),
            RangeToken::largest(),
        )
        .unwrap();
        assert_eq!(validated, RangePolicy::default());
    }
}
