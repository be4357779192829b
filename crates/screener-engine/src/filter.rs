//! Qualification filter.

use screener_core::types::MetricSnapshot;
use serde::{Deserialize, Serialize};

/// Screening thresholds. Single point of truth: every qualification
/// decision in the system goes through [`ScreenCriteria::qualifies`].
///
/// Defaults encode the fixed production filter: liquid (20B+ average
/// turnover), momentum above neutral (RSI > 50), price within a tight
/// band above EMA20, and EMA20 within a moderate band above EMA50.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenCriteria {
    pub min_avg_turnover: f64,
    pub min_rsi: f64,
    pub price_vs_ema20_min_pct: f64,
    pub price_vs_ema20_max_pct: f64,
    pub ema20_vs_ema50_min_pct: f64,
    pub ema20_vs_ema50_max_pct: f64,
}

impl Default for ScreenCriteria {
    fn default() -> Self {
        Self {
            min_avg_turnover: 20_000_000_000.0,
            min_rsi: 50.0,
            price_vs_ema20_min_pct: 0.0,
            price_vs_ema20_max_pct: 5.0,
            ema20_vs_ema50_min_pct: 0.0,
            ema20_vs_ema50_max_pct: 7.0,
        }
    }
}

impl ScreenCriteria {
    /// Apply the filter to one snapshot. Pure; all conditions must hold.
    pub fn qualifies(&self, snapshot: &MetricSnapshot) -> bool {
        snapshot.avg_turnover20 > self.min_avg_turnover
            && snapshot.rsi > self.min_rsi
            && snapshot.price_vs_ema20_pct >= self.price_vs_ema20_min_pct
            && snapshot.price_vs_ema20_pct <= self.price_vs_ema20_max_pct
            && snapshot.ema20_vs_ema50_pct >= self.ema20_vs_ema50_min_pct
            && snapshot.ema20_vs_ema50_pct <= self.ema20_vs_ema50_max_pct
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn passing_snapshot() -> MetricSnapshot {
        MetricSnapshot::new("AAA", 102.0, 62.5, 101.0, 99.0, 25e9, 0.99, 2.02)
    }

    #[test]
    fn test_passing_snapshot_qualifies() {
        let criteria = ScreenCriteria::default();
        assert!(criteria.qualifies(&passing_snapshot()));
    }

    #[test]
    fn test_filter_is_pure() {
        let criteria = ScreenCriteria::default();
        let snapshot = passing_snapshot();
        assert_eq!(criteria.qualifies(&snapshot), criteria.qualifies(&snapshot));
    }

    #[test]
    fn test_turnover_threshold_is_strict() {
        let criteria = ScreenCriteria::default();
        let mut snapshot = passing_snapshot();
        snapshot.avg_turnover20 = 20_000_000_000.0;
        assert!(!criteria.qualifies(&snapshot));
    }

    #[test]
    fn test_rsi_threshold_is_strict() {
        let criteria = ScreenCriteria::default();
        let mut snapshot = passing_snapshot();
        snapshot.rsi = 50.0;
        assert!(!criteria.qualifies(&snapshot));
    }

    #[test]
    fn test_band_bounds_are_inclusive() {
        let criteria = ScreenCriteria::default();
        let mut snapshot = passing_snapshot();

        snapshot.price_vs_ema20_pct = 0.0;
        snapshot.ema20_vs_ema50_pct = 7.0;
        assert!(criteria.qualifies(&snapshot));

        snapshot.price_vs_ema20_pct = 5.0;
        snapshot.ema20_vs_ema50_pct = 0.0;
        assert!(criteria.qualifies(&snapshot));
    }

    #[test]
    fn test_extended_price_rejected() {
        let criteria = ScreenCriteria::default();
        let mut snapshot = passing_snapshot();
        snapshot.price_vs_ema20_pct = 5.01;
        assert!(!criteria.qualifies(&snapshot));
    }

    #[test]
    fn test_below_ema_rejected() {
        let criteria = ScreenCriteria::default();
        let mut snapshot = passing_snapshot();
        snapshot.price_vs_ema20_pct = -0.5;
        assert!(!criteria.qualifies(&snapshot));
    }
}
