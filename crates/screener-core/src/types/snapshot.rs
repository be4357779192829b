//! Screening result types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Round to 2 decimal places for display and persistence consistency.
#[inline]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Metrics derived for one security from the tail of its bar sequence.
///
/// All numeric fields are rounded to 2 decimal places at construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricSnapshot {
    pub symbol: String,
    /// Latest closing price
    pub price: f64,
    /// RSI(14) at the latest bar
    pub rsi: f64,
    pub ema20: f64,
    pub ema50: f64,
    /// Mean turnover over the most recent 20 bars
    pub avg_turnover20: f64,
    /// (price − ema20) / ema20 × 100
    pub price_vs_ema20_pct: f64,
    /// (ema20 − ema50) / ema50 × 100
    pub ema20_vs_ema50_pct: f64,
}

impl MetricSnapshot {
    /// Build a snapshot with every numeric field rounded to 2 decimals.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        symbol: impl Into<String>,
        price: f64,
        rsi: f64,
        ema20: f64,
        ema50: f64,
        avg_turnover20: f64,
        price_vs_ema20_pct: f64,
        ema20_vs_ema50_pct: f64,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            price: round2(price),
            rsi: round2(rsi),
            ema20: round2(ema20),
            ema50: round2(ema50),
            avg_turnover20: round2(avg_turnover20),
            price_vs_ema20_pct: round2(price_vs_ema20_pct),
            ema20_vs_ema50_pct: round2(ema20_vs_ema50_pct),
        }
    }
}

/// The set of securities passing the filter in one cycle, keyed by symbol.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QualifyingSet {
    snapshots: Vec<MetricSnapshot>,
}

impl QualifyingSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a snapshot, replacing any previous entry for the same symbol.
    pub fn insert(&mut self, snapshot: MetricSnapshot) {
        if let Some(existing) = self
            .snapshots
            .iter_mut()
            .find(|s| s.symbol == snapshot.symbol)
        {
            *existing = snapshot;
        } else {
            self.snapshots.push(snapshot);
        }
    }

    pub fn contains_symbol(&self, symbol: &str) -> bool {
        self.snapshots.iter().any(|s| s.symbol == symbol)
    }

    /// The symbols in this set, ordered for reproducible iteration.
    pub fn symbols(&self) -> BTreeSet<String> {
        self.snapshots.iter().map(|s| s.symbol.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MetricSnapshot> {
        self.snapshots.iter()
    }
}

impl FromIterator<MetricSnapshot> for QualifyingSet {
    fn from_iter<T: IntoIterator<Item = MetricSnapshot>>(iter: T) -> Self {
        let mut set = Self::new();
        for snapshot in iter {
            set.insert(snapshot);
        }
        set
    }
}

/// The persisted record of the most recent cycle. Exactly one instance
/// exists at any time; it is fully replaced at the end of every cycle.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScreeningState {
    pub qualifying: QualifyingSet,
    /// None before the first completed cycle.
    pub last_update: Option<DateTime<Utc>>,
}

impl ScreeningState {
    pub fn new(qualifying: QualifyingSet, last_update: DateTime<Utc>) -> Self {
        Self {
            qualifying,
            last_update: Some(last_update),
        }
    }
}

/// Set differences between the current and previous qualifying sets.
/// Computed once per cycle and discarded after notification.
#[derive(Debug, Clone, PartialEq)]
pub struct ChangeReport {
    pub current: QualifyingSet,
    /// Current snapshots whose symbol was absent from the previous set.
    pub newcomers: Vec<MetricSnapshot>,
    /// Previous snapshots whose symbol is absent from the current set.
    pub dropouts: Vec<MetricSnapshot>,
}

impl ChangeReport {
    pub fn has_changes(&self) -> bool {
        !self.newcomers.is_empty() || !self.dropouts.is_empty()
    }
}

/// Why a symbol was excluded from the current cycle.
#[derive(Debug, Clone, PartialEq)]
pub enum ExclusionReason {
    /// Fewer bars than needed to stabilize the slow EMA.
    InsufficientHistory { available: usize },
    /// An indicator was undefined at the latest bar (e.g. zero-loss RSI).
    MissingMetric { metric: &'static str },
    /// The snapshot was computed but did not pass the filter.
    FailedFilter,
    /// Data acquisition failed.
    FetchFailed { message: String },
}

impl std::fmt::Display for ExclusionReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InsufficientHistory { available } => {
                write!(f, "insufficient history ({} bars)", available)
            }
            Self::MissingMetric { metric } => write!(f, "undefined metric: {}", metric),
            Self::FailedFilter => write!(f, "failed filter"),
            Self::FetchFailed { message } => write!(f, "fetch failed: {}", message),
        }
    }
}

/// Explicit per-symbol result of one screening step.
///
/// Every failure mode maps to an exclusion; the screening pass never
/// branches on errors.
#[derive(Debug, Clone, PartialEq)]
pub enum SymbolOutcome {
    Qualified(MetricSnapshot),
    Excluded {
        symbol: String,
        reason: ExclusionReason,
    },
}

impl SymbolOutcome {
    pub fn symbol(&self) -> &str {
        match self {
            Self::Qualified(snapshot) => &snapshot.symbol,
            Self::Excluded { symbol, .. } => symbol,
        }
    }

    pub fn is_qualified(&self) -> bool {
        matches!(self, Self::Qualified(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(symbol: &str) -> MetricSnapshot {
        MetricSnapshot::new(symbol, 100.0, 60.0, 99.0, 97.0, 25e9, 1.0, 2.0)
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(1.005), 1.01);
        assert_eq!(round2(23456.78912), 23456.79);
        assert_eq!(round2(-0.004), -0.0);
    }

    #[test]
    fn test_snapshot_rounds_fields() {
        let s = MetricSnapshot::new("AAA", 100.123, 55.678, 99.999, 98.001, 2.5e10, 1.239, 3.001);
        assert_eq!(s.price, 100.12);
        assert_eq!(s.rsi, 55.68);
        assert_eq!(s.price_vs_ema20_pct, 1.24);
    }

    #[test]
    fn test_qualifying_set_symbol_unique() {
        let mut set = QualifyingSet::new();
        set.insert(snapshot("AAA"));
        set.insert(snapshot("BBB"));
        set.insert(snapshot("AAA"));
        assert_eq!(set.len(), 2);
        assert!(set.contains_symbol("AAA"));
        assert!(set.contains_symbol("BBB"));
    }

    #[test]
    fn test_state_serde_shape() {
        let state = ScreeningState::new(
            [snapshot("AAA")].into_iter().collect(),
            "2025-06-01T12:00:00Z".parse().unwrap(),
        );
        let json = serde_json::to_string(&state).unwrap();
        // qualifying serializes as a plain array, timestamp as ISO-8601
        assert!(json.contains("\"qualifying\":[{"));
        assert!(json.contains("2025-06-01T12:00:00Z"));

        let back: ScreeningState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }
}
