//! Screening pass: per-symbol data acquisition, indicator computation,
//! and qualification.

use crate::filter::ScreenCriteria;
use chrono::{Duration as ChronoDuration, NaiveDate};
use screener_core::traits::{DataSource, Indicator};
use screener_core::types::{
    Bar, BarSeries, ExclusionReason, MetricSnapshot, QualifyingSet, SymbolOutcome,
};
use screener_indicators::{trailing_turnover_mean, Ema, Rsi};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};
use uuid::Uuid;

const RSI_PERIOD: usize = 14;
const EMA_FAST_PERIOD: usize = 20;
const EMA_SLOW_PERIOD: usize = 50;
const TURNOVER_WINDOW: usize = 20;

/// Screening pass settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenSettings {
    pub criteria: ScreenCriteria,
    /// Calendar days of history requested per symbol.
    pub lookback_days: i64,
    /// Bars required before a symbol is evaluated (EMA50 stability).
    pub min_bars: usize,
    /// Minimum delay between per-symbol fetches, for provider rate limits.
    pub pace_ms: u64,
}

impl Default for ScreenSettings {
    fn default() -> Self {
        Self {
            criteria: ScreenCriteria::default(),
            lookback_days: 90,
            min_bars: 50,
            pace_ms: 500,
        }
    }
}

/// Counters for one completed pass.
#[derive(Debug, Clone)]
pub struct PassSummary {
    pub id: Uuid,
    pub as_of: NaiveDate,
    pub scanned: usize,
    pub qualified: usize,
    pub excluded: usize,
    pub duration_secs: f64,
}

/// Everything one pass produced.
#[derive(Debug)]
pub struct PassResult {
    pub qualifying: QualifyingSet,
    pub outcomes: Vec<SymbolOutcome>,
    pub summary: PassSummary,
}

/// Runs the screening pass over a symbol universe.
pub struct Screener {
    data: Arc<dyn DataSource>,
    settings: ScreenSettings,
}

impl Screener {
    pub fn new(data: Arc<dyn DataSource>, settings: ScreenSettings) -> Self {
        Self { data, settings }
    }

    /// Screen the universe sequentially, in input order.
    ///
    /// Every symbol yields an explicit [`SymbolOutcome`]; acquisition or
    /// computation failures exclude that symbol only and never abort the
    /// pass.
    pub async fn run_pass(&self, universe: &[String], as_of: NaiveDate) -> PassResult {
        let id = Uuid::new_v4();
        let started = Instant::now();
        let start = as_of - ChronoDuration::days(self.settings.lookback_days);
        let pace = Duration::from_millis(self.settings.pace_ms);

        info!(pass_id = %id, symbols = universe.len(), %as_of, "starting screening pass");

        let mut qualifying = QualifyingSet::new();
        let mut outcomes = Vec::with_capacity(universe.len());

        for symbol in universe {
            let outcome = self.screen_symbol(symbol, start, as_of).await;
            match &outcome {
                SymbolOutcome::Qualified(snapshot) => {
                    info!(symbol = %snapshot.symbol, rsi = snapshot.rsi, "symbol qualified");
                    qualifying.insert(snapshot.clone());
                }
                SymbolOutcome::Excluded {
                    symbol,
                    reason: reason @ ExclusionReason::FetchFailed { .. },
                } => {
                    warn!(%symbol, %reason, "symbol excluded");
                }
                SymbolOutcome::Excluded { symbol, reason } => {
                    debug!(%symbol, %reason, "symbol excluded");
                }
            }
            outcomes.push(outcome);

            if !pace.is_zero() {
                tokio::time::sleep(pace).await;
            }
        }

        let summary = PassSummary {
            id,
            as_of,
            scanned: universe.len(),
            qualified: qualifying.len(),
            excluded: universe.len() - qualifying.len(),
            duration_secs: started.elapsed().as_secs_f64(),
        };
        info!(
            pass_id = %id,
            qualified = summary.qualified,
            excluded = summary.excluded,
            duration_secs = summary.duration_secs,
            "screening pass complete"
        );

        PassResult {
            qualifying,
            outcomes,
            summary,
        }
    }

    async fn screen_symbol(&self, symbol: &str, start: NaiveDate, end: NaiveDate) -> SymbolOutcome {
        match self.data.fetch_history(symbol, start, end).await {
            Ok(bars) => evaluate_bars(symbol, &bars, &self.settings),
            Err(e) => SymbolOutcome::Excluded {
                symbol: symbol.to_string(),
                reason: ExclusionReason::FetchFailed {
                    message: e.to_string(),
                },
            },
        }
    }
}

/// Evaluate one symbol's bars against the filter. Pure.
pub fn evaluate_bars(symbol: &str, bars: &[Bar], settings: &ScreenSettings) -> SymbolOutcome {
    let excluded = |reason| SymbolOutcome::Excluded {
        symbol: symbol.to_string(),
        reason,
    };

    if bars.len() < settings.min_bars {
        return excluded(ExclusionReason::InsufficientHistory {
            available: bars.len(),
        });
    }

    let series = BarSeries::new(symbol, bars.to_vec());
    let Some(latest) = series.last().copied() else {
        return excluded(ExclusionReason::InsufficientHistory { available: 0 });
    };
    let closes = series.closes();

    let Some(rsi) = last_value(&Rsi::new(RSI_PERIOD), &closes) else {
        return excluded(ExclusionReason::MissingMetric { metric: "rsi" });
    };
    let Some(ema20) = last_value(&Ema::new(EMA_FAST_PERIOD), &closes) else {
        return excluded(ExclusionReason::MissingMetric { metric: "ema20" });
    };
    let Some(ema50) = last_value(&Ema::new(EMA_SLOW_PERIOD), &closes) else {
        return excluded(ExclusionReason::MissingMetric { metric: "ema50" });
    };
    let Some(avg_turnover) = trailing_turnover_mean(series.bars(), TURNOVER_WINDOW) else {
        return excluded(ExclusionReason::MissingMetric {
            metric: "avg_turnover20",
        });
    };

    let price = latest.close;
    let price_vs_ema20_pct = (price - ema20) / ema20 * 100.0;
    let ema20_vs_ema50_pct = (ema20 - ema50) / ema50 * 100.0;

    let snapshot = MetricSnapshot::new(
        symbol,
        price,
        rsi,
        ema20,
        ema50,
        avg_turnover,
        price_vs_ema20_pct,
        ema20_vs_ema50_pct,
    );

    if settings.criteria.qualifies(&snapshot) {
        SymbolOutcome::Qualified(snapshot)
    } else {
        excluded(ExclusionReason::FailedFilter)
    }
}

fn last_value<I: Indicator<Output = f64>>(indicator: &I, data: &[f64]) -> Option<f64> {
    indicator.calculate(data).last().copied().flatten()
}
