//! Turnover (close × volume) liquidity metrics.

use screener_core::types::Bar;

/// Mean turnover over the most recent `window` bars.
///
/// Returns `None` when fewer than `window` bars are available; the
/// screening pass already requires far more history than the turnover
/// window, so a `None` here only happens on malformed input.
pub fn trailing_turnover_mean(bars: &[Bar], window: usize) -> Option<f64> {
    if window == 0 || bars.len() < window {
        return None;
    }

    let sum: f64 = bars[bars.len() - window..]
        .iter()
        .map(|b| b.turnover())
        .sum();
    Some(sum / window as f64)
}
