//! Momentum indicators.

use screener_core::traits::Indicator;

/// Relative Strength Index (RSI).
///
/// Rolling-mean variant: average gain and average loss are simple means
/// over a trailing window of `period` price deltas, then
/// `RSI = 100 − 100/(1 + gain/loss)`.
///
/// A window with zero average loss leaves RSI undefined (`None`). The
/// screener excludes such symbols from qualification rather than pinning
/// the value to 100.
#[derive(Debug, Clone)]
pub struct Rsi {
    period: usize,
}

impl Rsi {
    /// Create a new RSI indicator. The common period is 14.
    pub fn new(period: usize) -> Self {
        assert!(period > 0, "Period must be greater than 0");
        Self { period }
    }
}

impl Indicator for Rsi {
    type Output = f64;

    fn calculate(&self, data: &[f64]) -> Vec<Option<f64>> {
        let mut result = vec![None; data.len()];
        if data.len() < self.period + 1 {
            return result;
        }

        // Split per-step deltas into gains and loss magnitudes.
        let mut gains = Vec::with_capacity(data.len() - 1);
        let mut losses = Vec::with_capacity(data.len() - 1);
        for i in 1..data.len() {
            let change = data[i] - data[i - 1];
            if change > 0.0 {
                gains.push(change);
                losses.push(0.0);
            } else {
                gains.push(0.0);
                losses.push(-change);
            }
        }

        let period_f64 = self.period as f64;
        for i in self.period..data.len() {
            // Window of deltas ending at price position i.
            let window = (i - self.period)..i;
            let avg_gain: f64 = gains[window.clone()].iter().sum::<f64>() / period_f64;
            let avg_loss: f64 = losses[window].iter().sum::<f64>() / period_f64;

            result[i] = if avg_loss == 0.0 {
                None
            } else {
                let rs = avg_gain / avg_loss;
                Some(100.0 - (100.0 / (1.0 + rs)))
            };
        }

        result
    }

    fn period(&self) -> usize {
        self.period + 1 // need period deltas, so period+1 prices
    }

    fn name(&self) -> &str {
        "RSI"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rsi_short_input_all_undefined() {
        let rsi = Rsi::new(14);
        let data = vec![100.0; 10];
        let result = rsi.calculate(&data);

        assert_eq!(result.len(), 10);
        assert!(result.iter().all(|v| v.is_none()));
    }

    #[test]
    fn test_rsi_alignment() {
        let rsi = Rsi::new(5);
        let data: Vec<f64> = (0..12)
            .map(|i| 100.0 + (i as f64 * 0.7).sin() * 3.0)
            .collect();
        let result = rsi.calculate(&data);

        assert_eq!(result.len(), data.len());
        // Undefined until `period` deltas are available, defined after.
        assert!(result[..5].iter().all(|v| v.is_none()));
        assert!(result[5..].iter().all(|v| v.is_some()));
    }

    #[test]
    fn test_rsi_within_bounds() {
        let rsi = Rsi::new(14);
        let data: Vec<f64> = (0..60)
            .map(|i| 100.0 + (i as f64 * 0.5).sin() * 5.0)
            .collect();

        for value in rsi.calculate(&data).into_iter().flatten() {
            assert!((0.0..=100.0).contains(&value));
        }
    }

    #[test]
    fn test_rsi_zero_loss_window_undefined() {
        let rsi = Rsi::new(5);
        // Monotonically increasing: every window is all-gain.
        let data: Vec<f64> = (0..10).map(|i| 100.0 + i as f64).collect();
        let result = rsi.calculate(&data);

        assert!(result.iter().all(|v| v.is_none()));
    }

    #[test]
    fn test_rsi_all_losses_is_zero() {
        let rsi = Rsi::new(5);
        let data: Vec<f64> = (0..10).map(|i| 100.0 - i as f64).collect();
        let result = rsi.calculate(&data);

        let last = result.last().unwrap().unwrap();
        assert!(last.abs() < 1e-10);
    }

    #[test]
    fn test_rsi_mostly_gains_approaches_100() {
        let rsi = Rsi::new(14);
        // Strong uptrend with one small dip inside the final window so
        // the loss average stays defined but negligible.
        let mut data: Vec<f64> = (0..40).map(|i| 100.0 + i as f64).collect();
        data[35] -= 1.2;

        let last = rsi.calculate(&data).last().unwrap().unwrap();
        assert!(last > 90.0);
        assert!(last <= 100.0);
    }
}
