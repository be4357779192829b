//! Moving average indicators.

use screener_core::traits::Indicator;

/// Exponential Moving Average (EMA).
///
/// Smoothing factor α = 2/(period+1), seeded by the first available price
/// rather than an SMA window, so the output is defined at every position
/// of a non-empty input.
#[derive(Debug, Clone)]
pub struct Ema {
    period: usize,
    multiplier: f64,
}

impl Ema {
    /// Create a new EMA with the specified period.
    pub fn new(period: usize) -> Self {
        assert!(period > 0, "Period must be greater than 0");
        let multiplier = 2.0 / (period as f64 + 1.0);
        Self { period, multiplier }
    }
}

impl Indicator for Ema {
    type Output = f64;

    fn calculate(&self, data: &[f64]) -> Vec<Option<f64>> {
        let Some(&first) = data.first() else {
            return vec![];
        };

        let mut result = Vec::with_capacity(data.len());
        let one_minus_mult = 1.0 - self.multiplier;

        let mut ema = first;
        result.push(Some(ema));
        for &price in &data[1..] {
            ema = price * self.multiplier + ema * one_minus_mult;
            result.push(Some(ema));
        }

        result
    }

    fn period(&self) -> usize {
        1
    }

    fn name(&self) -> &str {
        "EMA"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ema_empty_input() {
        let ema = Ema::new(20);
        assert!(ema.calculate(&[]).is_empty());
    }

    #[test]
    fn test_ema_seeded_by_first_price() {
        let ema = Ema::new(20);
        let result = ema.calculate(&[42.0]);
        assert_eq!(result, vec![Some(42.0)]);
    }

    #[test]
    fn test_ema_defined_everywhere() {
        let ema = Ema::new(10);
        let data: Vec<f64> = (0..30).map(|i| 100.0 + i as f64).collect();
        let result = ema.calculate(&data);

        assert_eq!(result.len(), data.len());
        assert!(result.iter().all(|v| v.is_some()));
    }

    #[test]
    fn test_ema_recurrence() {
        let ema = Ema::new(3); // alpha = 0.5
        let result = ema.calculate(&[10.0, 20.0, 20.0]);

        assert_eq!(result[0], Some(10.0));
        assert_eq!(result[1], Some(15.0));
        assert_eq!(result[2], Some(17.5));
    }

    #[test]
    fn test_ema_tracks_constant_series() {
        let ema = Ema::new(20);
        let data = vec![50.0; 40];
        let last = ema.calculate(&data).last().unwrap().unwrap();
        assert!((last - 50.0).abs() < 1e-10);
    }
}
