//! Technical indicators for the screener.
//!
//! All indicators are pure functions over a read-only price series and
//! return a series aligned 1:1 with their input. Positions where the
//! indicator is undefined (insufficient lookback, or a degenerate window
//! such as zero-loss RSI) carry `None` instead of a sentinel value.

pub mod momentum;
pub mod moving_average;
pub mod turnover;

pub use momentum::Rsi;
pub use moving_average::Ema;
pub use turnover::trailing_turnover_mean;
