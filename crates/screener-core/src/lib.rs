//! Core types and traits for the stock screener.
//!
//! This crate provides the foundational building blocks including:
//! - Market data types (Bar, BarSeries)
//! - Screening result types (MetricSnapshot, QualifyingSet, ChangeReport)
//! - Core traits for indicators, data sources, messengers, and state stores

pub mod types;
pub mod traits;
pub mod error;

pub use error::{ScreenerError, ScreenerResult};
pub use types::*;
pub use traits::*;
