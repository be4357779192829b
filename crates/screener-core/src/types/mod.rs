//! Core data types for the screener.

mod bar;
mod snapshot;

pub use bar::{Bar, BarSeries};
pub use snapshot::{
    round2, ChangeReport, ExclusionReason, MetricSnapshot, QualifyingSet, ScreeningState,
    SymbolOutcome,
};
