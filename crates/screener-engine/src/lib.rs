//! Screening engine: qualification filter, screening pass, change
//! detection, state persistence, and the cycle scheduler.

pub mod detector;
pub mod filter;
pub mod scheduler;
pub mod screening;
pub mod state;

pub use detector::{diff, ChangeDetector};
pub use filter::ScreenCriteria;
pub use scheduler::{ScheduleSettings, Scheduler};
pub use screening::{PassResult, PassSummary, ScreenSettings, Screener};
pub use state::JsonStateStore;
