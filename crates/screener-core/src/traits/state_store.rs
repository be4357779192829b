//! Persisted screening state trait definition.

use crate::error::StateError;
use crate::types::ScreeningState;
use async_trait::async_trait;

/// Trait for the single persisted screening record.
///
/// One writer (the change detector, at cycle end), one reader (the next
/// cycle's comparison). The record is always replaced whole.
#[async_trait]
pub trait StateStore: Send + Sync {
    /// Load the last persisted state.
    ///
    /// A store with no record yet returns the default (empty) state;
    /// an unreadable record is an error the caller degrades to empty.
    async fn load(&self) -> Result<ScreeningState, StateError>;

    /// Replace the persisted state with `state`.
    async fn save(&self, state: &ScreeningState) -> Result<(), StateError>;
}
