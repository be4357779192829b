//! Data source trait definition.

use crate::error::DataError;
use crate::types::Bar;
use async_trait::async_trait;
use chrono::NaiveDate;

/// Trait for historical market data providers.
///
/// The screening core treats this as an opaque capability: any failure
/// surfaces as an exclusion for the affected symbol, never as a crash.
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Fetch daily bars for a symbol over a calendar date range.
    ///
    /// # Returns
    /// A vector of bars ordered from oldest to newest.
    async fn fetch_history(
        &self,
        symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Bar>, DataError>;

    /// List the symbols this provider knows about.
    ///
    /// Used to resolve the screening universe at startup when none is
    /// configured; the core itself always receives the universe as input.
    async fn list_symbols(&self) -> Result<Vec<String>, DataError>;

    /// Get the data source name.
    fn name(&self) -> &str;
}
