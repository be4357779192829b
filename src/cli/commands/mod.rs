//! CLI command implementations.

pub mod run;
pub mod scan;
pub mod validate;

use anyhow::{bail, Result};
use screener_config::{DataConfig, ScreenerConfig};
use screener_core::traits::DataSource;
use screener_data::{CsvDataSource, RestDataSource};
use std::sync::Arc;

/// Build the configured market data source.
pub(crate) fn build_data_source(data: &DataConfig) -> Result<Arc<dyn DataSource>> {
    if let Some(dir) = &data.csv_dir {
        return Ok(Arc::new(CsvDataSource::new(dir)?));
    }
    if let Some(base_url) = &data.base_url {
        return Ok(Arc::new(RestDataSource::new(base_url.clone())?));
    }
    bail!("no data source configured, set data.base_url or data.csv_dir");
}

/// The configured universe, or the data source's listing when none is set.
pub(crate) async fn resolve_universe(
    config: &ScreenerConfig,
    data: &dyn DataSource,
) -> Result<Vec<String>> {
    if !config.universe.is_empty() {
        return Ok(config.universe.clone());
    }
    let symbols = data.list_symbols().await?;
    if symbols.is_empty() {
        bail!(
            "universe is empty, configure [universe] or use a data source with a symbol listing"
        );
    }
    Ok(symbols)
}
