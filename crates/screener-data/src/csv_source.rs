//! CSV directory data source.
//!
//! Reads one `SYMBOL.csv` file per symbol from a directory. Used for
//! offline scans and tests; the record layout matches common OHLCV
//! exports.

use async_trait::async_trait;
use chrono::NaiveDate;
use csv::ReaderBuilder;
use screener_core::error::DataError;
use screener_core::traits::DataSource;
use screener_core::types::Bar;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// CSV record format.
#[derive(Debug, Deserialize)]
struct CsvRecord {
    #[serde(alias = "Date", alias = "date", alias = "time")]
    date: String,
    #[serde(alias = "Open", alias = "open")]
    open: f64,
    #[serde(alias = "High", alias = "high")]
    high: f64,
    #[serde(alias = "Low", alias = "low")]
    low: f64,
    #[serde(alias = "Close", alias = "close")]
    close: f64,
    #[serde(alias = "Volume", alias = "volume", default)]
    volume: f64,
}

/// Directory-of-CSV-files data source.
pub struct CsvDataSource {
    dir: PathBuf,
}

impl CsvDataSource {
    /// Create a source rooted at `dir`.
    pub fn new(dir: impl AsRef<Path>) -> Result<Self, DataError> {
        let dir = dir.as_ref().to_path_buf();
        if !dir.is_dir() {
            return Err(DataError::Internal(format!(
                "not a directory: {}",
                dir.display()
            )));
        }
        Ok(Self { dir })
    }

    fn symbol_path(&self, symbol: &str) -> PathBuf {
        self.dir.join(format!("{}.csv", symbol))
    }

    fn parse_date(date_str: &str) -> Result<NaiveDate, DataError> {
        for format in ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"] {
            if let Ok(d) = NaiveDate::parse_from_str(date_str, format) {
                return Ok(d);
            }
        }
        Err(DataError::ParseError(format!(
            "could not parse date: {}",
            date_str
        )))
    }

    fn load_file(&self, path: &Path) -> Result<Vec<(NaiveDate, Bar)>, DataError> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(path)
            .map_err(|e| DataError::ParseError(e.to_string()))?;

        let mut bars = Vec::new();
        for result in reader.deserialize() {
            let record: CsvRecord = result.map_err(|e| DataError::ParseError(e.to_string()))?;
            let date = Self::parse_date(&record.date)?;
            let timestamp = date
                .and_time(chrono::NaiveTime::MIN)
                .and_utc()
                .timestamp_millis();

            bars.push((
                date,
                Bar::new(
                    timestamp,
                    record.open,
                    record.high,
                    record.low,
                    record.close,
                    record.volume,
                ),
            ));
        }

        bars.sort_by_key(|(_, b)| b.timestamp);
        Ok(bars)
    }
}

#[async_trait]
impl DataSource for CsvDataSource {
    async fn fetch_history(
        &self,
        symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Bar>, DataError> {
        let path = self.symbol_path(symbol);
        if !path.exists() {
            return Err(DataError::SymbolNotFound(symbol.to_string()));
        }

        let bars = self
            .load_file(&path)?
            .into_iter()
            .filter(|(date, _)| *date >= start && *date <= end)
            .map(|(_, bar)| bar)
            .collect();
        Ok(bars)
    }

    async fn list_symbols(&self) -> Result<Vec<String>, DataError> {
        let mut symbols = Vec::new();
        let entries = std::fs::read_dir(&self.dir).map_err(|e| {
            DataError::Internal(format!("cannot read {}: {}", self.dir.display(), e))
        })?;

        for entry in entries {
            let entry = entry.map_err(|e| DataError::Internal(e.to_string()))?;
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "csv") {
                if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                    symbols.push(stem.to_string());
                }
            }
        }

        symbols.sort();
        Ok(symbols)
    }

    fn name(&self) -> &str {
        "csv"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(dir: &Path, symbol: &str, rows: &[&str]) {
        let mut file = std::fs::File::create(dir.join(format!("{}.csv", symbol))).unwrap();
        writeln!(file, "date,open,high,low,close,volume").unwrap();
        for row in rows {
            writeln!(file, "{}", row).unwrap();
        }
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[tokio::test]
    async fn test_fetch_filters_date_range() {
        let dir = tempfile::tempdir().unwrap();
        write_csv(
            dir.path(),
            "AAA",
            &[
                "2025-01-02,10,11,9,10.5,1000",
                "2025-02-03,11,12,10,11.5,1100",
                "2025-03-04,12,13,11,12.5,1200",
            ],
        );

        let source = CsvDataSource::new(dir.path()).unwrap();
        let bars = source
            .fetch_history("AAA", date("2025-02-01"), date("2025-03-31"))
            .await
            .unwrap();

        assert_eq!(bars.len(), 2);
        assert_eq!(bars[0].close, 11.5);
    }

    #[tokio::test]
    async fn test_missing_symbol() {
        let dir = tempfile::tempdir().unwrap();
        let source = CsvDataSource::new(dir.path()).unwrap();
        let err = source
            .fetch_history("NOPE", date("2025-01-01"), date("2025-12-31"))
            .await
            .unwrap_err();
        assert!(matches!(err, DataError::SymbolNotFound(_)));
    }

    #[tokio::test]
    async fn test_list_symbols_from_files() {
        let dir = tempfile::tempdir().unwrap();
        write_csv(dir.path(), "BBB", &["2025-01-02,1,1,1,1,1"]);
        write_csv(dir.path(), "AAA", &["2025-01-02,1,1,1,1,1"]);

        let source = CsvDataSource::new(dir.path()).unwrap();
        assert_eq!(source.list_symbols().await.unwrap(), vec!["AAA", "BBB"]);
    }
}
