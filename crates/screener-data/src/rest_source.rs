//! REST/JSON daily-bar source.
//!
//! Speaks a small JSON protocol against a configurable base URL:
//! `GET {base}/history?symbol=&start=&end=&interval=1D` returns an array
//! of daily bar records, `GET {base}/symbols` returns the listed symbols.

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::{Client, StatusCode};
use screener_core::error::DataError;
use screener_core::traits::DataSource;
use screener_core::types::Bar;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Daily bar record on the wire.
#[derive(Debug, Deserialize)]
struct HistoryBar {
    date: String,
    open: f64,
    high: f64,
    low: f64,
    close: f64,
    #[serde(default)]
    volume: f64,
}

/// HTTP market data source.
pub struct RestDataSource {
    client: Client,
    base_url: String,
}

impl RestDataSource {
    /// Create a source against the given base URL.
    pub fn new(base_url: impl Into<String>) -> Result<Self, DataError> {
        let base_url = base_url.into();
        if base_url.is_empty() {
            return Err(DataError::ConnectionError(
                "data source base URL is not configured".into(),
            ));
        }

        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| DataError::ConnectionError(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn to_bar(record: &HistoryBar) -> Result<Bar, DataError> {
        let date = NaiveDate::parse_from_str(&record.date, "%Y-%m-%d")
            .map_err(|e| DataError::ParseError(format!("bad date '{}': {}", record.date, e)))?;
        let timestamp = date
            .and_time(chrono::NaiveTime::MIN)
            .and_utc()
            .timestamp_millis();

        Ok(Bar::new(
            timestamp,
            record.open,
            record.high,
            record.low,
            record.close,
            record.volume,
        ))
    }
}

#[async_trait]
impl DataSource for RestDataSource {
    async fn fetch_history(
        &self,
        symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Bar>, DataError> {
        let url = format!("{}/history", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("symbol", symbol),
                ("start", &start.format("%Y-%m-%d").to_string()),
                ("end", &end.format("%Y-%m-%d").to_string()),
                ("interval", "1D"),
            ])
            .send()
            .await
            .map_err(|e| DataError::ConnectionError(e.to_string()))?;

        match response.status() {
            StatusCode::NOT_FOUND => return Err(DataError::SymbolNotFound(symbol.to_string())),
            status if !status.is_success() => {
                let body = response.text().await.unwrap_or_default();
                return Err(DataError::Internal(format!("HTTP {}: {}", status, body)));
            }
            _ => {}
        }

        let records: Vec<HistoryBar> = response
            .json()
            .await
            .map_err(|e| DataError::ParseError(e.to_string()))?;

        let mut bars = records
            .iter()
            .map(Self::to_bar)
            .collect::<Result<Vec<_>, _>>()?;
        bars.sort_by_key(|b| b.timestamp);

        debug!(symbol, bars = bars.len(), "fetched history");
        Ok(bars)
    }

    async fn list_symbols(&self) -> Result<Vec<String>, DataError> {
        let url = format!("{}/symbols", self.base_url);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| DataError::ConnectionError(e.to_string()))?;

        if !response.status().is_success() {
            return Err(DataError::Internal(format!(
                "HTTP {} listing symbols",
                response.status()
            )));
        }

        let mut symbols: Vec<String> = response
            .json()
            .await
            .map_err(|e| DataError::ParseError(e.to_string()))?;
        symbols.sort();
        symbols.dedup();
        Ok(symbols)
    }

    fn name(&self) -> &str {
        "rest"
    }
}
