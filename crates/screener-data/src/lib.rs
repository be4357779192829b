//! Market data sources for the screener.

mod csv_source;
mod rest_source;

pub use csv_source::CsvDataSource;
pub use rest_source::RestDataSource;
