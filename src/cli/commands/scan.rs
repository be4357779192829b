//! One-shot screening pass command.

use anyhow::Result;
use chrono::{NaiveDate, Utc};
use screener_config::load_config;
use screener_core::traits::DataSource;
use screener_core::types::SymbolOutcome;
use screener_data::CsvDataSource;
use screener_engine::{PassResult, Screener};
use std::path::Path;
use std::sync::Arc;

use crate::cli::ScanArgs;

pub async fn run(args: ScanArgs, config_path: &Path) -> Result<()> {
    let config = load_config(config_path)?;

    let data: Arc<dyn DataSource> = match &args.data {
        Some(dir) => Arc::new(CsvDataSource::new(dir)?),
        None => super::build_data_source(&config.data)?,
    };

    let universe = if args.symbols.is_empty() {
        super::resolve_universe(&config, data.as_ref()).await?
    } else {
        args.symbols.clone()
    };

    let as_of = match &args.as_of {
        Some(text) => NaiveDate::parse_from_str(text, "%Y-%m-%d")?,
        None => Utc::now().date_naive(),
    };

    let screener = Screener::new(data, config.screen.clone());
    let result = screener.run_pass(&universe, as_of).await;

    match args.output.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&result.qualifying)?),
        _ => print_text(&result),
    }

    Ok(())
}

fn print_text(result: &PassResult) {
    println!(
        "Screening pass {} as of {}",
        result.summary.id, result.summary.as_of
    );
    println!(
        "Scanned {} symbols, {} qualified, {} excluded ({:.1}s)",
        result.summary.scanned,
        result.summary.qualified,
        result.summary.excluded,
        result.summary.duration_secs
    );
    println!();

    for outcome in &result.outcomes {
        match outcome {
            SymbolOutcome::Qualified(s) => {
                println!(
                    "  {:<8} QUALIFIED  price {:.2}  rsi {:.1}  p/ema20 {:+.2}%  ema20/50 {:+.2}%  turnover {:.1}B",
                    s.symbol,
                    s.price,
                    s.rsi,
                    s.price_vs_ema20_pct,
                    s.ema20_vs_ema50_pct,
                    s.avg_turnover20 / 1e9
                );
            }
            SymbolOutcome::Excluded { symbol, reason } => {
                println!("  {:<8} excluded   {}", symbol, reason);
            }
        }
    }
}
