//! Validate configuration command.

use anyhow::Result;
use screener_config::load_config;
use std::path::Path;

pub async fn run(config_path: &Path) -> Result<()> {
    println!("Validating configuration: {:?}", config_path);

    match load_config(config_path) {
        Ok(config) => {
            println!("Configuration is valid!");
            println!();
            println!("App: {}", config.app.name);
            println!("Environment: {}", config.app.environment);
            println!("Log level: {}", config.logging.level);
            match (&config.data.csv_dir, &config.data.base_url) {
                (Some(dir), _) => println!("Data source: csv ({})", dir),
                (None, Some(url)) => println!("Data source: rest ({})", url),
                (None, None) => println!("Data source: none configured"),
            }
            println!("Interval: {}s", config.schedule.interval_secs);
            println!("State file: {}", config.state.path);
            if config.universe.is_empty() {
                println!("Universe: from data source listing");
            } else {
                println!("Universe: {} symbols", config.universe.len());
            }
            let c = &config.screen.criteria;
            println!("Min turnover: {:.0}B", c.min_avg_turnover / 1e9);
            println!("Min RSI: {}", c.min_rsi);
            println!(
                "Price vs EMA20: {}..{}%",
                c.price_vs_ema20_min_pct, c.price_vs_ema20_max_pct
            );
            println!(
                "EMA20 vs EMA50: {}..{}%",
                c.ema20_vs_ema50_min_pct, c.ema20_vs_ema50_max_pct
            );
        }
        Err(e) => {
            println!("Configuration error: {}", e);
            return Err(e.into());
        }
    }

    Ok(())
}
