//! CLI definitions.

pub mod commands;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "screener")]
#[command(author, version, about = "Periodic stock screener with Telegram change alerts")]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: PathBuf,

    /// Log level
    #[arg(short, long, default_value = "info")]
    pub log_level: LogLevel,

    /// Enable JSON log format
    #[arg(long)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the periodic screening loop
    Run,
    /// Run a single screening pass and print the results
    Scan(ScanArgs),
    /// Validate configuration
    ValidateConfig,
}

#[derive(clap::Args)]
pub struct ScanArgs {
    /// Symbols to screen (comma-separated), overriding the configured universe
    #[arg(short = 'S', long, value_delimiter = ',')]
    pub symbols: Vec<String>,

    /// Directory of per-symbol CSV files, overriding the configured source
    #[arg(long)]
    pub data: Option<PathBuf>,

    /// Screen as of this date (YYYY-MM-DD, default today)
    #[arg(long)]
    pub as_of: Option<String>,

    /// Output format (text, json)
    #[arg(long, default_value = "text")]
    pub output: String,
}
