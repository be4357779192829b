//! Configuration management.

mod settings;

pub use settings::{
    AppSettings, DataConfig, LoggingConfig, ScreenerConfig, StateConfig, TelegramConfig,
    TelegramCredentials,
};

use config::{Config, ConfigError, Environment, File};
use std::path::Path;

/// Load configuration from file and environment. The file is optional;
/// a missing file yields defaults, and `SCREENER__`-prefixed environment
/// variables override either.
pub fn load_config(path: &Path) -> Result<ScreenerConfig, ConfigError> {
    let config = Config::builder()
        .add_source(File::from(path).required(false))
        .add_source(
            Environment::with_prefix("SCREENER")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    config.try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_yields_defaults() {
        let config = load_config(Path::new("/nonexistent/screener.toml")).unwrap();
        assert_eq!(config.app.name, "stock-screener");
        assert_eq!(config.schedule.interval_secs, 4 * 60 * 60);
        assert_eq!(config.state.path, "stock_state.json");
        assert!(config.universe.is_empty());
    }

    #[test]
    fn test_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        write!(
            file,
            r#"
universe = ["AAA", "BBB"]

[schedule]
interval_secs = 600

[screen.criteria]
min_rsi = 55.0

[data]
base_url = "http://localhost:9000"
"#
        )
        .unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.universe, vec!["AAA", "BBB"]);
        assert_eq!(config.schedule.interval_secs, 600);
        assert_eq!(config.screen.criteria.min_rsi, 55.0);
        assert_eq!(config.data.base_url.as_deref(), Some("http://localhost:9000"));
        // Untouched sections keep their defaults.
        assert_eq!(config.schedule.tick_secs, 60);
        assert_eq!(config.screen.min_bars, 50);
    }

    #[test]
    fn test_default_config_round_trips_through_toml() {
        let config = ScreenerConfig::default();
        let text = toml::to_string(&config).unwrap();
        let back: ScreenerConfig = toml::from_str(&text).unwrap();
        assert_eq!(back.screen.lookback_days, config.screen.lookback_days);
        assert_eq!(back.telegram.token_env, "TELEGRAM_BOT_TOKEN");
    }

    #[test]
    fn test_telegram_resolve_requires_both_vars() {
        let telegram = TelegramConfig {
            token_env: "SCREENER_TEST_TOKEN_A".to_string(),
            chat_id_env: "SCREENER_TEST_CHAT_A".to_string(),
        };
        assert!(telegram.resolve().is_none());

        std::env::set_var("SCREENER_TEST_TOKEN_A", "tok");
        assert!(telegram.resolve().is_none());

        std::env::set_var("SCREENER_TEST_CHAT_A", "42");
        let creds = telegram.resolve().unwrap();
        assert_eq!(creds.token, "tok");
        assert_eq!(creds.chat_id, "42");

        std::env::remove_var("SCREENER_TEST_TOKEN_A");
        std::env::remove_var("SCREENER_TEST_CHAT_A");
    }
}
