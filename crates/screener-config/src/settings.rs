//! Configuration structures.

use screener_engine::{ScheduleSettings, ScreenSettings};
use serde::{Deserialize, Serialize};

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ScreenerConfig {
    #[serde(default)]
    pub app: AppSettings,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub telegram: TelegramConfig,
    #[serde(default)]
    pub screen: ScreenSettings,
    #[serde(default)]
    pub schedule: ScheduleSettings,
    #[serde(default)]
    pub state: StateConfig,
    /// Symbols to screen. Empty means ask the data source for its listing.
    #[serde(default)]
    pub universe: Vec<String>,
}

/// General app settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    pub name: String,
    pub environment: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            name: "stock-screener".to_string(),
            environment: "development".to_string(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
    pub file: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
            file: None,
        }
    }
}

/// Market data source configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DataConfig {
    /// Base URL of the history REST service.
    pub base_url: Option<String>,
    /// Directory of per-symbol CSV files, used instead of the REST
    /// service when set.
    pub csv_dir: Option<String>,
}

/// Telegram credential configuration. Secrets stay in the environment;
/// the file only names the variables to read.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelegramConfig {
    pub token_env: String,
    pub chat_id_env: String,
}

impl Default for TelegramConfig {
    fn default() -> Self {
        Self {
            token_env: "TELEGRAM_BOT_TOKEN".to_string(),
            chat_id_env: "TELEGRAM_CHAT_ID".to_string(),
        }
    }
}

impl TelegramConfig {
    /// Read the credentials from the environment. None when either
    /// variable is unset or empty.
    pub fn resolve(&self) -> Option<TelegramCredentials> {
        let token = std::env::var(&self.token_env).ok().filter(|v| !v.is_empty())?;
        let chat_id = std::env::var(&self.chat_id_env)
            .ok()
            .filter(|v| !v.is_empty())?;
        Some(TelegramCredentials { token, chat_id })
    }
}

#[derive(Debug, Clone)]
pub struct TelegramCredentials {
    pub token: String,
    pub chat_id: String,
}

/// Where the qualifying-set record lives between cycles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateConfig {
    pub path: String,
}

impl Default for StateConfig {
    fn default() -> Self {
        Self {
            path: "stock_state.json".to_string(),
        }
    }
}
