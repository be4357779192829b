//! Periodic screening loop command.

use anyhow::Result;
use chrono::Utc;
use screener_config::load_config;
use screener_core::traits::Messenger;
use screener_engine::{ChangeDetector, JsonStateStore, Scheduler, Screener};
use screener_notify::{LogMessenger, TelegramNotifier};
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

pub async fn run(config_path: &Path) -> Result<()> {
    let config = load_config(config_path)?;

    let data = super::build_data_source(&config.data)?;
    let universe = Arc::new(super::resolve_universe(&config, data.as_ref()).await?);

    let messenger: Arc<dyn Messenger> = match config.telegram.resolve() {
        Some(creds) => Arc::new(TelegramNotifier::new(creds.token, creds.chat_id)?),
        None => {
            warn!(
                token_env = %config.telegram.token_env,
                chat_id_env = %config.telegram.chat_id_env,
                "Telegram credentials not set, notifications go to the log"
            );
            Arc::new(LogMessenger)
        }
    };

    let store = Arc::new(JsonStateStore::new(&config.state.path));
    let screener = Arc::new(Screener::new(data, config.screen.clone()));
    let detector = Arc::new(ChangeDetector::new(store, messenger));
    let scheduler = Scheduler::new(&config.schedule);

    info!(
        app = %config.app.name,
        symbols = universe.len(),
        interval_secs = config.schedule.interval_secs,
        state_path = %config.state.path,
        "starting screening loop"
    );

    scheduler
        .run(move || {
            let screener = screener.clone();
            let detector = detector.clone();
            let universe = universe.clone();
            async move {
                let now = Utc::now();
                let result = screener.run_pass(&universe, now.date_naive()).await;
                detector.run_cycle(result.qualifying, now).await;
            }
        })
        .await;

    Ok(())
}
