//! Telegram Bot API delivery.

use async_trait::async_trait;
use reqwest::Client;
use screener_core::error::NotifyError;
use screener_core::traits::Messenger;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{info, warn};

const TELEGRAM_API_BASE: &str = "https://api.telegram.org";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const MAX_ATTEMPTS: u32 = 3;

#[derive(Debug, Serialize)]
struct SendMessageRequest<'a> {
    chat_id: &'a str,
    text: &'a str,
    parse_mode: &'a str,
}

#[derive(Debug, Deserialize)]
struct SendMessageResponse {
    ok: bool,
    description: Option<String>,
}

/// Messenger that posts HTML-formatted text to a Telegram chat.
pub struct TelegramNotifier {
    client: Client,
    base_url: String,
    token: String,
    chat_id: String,
}

impl TelegramNotifier {
    pub fn new(token: impl Into<String>, chat_id: impl Into<String>) -> Result<Self, NotifyError> {
        Self::with_base_url(TELEGRAM_API_BASE, token, chat_id)
    }

    /// Point at a non-default API host. Used by tests.
    pub fn with_base_url(
        base_url: impl Into<String>,
        token: impl Into<String>,
        chat_id: impl Into<String>,
    ) -> Result<Self, NotifyError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| NotifyError::Connection(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: token.into(),
            chat_id: chat_id.into(),
        })
    }

    async fn try_send(&self, text: &str) -> Result<(), NotifyError> {
        let url = format!("{}/bot{}/sendMessage", self.base_url, self.token);
        let request = SendMessageRequest {
            chat_id: &self.chat_id,
            text,
            parse_mode: "HTML",
        };

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| NotifyError::Connection(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(NotifyError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body: SendMessageResponse = response
            .json()
            .await
            .map_err(|e| NotifyError::Delivery(e.to_string()))?;
        if body.ok {
            Ok(())
        } else {
            Err(NotifyError::Delivery(
                body.description.unwrap_or_else(|| "unknown error".into()),
            ))
        }
    }
}

#[async_trait]
impl Messenger for TelegramNotifier {
    async fn send(&self, text: &str) -> Result<(), NotifyError> {
        let mut last_error = None;

        for attempt in 1..=MAX_ATTEMPTS {
            match self.try_send(text).await {
                Ok(()) => {
                    info!(chat_id = %self.chat_id, "notification delivered");
                    return Ok(());
                }
                Err(e) => {
                    warn!(attempt, max_attempts = MAX_ATTEMPTS, error = %e, "delivery attempt failed");
                    last_error = Some(e);
                    if attempt < MAX_ATTEMPTS {
                        tokio::time::sleep(Duration::from_millis(500 * u64::from(attempt))).await;
                    }
                }
            }
        }

        Err(last_error.unwrap_or_else(|| NotifyError::Delivery("unknown error".into())))
    }

    fn name(&self) -> &str {
        "telegram"
    }
}

/// Credential-absent fallback: logs the message and reports success, so
/// the screening cycle sees exactly the same contract as real delivery.
pub struct LogMessenger;

#[async_trait]
impl Messenger for LogMessenger {
    async fn send(&self, text: &str) -> Result<(), NotifyError> {
        info!("notification (not delivered, no credentials):\n{}", text);
        Ok(())
    }

    fn name(&self) -> &str {
        "log"
    }
}
