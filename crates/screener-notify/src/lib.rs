//! Notification formatting and delivery.
//!
//! Formatting is a pure function from a change report to message text;
//! delivery goes through the [`screener_core::traits::Messenger`] seam,
//! either to the Telegram Bot API or to the log when no credentials are
//! configured.

mod format;
mod telegram;

pub use format::format_report;
pub use telegram::{LogMessenger, TelegramNotifier};
