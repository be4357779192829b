//! Message delivery trait definition.

use crate::error::NotifyError;
use async_trait::async_trait;

/// Trait for outbound message delivery.
///
/// Delivery failures are reported, not thrown through the screening core:
/// the cycle logs them and proceeds to persist state regardless.
#[async_trait]
pub trait Messenger: Send + Sync {
    /// Deliver a single text message.
    async fn send(&self, text: &str) -> Result<(), NotifyError>;

    /// Get the messenger name.
    fn name(&self) -> &str;
}
