use std::sync::Arc;

use crate::services::telegram::BotTransport;

/// Delivers messages to one chat and never lets a delivery failure escape.
pub struct Notifier<T: BotTransport> {
    transport: Arc<T>,
    chat_id: String,
}

impl<T: BotTransport> Notifier<T> {
    pub fn new(transport: Arc<T>, chat_id: String) -> Self {
        Self { transport, chat_id }
    }

    /// Returns `true` only when the transport confirmed delivery.
    pub async fn notify(&self, message: &str) -> bool {
        match self.transport.send_message(&self.chat_id, message).await {
            Ok(()) => {
                tracing::info!("✅ Message \"{}\" sent", message);
                true
            }
            Err(e) => {
                tracing::error!("❌ Failed to send message \"{}\": {}", message, e);
                false
            }
        }
    }
}
