use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Outbound side of a messaging bot.
#[async_trait]
pub trait BotTransport: Send + Sync {
    async fn send_message(&self, chat_id: &str, text: &str) -> Result<(), TelegramError>;
}

/// Body of a `sendMessage` call
#[derive(Debug, Clone, Serialize)]
pub struct SendMessageRequest<'a> {
    pub chat_id: &'a str,
    pub text: &'a str,
}

/// Envelope every Bot API response is wrapped in
#[derive(Debug, Clone, Deserialize)]
pub struct BotApiResponse {
    pub ok: bool,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub error_code: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TelegramError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Bot API error {status}: {description}")]
    Api { status: u16, description: String },
    #[error("Parse error: {0}")]
    Parse(String),
}
