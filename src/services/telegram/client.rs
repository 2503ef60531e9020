use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use crate::services::telegram::{BotApiResponse, BotTransport, SendMessageRequest, TelegramError};

/// Telegram Bot API client
pub struct TelegramClient {
    client: Client,
    token: String,
    api_url: String,
}

impl TelegramClient {
    pub fn new(token: String, api_url: String, timeout: Duration) -> Self {
        Self {
            client: Client::builder()
                .timeout(timeout)
                .build()
                .unwrap_or_default(),
            token,
            api_url: api_url.trim_end_matches('/').to_string(),
        }
    }

    /// Use an already configured HTTP client.
    pub fn with_client(client: Client, token: String, api_url: String) -> Self {
        Self {
            client,
            token,
            api_url: api_url.trim_end_matches('/').to_string(),
        }
    }

    fn method_url(&self, method: &str) -> String {
        format!("{}/bot{}/{}", self.api_url, self.token, method)
    }
}

#[async_trait]
impl BotTransport for TelegramClient {
    async fn send_message(&self, chat_id: &str, text: &str) -> Result<(), TelegramError> {
        // reqwest puts the full URL, token included, into its errors
        let response = self
            .client
            .post(self.method_url("sendMessage"))
            .json(&SendMessageRequest { chat_id, text })
            .send()
            .await
            .map_err(|e| TelegramError::Network(e.without_url().to_string()))?;

        let status = response.status();
        let raw = response
            .text()
            .await
            .map_err(|e| TelegramError::Network(e.without_url().to_string()))?;

        let body: BotApiResponse = match serde_json::from_str(&raw) {
            Ok(body) => body,
            // Proxies and load balancers answer errors with HTML; keep the status.
            Err(_) if !status.is_success() => {
                return Err(TelegramError::Api {
                    status: status.as_u16(),
                    description: raw,
                })
            }
            Err(e) => return Err(TelegramError::Parse(e.to_string())),
        };

        if !status.is_success() || !body.ok {
            return Err(TelegramError::Api {
                status: status.as_u16(),
                description: body
                    .description
                    .unwrap_or_else(|| "no description".to_string()),
            });
        }

        Ok(())
    }
}
