// src/providers/telegram.rs

use log::debug;
use reqwest::Client;
use serde::Serialize;

use crate::config::TelegramConfig;
use crate::errors::{BotError, Result};
use crate::providers::Messenger;

/// A client for the Telegram Bot HTTP API.
pub struct TelegramClient {
    client: Client,
    config: TelegramConfig,
}

#[derive(Serialize)]
struct SendMessageRequest<'a> {
    chat_id: &'a str,
    text: &'a str,
}

impl TelegramClient {
    /// Creates a new `TelegramClient`.
    pub fn new(client: Client, config: TelegramConfig) -> Self {
        Self { client, config }
    }

    fn method_url(&self, method: &str) -> String {
        format!(
            "{}/bot{}/{}",
            self.config.api_base.trim_end_matches('/'),
            self.config.token,
            method
        )
    }
}

impl Messenger for TelegramClient {
    async fn send_message(&self, chat_id: &str, text: &str) -> Result<()> {
        let url = self.method_url("sendMessage");
        let failed = |reason: String| BotError::SendMessage {
            message: text.to_string(),
            reason,
        };

        let resp = self
            .client
            .post(&url)
            .json(&SendMessageRequest { chat_id, text })
            .send()
            .await
            .map_err(|e| failed(e.to_string()))?;

        let status = resp.status();
        debug!("Telegram sendMessage status: {}", status);

        if !status.is_success() {
            let error_body = resp
                .text()
                .await
                .unwrap_or_else(|_| "Could not read error body".to_string());
            return Err(failed(format!("status {}: {}", status.as_u16(), error_body)));
        }

        Ok(())
    }
}
