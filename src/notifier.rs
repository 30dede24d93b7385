// src/notifier.rs
use log::{debug, error, info};

use crate::errors::Result;
use crate::providers::Messenger;

/// Delivers notifications to the one configured chat.
pub struct Notifier<M> {
    messenger: M,
    chat_id: String,
}

impl<M: Messenger> Notifier<M> {
    pub fn new(messenger: M, chat_id: impl Into<String>) -> Self {
        Self {
            messenger,
            chat_id: chat_id.into(),
        }
    }

    pub fn chat_id(&self) -> &str {
        &self.chat_id
    }

    /// Sends one message. Failures are logged and handed back to the caller;
    /// no retry happens here.
    pub async fn send(&self, text: &str) -> Result<()> {
        debug!("Sending message to chat {}", self.chat_id);
        match self.messenger.send_message(&self.chat_id, text).await {
            Ok(()) => {
                info!("Message sent: {}", text);
                Ok(())
            }
            Err(e) => {
                error!("Message delivery failed: {}", e);
                Err(e)
            }
        }
    }
}
