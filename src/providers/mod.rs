// src/providers/mod.rs

use serde_json::Value;

use crate::errors::Result;

pub mod practicum;
pub mod telegram;

/// Source of homework review state.
///
/// Note: We're not using async_trait here, so implementers must handle async directly.
pub trait ReviewApi: Send + Sync {
    /// Fetches homework statuses updated at or after `from_date` (epoch seconds).
    ///
    /// # Returns
    /// The decoded JSON body. Transport failures, non-200 statuses and
    /// undecodable bodies are reported as distinct error kinds.
    fn homework_statuses(&self, from_date: i64) -> impl std::future::Future<Output = Result<Value>> + Send;
}

/// Outbound text messaging.
pub trait Messenger: Send + Sync {
    /// Sends `text` to the chat identified by `chat_id`.
    fn send_message(&self, chat_id: &str, text: &str) -> impl std::future::Future<Output = Result<()>> + Send;
}
