// src/errors.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BotError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to open log file: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API request failed with status {status}: {body}")]
    ApiError { status: u16, body: String },

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("API returned an error: {0}")]
    ApiResponse(String),

    #[error("Wrong response: {0}")]
    WrongResponse(String),

    #[error("Record '{record}' is missing keys: {keys}")]
    MissingKeys { record: String, keys: String },

    #[error("Unexpected homework status: {0}")]
    UnknownStatus(String),

    #[error("Failed to send message '{message}': {reason}")]
    SendMessage { message: String, reason: String },
}

impl BotError {
    /// Delivery failures are never relayed through the messenger themselves.
    pub fn is_delivery_failure(&self) -> bool {
        matches!(self, BotError::SendMessage { .. })
    }
}

pub type Result<T> = std::result::Result<T, BotError>;
