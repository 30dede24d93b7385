// src/providers/practicum.rs

use log::debug;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::time::Instant;

use crate::config::PracticumConfig;
use crate::errors::{BotError, Result};
use crate::providers::ReviewApi;

/// Keys the review API uses to signal a failure inside a 200 answer.
const ERROR_KEYS: [&str; 2] = ["code", "error"];

/// A client for the homework review API.
pub struct PracticumClient {
    client: Client,
    config: PracticumConfig,
}

impl PracticumClient {
    /// Creates a new `PracticumClient`.
    pub fn new(client: Client, config: PracticumConfig) -> Self {
        Self { client, config }
    }
}

impl ReviewApi for PracticumClient {
    async fn homework_statuses(&self, from_date: i64) -> Result<Value> {
        debug!(
            "Requesting review API: {} with from_date={}",
            self.config.endpoint, from_date
        );

        let start = Instant::now();

        let resp = self
            .client
            .get(&self.config.endpoint)
            .header("Authorization", format!("OAuth {}", self.config.token))
            .query(&[("from_date", from_date)])
            .send()
            .await?;

        let status = resp.status();
        let latency_ms = start.elapsed().as_millis() as u64;

        debug!("Review API response status: {} ({}ms)", status, latency_ms);

        if status != StatusCode::OK {
            let error_body = resp
                .text()
                .await
                .unwrap_or_else(|_| "Could not read error body".to_string());
            return Err(BotError::ApiError {
                status: status.as_u16(),
                body: error_body,
            });
        }

        let body = resp.text().await?;
        let answer: Value = serde_json::from_str(&body)?;

        for key in ERROR_KEYS {
            if let Some(value) = answer.get(key) {
                return Err(BotError::ApiResponse(format!("{}: {}", key, value)));
            }
        }

        Ok(answer)
    }
}
