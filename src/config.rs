// src/config.rs
use std::path::PathBuf;
use std::time::Duration;

use crate::errors::{BotError, Result};

pub const PRACTICUM_TOKEN: &str = "PRACTICUM_TOKEN";
pub const TELEGRAM_TOKEN: &str = "TELEGRAM_TOKEN";
pub const TELEGRAM_CHAT_ID: &str = "TELEGRAM_CHAT_ID";

const DEFAULT_ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";
const DEFAULT_TELEGRAM_API_BASE: &str = "https://api.telegram.org";
const DEFAULT_RETRY_PERIOD_SECS: u64 = 600;
const DEFAULT_LOG_FILE: &str = "homework_bot.log";

/// Configuration for the homework review API.
#[derive(Debug, Clone)]
pub struct PracticumConfig {
    pub endpoint: String,
    pub token: String,
}

/// Configuration for the Telegram bot that relays notifications.
#[derive(Debug, Clone)]
pub struct TelegramConfig {
    pub api_base: String,
    pub token: String,
    pub chat_id: String,
}

/// High-level application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub practicum: PracticumConfig,
    pub telegram: TelegramConfig,
    pub retry_period: Duration,
    pub log_file: PathBuf,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    /// Empty values are treated the same as unset ones.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let required = [PRACTICUM_TOKEN, TELEGRAM_TOKEN, TELEGRAM_CHAT_ID];
        let missing: Vec<&str> = required
            .iter()
            .copied()
            .filter(|name| get(*name).is_none())
            .collect();
        if !missing.is_empty() {
            return Err(BotError::Config(format!(
                "Missing required environment variables: {}",
                missing.join(", ")
            )));
        }

        let practicum = PracticumConfig {
            endpoint: get("PRACTICUM_ENDPOINT").unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            token: get(PRACTICUM_TOKEN).unwrap_or_default(),
        };

        let telegram = TelegramConfig {
            api_base: get("TELEGRAM_API_BASE")
                .unwrap_or_else(|| DEFAULT_TELEGRAM_API_BASE.to_string()),
            token: get(TELEGRAM_TOKEN).unwrap_or_default(),
            chat_id: get(TELEGRAM_CHAT_ID).unwrap_or_default(),
        };

        let retry_period = match get("RETRY_PERIOD") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    return Err(BotError::Config(format!(
                        "RETRY_PERIOD must be a positive number of seconds, got '{}'",
                        raw
                    )));
                }
            },
            None => Duration::from_secs(DEFAULT_RETRY_PERIOD_SECS),
        };

        Ok(AppConfig {
            practicum,
            telegram,
            retry_period,
            log_file: log_file_from(&get),
        })
    }
}

/// Resolves the log file path from the environment. Needed before the rest
/// of the configuration so a config failure can still be written to the file.
pub fn log_file_from_env() -> PathBuf {
    log_file_from(&|name: &str| std::env::var(name).ok().filter(|v| !v.trim().is_empty()))
}

fn log_file_from(get: &dyn Fn(&str) -> Option<String>) -> PathBuf {
    PathBuf::from(get("LOG_FILE").unwrap_or_else(|| DEFAULT_LOG_FILE.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn test_defaults_applied() {
        let config = AppConfig::from_lookup(lookup(&[
            ("PRACTICUM_TOKEN", "p-token"),
            ("TELEGRAM_TOKEN", "t-token"),
            ("TELEGRAM_CHAT_ID", "42"),
        ]))
        .unwrap();

        assert_eq!(config.practicum.token, "p-token");
        assert_eq!(config.practicum.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.telegram.api_base, "https://api.telegram.org");
        assert_eq!(config.telegram.chat_id, "42");
        assert_eq!(config.retry_period, Duration::from_secs(600));
        assert_eq!(config.log_file, PathBuf::from("homework_bot.log"));
    }

    #[test]
    fn test_missing_chat_id_is_named() {
        let err = AppConfig::from_lookup(lookup(&[
            ("PRACTICUM_TOKEN", "p-token"),
            ("TELEGRAM_TOKEN", "t-token"),
        ]))
        .unwrap_err();

        match err {
            BotError::Config(msg) => {
                assert!(msg.contains("TELEGRAM_CHAT_ID"));
                assert!(!msg.contains("PRACTICUM_TOKEN"));
            }
            other => panic!("expected config error, got {other:?}"),
        }
    }

    #[test]
    fn test_all_missing_and_empty_values() {
        let err = AppConfig::from_lookup(lookup(&[("TELEGRAM_TOKEN", "  ")])).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Configuration error: Missing required environment variables: \
             PRACTICUM_TOKEN, TELEGRAM_TOKEN, TELEGRAM_CHAT_ID"
        );
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_lookup(lookup(&[
            ("PRACTICUM_TOKEN", "p"),
            ("TELEGRAM_TOKEN", "t"),
            ("TELEGRAM_CHAT_ID", "@channel"),
            ("PRACTICUM_ENDPOINT", "http://127.0.0.1:9000/statuses/"),
            ("TELEGRAM_API_BASE", "http://127.0.0.1:9001"),
            ("RETRY_PERIOD", "30"),
            ("LOG_FILE", "/tmp/bot.log"),
        ]))
        .unwrap();

        assert_eq!(config.practicum.endpoint, "http://127.0.0.1:9000/statuses/");
        assert_eq!(config.telegram.api_base, "http://127.0.0.1:9001");
        assert_eq!(config.retry_period, Duration::from_secs(30));
        assert_eq!(config.log_file, PathBuf::from("/tmp/bot.log"));
    }

    #[test]
    fn test_invalid_retry_period() {
        for bad in ["0", "ten", "-5"] {
            let result = AppConfig::from_lookup(lookup(&[
                ("PRACTICUM_TOKEN", "p"),
                ("TELEGRAM_TOKEN", "t"),
                ("TELEGRAM_CHAT_ID", "1"),
                ("RETRY_PERIOD", bad),
            ]));
            assert!(matches!(result, Err(BotError::Config(_))), "accepted {bad}");
        }
    }
}
