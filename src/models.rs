// src/models.rs
use log::debug;
use serde::Deserialize;
use serde_json::Value;

use crate::errors::{BotError, Result};

pub const HOMEWORKS_KEY: &str = "homeworks";
pub const CURRENT_DATE_KEY: &str = "current_date";

const REQUIRED_KEYS: [&str; 2] = ["homework_name", "status"];

/// One submission as reported by the review API.
#[derive(Debug, Deserialize, Clone)]
pub struct Homework {
    #[serde(default)]
    pub id: Option<Value>,
    pub status: String,
    pub homework_name: String,
    #[serde(default)]
    pub date_updated: Option<String>,
}

/// The closed set of review states that produce a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeworkStatus {
    Approved,
    Reviewing,
    Rejected,
}

impl HomeworkStatus {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "approved" => Some(HomeworkStatus::Approved),
            "reviewing" => Some(HomeworkStatus::Reviewing),
            "rejected" => Some(HomeworkStatus::Rejected),
            _ => None,
        }
    }

    pub fn verdict(&self) -> &'static str {
        match self {
            HomeworkStatus::Approved => "Reviewed: the reviewer liked everything. Hooray!",
            HomeworkStatus::Reviewing => "The work has been taken for review.",
            HomeworkStatus::Rejected => "Reviewed: the reviewer left comments.",
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "mapping",
    }
}

/// Checks the shape of a review API answer.
///
/// Returns the newest homework record, or `None` when the list is empty and
/// there is nothing to report this cycle. Older records in the same batch are
/// ignored.
pub fn check_response(response: &Value) -> Result<Option<&Value>> {
    debug!("Checking review API response");

    let object = response.as_object().ok_or_else(|| {
        BotError::WrongResponse(format!(
            "expected response to be a mapping, got {}",
            json_kind(response)
        ))
    })?;

    let homeworks = object.get(HOMEWORKS_KEY).ok_or_else(|| {
        BotError::WrongResponse(format!("response has no '{}' key", HOMEWORKS_KEY))
    })?;

    let homeworks = homeworks.as_array().ok_or_else(|| {
        BotError::WrongResponse(format!(
            "expected '{}' to be a list, got {}",
            HOMEWORKS_KEY,
            json_kind(homeworks)
        ))
    })?;

    Ok(homeworks.first())
}

/// Reads the server time the next poll should start from, if reported.
pub fn current_date(response: &Value) -> Option<i64> {
    response.get(CURRENT_DATE_KEY).and_then(Value::as_i64)
}

/// Builds the notification text for one homework record.
pub fn parse_status(record: &Value) -> Result<String> {
    debug!("Extracting homework status");

    let missing: Vec<&str> = REQUIRED_KEYS
        .iter()
        .copied()
        .filter(|key| record.get(*key).is_none())
        .collect();
    if !missing.is_empty() {
        return Err(BotError::MissingKeys {
            record: "homework".to_string(),
            keys: missing.join(", "),
        });
    }

    let status = match &record["status"] {
        Value::String(code) => {
            HomeworkStatus::from_code(code).ok_or_else(|| BotError::UnknownStatus(code.clone()))?
        }
        other => return Err(BotError::UnknownStatus(other.to_string())),
    };
    let homework: Homework = serde_json::from_value(record.clone())?;

    Ok(format!(
        "Status of homework \"{}\" has changed. {}",
        homework.homework_name,
        status.verdict()
    ))
}
