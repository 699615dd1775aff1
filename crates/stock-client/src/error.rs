//! Typed error enum for backend calls.

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// Error payload returned by the backend alongside a non-2xx status
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ErrorBody {
    pub message: Option<String>,
    pub details: Vec<String>,
}

#[derive(Deserialize)]
struct RawErrorBody {
    #[serde(default)]
    message: Option<Value>,
    #[serde(default)]
    details: Option<Value>,
}

impl ErrorBody {
    /// Lenient parse: bodies that are not JSON objects yield an empty `ErrorBody`.
    pub fn parse(text: &str) -> Self {
        let Ok(raw) = serde_json::from_str::<RawErrorBody>(text) else {
            return Self::default();
        };
        let details = match raw.details {
            Some(Value::Array(values)) => values.into_iter().map(value_text).collect(),
            Some(Value::Null) | None => Vec::new(),
            Some(value) => vec![value_text(value)],
        };
        let message = match raw.message {
            Some(Value::Null) | None => None,
            Some(value) => Some(value_text(value)),
        };
        Self {
            message: message.filter(|m| !m.trim().is_empty()),
            details,
        }
    }
}

fn value_text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        other => other.to_string(),
    }
}

/// Errors from inventory API operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Transport(String),
    #[error("HTTP status {status}")]
    Status { status: u16, body: ErrorBody },
    #[error("malformed response: {0}")]
    Decode(String),
    #[error("amount change must not be zero")]
    ZeroAmount,
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Transport(err.to_string())
    }
}

impl ApiError {
    /// Validation details supplied by the backend, if any
    pub fn details(&self) -> &[String] {
        match self {
            ApiError::Status { body, .. } => &body.details,
            _ => &[],
        }
    }

    /// Server-provided message, falling back to the first detail
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Status { body, .. } => body
                .message
                .as_deref()
                .or_else(|| body.details.first().map(String::as_str)),
            _ => None,
        }
    }

    /// Text for a user notification
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::ZeroAmount => self.to_string(),
            _ => self
                .server_message()
                .map(str::to_string)
                .unwrap_or_else(|| fallback.to_string()),
        }
    }
}
