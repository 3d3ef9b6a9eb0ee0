use serde_json::Value;
use thiserror::Error;

/// Message shown when no response was received at all
pub const CONNECTIVITY_MESSAGE: &str =
    "Unable to reach the server. Please check your connection and try again.";

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Health check failed: {0}")]
    HealthCheck(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;

static NULL_BODY: Value = Value::Null;

/// Every way a call to the backend can fail.
///
/// Callers match on the variant instead of probing the shape of the error.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    /// No response was received
    #[error("Network error: {message}")]
    Network { message: String },

    /// The backend answered with a non-2xx status
    #[error("HTTP {status}: {message}")]
    Http {
        status: u16,
        data: Value,
        message: String,
    },

    /// 400/422 carrying a list of field messages
    #[error("Validation failed: {}", messages.join(", "))]
    Validation {
        status: u16,
        messages: Vec<String>,
        data: Value,
    },

    /// A 2xx body that does not match the expected type
    #[error("Unexpected response body: {message}")]
    Decode { message: String },

    /// The request body could not be serialized; nothing was sent
    #[error("Failed to encode request body: {message}")]
    Encode { message: String },
}

impl ApiError {
    pub fn network(message: impl Into<String>) -> Self {
        ApiError::Network { message: message.into() }
    }

    /// Classify a non-2xx response
    pub fn from_response(status: u16, body: &str) -> Self {
        let data = if body.trim().is_empty() {
            Value::Null
        } else {
            serde_json::from_str(body).unwrap_or_else(|_| Value::String(body.to_string()))
        };

        if matches!(status, 400 | 422) {
            if let Some(messages) = data.get("message").and_then(Value::as_array) {
                let messages: Vec<String> = messages
                    .iter()
                    .filter_map(|m| m.as_str().map(str::to_string))
                    .collect();
                if !messages.is_empty() {
                    return ApiError::Validation { status, messages, data };
                }
            }
        }

        let message = extract_message(&data).unwrap_or_else(|| status_reason(status).to_string());
        ApiError::Http { status, data, message }
    }

    /// HTTP status, `None` when no response was received
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } | ApiError::Validation { status, .. } => Some(*status),
            ApiError::Network { .. } | ApiError::Decode { .. } | ApiError::Encode { .. } => None,
        }
    }

    /// Parsed response body, `Null` when there is none
    pub fn data(&self) -> &Value {
        match self {
            ApiError::Http { data, .. } | ApiError::Validation { data, .. } => data,
            ApiError::Network { .. } | ApiError::Decode { .. } | ApiError::Encode { .. } => &NULL_BODY,
        }
    }

    /// Backend-provided message when there is one
    pub fn message(&self) -> String {
        match self {
            ApiError::Network { message } | ApiError::Decode { message } | ApiError::Encode { message } => {
                message.clone()
            }
            ApiError::Http { message, .. } => message.clone(),
            ApiError::Validation { messages, .. } => messages.join(", "),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    pub fn is_network(&self) -> bool {
        matches!(self, ApiError::Network { .. })
    }

    /// Text suitable for a toast
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Network { .. } => CONNECTIVITY_MESSAGE.to_string(),
            _ => self.message(),
        }
    }
}

/// Pull `message` (string or list) or `error` out of a response body
fn extract_message(data: &Value) -> Option<String> {
    match data {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Object(map) => {
            match map.get("message") {
                Some(Value::String(s)) if !s.is_empty() => return Some(s.clone()),
                Some(Value::Array(items)) => {
                    let joined: Vec<&str> = items.iter().filter_map(Value::as_str).collect();
                    if !joined.is_empty() {
                        return Some(joined.join(", "));
                    }
                }
                _ => {}
            }
            map.get("error").and_then(Value::as_str).map(str::to_string)
        }
        _ => None,
    }
}

fn status_reason(status: u16) -> &'static str {
    match status {
        400 => "Bad Request",
        401 => "Unauthorized",
        403 => "Forbidden",
        404 => "Not Found",
        409 => "Conflict",
        422 => "Unprocessable Entity",
        429 => "Too Many Requests",
        500 => "Internal Server Error",
        502 => "Bad Gateway",
        503 => "Service Unavailable",
        504 => "Gateway Timeout",
        _ => "Request failed",
    }
}
