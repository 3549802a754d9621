//! Typed request failures with user-facing messages.

use reqwest::StatusCode;
use serde_json::Value;

/// Every failed call collapses into one of these categories.
///
/// The display string is exactly what the message sink received, so callers
/// that only show text need no further mapping; callers that care about the
/// category downcast out of the `anyhow::Error`.
#[derive(Debug)]
pub enum RequestError {
    /// HTTP succeeded but the body's business code signaled failure
    Business(String),
    /// HTTP 401
    Unauthorized(String),
    /// HTTP 403
    Forbidden(String),
    /// HTTP 404
    NotFound(String),
    /// HTTP 500
    Server(String),
    /// Any other non-2xx status
    Status { status: u16, message: String },
    /// No response arrived at all
    Network(String),
}

impl RequestError {
    /// The user-facing message text.
    pub fn message(&self) -> &str {
        match self {
            RequestError::Business(msg)
            | RequestError::Unauthorized(msg)
            | RequestError::Forbidden(msg)
            | RequestError::NotFound(msg)
            | RequestError::Server(msg)
            | RequestError::Network(msg) => msg,
            RequestError::Status { message, .. } => message,
        }
    }
}

impl std::fmt::Display for RequestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for RequestError {}

/// Maps a non-2xx status to its user-facing error, consulting the body's
/// `message` field only for statuses without a canned string.
pub fn classify_status(status: StatusCode, body: &Value) -> RequestError {
    match status {
        StatusCode::UNAUTHORIZED => {
            RequestError::Unauthorized("unauthorized, please log in again".to_string())
        }
        StatusCode::FORBIDDEN => RequestError::Forbidden("access denied".to_string()),
        StatusCode::NOT_FOUND => RequestError::NotFound("resource not found".to_string()),
        StatusCode::INTERNAL_SERVER_ERROR => {
            RequestError::Server("internal server error".to_string())
        }
        other => {
            let message = body
                .get("message")
                .and_then(Value::as_str)
                .filter(|msg| !msg.is_empty())
                .unwrap_or("request failed")
                .to_string();
            RequestError::Status {
                status: other.as_u16(),
                message,
            }
        }
    }
}
