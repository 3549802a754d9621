//! Response envelope interpretation.
//!
//! Backends following this convention wrap payloads as
//! `{code|status, data, message}`, but nothing enforces the shape
//! server-side. Every field is read defensively; unknown shapes fall
//! through to the whole body.

use reqwest::StatusCode;
use serde_json::Value;

/// Fallback text when a failing body carries no usable `message`.
pub const FALLBACK_MESSAGE: &str = "request exception";

/// Business status code embedded in a response body.
#[derive(Debug, Clone, PartialEq)]
pub enum BizCode {
    Number(i64),
    Text(String),
    /// Present but neither a number nor a string; never counts as success.
    Other(Value),
}

impl BizCode {
    /// Reads the code from `code`, falling back to `status`.
    ///
    /// An explicit JSON `null` counts as absent, same as a missing field.
    pub fn from_body(body: &Value) -> Option<BizCode> {
        let raw = body
            .get("code")
            .filter(|v| !v.is_null())
            .or_else(|| body.get("status").filter(|v| !v.is_null()))?;

        Some(match raw {
            Value::Number(n) => match n.as_i64() {
                Some(i) => BizCode::Number(i),
                // Fractionless floats still compare numerically
                None => match n.as_f64() {
                    Some(f) if f.fract() == 0.0 => BizCode::Number(f as i64),
                    _ => BizCode::Other(raw.clone()),
                },
            },
            Value::String(s) => BizCode::Text(s.clone()),
            other => BizCode::Other(other.clone()),
        })
    }

    /// Numeric 200/201 or the string "success" (any case). A numeric-looking
    /// string such as `"200"` does NOT pass; the comparison is strict about
    /// types.
    pub fn is_success(&self) -> bool {
        match self {
            BizCode::Number(code) => *code == 200 || *code == 201,
            BizCode::Text(text) => text.eq_ignore_ascii_case("success"),
            BizCode::Other(_) => false,
        }
    }
}

/// True when the HTTP status and any embedded business code both agree on
/// success: the status must be exactly 200, and a present business code must
/// be in the success set.
pub fn is_success(status: StatusCode, body: &Value) -> bool {
    status == StatusCode::OK && BizCode::from_body(body).is_none_or(|code| code.is_success())
}

/// The caller-visible payload: the body's `data` field when present and
/// non-null, else the whole body.
pub fn payload(body: Value) -> Value {
    let data = match body.get("data") {
        Some(value) if !value.is_null() => Some(value.clone()),
        _ => None,
    };
    data.unwrap_or(body)
}

/// The failing body's `message`, or the generic fallback.
pub fn business_message(body: &Value) -> String {
    body.get("message")
        .and_then(Value::as_str)
        .filter(|msg| !msg.is_empty())
        .unwrap_or(FALLBACK_MESSAGE)
        .to_string()
}
