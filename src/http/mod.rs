//! HTTP client module: request normalization and error classification.

mod client;
mod envelope;
mod error;

pub use client::{Api, ApiClient, ApiClientBuilder};
pub use envelope::{BizCode, FALLBACK_MESSAGE, business_message, is_success, payload};
pub use error::{RequestError, classify_status};

#[cfg(test)]
pub use client::MockApi;
