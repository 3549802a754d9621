//! Command layer for the debugging CLI.
//!
//! Thin: each command issues one call through the [`Api`] seam and prints
//! the outcome, so everything here is testable against a mock.

use anyhow::{Context, Result};
use log::debug;
use reqwest::Method;
use serde_json::Value;

use crate::config::RequestOptions;
use crate::http::Api;

/// Issues one request and prints the normalized payload as pretty JSON.
#[tracing::instrument(skip(api, data))]
pub async fn request<A: Api>(
    api: &A,
    method: Method,
    path: &str,
    data: Option<&str>,
) -> Result<()> {
    let body: Option<Value> = match data {
        Some(raw) => {
            Some(serde_json::from_str(raw).context("Request body is not valid JSON")?)
        }
        None => None,
    };

    debug!("Issuing {} {}", method, path);
    let payload = api
        .request_value(method, path, body, RequestOptions::new())
        .await?;

    let rendered =
        serde_json::to_string_pretty(&payload).context("Failed to render payload")?;
    println!("{}", rendered);
    Ok(())
}
