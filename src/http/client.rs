//! HTTP client wrapper normalizing every response into one convention.
//!
//! Callers get a single `Result` per call: the business payload on success,
//! a [`RequestError`](super::RequestError) inside `anyhow::Error` on any
//! failure. UI side effects (progress bar, toasts) go through the injected
//! sinks.

use std::sync::Arc;

use anyhow::{Context, Result};
use async_trait::async_trait;
use log::{debug, warn};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Method, StatusCode, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::auth::{MemoryTokenStore, TOKEN_KEY, TokenStore, access_token, bearer};
use crate::config::{ApiConfig, RequestOptions};
use crate::ui::{MessageSink, NoopMessages, NoopProgress, ProgressSink};

use super::envelope;
use super::error::{RequestError, classify_status};

/// Shown when no response arrives at all.
const NETWORK_FAILURE: &str = "network connection failed, check the network";

/// Shown when the request cannot even be built.
const BUILD_FAILURE: &str = "request failed, please try again later";

/// Seam for code that issues normalized API calls.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Api: Send + Sync {
    /// Issues one request and resolves to the normalized business payload.
    async fn request_value(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
        options: RequestOptions,
    ) -> Result<Value>;
}

/// The normalizing client. Build one with [`ApiClient::builder`].
pub struct ApiClient {
    client: Client,
    config: ApiConfig,
    tokens: Arc<dyn TokenStore>,
    progress: Arc<dyn ProgressSink>,
    messages: Arc<dyn MessageSink>,
}

/// Builder wiring configuration, credential storage and UI sinks together.
pub struct ApiClientBuilder {
    config: ApiConfig,
    tokens: Option<Arc<dyn TokenStore>>,
    progress: Option<Arc<dyn ProgressSink>>,
    messages: Option<Arc<dyn MessageSink>>,
}

impl ApiClientBuilder {
    pub fn tokens(mut self, store: Arc<dyn TokenStore>) -> Self {
        self.tokens = Some(store);
        self
    }

    pub fn progress(mut self, sink: Arc<dyn ProgressSink>) -> Self {
        self.progress = Some(sink);
        self
    }

    pub fn messages(mut self, sink: Arc<dyn MessageSink>) -> Self {
        self.messages = Some(sink);
        self
    }

    pub fn build(self) -> Result<ApiClient> {
        let mut headers = HeaderMap::new();
        headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_static("application/json;charset=UTF-8"),
        );

        let client = Client::builder()
            .user_agent("panelkit")
            .default_headers(headers)
            .timeout(self.config.timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(ApiClient {
            client,
            config: self.config,
            tokens: self
                .tokens
                .unwrap_or_else(|| Arc::new(MemoryTokenStore::new())),
            progress: self.progress.unwrap_or_else(|| Arc::new(NoopProgress)),
            messages: self.messages.unwrap_or_else(|| Arc::new(NoopMessages)),
        })
    }
}

impl ApiClient {
    pub fn builder(config: ApiConfig) -> ApiClientBuilder {
        ApiClientBuilder {
            config,
            tokens: None,
            progress: None,
            messages: None,
        }
    }

    /// Performs a GET request and decodes the normalized payload.
    #[tracing::instrument(skip(self))]
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let value = self
            .request_value(Method::GET, path, None, RequestOptions::new())
            .await?;
        decode(value)
    }

    /// Performs a GET request with query parameters.
    #[tracing::instrument(skip(self, query))]
    pub async fn get_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T> {
        let mut options = RequestOptions::new();
        for (name, value) in query {
            options = options.query(*name, *value);
        }
        let value = self
            .request_value(Method::GET, path, None, options)
            .await?;
        decode(value)
    }

    /// Performs a POST request with a JSON body.
    #[tracing::instrument(skip(self, body))]
    pub async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> Result<T> {
        self.send_with_body(Method::POST, path, body).await
    }

    /// Performs a PUT request with a JSON body.
    #[tracing::instrument(skip(self, body))]
    pub async fn put<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> Result<T> {
        self.send_with_body(Method::PUT, path, body).await
    }

    /// Performs a PATCH request with a JSON body.
    #[tracing::instrument(skip(self, body))]
    pub async fn patch<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> Result<T> {
        self.send_with_body(Method::PATCH, path, body).await
    }

    /// Performs a DELETE request.
    #[tracing::instrument(skip(self))]
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let value = self
            .request_value(Method::DELETE, path, None, RequestOptions::new())
            .await?;
        decode(value)
    }

    async fn send_with_body<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: &impl Serialize,
    ) -> Result<T> {
        let body = serde_json::to_value(body).context("Failed to serialize request body")?;
        let value = self
            .request_value(method, path, Some(body), RequestOptions::new())
            .await?;
        decode(value)
    }

    /// The untyped core: one request, one normalized outcome.
    #[tracing::instrument(skip(self, body, options))]
    pub async fn request_value(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
        options: RequestOptions,
    ) -> Result<Value> {
        let url = self.config.url_for(path);
        debug!("{} {}", method, url);

        let request = match self.build_request(method, &url, body, &options) {
            Ok(request) => request,
            Err(e) => {
                self.progress.error();
                self.messages.error(BUILD_FAILURE);
                return Err(e);
            }
        };

        self.progress.start();

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                self.progress.error();
                self.messages.error(NETWORK_FAILURE);
                return Err(anyhow::Error::new(e)
                    .context(RequestError::Network(NETWORK_FAILURE.to_string())));
            }
        };

        let status = response.status();
        let body = read_body(response).await;

        if !status.is_success() {
            self.progress.error();
            let error = classify_status(status, &body);
            self.messages.error(error.message());
            if status == StatusCode::UNAUTHORIZED {
                debug!("Clearing stored credential after 401");
                self.tokens.remove(TOKEN_KEY);
            }
            return Err(error.into());
        }

        // The progress bar finishes for every 2xx response, before the
        // envelope is inspected.
        self.progress.finish();

        if envelope::is_success(status, &body) {
            return Ok(envelope::payload(body));
        }

        let message = envelope::business_message(&body);
        warn!("Business failure from {}: {}", url, message);
        self.messages.warning(&message);
        Err(RequestError::Business(message).into())
    }

    fn build_request(
        &self,
        method: Method,
        url: &str,
        body: Option<Value>,
        options: &RequestOptions,
    ) -> Result<reqwest::RequestBuilder> {
        let url = Url::parse(url).with_context(|| format!("Invalid request URL: {}", url))?;

        let mut headers = HeaderMap::new();
        if let Some(raw) = access_token(self.tokens.as_ref()) {
            let mut value = HeaderValue::from_str(&bearer(&raw))
                .context("Stored credential is not a valid header value")?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }
        for (name, value) in &options.headers {
            let name = HeaderName::try_from(name.as_str())
                .with_context(|| format!("Invalid header name: {}", name))?;
            let value = HeaderValue::from_str(value)
                .with_context(|| format!("Invalid value for header {}", name))?;
            headers.insert(name, value);
        }

        let mut request = self.client.request(method, url).headers(headers);
        if !options.query.is_empty() {
            request = request.query(&options.query);
        }
        if let Some(timeout) = options.timeout {
            request = request.timeout(timeout);
        }
        if let Some(body) = body {
            request = request.json(&body);
        }
        Ok(request)
    }
}

#[async_trait]
impl Api for ApiClient {
    async fn request_value(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
        options: RequestOptions,
    ) -> Result<Value> {
        ApiClient::request_value(self, method, path, body, options).await
    }
}

fn decode<T: DeserializeOwned>(value: Value) -> Result<T> {
    serde_json::from_value(value).context("Failed to decode response payload")
}

/// Reads the response body as JSON; anything unreadable or non-JSON is
/// `Null`.
async fn read_body(response: reqwest::Response) -> Value {
    match response.bytes().await {
        Ok(bytes) if !bytes.is_empty() => serde_json::from_slice(&bytes).unwrap_or(Value::Null),
        _ => Value::Null,
    }
}
