//! HTTP Client Wrapper
//!
//! Thin reqwest wrapper over the remote character API. Builds requests
//! against the configured base URL, parses JSON bodies, and normalizes
//! failures into the [`ClientError`] taxonomy.
//!
//! ## Response contract
//!
//! - HTTP 204 resolves to `None` (distinct from an empty JSON object)
//! - OK status with an unparseable or empty body resolves to `None`
//! - Non-OK status fails with the status code and a message derived from the
//!   error body (`error` field, then `message` field, then the status line)
//! - Transport failures are logged once and propagated with the target URL

use reqwest::{Client, Method, StatusCode};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::config::ApiConfig;

/// Client for the character REST API
///
/// Stateless between calls - holds only the reqwest client and the
/// normalized base URL.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new client from API configuration
    pub fn new(config: &ApiConfig) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_millis(config.request_timeout_ms))
            .build()
            .map_err(ClientError::Init)?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// The normalized base URL this client targets
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET a resource, with optional query parameters
    ///
    /// The query string is omitted entirely when `query` is empty.
    pub async fn get(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<Option<Value>, ClientError> {
        let url = format!("{}{}{}", self.base_url, path, build_query(query));
        self.request(Method::GET, &url, None::<&()>).await
    }

    /// POST a JSON body to a resource
    pub async fn post<T: Serialize>(
        &self,
        path: &str,
        body: &T,
    ) -> Result<Option<Value>, ClientError> {
        let url = format!("{}{}", self.base_url, path);
        self.request(Method::POST, &url, Some(body)).await
    }

    /// PUT a JSON body to a resource
    pub async fn put<T: Serialize>(
        &self,
        path: &str,
        body: &T,
    ) -> Result<Option<Value>, ClientError> {
        let url = format!("{}{}", self.base_url, path);
        self.request(Method::PUT, &url, Some(body)).await
    }

    /// DELETE a resource
    pub async fn delete(&self, path: &str) -> Result<Option<Value>, ClientError> {
        let url = format!("{}{}", self.base_url, path);
        self.request(Method::DELETE, &url, None::<&()>).await
    }

    /// Execute a request and normalize the response
    async fn request<T: Serialize>(
        &self,
        method: Method,
        url: &str,
        body: Option<&T>,
    ) -> Result<Option<Value>, ClientError> {
        let request_id = uuid::Uuid::new_v4().to_string();

        tracing::debug!(
            request_id = %request_id,
            method = %method,
            url = %url,
            "Sending API request"
        );

        let mut builder = self.client.request(method, url);
        if let Some(body) = body {
            // .json() also sets the JSON content-type header
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| {
            tracing::error!(
                request_id = %request_id,
                url = %url,
                error = %e,
                "API request failed before an HTTP response was received"
            );
            ClientError::Transport {
                url: url.to_string(),
                source: e,
            }
        })?;

        let status = response.status();

        if status == StatusCode::NO_CONTENT {
            return Ok(None);
        }

        // Read the raw body first so non-JSON error bodies still surface
        let raw = response.text().await.map_err(|e| ClientError::Decode {
            url: url.to_string(),
            source: e,
        })?;

        let parsed: Option<Value> = serde_json::from_str(&raw).ok();

        if !status.is_success() {
            let message = error_message(status, parsed.as_ref());
            tracing::warn!(
                request_id = %request_id,
                url = %url,
                status = status.as_u16(),
                message = %message,
                "API returned an error status"
            );
            return Err(ClientError::Http {
                status: status.as_u16(),
                message,
                body: parsed,
            });
        }

        // OK but not JSON (e.g. empty 200) - nothing to return
        Ok(parsed)
    }
}

/// Serialize query parameters into a `?k=v&...` string, empty when there are
/// no parameters.
fn build_query(params: &[(&str, String)]) -> String {
    if params.is_empty() {
        return String::new();
    }

    let pairs: Vec<String> = params
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect();

    format!("?{}", pairs.join("&"))
}

/// Derive a user-facing message from an error response.
///
/// Priority: the body's `error` field, then its `message` field, then a
/// generated status line.
fn error_message(status: StatusCode, body: Option<&Value>) -> String {
    if let Some(body) = body {
        if let Some(msg) = body.get("error").and_then(Value::as_str) {
            return msg.to_string();
        }
        if let Some(msg) = body.get("message").and_then(Value::as_str) {
            return msg.to_string();
        }
    }
    format!(
        "HTTP {} {}",
        status.as_u16(),
        status.canonical_reason().unwrap_or("")
    )
    .trim_end()
    .to_string()
}

/// Errors produced by the API client
#[derive(Error, Debug)]
pub enum ClientError {
    /// The underlying HTTP client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    Init(#[source] reqwest::Error),

    /// The request never received an HTTP response (connect/DNS/timeout)
    #[error("Request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status
    #[error("{message}")]
    Http {
        status: u16,
        message: String,
        body: Option<Value>,
    },

    /// The response body could not be read
    #[error("Failed to read response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}
