//! HTTP client trait abstraction.
//!
//! The text-generation client only ever issues single JSON POSTs, so the
//! seam is a plain request/response pair.

use async_trait::async_trait;
use bytes::Bytes;
use std::collections::HashMap;

/// HTTP headers represented as a key-value map.
pub type Headers = HashMap<String, String>;

/// HTTP response wrapper.
#[derive(Debug, Clone)]
pub struct Response {
    /// HTTP status code
    pub status: u16,
    /// Response body
    pub body: Bytes,
}

impl Response {
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Check if the response indicates success (2xx status).
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Get the response body as a string (lossy).
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Parse the response body as JSON.
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }
}

/// Transport-level HTTP errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HttpError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Request timeout: {0}")]
    Timeout(String),
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
    #[error("HTTP error: {0}")]
    Other(String),
}

impl HttpError {
    /// Connection and timeout failures are worth retrying; the rest are not.
    pub fn is_retryable(&self) -> bool {
        matches!(self, HttpError::ConnectionFailed(_) | HttpError::Timeout(_))
    }
}

/// Trait for HTTP client operations.
///
/// # Example
///
/// ```ignore
/// use soulstream::traits::{HttpClient, Headers};
///
/// async fn ping<C: HttpClient>(client: &C) -> bool {
///     client
///         .post_json("https://example.com/v1/ping", "{}", &Headers::new())
///         .await
///         .map(|r| r.is_success())
///         .unwrap_or(false)
/// }
/// ```
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// POST a JSON body and return the full response.
    ///
    /// Non-2xx statuses are returned as `Ok(Response)`; only transport
    /// failures are errors.
    async fn post_json(&self, url: &str, body: &str, headers: &Headers) -> Result<Response, HttpError>;
}
