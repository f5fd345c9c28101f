//! Reqwest-based HTTP client adapter.

use async_trait::async_trait;
use std::time::Duration;

use crate::traits::{Headers, HttpClient, HttpError, Response};

/// Default request timeout for generation calls.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client implementation using reqwest.
///
/// # Example
///
/// ```ignore
/// use soulstream::adapters::ReqwestHttpClient;
/// use soulstream::traits::{Headers, HttpClient};
///
/// let client = ReqwestHttpClient::new();
/// let response = client.post_json("https://api.example.com/v1", "{}", &Headers::new()).await?;
/// println!("Status: {}", response.status);
/// ```
#[derive(Debug, Clone)]
pub struct ReqwestHttpClient {
    client: reqwest::Client,
}

impl ReqwestHttpClient {
    /// Create a client with the default timeout.
    ///
    /// Falls back to reqwest's defaults if the builder cannot be configured.
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self { client }
    }

    /// Convert reqwest error to HttpError.
    fn convert_error(err: reqwest::Error) -> HttpError {
        if err.is_timeout() {
            HttpError::Timeout(err.to_string())
        } else if err.is_connect() {
            HttpError::ConnectionFailed(err.to_string())
        } else if err.is_builder() {
            HttpError::InvalidUrl(err.to_string())
        } else {
            HttpError::Other(err.to_string())
        }
    }
}

impl Default for ReqwestHttpClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn post_json(&self, url: &str, body: &str, headers: &Headers) -> Result<Response, HttpError> {
        let mut builder = self
            .client
            .post(url)
            .header("Content-Type", "application/json")
            .body(body.to_string());
        for (key, value) in headers {
            builder = builder.header(key, value);
        }

        let response = builder.send().await.map_err(Self::convert_error)?;
        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(Self::convert_error)?;

        Ok(Response::new(status, body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_string, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_post_json_sends_body_and_headers() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/echo"))
            .and(header("x-test", "1"))
            .and(body_string("{\"a\":1}"))
            .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
            .mount(&server)
            .await;

        let client = ReqwestHttpClient::new();
        let mut headers = Headers::new();
        headers.insert("x-test".to_string(), "1".to_string());
        let response = client
            .post_json(&format!("{}/v1/echo", server.uri()), "{\"a\":1}", &headers)
            .await
            .unwrap();

        assert_eq!(response.status, 200);
        assert_eq!(response.text(), "ok");
    }

    #[tokio::test]
    async fn test_error_status_is_not_transport_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503).set_body_string("busy"))
            .mount(&server)
            .await;

        let client = ReqwestHttpClient::new();
        let response = client
            .post_json(&server.uri(), "{}", &Headers::new())
            .await
            .unwrap();
        assert_eq!(response.status, 503);
        assert!(!response.is_success());
    }

    #[tokio::test]
    async fn test_connection_refused_maps_to_error() {
        let client = ReqwestHttpClient::new();
        // Port 9 (discard) on localhost is almost never listening
        let result = client
            .post_json("http://127.0.0.1:9/", "{}", &Headers::new())
            .await;
        assert!(result.is_err());
    }
}
