//! Mock HTTP client for testing.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::traits::{Headers, HttpClient, HttpError, Response};

/// A POST seen by [`MockHttpClient`].
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub url: String,
    pub headers: Headers,
    pub body: String,
}

impl RecordedRequest {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).unwrap_or(serde_json::Value::Null)
    }
}

/// Canned outcome of one call.
#[derive(Debug, Clone)]
pub enum MockResponse {
    Success(Response),
    Error(HttpError),
}

/// Answers POSTs from a queue, then from a fallback once the queue is empty.
///
/// With neither configured every call fails with a connection error.
#[derive(Debug, Clone, Default)]
pub struct MockHttpClient {
    queue: Arc<Mutex<VecDeque<MockResponse>>>,
    fallback: Arc<Mutex<Option<MockResponse>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call answers with `response` unless something is queued.
    pub fn always(response: MockResponse) -> Self {
        let client = Self::new();
        *client.fallback.lock().unwrap() = Some(response);
        client
    }

    /// Answer the next unanswered call with `response`.
    pub fn push(&self, response: MockResponse) {
        self.queue.lock().unwrap().push_back(response);
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    fn next_response(&self) -> Option<MockResponse> {
        self.queue
            .lock()
            .unwrap()
            .pop_front()
            .or_else(|| self.fallback.lock().unwrap().clone())
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn post_json(&self, url: &str, body: &str, headers: &Headers) -> Result<Response, HttpError> {
        self.requests.lock().unwrap().push(RecordedRequest {
            url: url.to_string(),
            headers: headers.clone(),
            body: body.to_string(),
        });

        match self.next_response() {
            Some(MockResponse::Success(response)) => Ok(response),
            Some(MockResponse::Error(err)) => Err(err),
            None => Err(HttpError::ConnectionFailed(format!("no mock response for {}", url))),
        }
    }
}
