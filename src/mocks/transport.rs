//! Mock HTTP transport for testing.

use async_trait::async_trait;
use http::header::{HeaderMap, HeaderName, HeaderValue};
use http::StatusCode;
use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard};

use crate::error::{MailerError, MailerResult};
use crate::http::{HttpRequest, HttpResponse, Transport};

/// Mock HTTP response.
#[derive(Debug, Clone)]
pub struct MockResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response headers.
    pub headers: Vec<(String, String)>,
    /// Response body.
    pub body: Vec<u8>,
}

impl MockResponse {
    /// Create a 200 response with the given body.
    pub fn ok(body: impl Into<Vec<u8>>) -> Self {
        Self::status(200, body)
    }

    /// Create a response with any status.
    pub fn status(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: body.into(),
        }
    }

    /// Create an SES-style XML error response.
    pub fn error(status: u16, code: &str, message: &str) -> Self {
        Self::status(
            status,
            format!(
                "<ErrorResponse xmlns=\"http://ses.amazonaws.com/doc/2010-12-01/\">\
                 <Error><Type>Sender</Type><Code>{}</Code><Message>{}</Message></Error>\
                 <RequestId>00000000-0000-0000-0000-000000000000</RequestId>\
                 </ErrorResponse>",
                code, message
            ),
        )
    }

    /// Add a header to the response.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    fn into_http_response(self) -> MailerResult<HttpResponse> {
        let status = StatusCode::from_u16(self.status)
            .map_err(|e| MailerError::transport(format!("invalid mock status: {}", e)))?;

        let mut headers = HeaderMap::new();
        for (name, value) in self.headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| MailerError::transport(format!("invalid mock header: {}", e)))?;
            let value = HeaderValue::from_str(&value)
                .map_err(|e| MailerError::transport(format!("invalid mock header: {}", e)))?;
            headers.append(name, value);
        }

        Ok(HttpResponse::new(status, headers, self.body))
    }
}

#[derive(Debug, Clone)]
enum MockReply {
    Response(MockResponse),
    Timeout(String),
    Transport(String),
}

impl MockReply {
    fn into_result(self) -> MailerResult<HttpResponse> {
        match self {
            MockReply::Response(response) => response.into_http_response(),
            MockReply::Timeout(message) => Err(MailerError::Timeout { message }),
            MockReply::Transport(message) => Err(MailerError::transport(message)),
        }
    }
}

/// Mock HTTP transport for testing.
///
/// Replies are returned in the order they were queued. Once the queue is
/// empty the default reply is used, and without one `send` fails with a
/// transport error.
#[derive(Debug, Default)]
pub struct MockTransport {
    /// Queue of replies to return.
    replies: Mutex<VecDeque<MockReply>>,
    /// Recorded requests.
    requests: Mutex<Vec<HttpRequest>>,
    /// Reply used when the queue is empty.
    default_reply: Option<MockReply>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl MockTransport {
    /// Create a new mock transport with no replies.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock transport with queued responses.
    pub fn with_responses(responses: Vec<MockResponse>) -> Self {
        Self {
            replies: Mutex::new(responses.into_iter().map(MockReply::Response).collect()),
            ..Self::default()
        }
    }

    /// Create a mock transport that answers every request with `response`.
    pub fn with_default(response: MockResponse) -> Self {
        Self {
            default_reply: Some(MockReply::Response(response)),
            ..Self::default()
        }
    }

    /// Create a mock transport whose every request fails at the network level.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            default_reply: Some(MockReply::Transport(message.into())),
            ..Self::default()
        }
    }

    /// Create a mock transport whose every request times out.
    pub fn timing_out() -> Self {
        Self {
            default_reply: Some(MockReply::Timeout("operation timed out".to_string())),
            ..Self::default()
        }
    }

    /// Queue a response to return.
    pub fn queue_response(&self, response: MockResponse) {
        lock(&self.replies).push_back(MockReply::Response(response));
    }

    /// Get all recorded requests.
    pub fn requests(&self) -> Vec<HttpRequest> {
        lock(&self.requests).clone()
    }

    /// Get the number of requests made.
    pub fn request_count(&self) -> usize {
        lock(&self.requests).len()
    }

    /// Get the last request made.
    pub fn last_request(&self) -> Option<HttpRequest> {
        lock(&self.requests).last().cloned()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: HttpRequest) -> MailerResult<HttpResponse> {
        lock(&self.requests).push(request);

        let reply = lock(&self.replies)
            .pop_front()
            .or_else(|| self.default_reply.clone());

        match reply {
            Some(reply) => reply.into_result(),
            None => Err(MailerError::transport("no mock response queued")),
        }
    }
}
