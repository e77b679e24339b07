//! HTTP response handling for the SES query API.

use http::header::HeaderMap;
use http::StatusCode;

use crate::error::{MailerError, MailerResult};
use crate::types::{DeliveryFailure, DeliveryOutcome};

/// A response from the SES endpoint.
///
/// The body is kept as raw bytes; SES answers with XML that this crate does
/// not interpret.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// HTTP status code.
    pub status: StatusCode,
    /// Response headers.
    pub headers: HeaderMap,
    /// Response body.
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Create a new response.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use integrations_ses_mailer::http::HttpResponse;
    /// use http::{HeaderMap, StatusCode};
    ///
    /// let response = HttpResponse::new(StatusCode::OK, HeaderMap::new(), b"Success".to_vec());
    /// assert!(response.is_success());
    /// assert_eq!(response.body_text(), "Success");
    /// ```
    pub fn new(status: StatusCode, headers: HeaderMap, body: Vec<u8>) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// Create a response from a reqwest Response, reading the whole body.
    pub async fn from_reqwest(response: reqwest::Response) -> MailerResult<Self> {
        let status = response.status();
        let headers = response.headers().clone();

        let body = response
            .bytes()
            .await
            .map_err(|e| MailerError::Transport {
                message: format!("Failed to read response body: {}", e),
                source: Some(Box::new(e)),
            })?
            .to_vec();

        Ok(Self::new(status, headers, body))
    }

    /// Whether the status is 2xx.
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Body as text. Invalid UTF-8 is replaced rather than rejected.
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// The AWS request id, when present.
    pub fn request_id(&self) -> Option<&str> {
        ["x-amzn-requestid", "x-amz-request-id"]
            .iter()
            .find_map(|name| self.headers.get(*name))
            .and_then(|value| value.to_str().ok())
    }

    /// Classify the response: 2xx is delivered, anything else is rejected.
    pub fn into_outcome(self) -> DeliveryOutcome {
        let body = self.body_text();
        let request_id = self.request_id().map(str::to_string);

        if self.is_success() {
            DeliveryOutcome::Delivered { body, request_id }
        } else {
            DeliveryOutcome::Failed(DeliveryFailure::Rejected {
                status: self.status,
                body,
                request_id,
            })
        }
    }
}
