//! Transport layer abstraction for HTTP communication.
//!
//! This module provides a pluggable transport layer for sending HTTP requests.
//! The default implementation uses reqwest; tests swap in
//! [`MockTransport`](crate::mocks::MockTransport).

use async_trait::async_trait;
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;

use super::request::HttpRequest;
use super::response::HttpResponse;
use crate::error::{MailerError, MailerResult};

/// Trait for HTTP transport implementations.
///
/// Implementations must be reentrant: the mailer calls `send` concurrently
/// from as many tasks as are delivering.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send an HTTP request and return the response, whatever its status.
    ///
    /// # Errors
    ///
    /// Returns an error only if no response was received (connection
    /// failure, timeout, unreadable body).
    async fn send(&self, request: HttpRequest) -> MailerResult<HttpResponse>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn send(&self, request: HttpRequest) -> MailerResult<HttpResponse> {
        (**self).send(request).await
    }
}

/// Reqwest-based HTTP transport implementation.
#[derive(Clone)]
pub struct ReqwestTransport {
    /// The reqwest HTTP client
    client: Client,
}

impl ReqwestTransport {
    /// Create a new reqwest transport.
    ///
    /// # Arguments
    ///
    /// * `timeout` - Request timeout duration
    /// * `connect_timeout` - Connection timeout duration
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::time::Duration;
    /// use integrations_ses_mailer::http::ReqwestTransport;
    ///
    /// let transport = ReqwestTransport::new(Duration::from_secs(30), Duration::from_secs(10))?;
    /// # Ok::<(), integrations_ses_mailer::MailerError>(())
    /// ```
    pub fn new(timeout: Duration, connect_timeout: Duration) -> MailerResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(connect_timeout)
            .tcp_keepalive(Some(Duration::from_secs(60)))
            .build()
            .map_err(|e| MailerError::Transport {
                message: format!("Failed to create HTTP client: {}", e),
                source: Some(Box::new(e)),
            })?;

        Ok(Self { client })
    }

    /// Wrap an existing reqwest client.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Get a reference to the underlying reqwest client.
    pub fn client(&self) -> &Client {
        &self.client
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> MailerResult<HttpResponse> {
        let response = self
            .client
            .request(request.method, request.url)
            .headers(request.headers)
            .body(request.body)
            .send()
            .await?;

        HttpResponse::from_reqwest(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use url::Url;
    use wiremock::matchers::{body_string, method};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_reqwest_transport_creation() {
        let transport = ReqwestTransport::new(Duration::from_secs(30), Duration::from_secs(10));
        assert!(transport.is_ok());
    }

    #[tokio::test]
    async fn test_send_returns_non_2xx_as_response() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(body_string("hello"))
            .respond_with(ResponseTemplate::new(400).set_body_string("<ErrorResponse/>"))
            .mount(&server)
            .await;

        let transport =
            ReqwestTransport::new(Duration::from_secs(5), Duration::from_secs(5)).unwrap();
        let mut request = HttpRequest::post(Url::parse(&server.uri()).unwrap());
        request.body = b"hello".to_vec();

        let response = transport.send(request).await.unwrap();
        assert_eq!(response.status.as_u16(), 400);
        assert_eq!(response.body_text(), "<ErrorResponse/>");
    }

    #[tokio::test]
    async fn test_connection_refused_is_error() {
        // Bind and drop a listener so the port is very likely closed.
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };

        let transport =
            ReqwestTransport::new(Duration::from_secs(5), Duration::from_secs(5)).unwrap();
        let request = HttpRequest::post(Url::parse(&format!("http://127.0.0.1:{}/", port)).unwrap());

        let result = transport.send(request).await;
        assert!(matches!(result, Err(MailerError::Transport { .. })));
    }

    #[tokio::test]
    async fn test_transport_trait_object() {
        let transport: Arc<dyn Transport> = Arc::new(
            ReqwestTransport::new(Duration::from_secs(30), Duration::from_secs(10)).unwrap(),
        );
        let _: &dyn Transport = &*transport;
    }
}
