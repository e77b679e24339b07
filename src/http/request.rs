//! Request types for the SES query API.
//!
//! [`SendRawEmailRequest`] is the signed envelope assembled for one delivery.
//! It is converted into a transport-level [`HttpRequest`] right before it is
//! sent and dropped afterwards.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use http::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use http::Method;
use url::form_urlencoded;
use url::Url;

use crate::types::RawMessage;

/// Content type of the request body.
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// The only SES action this crate sends.
pub const SEND_RAW_EMAIL_ACTION: &str = "SendRawEmail";

/// Transport-level HTTP request.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// HTTP method.
    pub method: Method,
    /// Request URL.
    pub url: Url,
    /// Request headers.
    pub headers: HeaderMap,
    /// Request body.
    pub body: Vec<u8>,
}

impl HttpRequest {
    /// Create a POST request with an empty body.
    pub fn post(url: Url) -> Self {
        Self {
            method: Method::POST,
            url,
            headers: HeaderMap::new(),
            body: Vec::new(),
        }
    }

    /// Body as text, for inspection.
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Decoded form parameters of the body.
    pub fn form_params(&self) -> Vec<(String, String)> {
        form_urlencoded::parse(&self.body).into_owned().collect()
    }
}

/// A signed `SendRawEmail` call.
///
/// Holds the form parameters in send order and the headers written by the
/// signer.
#[derive(Debug, Clone)]
pub struct SendRawEmailRequest {
    url: Url,
    headers: HeaderMap,
    params: Vec<(String, String)>,
}

impl SendRawEmailRequest {
    /// Assemble the form parameters for `message`.
    ///
    /// Headers start with only the form content type; the caller adds `Host`
    /// and the signature headers.
    pub fn new(url: Url, version: &str, message: &RawMessage) -> Self {
        let mut params = vec![
            ("Action".to_string(), SEND_RAW_EMAIL_ACTION.to_string()),
            ("Version".to_string(), version.to_string()),
            ("RawMessage.Data".to_string(), STANDARD.encode(message.data())),
        ];

        params.extend(
            message
                .destinations()
                .iter()
                .enumerate()
                .map(|(i, address)| (format!("Destinations.member.{}", i + 1), address.clone())),
        );

        let mut headers = HeaderMap::new();
        headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_static(FORM_CONTENT_TYPE),
        );

        Self {
            url,
            headers,
            params,
        }
    }

    /// Target URL.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Request headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Mutable request headers, for signing.
    pub fn headers_mut(&mut self) -> &mut HeaderMap {
        &mut self.headers
    }

    /// Form parameters in send order.
    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }

    /// Value of the first parameter called `name`.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// The `application/x-www-form-urlencoded` body.
    pub fn encode_body(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.params.iter())
            .finish()
    }

    /// Convert into a transport request.
    pub fn into_http_request(self) -> HttpRequest {
        let body = self.encode_body().into_bytes();
        HttpRequest {
            method: Method::POST,
            url: self.url,
            headers: self.headers,
            body,
        }
    }
}
