//! HTTP layer for the SES query API.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────┐
//! │  SendRawEmailRequest │  - Form parameters
//! │                      │  - Signed headers
//! └──────────┬───────────┘
//!            │ into_http_request()
//!            ▼
//! ┌──────────────────────┐
//! │      Transport       │  - HTTP transport abstraction
//! └──────────┬───────────┘
//!            │
//!            ▼
//! ┌──────────────────────┐
//! │       reqwest        │  - Actual HTTP implementation
//! └──────────────────────┘
//! ```

mod request;
mod response;
mod transport;

pub use request::{HttpRequest, SendRawEmailRequest, FORM_CONTENT_TYPE, SEND_RAW_EMAIL_ACTION};
pub use response::HttpResponse;
pub use transport::{ReqwestTransport, Transport};
