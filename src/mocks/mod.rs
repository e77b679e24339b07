//! Test doubles for the transport and the delivery logger.
//!
//! These are public so downstream crates can test code that delivers mail
//! without a network.
//!
//! ```
//! use integrations_ses_mailer::mocks::{MockResponse, MockTransport, RecordingLogger};
//! use integrations_ses_mailer::{Mailer, RawMessage};
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let transport = Arc::new(MockTransport::with_default(MockResponse::ok("Success")));
//! let logger = Arc::new(RecordingLogger::new());
//!
//! let mailer = Mailer::builder()
//!     .credentials("abc", "123")
//!     .build()?
//!     .with_transport(transport.clone())
//!     .with_logger(logger.clone());
//!
//! let outcome = mailer.deliver(&RawMessage::new("Subject: hi\r\n\r\nbody")).await;
//! assert!(outcome.is_delivered());
//! assert_eq!(logger.lines(), ["AmazonSES: Success"]);
//! # Ok(())
//! # }
//! ```

mod logger;
mod transport;

pub use logger::RecordingLogger;
pub use transport::{MockResponse, MockTransport};
