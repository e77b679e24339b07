//! Error types for the SES mailer.
//!
//! [`MailerError`] is the single error type surfaced by this crate. Construction
//! problems arrive as [`MailerError::Configuration`] and are returned
//! synchronously from the builders. Everything that goes wrong while delivering
//! a message (signing, transport, timeouts) is folded into a
//! [`DeliveryOutcome`](crate::types::DeliveryOutcome) instead of being returned
//! as an error, so callers have one failure channel per delivery.
//!
//! # Examples
//!
//! ```rust
//! use integrations_ses_mailer::config::ConfigError;
//! use integrations_ses_mailer::error::MailerError;
//!
//! let error = MailerError::from(ConfigError::AccessKeyNeeded);
//! assert_eq!(error.to_string(), "Configuration error: Access key needed");
//! assert!(!error.is_retryable());
//! ```

use thiserror::Error;

use crate::config::ConfigError;
use crate::signing::SigningError;

/// Result type alias for mailer operations.
pub type MailerResult<T> = Result<T, MailerError>;

/// Top-level error type for the SES mailer.
#[derive(Debug, Error)]
pub enum MailerError {
    /// The mailer could not be constructed from the given settings.
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigError),

    /// The request could not be signed.
    #[error("Signing error: {0}")]
    Signing(#[from] SigningError),

    /// Transport and network errors.
    ///
    /// Connection refused, DNS failures, TLS errors and unreadable response
    /// bodies all end up here.
    #[error("Transport error: {message}")]
    Transport {
        /// Description of the transport error.
        message: String,
        /// Optional underlying error source.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The request did not complete within the configured timeout.
    #[error("Timeout: {message}")]
    Timeout {
        /// Description of the timeout.
        message: String,
    },

    /// The message handed to the mailer was unusable.
    #[error("Validation error: {message}")]
    Validation {
        /// Description of the validation failure.
        message: String,
        /// The offending field, if known.
        field: Option<String>,
    },
}

impl MailerError {
    /// Whether resending the same message could reasonably succeed.
    ///
    /// The mailer never retries on its own; this is a hint for callers that
    /// implement their own policy.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            MailerError::Transport { .. } | MailerError::Timeout { .. }
        )
    }

    /// Build a transport error without an underlying cause.
    pub(crate) fn transport(message: impl Into<String>) -> Self {
        MailerError::Transport {
            message: message.into(),
            source: None,
        }
    }
}

impl From<reqwest::Error> for MailerError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            MailerError::Timeout {
                message: err.to_string(),
            }
        } else {
            MailerError::Transport {
                message: err.to_string(),
                source: Some(Box::new(err)),
            }
        }
    }
}
