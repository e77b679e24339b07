//! Delivery outcomes.

use http::StatusCode;
use thiserror::Error;

use crate::error::MailerError;

/// Result of a single `deliver` call.
///
/// Exactly one of the two: SES accepted the message, or it did not.
#[derive(Debug)]
pub enum DeliveryOutcome {
    /// SES answered with a 2xx status.
    Delivered {
        /// The response body, usually a `SendRawEmailResponse` XML document.
        body: String,
        /// The `x-amzn-RequestId` of the call, when SES sent one.
        request_id: Option<String>,
    },
    /// The message was not accepted.
    Failed(DeliveryFailure),
}

/// Why a message was not accepted.
#[derive(Debug, Error)]
pub enum DeliveryFailure {
    /// SES answered with a non-2xx status.
    #[error("SES rejected the message with status {status}")]
    Rejected {
        /// HTTP status code.
        status: StatusCode,
        /// The response body, usually an `ErrorResponse` XML document.
        body: String,
        /// The `x-amzn-RequestId` of the call, when SES sent one.
        request_id: Option<String>,
    },

    /// No response was received: the request could not be built or sent.
    #[error(transparent)]
    NotSent(#[from] MailerError),
}

impl DeliveryFailure {
    /// Whether resending the same message could reasonably succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            DeliveryFailure::Rejected { status, .. } => {
                status.is_server_error() || *status == StatusCode::TOO_MANY_REQUESTS
            }
            DeliveryFailure::NotSent(error) => error.is_retryable(),
        }
    }

    /// HTTP status, if SES answered at all.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            DeliveryFailure::Rejected { status, .. } => Some(*status),
            DeliveryFailure::NotSent(_) => None,
        }
    }
}

impl DeliveryOutcome {
    /// Whether SES accepted the message.
    pub fn is_delivered(&self) -> bool {
        matches!(self, DeliveryOutcome::Delivered { .. })
    }

    /// The response body, if SES answered.
    pub fn body(&self) -> Option<&str> {
        match self {
            DeliveryOutcome::Delivered { body, .. }
            | DeliveryOutcome::Failed(DeliveryFailure::Rejected { body, .. }) => Some(body.as_str()),
            DeliveryOutcome::Failed(DeliveryFailure::NotSent(_)) => None,
        }
    }

    /// The failure, if the message was not accepted.
    pub fn failure(&self) -> Option<&DeliveryFailure> {
        match self {
            DeliveryOutcome::Delivered { .. } => None,
            DeliveryOutcome::Failed(failure) => Some(failure),
        }
    }

    /// Convert into a `Result` carrying the success body.
    pub fn into_result(self) -> Result<String, DeliveryFailure> {
        match self {
            DeliveryOutcome::Delivered { body, .. } => Ok(body),
            DeliveryOutcome::Failed(failure) => Err(failure),
        }
    }

    /// Text reported to the delivery logger for this outcome.
    pub(crate) fn log_text(&self) -> String {
        match self {
            DeliveryOutcome::Delivered { body, .. }
            | DeliveryOutcome::Failed(DeliveryFailure::Rejected { body, .. }) => body.clone(),
            DeliveryOutcome::Failed(DeliveryFailure::NotSent(error)) => error.to_string(),
        }
    }
}

impl From<DeliveryFailure> for DeliveryOutcome {
    fn from(failure: DeliveryFailure) -> Self {
        DeliveryOutcome::Failed(failure)
    }
}

impl From<MailerError> for DeliveryOutcome {
    fn from(error: MailerError) -> Self {
        DeliveryOutcome::Failed(DeliveryFailure::NotSent(error))
    }
}
