//! Signing error types.

use thiserror::Error;

/// Errors that can occur while signing a request.
#[derive(Debug, Error)]
pub enum SigningError {
    /// The signing key could not be used.
    ///
    /// # Examples
    ///
    /// ```
    /// use integrations_ses_mailer::signing::SigningError;
    ///
    /// let error = SigningError::InvalidKey {
    ///     message: "secret access key is empty".to_string(),
    /// };
    /// assert_eq!(error.to_string(), "Invalid signing key: secret access key is empty");
    /// ```
    #[error("Invalid signing key: {message}")]
    InvalidKey {
        /// Details about the key problem.
        message: String,
    },

    /// A computed value cannot be carried in an HTTP header.
    ///
    /// This happens when the access key id contains control characters or
    /// other bytes that are not valid in a header value.
    #[error("Invalid value for header {header}: {message}")]
    InvalidHeaderValue {
        /// The header being written.
        header: String,
        /// Details about the rejected value.
        message: String,
    },
}
