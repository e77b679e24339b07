//! Configuration error types for the SES mailer.

use thiserror::Error;

/// Errors that can occur while constructing a mailer.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No access key id was supplied, or it was empty.
    #[error("Access key needed")]
    AccessKeyNeeded,

    /// No secret access key was supplied, or it was empty.
    #[error("Secret key needed")]
    SecretKeyNeeded,

    /// The endpoint is not an absolute http(s) URL.
    #[error("Invalid endpoint {endpoint}: {message}")]
    InvalidEndpoint {
        /// The endpoint as given.
        endpoint: String,
        /// Why it was rejected.
        message: String,
    },

    /// Invalid configuration value or combination.
    #[error("Invalid configuration: {message}")]
    Invalid {
        /// Description of the configuration issue.
        message: String,
    },

    /// Error reading from environment variables.
    #[error("Environment error: {message}")]
    Environment {
        /// Description of the environment error.
        message: String,
    },

    /// Settings could not be parsed.
    #[error("Invalid settings: {0}")]
    Settings(#[from] serde_json::Error),
}
