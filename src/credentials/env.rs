//! Credentials from environment variables.

use super::AwsCredentials;
use crate::config::{env_var, ConfigError};

/// Environment variable holding the access key id.
pub const AWS_ACCESS_KEY_ID: &str = "AWS_ACCESS_KEY_ID";
/// Environment variable holding the secret access key.
pub const AWS_SECRET_ACCESS_KEY: &str = "AWS_SECRET_ACCESS_KEY";

/// Read credentials from `AWS_ACCESS_KEY_ID` and `AWS_SECRET_ACCESS_KEY`.
///
/// Unset and empty variables are treated alike and produce the same errors as
/// [`AwsCredentials::from_parts`]. A value that is not valid unicode is
/// reported as [`ConfigError::Environment`].
pub fn from_env() -> Result<AwsCredentials, ConfigError> {
    AwsCredentials::from_parts(env_var(AWS_ACCESS_KEY_ID)?, env_var(AWS_SECRET_ACCESS_KEY)?)
}
