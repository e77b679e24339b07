//! Deserializable mailer settings.
//!
//! Applications usually keep mailer settings next to the rest of their
//! configuration. [`MailerSettings`] mirrors the builder with every field
//! optional, so a JSON object such as
//!
//! ```json
//! { "access_key": "abc", "secret_key": "123", "region": "eu-west-1" }
//! ```
//!
//! can be turned into a [`MailerConfig`] with the usual validation.

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use std::time::Duration;

use super::{ConfigError, MailerConfig, MailerConfigBuilder};
use crate::signing::SigningAlgorithm;

/// Mailer settings as they appear in configuration files.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MailerSettings {
    /// AWS access key id.
    pub access_key: Option<String>,
    /// AWS secret access key.
    pub secret_key: Option<SecretString>,
    /// SES API version.
    pub version: Option<String>,
    /// Endpoint URL.
    pub endpoint: Option<String>,
    /// `Host` header value.
    pub host: Option<String>,
    /// Region for the default endpoint and host.
    pub region: Option<String>,
    /// `HmacSHA256` or `HmacSHA1`.
    pub signing_algorithm: Option<SigningAlgorithm>,
    /// Request timeout in seconds.
    pub timeout_secs: Option<u64>,
    /// Connection timeout in seconds.
    pub connect_timeout_secs: Option<u64>,
    /// Custom user agent.
    pub user_agent: Option<String>,
}

impl MailerSettings {
    /// Parse settings from a JSON document.
    ///
    /// # Example
    ///
    /// ```
    /// use integrations_ses_mailer::config::MailerSettings;
    ///
    /// let settings = MailerSettings::from_json(r#"{"access_key": "abc", "secret_key": "123"}"#)?;
    /// let config = settings.build()?;
    /// assert_eq!(config.host(), "email.us-east-1.amazonaws.com");
    /// # Ok::<(), integrations_ses_mailer::config::ConfigError>(())
    /// ```
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Convert into a builder, carrying over every field that is set.
    pub fn into_builder(self) -> MailerConfigBuilder {
        let mut builder = MailerConfig::builder();

        if let Some(access_key) = self.access_key {
            builder = builder.access_key(access_key);
        }
        if let Some(secret_key) = self.secret_key {
            builder = builder.secret_key(secret_key.expose_secret().clone());
        }
        if let Some(version) = self.version {
            builder = builder.version(version);
        }
        if let Some(endpoint) = self.endpoint {
            builder = builder.endpoint(endpoint);
        }
        if let Some(host) = self.host {
            builder = builder.host(host);
        }
        if let Some(region) = self.region {
            builder = builder.region(region);
        }
        if let Some(algorithm) = self.signing_algorithm {
            builder = builder.signing_algorithm(algorithm);
        }
        if let Some(secs) = self.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        if let Some(secs) = self.connect_timeout_secs {
            builder = builder.connect_timeout(Duration::from_secs(secs));
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        builder
    }

    /// Validate and build the configuration.
    pub fn build(self) -> Result<MailerConfig, ConfigError> {
        self.into_builder().build()
    }
}
