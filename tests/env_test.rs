//! Environment-based construction.
//!
//! Kept in its own test binary with a single test so nothing else races on
//! the process environment.

use integrations_ses_mailer::{ConfigError, Mailer, MailerError};
use std::env;

const VARS: [&str; 7] = [
    "AWS_ACCESS_KEY_ID",
    "AWS_SECRET_ACCESS_KEY",
    "AWS_REGION",
    "AWS_DEFAULT_REGION",
    "SES_API_VERSION",
    "SES_ENDPOINT",
    "SES_HOST",
];

fn clear() {
    for var in VARS {
        env::remove_var(var);
    }
}

#[test]
fn test_mailer_from_env() {
    clear();
    assert!(matches!(
        Mailer::from_env(),
        Err(MailerError::Configuration(ConfigError::AccessKeyNeeded))
    ));

    env::set_var("AWS_ACCESS_KEY_ID", "abc");
    assert!(matches!(
        Mailer::from_env(),
        Err(MailerError::Configuration(ConfigError::SecretKeyNeeded))
    ));

    env::set_var("AWS_SECRET_ACCESS_KEY", "123");
    let mailer = Mailer::from_env().unwrap();
    assert_eq!(mailer.access_key_id(), "abc");
    assert_eq!(mailer.version(), "2010-12-01");
    assert_eq!(mailer.endpoint(), "https://email.us-east-1.amazonaws.com/");
    assert_eq!(mailer.host(), "email.us-east-1.amazonaws.com");

    env::set_var("AWS_DEFAULT_REGION", "eu-west-1");
    let mailer = Mailer::from_env().unwrap();
    assert_eq!(mailer.endpoint(), "https://email.eu-west-1.amazonaws.com/");

    env::set_var("AWS_REGION", "us-west-2");
    env::set_var("SES_API_VERSION", "2020-12-01");
    env::set_var("SES_ENDPOINT", "http://localhost:4566/");
    env::set_var("SES_HOST", "localhost");
    let mailer = Mailer::from_env().unwrap();
    assert_eq!(mailer.config().region(), "us-west-2");
    assert_eq!(mailer.version(), "2020-12-01");
    assert_eq!(mailer.endpoint(), "http://localhost:4566/");
    assert_eq!(mailer.host(), "localhost");

    clear();
}
