//! Delivery logging.
//!
//! After every delivery attempt the mailer reports one debug line,
//! `AmazonSES: <response body>`, to a [`DeliveryLogger`]. The logger is an
//! optional collaborator: the default [`NoopLogger`] discards the line, and a
//! logger that panics is isolated from the delivery so the caller still gets
//! its outcome.
//!
//! This is separate from the crate's own `tracing` events, which describe the
//! request pipeline and never include message bodies.

use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

/// Prefix of every delivery log line.
pub const LOG_PREFIX: &str = "AmazonSES: ";

/// Logger trait for receiving the per-delivery debug line.
pub trait DeliveryLogger: Send + Sync {
    /// Record one debug message.
    fn debug(&self, message: &str);
}

impl<T: DeliveryLogger + ?Sized> DeliveryLogger for Arc<T> {
    fn debug(&self, message: &str) {
        (**self).debug(message)
    }
}

/// No-op logger for when delivery logging is disabled.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopLogger;

impl DeliveryLogger for NoopLogger {
    fn debug(&self, _message: &str) {}
}

/// Logger that forwards to `tracing` at debug level.
///
/// Events use the target `ses_mailer::delivery` so they can be filtered
/// independently of the crate's internal events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl DeliveryLogger for TracingLogger {
    fn debug(&self, message: &str) {
        tracing::debug!(target: "ses_mailer::delivery", "{}", message);
    }
}

/// Logger backed by a closure.
///
/// # Example
///
/// ```
/// use integrations_ses_mailer::logging::{DeliveryLogger, FnLogger};
///
/// let logger = FnLogger::new(|line: &str| eprintln!("{}", line));
/// logger.debug("AmazonSES: Success");
/// ```
pub struct FnLogger<F> {
    f: F,
}

impl<F> FnLogger<F>
where
    F: Fn(&str) + Send + Sync,
{
    /// Wrap a closure.
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> DeliveryLogger for FnLogger<F>
where
    F: Fn(&str) + Send + Sync,
{
    fn debug(&self, message: &str) {
        (self.f)(message)
    }
}

impl<F> fmt::Debug for FnLogger<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnLogger").finish_non_exhaustive()
    }
}

/// Send `AmazonSES: <text>` to `logger`, discarding any panic it raises.
///
/// The panic never reaches the caller, but the process panic hook still runs
/// first, so the default hook prints the panic message to stderr.
pub(crate) fn log_delivery(logger: &dyn DeliveryLogger, text: &str) {
    let line = format!("{}{}", LOG_PREFIX, text);
    let _ = panic::catch_unwind(AssertUnwindSafe(|| logger.debug(&line)));
}
