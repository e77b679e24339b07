//! Recording delivery logger for testing.

use std::sync::Mutex;

use crate::logging::DeliveryLogger;

/// Logger that keeps every line it receives.
#[derive(Debug, Default)]
pub struct RecordingLogger {
    lines: Mutex<Vec<String>>,
}

impl RecordingLogger {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// All lines received so far.
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Number of lines received so far.
    pub fn count(&self) -> usize {
        self.lines
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }
}

impl DeliveryLogger for RecordingLogger {
    fn debug(&self, message: &str) {
        self.lines
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(message.to_string());
    }
}
