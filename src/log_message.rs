//! Immutable log message pairing a [`Severity`] with free text.
//!
//! Messages are created by the caller at submission time and only ever
//! borrowed by handlers.

use std::fmt;

use crate::severity::Severity;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogMessage {
    severity: Severity,
    text: String,
}

impl LogMessage {
    /// Construct a message from `severity` and `text`. Empty text is allowed.
    pub fn new(severity: Severity, text: impl Into<String>) -> Self {
        Self {
            severity,
            text: text.into(),
        }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self::new(Severity::Warning, text)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(Severity::Error, text)
    }

    pub fn fatal(text: impl Into<String>) -> Self {
        Self::new(Severity::FatalError, text)
    }

    pub fn unknown(text: impl Into<String>) -> Self {
        Self::new(Severity::Unknown, text)
    }

    /// Classification used by handlers to decide whether to claim the message.
    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for LogMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.severity, self.text)
    }
}
