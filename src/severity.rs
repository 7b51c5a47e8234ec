//! Closed severity classification attached to every [`LogMessage`].
//!
//! [`LogMessage`]: crate::log_message::LogMessage

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Severity {
    Warning,
    Error,
    FatalError,
    Unknown,
}

impl Severity {
    /// Every severity in declaration order.
    pub const ALL: [Severity; 4] = [
        Severity::Warning,
        Severity::Error,
        Severity::FatalError,
        Severity::Unknown,
    ];
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
            Severity::FatalError => "FATAL",
            Severity::Unknown => "UNKNOWN",
        };
        f.write_str(s)
    }
}

/// Returned when a string names no [`Severity`].
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid severity: {0}")]
pub struct ParseSeverityError(String);

impl FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "WARN" | "WARNING" => Ok(Self::Warning),
            "ERROR" => Ok(Self::Error),
            "FATAL" | "FATAL_ERROR" | "FATALERROR" => Ok(Self::FatalError),
            "UNKNOWN" => Ok(Self::Unknown),
            _ => Err(ParseSeverityError(s.to_owned())),
        }
    }
}
