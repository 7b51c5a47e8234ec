//! Handler contract shared by every link in a [`Chain`].
//!
//! A handler answers two questions: does it claim a given [`Severity`], and
//! what terminal action does it perform once it has claimed a message. The
//! forwarding itself lives in [`Chain::handle`], so concrete handlers never
//! see messages that belong to someone else.
//!
//! [`Chain`]: crate::chain::Chain
//! [`Chain::handle`]: crate::chain::Chain::handle

use std::{fmt, io, path::PathBuf};

use thiserror::Error;

use crate::{
    handlers::{ErrorHandler, FatalErrorHandler, UnknownHandler, WarningHandler},
    log_message::LogMessage,
    severity::Severity,
};

/// Severities that are escalation triggers rather than loggable outcomes.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Escalation {
    #[error("Fatal Error: {0}")]
    Fatal(String),
    #[error("Unknown log message: {0}")]
    Unknown(String),
}

/// Errors surfaced by [`Chain::handle`](crate::chain::Chain::handle).
#[derive(Debug, Error)]
pub enum DispatchError {
    /// A handler claimed the message and escalated it on purpose.
    #[error(transparent)]
    Escalated(#[from] Escalation),
    /// No handler in the chain claimed the message.
    #[error("Unhandled log message: {0}")]
    Unhandled(String),
    /// The terminal action could not write to its target.
    #[error("failed to append to {}: {source}", .path.display())]
    SinkWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl DispatchError {
    /// `true` when a handler deliberately escalated the message.
    pub fn is_escalation(&self) -> bool {
        matches!(self, Self::Escalated(_))
    }

    /// Message text carried by the error, if any.
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Escalated(Escalation::Fatal(text) | Escalation::Unknown(text))
            | Self::Unhandled(text) => Some(text.as_str()),
            Self::SinkWrite { .. } => None,
        }
    }
}

/// Capability implemented by each concrete handler.
pub trait SeverityHandler: Send + Sync {
    /// Return `true` if this handler owns messages of `severity`.
    fn claims(&self, severity: Severity) -> bool;

    /// Perform the terminal action for a claimed message.
    fn act(&self, message: &LogMessage) -> Result<(), DispatchError>;
}

/// Tag identifying a [`Handler`] variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HandlerKind {
    Fatal,
    Error,
    Warning,
    Unknown,
}

impl fmt::Display for HandlerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            HandlerKind::Fatal => "fatal",
            HandlerKind::Error => "error",
            HandlerKind::Warning => "warning",
            HandlerKind::Unknown => "unknown",
        };
        f.write_str(s)
    }
}

/// Closed set of handlers that may appear in a chain.
#[derive(Debug)]
pub enum Handler {
    Fatal(FatalErrorHandler),
    Error(ErrorHandler),
    Warning(WarningHandler),
    Unknown(UnknownHandler),
}

impl Handler {
    pub fn kind(&self) -> HandlerKind {
        match self {
            Self::Fatal(_) => HandlerKind::Fatal,
            Self::Error(_) => HandlerKind::Error,
            Self::Warning(_) => HandlerKind::Warning,
            Self::Unknown(_) => HandlerKind::Unknown,
        }
    }

    fn inner(&self) -> &dyn SeverityHandler {
        match self {
            Self::Fatal(h) => h,
            Self::Error(h) => h,
            Self::Warning(h) => h,
            Self::Unknown(h) => h,
        }
    }
}

impl SeverityHandler for Handler {
    fn claims(&self, severity: Severity) -> bool {
        self.inner().claims(severity)
    }

    fn act(&self, message: &LogMessage) -> Result<(), DispatchError> {
        self.inner().act(message)
    }
}

impl From<FatalErrorHandler> for Handler {
    fn from(value: FatalErrorHandler) -> Self {
        Self::Fatal(value)
    }
}

impl From<ErrorHandler> for Handler {
    fn from(value: ErrorHandler) -> Self {
        Self::Error(value)
    }
}

impl From<WarningHandler> for Handler {
    fn from(value: WarningHandler) -> Self {
        Self::Warning(value)
    }
}

impl From<UnknownHandler> for Handler {
    fn from(value: UnknownHandler) -> Self {
        Self::Unknown(value)
    }
}
