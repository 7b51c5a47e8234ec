//! Severity-based dispatch of log messages through an ordered handler chain.
//!
//! Each [`LogMessage`] is submitted at the head of a [`Chain`]. Handlers are
//! tried in order and the first one that claims the message's [`Severity`]
//! performs its terminal action: warnings are printed, errors are appended to
//! a file, and fatal or unknown messages are escalated back to the caller as
//! [`DispatchError::Escalated`]. A message nobody claims yields
//! [`DispatchError::Unhandled`].

pub mod chain;
pub mod config;
pub mod handler;
pub mod handlers;
pub mod log_message;
pub mod severity;

pub use chain::{Chain, ChainBuildError, ChainBuilder, Claim};
pub use config::{ChainConfig, DEFAULT_ERROR_LOG};
pub use handler::{DispatchError, Escalation, Handler, HandlerKind, SeverityHandler};
pub use handlers::{ErrorHandler, FatalErrorHandler, SinkPolicy, UnknownHandler, WarningHandler};
pub use log_message::LogMessage;
pub use severity::{ParseSeverityError, Severity};
