//! Concrete handlers, one per [`Severity`](crate::severity::Severity).
//!
//! Each handler supplies a claim predicate and a terminal action through
//! [`SeverityHandler`](crate::handler::SeverityHandler). Forwarding to the
//! next link is the chain's job.

pub mod error;
pub mod fatal;
pub mod unknown;
pub mod warning;

pub use error::{ErrorHandler, SinkPolicy};
pub use fatal::FatalErrorHandler;
pub use unknown::UnknownHandler;
pub use warning::WarningHandler;
