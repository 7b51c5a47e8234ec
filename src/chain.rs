//! Ordered handler chain and its builder.
//!
//! The chain owns every handler in a `Vec`. A node's successor is simply the
//! next position in that vector, so a chain cannot contain a cycle and is
//! immutable once built.
//!
//! Dispatch walks the chain from the head. The first handler that claims the
//! message's severity performs its terminal action and dispatch stops there,
//! whatever the outcome of that action. When every handler declines, the
//! message is reported as [`DispatchError::Unhandled`].

use std::path::PathBuf;

use log::{debug, trace};
use thiserror::Error;

use crate::{
    handler::{DispatchError, Handler, HandlerKind, SeverityHandler},
    handlers::{ErrorHandler, FatalErrorHandler, UnknownHandler, WarningHandler},
    log_message::LogMessage,
    severity::Severity,
};

/// Errors that may occur while building a chain.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChainBuildError {
    #[error("a chain needs at least one handler")]
    Empty,
    /// Two links would both claim the same severity.
    #[error("{severity} is claimed by both the {first} and {second} handlers")]
    DuplicateClaim {
        severity: Severity,
        first: HandlerKind,
        second: HandlerKind,
    },
}

/// Outcome of a successful dispatch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Claim {
    /// Kind of handler that claimed the message.
    pub kind: HandlerKind,
    /// Position of the claimant; equal to the number of forwarding hops.
    pub position: usize,
}

/// Builder wiring handlers into a single linear sequence.
#[derive(Debug, Default)]
pub struct ChainBuilder {
    handlers: Vec<Handler>,
}

impl ChainBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install `handler` as the successor of the current tail.
    ///
    /// The first call sets the head.
    pub fn with_next(mut self, handler: impl Into<Handler>) -> Self {
        self.handlers.push(handler.into());
        self
    }

    /// Builder for the canonical chain: Fatal → Error → Warning → Unknown.
    ///
    /// Fatal sits at the head so fatal messages are decided with no hops.
    /// Error lines are appended to `error_log`; warnings go to `stdout`.
    pub fn standard(error_log: impl Into<PathBuf>) -> Self {
        Self::new()
            .with_next(FatalErrorHandler)
            .with_next(ErrorHandler::new(error_log))
            .with_next(WarningHandler::stdout())
            .with_next(UnknownHandler)
    }

    /// Validate exclusivity of claims and freeze the chain.
    pub fn build(self) -> Result<Chain, ChainBuildError> {
        if self.handlers.is_empty() {
            return Err(ChainBuildError::Empty);
        }
        for severity in Severity::ALL {
            let mut claimants = self.handlers.iter().filter(|h| h.claims(severity));
            if let (Some(first), Some(second)) = (claimants.next(), claimants.next()) {
                return Err(ChainBuildError::DuplicateClaim {
                    severity,
                    first: first.kind(),
                    second: second.kind(),
                });
            }
        }
        Ok(Chain {
            handlers: self.handlers,
        })
    }
}

/// Immutable, ordered sequence of handlers with a designated head.
#[derive(Debug)]
pub struct Chain {
    handlers: Vec<Handler>,
}

impl Chain {
    /// Submit `message` at the head of the chain.
    ///
    /// Returns the [`Claim`] when the claiming handler's action succeeds.
    /// Escalations and sink failures from the claimant are returned as-is;
    /// they are never forwarded further down the chain.
    pub fn handle(&self, message: &LogMessage) -> Result<Claim, DispatchError> {
        let severity = message.severity();
        for (position, handler) in self.handlers.iter().enumerate() {
            if !handler.claims(severity) {
                trace!("{} handler declined {severity}; forwarding", handler.kind());
                continue;
            }
            debug!(
                "{} handler at position {position} claimed {severity}",
                handler.kind()
            );
            handler.act(message)?;
            return Ok(Claim {
                kind: handler.kind(),
                position,
            });
        }
        Err(DispatchError::Unhandled(message.text().to_owned()))
    }

    /// Kind of the handler that would claim `severity`, without acting.
    pub fn claimant(&self, severity: Severity) -> Option<HandlerKind> {
        self.handlers
            .iter()
            .find(|h| h.claims(severity))
            .map(Handler::kind)
    }

    /// Handler kinds from head to tail.
    pub fn kinds(&self) -> Vec<HandlerKind> {
        self.handlers.iter().map(Handler::kind).collect()
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Always `false`; [`ChainBuilder::build`] rejects empty chains.
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}
