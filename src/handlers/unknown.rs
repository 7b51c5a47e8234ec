//! Catch-all handler for unclassified messages.

use crate::{
    handler::{DispatchError, Escalation, SeverityHandler},
    log_message::LogMessage,
    severity::Severity,
};

/// Claims [`Severity::Unknown`] and fails with [`Escalation::Unknown`].
///
/// Unknown messages are never accepted silently.
#[derive(Clone, Copy, Debug, Default)]
pub struct UnknownHandler;

impl SeverityHandler for UnknownHandler {
    fn claims(&self, severity: Severity) -> bool {
        severity == Severity::Unknown
    }

    fn act(&self, message: &LogMessage) -> Result<(), DispatchError> {
        Err(Escalation::Unknown(message.text().to_owned()).into())
    }
}
