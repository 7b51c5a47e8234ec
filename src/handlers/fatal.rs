//! Handler that escalates fatal messages instead of recording them.

use crate::{
    handler::{DispatchError, Escalation, SeverityHandler},
    log_message::LogMessage,
    severity::Severity,
};

/// Claims [`Severity::FatalError`] and always fails with
/// [`Escalation::Fatal`].
#[derive(Clone, Copy, Debug, Default)]
pub struct FatalErrorHandler;

impl SeverityHandler for FatalErrorHandler {
    fn claims(&self, severity: Severity) -> bool {
        severity == Severity::FatalError
    }

    fn act(&self, message: &LogMessage) -> Result<(), DispatchError> {
        Err(Escalation::Fatal(message.text().to_owned()).into())
    }
}
