//! Handler that prints warnings to an informational stream.

use std::{
    fmt,
    io::{self, Write},
    path::PathBuf,
};

use parking_lot::Mutex;

use crate::{
    handler::{DispatchError, SeverityHandler},
    log_message::LogMessage,
    severity::Severity,
};

/// Claims [`Severity::Warning`] and writes `Warning: <text>` to a stream.
///
/// Defaults to `stdout`. Any `Write + Send` target can be supplied with
/// [`WarningHandler::new`].
pub struct WarningHandler {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl WarningHandler {
    /// Create a handler writing to an arbitrary stream.
    pub fn new<W>(writer: W) -> Self
    where
        W: Write + Send + 'static,
    {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    /// Create a handler writing to `stdout`.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }

    fn write_line(&self, line: &str) -> io::Result<()> {
        let mut writer = self.writer.lock();
        writeln!(writer, "{line}")?;
        writer.flush()
    }
}

impl Default for WarningHandler {
    fn default() -> Self {
        Self::stdout()
    }
}

impl fmt::Debug for WarningHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("WarningHandler(<dyn Write>)")
    }
}

impl SeverityHandler for WarningHandler {
    fn claims(&self, severity: Severity) -> bool {
        severity == Severity::Warning
    }

    fn act(&self, message: &LogMessage) -> Result<(), DispatchError> {
        self.write_line(&format!("Warning: {}", message.text()))
            .map_err(|source| DispatchError::SinkWrite {
                path: PathBuf::from("<stream>"),
                source,
            })
    }
}
