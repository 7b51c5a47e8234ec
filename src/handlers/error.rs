//! Handler that appends error messages to a text file.
//!
//! The file is opened in append mode for every message and closed again
//! afterwards. Writes are serialised through a mutex so a chain shared
//! between threads never interleaves partial lines.

use std::{
    fs::{File, OpenOptions},
    io::{self, Write},
    path::{Path, PathBuf},
};

use log::warn;
use parking_lot::Mutex;

use crate::{
    handler::{DispatchError, SeverityHandler},
    log_message::LogMessage,
    severity::Severity,
};

/// What to do when the error log cannot be written.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SinkPolicy {
    /// Return [`DispatchError::SinkWrite`] to the caller.
    #[default]
    Surface,
    /// Emit a warning through the `log` facade and report success.
    BestEffort,
}

/// Claims [`Severity::Error`] and appends `Error: <text>` to a file.
#[derive(Debug)]
pub struct ErrorHandler {
    path: PathBuf,
    policy: SinkPolicy,
    write_lock: Mutex<()>,
}

fn open_log_file(path: &Path) -> io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}

impl ErrorHandler {
    /// Create a handler appending to `path` with [`SinkPolicy::Surface`].
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            policy: SinkPolicy::default(),
            write_lock: Mutex::new(()),
        }
    }

    /// Replace the failure policy.
    pub fn with_policy(mut self, policy: SinkPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn policy(&self) -> SinkPolicy {
        self.policy
    }

    fn append_line(&self, line: &str) -> io::Result<()> {
        let _guard = self.write_lock.lock();
        let mut file = open_log_file(&self.path)?;
        // One write per line so concurrent processes cannot split it.
        file.write_all(format!("{line}\n").as_bytes())?;
        file.flush()
    }
}

impl SeverityHandler for ErrorHandler {
    fn claims(&self, severity: Severity) -> bool {
        severity == Severity::Error
    }

    fn act(&self, message: &LogMessage) -> Result<(), DispatchError> {
        let line = format!("Error: {}", message.text());
        match self.append_line(&line) {
            Ok(()) => Ok(()),
            Err(source) => match self.policy {
                SinkPolicy::Surface => Err(DispatchError::SinkWrite {
                    path: self.path.clone(),
                    source,
                }),
                SinkPolicy::BestEffort => {
                    warn!(
                        "ErrorHandler: could not append to {}: {source}; message dropped",
                        self.path.display()
                    );
                    Ok(())
                }
            },
        }
    }
}
