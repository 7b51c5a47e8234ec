//! Programmatic configuration for the standard handler chain.
//!
//! [`ChainConfig`] collects the few knobs the standard chain exposes and
//! builds it through [`ChainBuilder`]. There is no file-based configuration.

use std::{
    fmt,
    io::Write,
    path::{Path, PathBuf},
};

use crate::{
    chain::{Chain, ChainBuildError, ChainBuilder},
    handlers::{ErrorHandler, FatalErrorHandler, SinkPolicy, UnknownHandler, WarningHandler},
};

/// Default target for error lines.
pub const DEFAULT_ERROR_LOG: &str = "errors.log";

/// Builder for the standard Fatal → Error → Warning → Unknown chain.
pub struct ChainConfig {
    error_log: PathBuf,
    sink_policy: SinkPolicy,
    warning_writer: Option<Box<dyn Write + Send>>,
}

impl ChainConfig {
    /// Create a configuration appending error lines to `error_log`.
    pub fn new(error_log: impl Into<PathBuf>) -> Self {
        Self {
            error_log: error_log.into(),
            sink_policy: SinkPolicy::default(),
            warning_writer: None,
        }
    }

    /// Set how error log write failures are reported.
    pub fn with_sink_policy(mut self, policy: SinkPolicy) -> Self {
        self.sink_policy = policy;
        self
    }

    /// Send warning lines to `writer` instead of `stdout`.
    pub fn with_warning_writer<W>(mut self, writer: W) -> Self
    where
        W: Write + Send + 'static,
    {
        self.warning_writer = Some(Box::new(writer));
        self
    }

    pub fn error_log(&self) -> &Path {
        &self.error_log
    }

    pub fn sink_policy(&self) -> SinkPolicy {
        self.sink_policy
    }

    /// Build the configured chain.
    pub fn build(self) -> Result<Chain, ChainBuildError> {
        let warnings = match self.warning_writer {
            Some(writer) => WarningHandler::new(writer),
            None => WarningHandler::stdout(),
        };
        ChainBuilder::new()
            .with_next(FatalErrorHandler)
            .with_next(ErrorHandler::new(self.error_log).with_policy(self.sink_policy))
            .with_next(warnings)
            .with_next(UnknownHandler)
            .build()
    }
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ERROR_LOG)
    }
}

impl fmt::Debug for ChainConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChainConfig")
            .field("error_log", &self.error_log)
            .field("sink_policy", &self.sink_policy)
            .field("custom_warning_writer", &self.warning_writer.is_some())
            .finish()
    }
}
