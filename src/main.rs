//! Demonstration driver for the standard handler chain.
//!
//! Usage: `severity-chain [ERROR_LOG]`. Every dispatch failure is printed to
//! stderr and the next message is processed regardless.

use std::{env, process::ExitCode};

use severity_chain::{ChainConfig, DEFAULT_ERROR_LOG, LogMessage};

#[cfg(feature = "tracing-compat")]
fn init_diagnostics() {
    use tracing_subscriber::EnvFilter;

    // Also installs the `log` bridge so library records reach the subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(not(feature = "tracing-compat"))]
fn init_diagnostics() {}

fn main() -> ExitCode {
    init_diagnostics();

    let error_log = env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_ERROR_LOG.to_owned());
    let chain = match ChainConfig::new(&error_log).build() {
        Ok(chain) => chain,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };
    #[cfg(feature = "tracing-compat")]
    tracing::info!(error_log = %error_log, handlers = chain.len(), "chain ready");

    let messages = [
        LogMessage::warning("This is a warning"),
        LogMessage::error("This is an error"),
        LogMessage::fatal("This is a fatal error"),
        LogMessage::unknown("This is an unknown message"),
    ];
    for message in &messages {
        if let Err(err) = chain.handle(message) {
            eprintln!("{err}");
        }
    }
    ExitCode::SUCCESS
}
