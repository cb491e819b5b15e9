// Rust guideline compliant 2026-10-18

//! Tracing setup shared by the stagefmt binaries.

use crate::config::{Config, LogLevel};
use crate::Result;
use std::fs::OpenOptions;
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt;

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => Level::ERROR,
            LogLevel::Warn => Level::WARN,
            LogLevel::Info => Level::INFO,
            LogLevel::Debug => Level::DEBUG,
        }
    }
}

/// Installs the global tracing subscriber.
///
/// Logs go to stderr, or as JSON lines to `config.log_file` when set. The
/// returned guard must be held until exit so buffered file logs are flushed.
/// Calling this more than once keeps the first subscriber.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened.
pub fn init_tracing(config: &Config) -> Result<Option<WorkerGuard>> {
    let level = Level::from(config.log_level);

    if let Some(path) = &config.log_file {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        let (writer, guard) = tracing_appender::non_blocking(file);
        let subscriber = fmt()
            .with_max_level(level)
            .with_target(false)
            .json()
            .with_writer(writer)
            .finish();
        let _ = tracing::subscriber::set_global_default(subscriber);
        return Ok(Some(guard));
    }

    let subscriber = fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
    Ok(None)
}
