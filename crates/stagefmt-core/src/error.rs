// Rust guideline compliant 2026-10-18

//! Error types for the stagefmt core library.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for stagefmt operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for stagefmt operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Reading the staged file list from Git failed.
    #[error("Failed to get staged files: {0}")]
    Git(#[from] git2::Error),

    /// Invalid configuration value or file.
    #[error("Invalid config: {0}")]
    Config(String),

    /// Direct mode was invoked without any paths.
    #[error("No files given. Usage: stagefmt files <file>...")]
    NoFiles,

    /// The formatter command could not be started.
    #[error("Error formatting {}: failed to run `{command}`: {source}", path.display())]
    Spawn {
        /// File that was being formatted.
        path: PathBuf,
        /// Rendered command line.
        command: String,
        /// Underlying spawn error.
        #[source]
        source: std::io::Error,
    },

    /// The formatter exited with a non-zero status.
    #[error("Error formatting {}: `{command}` exited with {}", path.display(), describe_code(*code))]
    FormatterFailed {
        /// File that was being formatted.
        path: PathBuf,
        /// Rendered command line.
        command: String,
        /// Exit code, `None` when the process was killed by a signal.
        code: Option<i32>,
    },
}

fn describe_code(code: Option<i32>) -> String {
    match code {
        Some(code) => format!("status {}", code),
        None => "no status (terminated by signal)".to_string(),
    }
}
