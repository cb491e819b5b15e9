// Rust guideline compliant 2026-10-18

//! stagefmt Core Library
//!
//! This crate provides the building blocks of the stagefmt pre-commit formatter:
//! - Rule table mapping file extensions to formatter command templates
//! - Dispatcher that renders and runs the matching formatter for a file
//! - Command runners (shell, dry-run) behind the `CommandRunner` trait
//! - Staged file discovery from the Git index
//! - Configuration, logging setup, and error types

pub mod config;
pub mod dispatcher;
pub mod error;
pub mod logging;
pub mod rules;
pub mod runner;
pub mod staged;

pub use config::{Config, LogLevel};
pub use dispatcher::{Dispatcher, Outcome};
pub use error::{Error, Result};
pub use logging::init_tracing;
pub use rules::{extension_of, FormatRule, RuleTable};
pub use runner::{CommandRunner, DryRunRunner, RunStatus, ShellRunner};
pub use staged::{GitIndex, StagedFiles};
