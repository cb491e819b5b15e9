// Rust guideline compliant 2026-10-18

//! stagefmt Git Hooks
//!
//! This crate provides the two ways of driving the formatter dispatcher:
//! - Pre-commit: format every file staged in the Git index
//! - Files: format the paths given on the command line

pub mod files;
pub mod pre_commit;

pub use files::{files_hook, format_files};
pub use pre_commit::{format_staged, pre_commit_hook};

use stagefmt_core::{CommandRunner, Config, DryRunRunner, ShellRunner};
use std::path::Path;

/// Builds the command runner described by `config`.
///
/// # Arguments
///
/// * `config` - Loaded configuration (`dry_run`, `shell`)
/// * `dir` - Working directory for formatter processes, `None` for the current one
pub fn runner_for(config: &Config, dir: Option<&Path>) -> Box<dyn CommandRunner> {
    if config.dry_run {
        return Box::new(DryRunRunner::new());
    }
    let runner = ShellRunner::new(config.shell.as_deref());
    match dir {
        Some(dir) => Box::new(runner.in_dir(dir)),
        None => Box::new(runner),
    }
}
