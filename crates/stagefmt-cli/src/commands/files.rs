// Rust guideline compliant 2026-10-18

//! Implementation of the `stagefmt files` command.

use anyhow::Result;
use stagefmt_core::Config;
use std::path::PathBuf;

/// Formats the given paths; missing paths are reported and skipped.
///
/// # Errors
///
/// Returns an error if `paths` is empty or a formatter fails.
pub fn execute(paths: Vec<PathBuf>, config: &Config) -> Result<()> {
    stagefmt_hooks::files_hook(&paths, config)
}
