// Rust guideline compliant 2026-10-18

//! Implementation of the `stagefmt staged` command.

use anyhow::Result;
use stagefmt_core::Config;

/// Formats every file staged in the repository containing the current directory.
///
/// # Errors
///
/// Returns an error if the staged list cannot be read or a formatter fails.
pub fn execute(config: &Config) -> Result<()> {
    let repo_path = std::env::current_dir()?;
    stagefmt_hooks::pre_commit_hook(&repo_path, config)
}
