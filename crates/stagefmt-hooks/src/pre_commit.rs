// Rust guideline compliant 2026-10-18

//! Pre-commit hook implementation.
//!
//! Formats every staged file that still exists in the working tree.

use anyhow::Result;
use stagefmt_core::{CommandRunner, Config, Dispatcher, GitIndex, Outcome, RuleTable, StagedFiles};
use std::io::Write;
use std::path::Path;

/// Runs the pre-commit hook.
///
/// # Arguments
///
/// * `repo_path` - Path inside the Git repository
/// * `config` - Loaded configuration
///
/// # Returns
///
/// Ok if every staged file was formatted or skipped, Err otherwise.
///
/// # Errors
///
/// Returns an error if:
/// - The staged file list cannot be read (nothing is formatted)
/// - A formatter fails (remaining files are not processed)
pub fn pre_commit_hook(repo_path: &Path, config: &Config) -> Result<()> {
    let index = GitIndex::discover(repo_path)?;
    let root = index.workdir()?.to_path_buf();
    let dispatcher = Dispatcher::new(
        RuleTable::default(),
        crate::runner_for(config, Some(&root)),
    );

    let stdout = std::io::stdout();
    format_staged(&index, &root, &dispatcher, &mut stdout.lock())?;
    Ok(())
}

/// Formats the staged files reported by `source`.
///
/// Paths are checked against `root` and skipped unless they are regular files
/// (deleted or renamed-away entries). Files are processed in the order the
/// source reports them and the first formatter failure stops the run.
///
/// # Returns
///
/// The number of files a formatter ran on.
///
/// # Errors
///
/// Returns an error if the staged list cannot be read or a formatter fails.
pub fn format_staged<S, R>(
    source: &S,
    root: &Path,
    dispatcher: &Dispatcher<R>,
    out: &mut dyn Write,
) -> stagefmt_core::Result<usize>
where
    S: StagedFiles + ?Sized,
    R: CommandRunner,
{
    let staged = source.staged_paths()?;
    let mut formatted = 0;

    for path in staged {
        if !root.join(&path).is_file() {
            tracing::debug!(path = %path.display(), "staged path is not a file, skipping");
            continue;
        }
        if let Outcome::Formatted { .. } = dispatcher.format_file(&path, out)? {
            formatted += 1;
        }
    }

    Ok(formatted)
}
