// Rust guideline compliant 2026-10-18

//! Direct invocation on explicit file paths.

use anyhow::Result;
use stagefmt_core::{CommandRunner, Config, Dispatcher, Error, Outcome, RuleTable};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Formats the files named on the command line.
///
/// # Arguments
///
/// * `paths` - Candidate paths, relative to the current directory
/// * `config` - Loaded configuration
///
/// # Errors
///
/// Returns an error if no paths are given or a formatter fails.
pub fn files_hook(paths: &[PathBuf], config: &Config) -> Result<()> {
    let dispatcher = Dispatcher::new(RuleTable::default(), crate::runner_for(config, None));
    let stdout = std::io::stdout();
    format_files(paths, &dispatcher, &mut stdout.lock())?;
    Ok(())
}

/// Formats each existing path in order.
///
/// Missing paths print `File not found: <path>` and are skipped; a formatter
/// failure stops the run.
///
/// # Returns
///
/// The number of files a formatter ran on.
///
/// # Errors
///
/// Returns [`Error::NoFiles`] when `paths` is empty, or the dispatcher's
/// error when a formatter fails.
pub fn format_files<P, R>(
    paths: &[P],
    dispatcher: &Dispatcher<R>,
    out: &mut dyn Write,
) -> stagefmt_core::Result<usize>
where
    P: AsRef<Path>,
    R: CommandRunner,
{
    if paths.is_empty() {
        return Err(Error::NoFiles);
    }

    let mut formatted = 0;
    for path in paths {
        let path = path.as_ref();
        if !path.exists() {
            writeln!(out, "File not found: {}", path.display())?;
            tracing::warn!(path = %path.display(), "file not found, skipping");
            continue;
        }
        if let Outcome::Formatted { .. } = dispatcher.format_file(path, out)? {
            formatted += 1;
        }
    }

    Ok(formatted)
}
