// Rust guideline compliant 2026-10-18

//! Extension-based formatter dispatch.

use crate::error::{Error, Result};
use crate::rules::RuleTable;
use crate::runner::CommandRunner;
use std::io::Write;
use std::path::Path;

/// What the dispatcher did with a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A formatter ran and exited successfully.
    Formatted {
        /// The command line that was executed.
        command: String,
    },
    /// No rule matched the file's extension; nothing ran.
    Skipped,
}

/// Maps files to formatter commands and runs them.
///
/// The rule table and the runner are injected, so the same dispatcher serves
/// both the staged-files hook and direct invocation.
#[derive(Debug)]
pub struct Dispatcher<R> {
    rules: RuleTable,
    runner: R,
}

impl<R: CommandRunner> Dispatcher<R> {
    /// Creates a dispatcher over `rules` executing through `runner`.
    pub fn new(rules: RuleTable, runner: R) -> Self {
        Self { rules, runner }
    }

    /// The rule table in use.
    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    /// The runner in use.
    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Formats a single file.
    ///
    /// The caller is responsible for checking that `path` exists. When the
    /// extension has a rule, `Formatting <path>...` is written to `out` and
    /// the rendered command runs to completion.
    ///
    /// # Arguments
    ///
    /// * `path` - File to format, passed literally into the command
    /// * `out` - Destination for progress lines
    ///
    /// # Returns
    ///
    /// [`Outcome::Formatted`] when a formatter ran, [`Outcome::Skipped`] when
    /// no rule matched.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The formatter could not be started
    /// - The formatter exited with a non-zero status
    /// - Writing the progress line fails
    pub fn format_file(&self, path: &Path, out: &mut dyn Write) -> Result<Outcome> {
        let Some(rule) = self.rules.rule_for(path) else {
            tracing::debug!(path = %path.display(), "no formatter for extension, skipping");
            return Ok(Outcome::Skipped);
        };

        if path.to_str().is_none() {
            tracing::warn!(
                path = %path.display(),
                "path is not valid UTF-8, command uses a lossy rendering"
            );
        }
        let command = rule.render(path);
        writeln!(out, "Formatting {}...", path.display())?;
        out.flush()?;
        tracing::info!(path = %path.display(), command = %command, "running formatter");

        let status = self.runner.run(&command).map_err(|source| Error::Spawn {
            path: path.to_path_buf(),
            command: command.clone(),
            source,
        })?;

        if !status.success() {
            return Err(Error::FormatterFailed {
                path: path.to_path_buf(),
                command,
                code: status.code(),
            });
        }

        Ok(Outcome::Formatted { command })
    }
}
