// Rust guideline compliant 2026-10-18

//! Command execution capability.
//!
//! The dispatcher never spawns processes directly. It hands rendered command
//! lines to a [`CommandRunner`], which lets tests substitute a recording fake
//! and lets `--dry-run` print commands instead of running them.

use std::cell::RefCell;
use std::io::{Stdout, Write};
use std::path::PathBuf;
use std::process::{Command, ExitStatus};

/// Exit status of a finished command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunStatus {
    code: Option<i32>,
}

impl RunStatus {
    /// Status with the given exit code.
    pub fn from_code(code: i32) -> Self {
        Self { code: Some(code) }
    }

    /// Successful status (exit code 0).
    pub fn ok() -> Self {
        Self::from_code(0)
    }

    /// Status of a process that ended without an exit code (e.g. a signal).
    pub fn terminated() -> Self {
        Self { code: None }
    }

    /// Whether the command exited with status 0.
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    /// The exit code, if any.
    pub fn code(&self) -> Option<i32> {
        self.code
    }
}

impl From<ExitStatus> for RunStatus {
    fn from(status: ExitStatus) -> Self {
        Self {
            code: status.code(),
        }
    }
}

/// Executes a rendered command line and reports its exit status.
pub trait CommandRunner {
    /// Runs `command` to completion.
    ///
    /// # Errors
    ///
    /// Returns an error if the command could not be started at all.
    fn run(&self, command: &str) -> std::io::Result<RunStatus>;
}

impl<R: CommandRunner + ?Sized> CommandRunner for &R {
    fn run(&self, command: &str) -> std::io::Result<RunStatus> {
        (**self).run(command)
    }
}

impl<R: CommandRunner + ?Sized> CommandRunner for Box<R> {
    fn run(&self, command: &str) -> std::io::Result<RunStatus> {
        (**self).run(command)
    }
}

/// Runs commands through the platform shell with inherited stdio.
#[derive(Debug, Clone)]
pub struct ShellRunner {
    shell: String,
    flag: &'static str,
    current_dir: Option<PathBuf>,
}

impl ShellRunner {
    /// Creates a runner using `shell`, or the platform default when `None`.
    ///
    /// The default is `sh -c` on unix and `cmd /C` on windows.
    pub fn new(shell: Option<&str>) -> Self {
        let shell = shell
            .map(str::to_string)
            .unwrap_or_else(|| default_shell().to_string());
        let flag = command_flag(&shell);
        Self {
            shell,
            flag,
            current_dir: None,
        }
    }

    /// Runs every command from `dir` instead of the current directory.
    pub fn in_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.current_dir = Some(dir.into());
        self
    }

    /// The shell program used to interpret commands.
    pub fn shell(&self) -> &str {
        &self.shell
    }
}

impl Default for ShellRunner {
    fn default() -> Self {
        Self::new(None)
    }
}

impl CommandRunner for ShellRunner {
    fn run(&self, command: &str) -> std::io::Result<RunStatus> {
        let mut cmd = Command::new(&self.shell);
        cmd.arg(self.flag).arg(command);
        if let Some(dir) = &self.current_dir {
            cmd.current_dir(dir);
        }
        tracing::debug!(shell = %self.shell, command, "spawning formatter");
        let status = cmd.status()?;
        Ok(status.into())
    }
}

/// Prints commands instead of executing them. Every command "succeeds".
///
/// `Would run: <command>` lines go to the wrapped writer, stdout by default.
#[derive(Debug)]
pub struct DryRunRunner<W = Stdout> {
    out: RefCell<W>,
}

impl DryRunRunner<Stdout> {
    /// Creates a dry-run runner writing to stdout.
    pub fn new() -> Self {
        Self::with_writer(std::io::stdout())
    }
}

impl Default for DryRunRunner<Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> DryRunRunner<W> {
    /// Creates a dry-run runner writing to `out`.
    pub fn with_writer(out: W) -> Self {
        Self {
            out: RefCell::new(out),
        }
    }

    /// Returns the wrapped writer.
    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }
}

impl<W: Write> CommandRunner for DryRunRunner<W> {
    fn run(&self, command: &str) -> std::io::Result<RunStatus> {
        let mut out = self.out.borrow_mut();
        writeln!(out, "Would run: {}", command)?;
        out.flush()?;
        Ok(RunStatus::ok())
    }
}

fn default_shell() -> &'static str {
    if cfg!(windows) {
        "cmd"
    } else {
        "sh"
    }
}

fn command_flag(shell: &str) -> &'static str {
    let name = shell
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(shell)
        .to_ascii_lowercase();
    if name == "cmd" || name == "cmd.exe" {
        "/C"
    } else {
        "-c"
    }
}
