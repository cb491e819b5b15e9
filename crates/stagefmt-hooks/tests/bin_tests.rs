// Rust guideline compliant 2026-10-18

//! Exit code tests for the hook binaries.

use std::process::{Command, Output};
use tempfile::TempDir;

fn run(bin: &str, dir: &std::path::Path, args: &[&str]) -> Output {
    Command::new(bin)
        .current_dir(dir)
        .args(args)
        .env_remove("STAGEFMT_LOG_LEVEL")
        .env_remove("STAGEFMT_LOG_FILE")
        .env_remove("STAGEFMT_SHELL")
        .env_remove("STAGEFMT_DRY_RUN")
        .output()
        .expect("run hook binary")
}

#[test]
fn files_without_arguments_exits_non_zero() {
    let temp_dir = TempDir::new().expect("temp dir");
    let output = run(env!("CARGO_BIN_EXE_stagefmt-files"), temp_dir.path(), &[]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("No files given"));
}

#[test]
fn files_with_missing_file_completes() {
    let temp_dir = TempDir::new().expect("temp dir");
    let output = run(
        env!("CARGO_BIN_EXE_stagefmt-files"),
        temp_dir.path(),
        &["missing.js"],
    );

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(String::from_utf8_lossy(&output.stdout).contains("File not found: missing.js"));
}

#[test]
fn files_dry_run_prints_command() {
    let temp_dir = TempDir::new().expect("temp dir");
    std::fs::write(temp_dir.path().join("a.cs"), "class A {}").expect("write a.cs");

    let output = Command::new(env!("CARGO_BIN_EXE_stagefmt-files"))
        .current_dir(temp_dir.path())
        .arg("a.cs")
        .env("STAGEFMT_DRY_RUN", "true")
        .output()
        .expect("run stagefmt-files");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Formatting a.cs..."));
    assert!(stdout.contains("Would run: dotnet format a.cs"));
}

#[cfg(unix)]
#[test]
fn files_formatter_failure_exits_non_zero() {
    let temp_dir = TempDir::new().expect("temp dir");
    std::fs::write(temp_dir.path().join("style.css"), "a{}").expect("write style.css");
    // A "shell" that ignores the command and always fails.
    let output = Command::new(env!("CARGO_BIN_EXE_stagefmt-files"))
        .current_dir(temp_dir.path())
        .arg("style.css")
        .env_remove("STAGEFMT_DRY_RUN")
        .env("STAGEFMT_SHELL", "false")
        .output()
        .expect("run stagefmt-files");

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("style.css"));
}

#[test]
fn pre_commit_outside_repository_exits_non_zero() {
    let temp_dir = TempDir::new().expect("temp dir");
    let output = run(
        env!("CARGO_BIN_EXE_stagefmt-pre-commit"),
        temp_dir.path(),
        &[],
    );

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to get staged files"));
}
