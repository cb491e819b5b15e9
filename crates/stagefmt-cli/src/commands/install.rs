// Rust guideline compliant 2026-10-18

//! Implementation of the `stagefmt install` command.
//!
//! Installs a Git pre-commit hook that runs `stagefmt staged`.

use anyhow::Result;
use stagefmt_core::GitIndex;
use std::fs;
use std::path::{Path, PathBuf};

/// Contents written to `.git/hooks/pre-commit`.
pub const HOOK_SCRIPT: &str = "#!/bin/sh\nstagefmt staged\n";

/// Installs the pre-commit hook for the repository containing the current directory.
///
/// # Arguments
///
/// * `force` - Overwrite an existing hook with different contents
/// * `use_color` - Whether the confirmation line may be colored
///
/// # Errors
///
/// Returns an error if the current directory is not in a Git repository, or
/// a different hook already exists and `force` is not set.
pub fn execute(force: bool, use_color: bool) -> Result<()> {
    let repo_path = std::env::current_dir()?;
    let hook_path = install_hook(&repo_path, force)?;
    crate::terminal::print_success(
        &format!("Installed pre-commit hook at {}", hook_path.display()),
        use_color,
    );
    Ok(())
}

/// Writes the pre-commit hook into the repository containing `repo_path`.
///
/// # Returns
///
/// The path of the installed hook.
///
/// # Errors
///
/// Returns an error if the repository cannot be found, the hook cannot be
/// written, or another hook is present and `force` is not set.
pub fn install_hook(repo_path: &Path, force: bool) -> Result<PathBuf> {
    let index = GitIndex::discover(repo_path)
        .map_err(|_| anyhow::anyhow!("Not a git repository. Run 'git init' first."))?;
    let hooks_dir = index.git_dir().join("hooks");
    fs::create_dir_all(&hooks_dir)?;

    let hook_path = hooks_dir.join("pre-commit");
    if hook_path.exists() && !force {
        let existing = fs::read_to_string(&hook_path).unwrap_or_default();
        if existing != HOOK_SCRIPT {
            anyhow::bail!(
                "A pre-commit hook already exists at {}. Use --force to overwrite.",
                hook_path.display()
            );
        }
    }

    fs::write(&hook_path, HOOK_SCRIPT)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mut perms = fs::metadata(&hook_path)?.permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&hook_path, perms)?;
    }

    Ok(hook_path)
}
