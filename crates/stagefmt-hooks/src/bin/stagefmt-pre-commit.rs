// Rust guideline compliant 2026-10-18

//! CLI entry point for the stagefmt pre-commit hook.

fn main() -> anyhow::Result<()> {
    let repo_path = std::env::current_dir()?;
    let config = stagefmt_core::Config::load_for_repo(&repo_path)?;
    let _guard = stagefmt_core::init_tracing(&config)?;
    stagefmt_hooks::pre_commit_hook(&repo_path, &config)?;
    Ok(())
}
