// Rust guideline compliant 2026-10-18

//! CLI entry point for formatting explicit files.

use std::path::PathBuf;

fn main() -> anyhow::Result<()> {
    let paths: Vec<PathBuf> = std::env::args_os().skip(1).map(PathBuf::from).collect();
    let config = stagefmt_core::Config::load_for_repo(&std::env::current_dir()?)?;
    let _guard = stagefmt_core::init_tracing(&config)?;
    stagefmt_hooks::files_hook(&paths, &config)?;
    Ok(())
}
