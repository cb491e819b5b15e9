// Rust guideline compliant 2026-10-18

//! stagefmt CLI Application
//!
//! Runs external formatters on staged or explicitly named files.

use clap::Parser;
use stagefmt_cli::commands;
use stagefmt_cli::{print_error, should_use_color};
use stagefmt_core::{Config, LogLevel};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "stagefmt",
    version,
    about = "Run formatters on staged or named files by extension",
    long_about = "stagefmt maps file extensions to external formatter commands and runs them. Use it as a Git pre-commit hook or on explicit files.",
    after_help = "Examples:\n  stagefmt install\n  stagefmt staged\n  stagefmt files src/app.js styles/site.css\n  stagefmt rules --json\n"
)]
struct Cli {
    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Print formatter commands instead of running them
    #[arg(long, global = true)]
    dry_run: bool,

    /// Log level (error, warn, info, debug)
    #[arg(long, global = true, value_parser = ["error", "warn", "info", "debug"])]
    log_level: Option<String>,

    /// Shell used to run formatter commands
    #[arg(long, global = true)]
    shell: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Format every file staged in the Git index
    Staged,

    /// Format the given files
    Files {
        /// Files to format
        paths: Vec<PathBuf>,
    },

    /// List the extension to formatter rules
    Rules {
        /// Print rules as JSON
        #[arg(long)]
        json: bool,
    },

    /// Install the Git pre-commit hook
    Install {
        /// Overwrite an existing pre-commit hook
        #[arg(long)]
        force: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    let use_color = !cli.no_color && should_use_color();

    if let Err(err) = run(cli, use_color) {
        print_error(&format!("{:#}", err), use_color);
        std::process::exit(1);
    }
}

fn run(cli: Cli, use_color: bool) -> anyhow::Result<()> {
    let mut config = Config::load_for_repo(&std::env::current_dir()?)?;
    if cli.dry_run {
        config.dry_run = true;
    }
    if let Some(level) = cli.log_level.as_deref().and_then(LogLevel::parse) {
        config.log_level = level;
    }
    if let Some(shell) = cli.shell {
        config.shell = Some(shell);
    }
    let _guard = stagefmt_core::init_tracing(&config)?;

    match cli.command {
        Some(Commands::Staged) => {
            commands::staged::execute(&config)?;
        }
        Some(Commands::Files { paths }) => {
            commands::files::execute(paths, &config)?;
        }
        Some(Commands::Rules { json }) => {
            commands::rules::execute(json)?;
        }
        Some(Commands::Install { force }) => {
            commands::install::execute(force, use_color)?;
        }
        None => {
            println!("Use --help for usage information");
        }
    }

    Ok(())
}
