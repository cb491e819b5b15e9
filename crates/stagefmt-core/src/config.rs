// Rust guideline compliant 2026-10-18

//! Configuration management for stagefmt.
//!
//! Only runtime behavior is configurable. The extension to formatter mapping
//! is fixed and lives in [`crate::rules`].

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the optional configuration file in the repository root.
pub const CONFIG_FILE: &str = "stagefmt.toml";

/// Log verbosity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LogLevel {
    /// Errors only.
    Error,
    /// Warnings and errors.
    #[default]
    Warn,
    /// Informational messages, including each formatter invocation.
    Info,
    /// Everything, including skipped files.
    Debug,
}

impl LogLevel {
    /// Parses a level name case-insensitively.
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "error" => Some(Self::Error),
            "warn" => Some(Self::Warn),
            "info" => Some(Self::Info),
            "debug" => Some(Self::Debug),
            _ => None,
        }
    }
}

/// Configuration for stagefmt behavior.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Log verbosity for diagnostics on stderr or in `log_file`.
    #[serde(default)]
    pub log_level: LogLevel,

    /// Write logs to this file instead of stderr.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,

    /// Shell used to interpret formatter commands.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shell: Option<String>,

    /// Print commands instead of running them.
    #[serde(default)]
    pub dry_run: bool,
}

impl Config {
    /// Loads configuration from file and environment variables.
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values
    /// 2. Configuration file at `stagefmt.toml`
    /// 3. Environment variables with `STAGEFMT_` prefix
    ///
    /// # Arguments
    ///
    /// * `dir` - Directory containing `stagefmt.toml` (usually the repository root)
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Configuration file exists but cannot be read
    /// - Configuration file contains invalid TOML
    /// - Configuration values fail validation
    pub fn load(dir: &Path) -> Result<Self> {
        let mut config = Self::default();

        let config_path = dir.join(CONFIG_FILE);
        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            config = toml::from_str(&content)
                .map_err(|e| Error::Config(format!("Invalid config file: {}", e)))?;
        }

        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// Loads configuration from the root of the repository containing `start`.
    ///
    /// Falls back to `start` itself when it is not inside a Git working tree,
    /// so commands that do not need a repository still honor a local file.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`Config::load`].
    pub fn load_for_repo(start: &Path) -> Result<Self> {
        let root = git2::Repository::discover(start)
            .ok()
            .and_then(|repo| repo.workdir().map(Path::to_path_buf))
            .unwrap_or_else(|| start.to_path_buf());
        Self::load(&root)
    }

    /// Applies environment variable overrides.
    ///
    /// Supported environment variables:
    /// - `STAGEFMT_LOG_LEVEL` - error/warn/info/debug
    /// - `STAGEFMT_LOG_FILE` - log file path
    /// - `STAGEFMT_SHELL` - shell program
    /// - `STAGEFMT_DRY_RUN` - true/false
    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("STAGEFMT_LOG_LEVEL") {
            self.log_level = LogLevel::parse(&val).ok_or_else(|| {
                Error::Config("STAGEFMT_LOG_LEVEL must be error, warn, info, or debug".to_string())
            })?;
        }

        if let Ok(val) = std::env::var("STAGEFMT_LOG_FILE") {
            self.log_file = Some(PathBuf::from(val));
        }

        if let Ok(val) = std::env::var("STAGEFMT_SHELL") {
            self.shell = Some(val);
        }

        if let Ok(val) = std::env::var("STAGEFMT_DRY_RUN") {
            self.dry_run = val.parse().map_err(|_| {
                Error::Config("STAGEFMT_DRY_RUN must be true or false".to_string())
            })?;
        }

        Ok(())
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns an error if `shell` or `log_file` is set but empty.
    fn validate(&self) -> Result<()> {
        if matches!(&self.shell, Some(shell) if shell.trim().is_empty()) {
            return Err(Error::Config("shell must not be empty".to_string()));
        }

        if matches!(&self.log_file, Some(path) if path.as_os_str().is_empty()) {
            return Err(Error::Config("log_file must not be empty".to_string()));
        }

        Ok(())
    }

    /// Saves the configuration to `stagefmt.toml` in `dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails or the file cannot be written.
    pub fn save(&self, dir: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(dir.join(CONFIG_FILE), content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Mutex, MutexGuard};
    use tempfile::TempDir;

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn lock_env() -> MutexGuard<'static, ()> {
        let guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_all_env_vars();
        guard
    }

    fn clear_all_env_vars() {
        std::env::remove_var("STAGEFMT_LOG_LEVEL");
        std::env::remove_var("STAGEFMT_LOG_FILE");
        std::env::remove_var("STAGEFMT_SHELL");
        std::env::remove_var("STAGEFMT_DRY_RUN");
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.log_level, LogLevel::Warn);
        assert!(config.log_file.is_none());
        assert!(config.shell.is_none());
        assert!(!config.dry_run);
    }

    #[test]
    fn test_config_load_missing_file() {
        let _env = lock_env();
        let temp_dir = TempDir::new().unwrap();
        let config = Config::load(temp_dir.path()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_config_load_from_file() {
        let _env = lock_env();
        let temp_dir = TempDir::new().unwrap();
        let content = r#"
log_level = "debug"
log_file = "stagefmt.log"
shell = "bash"
dry_run = true
"#;
        std::fs::write(temp_dir.path().join(CONFIG_FILE), content).unwrap();

        let config = Config::load(temp_dir.path()).unwrap();
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.log_file, Some(PathBuf::from("stagefmt.log")));
        assert_eq!(config.shell.as_deref(), Some("bash"));
        assert!(config.dry_run);
    }

    #[test]
    fn test_config_invalid_toml() {
        let _env = lock_env();
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join(CONFIG_FILE), "log_level = ").unwrap();
        assert!(matches!(
            Config::load(temp_dir.path()),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_config_rejects_empty_shell() {
        let _env = lock_env();
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join(CONFIG_FILE), "shell = \"  \"").unwrap();
        assert!(Config::load(temp_dir.path()).is_err());
    }

    #[test]
    fn test_config_env_override_log_level() {
        let _env = lock_env();
        let temp_dir = TempDir::new().unwrap();

        std::env::set_var("STAGEFMT_LOG_LEVEL", "INFO");
        let config = Config::load(temp_dir.path()).unwrap();
        assert_eq!(config.log_level, LogLevel::Info);

        clear_all_env_vars();
    }

    #[test]
    fn test_config_env_override_dry_run_and_shell() {
        let _env = lock_env();
        let temp_dir = TempDir::new().unwrap();

        std::env::set_var("STAGEFMT_DRY_RUN", "true");
        std::env::set_var("STAGEFMT_SHELL", "zsh");
        let config = Config::load(temp_dir.path()).unwrap();
        assert!(config.dry_run);
        assert_eq!(config.shell.as_deref(), Some("zsh"));

        clear_all_env_vars();
    }

    #[test]
    fn test_config_env_invalid_values() {
        let _env = lock_env();
        let temp_dir = TempDir::new().unwrap();

        std::env::set_var("STAGEFMT_LOG_LEVEL", "loud");
        assert!(Config::load(temp_dir.path()).is_err());
        clear_all_env_vars();

        std::env::set_var("STAGEFMT_DRY_RUN", "yes");
        assert!(Config::load(temp_dir.path()).is_err());
        clear_all_env_vars();
    }

    #[test]
    fn test_config_file_overridden_by_env() {
        let _env = lock_env();
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join(CONFIG_FILE), "log_level = \"error\"").unwrap();

        std::env::set_var("STAGEFMT_LOG_LEVEL", "debug");
        let config = Config::load(temp_dir.path()).unwrap();
        assert_eq!(config.log_level, LogLevel::Debug);

        clear_all_env_vars();
    }

    #[test]
    fn test_config_load_for_repo_uses_root_from_subdirectory() {
        let _env = lock_env();
        let temp_dir = TempDir::new().unwrap();
        git2::Repository::init(temp_dir.path()).unwrap();
        std::fs::write(temp_dir.path().join(CONFIG_FILE), "dry_run = true").unwrap();
        let sub = temp_dir.path().join("sub/deeper");
        std::fs::create_dir_all(&sub).unwrap();

        let config = Config::load_for_repo(&sub).unwrap();
        assert!(config.dry_run);
    }

    #[test]
    fn test_config_load_for_repo_outside_repository() {
        let _env = lock_env();
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join(CONFIG_FILE), "shell = \"bash\"").unwrap();

        let config = Config::load_for_repo(temp_dir.path()).unwrap();
        assert_eq!(config.shell.as_deref(), Some("bash"));
    }

    #[test]
    fn test_config_save_and_load() {
        let _env = lock_env();
        let temp_dir = TempDir::new().unwrap();

        let original = Config {
            log_level: LogLevel::Info,
            log_file: None,
            shell: Some("bash".to_string()),
            dry_run: true,
        };
        original.save(temp_dir.path()).unwrap();

        let loaded = Config::load(temp_dir.path()).unwrap();
        assert_eq!(original, loaded);
    }
}
