//! Tool configuration
//!
//! Centralized configuration management using the `config` crate. Values come
//! from built-in defaults, optional config files and `MIAMI__` prefixed
//! environment variables, in that order of precedence.
//!
//! The database URL is not part of this struct: the tools check
//! `DATABASE_URL` themselves, before any configuration is read, because its
//! absence is reported on stdout.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;
use tracing::warn;

/// Name of the environment variable holding the PostgreSQL connection string
pub const DATABASE_URL_VAR: &str = "DATABASE_URL";

/// Main tool configuration
#[derive(Debug, Deserialize, Clone, Default)]
pub struct ToolConfig {
    #[serde(default)]
    pub database: DatabaseConfig,
}

/// Database pool configuration
#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    /// Maximum number of connections in the pool
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    /// Connection acquire timeout in seconds
    #[serde(default = "default_acquire_timeout")]
    pub acquire_timeout_secs: u64,
}

fn default_max_connections() -> u32 {
    5
}

fn default_acquire_timeout() -> u64 {
    30
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            max_connections: default_max_connections(),
            acquire_timeout_secs: default_acquire_timeout(),
        }
    }
}

impl ToolConfig {
    /// Load configuration from defaults, optional config files and environment
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());
        let run_mode_file = format!("config/{}", run_mode);

        Self::build(&[("config/default", false), (run_mode_file.as_str(), false)])
    }

    /// Load configuration from a specific file
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        Self::build(&[(path, true)])
    }

    /// Like `load`, but a broken file or variable only costs a warning
    pub fn load_or_default() -> Self {
        Self::or_default(Self::load())
    }

    fn or_default(loaded: Result<Self, ConfigError>) -> Self {
        loaded.unwrap_or_else(|e| {
            warn!(error = %e, "Invalid tool configuration, using defaults");
            Self::default()
        })
    }

    /// Defaults, then each `(name, required)` file, then `MIAMI__*` variables
    fn build(files: &[(&str, bool)]) -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .set_default("database.max_connections", default_max_connections() as i64)?
            .set_default("database.acquire_timeout_secs", default_acquire_timeout() as i64)?;

        for (name, required) in files {
            builder = builder.add_source(File::with_name(name).required(*required));
        }

        builder
            .add_source(
                Environment::with_prefix("MIAMI")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}

/// Read the database URL from the environment, treating an empty value as unset
pub fn database_url_from_env() -> Option<String> {
    env::var(DATABASE_URL_VAR)
        .ok()
        .filter(|url| !url.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ToolConfig::default();
        assert_eq!(config.database.max_connections, 5);
        assert_eq!(config.database.acquire_timeout_secs, 30);
    }

    #[test]
    fn test_load_without_files_uses_defaults() {
        let config = ToolConfig::load_or_default();
        assert!(config.database.max_connections > 0);
    }

    #[test]
    fn test_from_file_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tools.toml");
        std::fs::write(&path, "[database]\nmax_connections = 2\n").unwrap();

        let config = ToolConfig::from_file(path.to_str().unwrap()).unwrap();
        assert_eq!(config.database.max_connections, 2);
        assert_eq!(config.database.acquire_timeout_secs, 30);
    }

    #[test]
    fn test_from_file_keeps_defaults_for_missing_sections() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.toml");
        std::fs::write(&path, "").unwrap();

        let config = ToolConfig::from_file(path.to_str().unwrap()).unwrap();
        assert_eq!(config.database.max_connections, 5);
        assert_eq!(config.database.acquire_timeout_secs, 30);
    }

    #[test]
    fn test_malformed_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "[database\nmax_connections = \"abc\"\n").unwrap();

        let loaded = ToolConfig::from_file(path.to_str().unwrap());
        assert!(loaded.is_err());

        let config = ToolConfig::or_default(loaded);
        assert_eq!(config.database.max_connections, 5);
    }

    #[test]
    fn test_wrong_type_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("typed.toml");
        std::fs::write(&path, "[database]\nmax_connections = \"abc\"\n").unwrap();

        let config = ToolConfig::or_default(ToolConfig::from_file(path.to_str().unwrap()));
        assert_eq!(config.database.max_connections, 5);
    }
}
