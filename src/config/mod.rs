//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! (and optionally a TOML file) using the `config` and `dotenvy` crates.
//! Configuration is loaded with the `TOPSIS` prefix and nested values use
//! double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use topsis_ranker::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! let scorer = config.scoring.scorer();
//! ```

mod error;
mod logging;
mod scoring;

pub use error::{ConfigError, ValidationError};
pub use logging::LoggingConfig;
pub use scoring::ScoringConfig;

use serde::Deserialize;
use std::path::Path;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a usable
/// configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Scoring configuration (degeneracy policy)
    #[serde(default)]
    pub scoring: ScoringConfig,

    /// Logging configuration (filter directive, output format)
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `TOPSIS` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `TOPSIS__SCORING__DEGENERACY_POLICY=reject` -> `scoring.degeneracy_policy = reject`
    /// - `TOPSIS__LOGGING__JSON=true` -> `logging.json = true`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(Self::environment())
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Load configuration from a file, with environment variables taking
    /// precedence over file values.
    ///
    /// The file format is inferred from its extension (e.g. `.toml`).
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file is missing or malformed, or values
    /// cannot be parsed into expected types.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(config::File::from(path.as_ref()).required(true))
            .add_source(Self::environment())
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    fn environment() -> config::Environment {
        config::Environment::default()
            .prefix("TOPSIS")
            .separator("__")
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.logging.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::DegeneracyPolicy;
    use std::env;
    use std::io::Write;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    /// Helper to clear environment variables after testing
    fn clear_env() {
        env::remove_var("TOPSIS__SCORING__DEGENERACY_POLICY");
        env::remove_var("TOPSIS__LOGGING__LEVEL");
        env::remove_var("TOPSIS__LOGGING__JSON");
    }

    fn write_toml(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_defaults_from_empty_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.scoring.degeneracy_policy, DegeneracyPolicy::Propagate);
        assert_eq!(config.logging.level, "info,topsis_ranker=debug");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("TOPSIS__SCORING__DEGENERACY_POLICY", "reject");
        env::set_var("TOPSIS__LOGGING__JSON", "true");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.scoring.degeneracy_policy, DegeneracyPolicy::Reject);
        assert!(config.logging.json);
    }

    #[test]
    fn test_invalid_policy_fails_to_load() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("TOPSIS__SCORING__DEGENERACY_POLICY", "ignore");
        let result = AppConfig::load();
        clear_env();

        assert!(matches!(result, Err(ConfigError::LoadError(_))));
    }

    #[test]
    fn test_load_from_file() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let file = write_toml(
            r#"
            [scoring]
            degeneracy_policy = "reject"

            [logging]
            level = "warn"
            "#,
        );

        let config = AppConfig::load_from_file(file.path()).unwrap();
        assert_eq!(config.scoring.degeneracy_policy, DegeneracyPolicy::Reject);
        assert_eq!(config.logging.level, "warn");
        assert!(!config.logging.json);
    }

    #[test]
    fn test_environment_overrides_file() {
        let _guard = ENV_MUTEX.lock().unwrap();
        let file = write_toml(
            r#"
            [scoring]
            degeneracy_policy = "reject"
            "#,
        );
        env::set_var("TOPSIS__SCORING__DEGENERACY_POLICY", "propagate");
        let result = AppConfig::load_from_file(file.path());
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.scoring.degeneracy_policy, DegeneracyPolicy::Propagate);
    }

    #[test]
    fn test_missing_file_fails_to_load() {
        let _guard = ENV_MUTEX.lock().unwrap();
        let dir = tempfile::tempdir().unwrap();
        let result = AppConfig::load_from_file(dir.path().join("absent.toml"));

        assert!(matches!(result, Err(ConfigError::LoadError(_))));
    }

    #[test]
    fn test_validate_rejects_blank_log_level() {
        let mut config = AppConfig::default();
        config.logging.level = String::new();

        assert_eq!(
            config.validate(),
            Err(ValidationError::MissingRequired("logging.level"))
        );
    }
}
