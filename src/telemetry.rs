//! Tracing subscriber setup for binaries and tests that embed the ranker.

use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Errors that can occur while installing the tracing subscriber
#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("Invalid log filter directive: {0}")]
    InvalidFilter(#[from] tracing_subscriber::filter::ParseError),

    #[error("Tracing subscriber already installed: {0}")]
    AlreadyInitialized(String),
}

/// Builds the filter from the configured directive.
pub fn build_filter(config: &LoggingConfig) -> Result<EnvFilter, TelemetryError> {
    Ok(EnvFilter::try_new(&config.level)?)
}

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over the configured directive. Fails if a
/// global subscriber is already set.
pub fn init_tracing(config: &LoggingConfig) -> Result<(), TelemetryError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => build_filter(config)?,
    };

    let result = if config.json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .try_init()
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).try_init()
    };

    result.map_err(|e| TelemetryError::AlreadyInitialized(e.to_string()))?;
    tracing::debug!(json = config.json, "Tracing initialised");
    Ok(())
}
