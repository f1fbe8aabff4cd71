//! Configuration system for Vouch.
//!
//! Load verification configuration from TOML or YAML files to decide how
//! pending and failed checks affect an overall run, and how verbosely
//! verification events are logged, without code changes.
//!
//! # Examples
//!
//! Load configuration from a TOML string:
//!
//! ```
//! use vouch_config::{PendingStrategy, VerificationConfig};
//!
//! let config = VerificationConfig::from_toml_str(r#"
//!     pending_strategy = "failing"
//!     ignore_failures = false
//!     log_filter = "vouch=debug"
//! "#).unwrap();
//!
//! assert_eq!(config.pending_strategy, PendingStrategy::Failing);
//! assert_eq!(config.log_filter(), "vouch=debug");
//! ```
//!
//! Use the default config when the file is missing:
//!
//! ```
//! use vouch_config::VerificationConfig;
//!
//! let config = VerificationConfig::load("vouch.toml").unwrap_or_default();
//! // Proceeds with defaults if file doesn't exist
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;


/// Log filter used when none is configured.
pub const DEFAULT_LOG_FILTER: &str = "vouch=info";

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main verification configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct VerificationConfig {
    /// How pending checks affect the outcome of a run.
    #[serde(default)]
    pub pending_strategy: PendingStrategy,

    /// Whether failed checks are reported without failing the run.
    #[serde(default)]
    pub ignore_failures: bool,

    /// `tracing` filter directive for verification events, e.g. `vouch=debug`.
    #[serde(default)]
    pub log_filter: Option<String>,
}

impl VerificationConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist, contains invalid TOML, or
    /// fails validation.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks values serde cannot reject on its own.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(filter) = &self.log_filter {
            if filter.trim().is_empty() {
                return Err(ConfigError::Invalid(
                    "log_filter must not be empty".to_string(),
                ));
            }
            if filter.chars().any(char::is_whitespace) {
                return Err(ConfigError::Invalid(format!(
                    "log_filter must not contain whitespace: {:?}",
                    filter
                )));
            }
        }
        Ok(())
    }

    /// Sets the pending strategy.
    pub fn with_pending_strategy(mut self, strategy: PendingStrategy) -> Self {
        self.pending_strategy = strategy;
        self
    }

    /// Sets whether failed checks fail the run.
    pub fn with_ignore_failures(mut self, ignore: bool) -> Self {
        self.ignore_failures = ignore;
        self
    }

    /// Sets the log filter directive.
    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = Some(filter.into());
        self
    }

    /// Returns the configured log filter, or [`DEFAULT_LOG_FILTER`].
    pub fn log_filter(&self) -> &str {
        self.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }
}

/// How a pending check affects the outcome of a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PendingStrategy {
    /// Pending checks are reported but do not fail the run.
    #[default]
    Passing,

    /// Any pending check fails the run.
    Failing,
}

impl PendingStrategy {
    /// Returns true if a pending check fails the run under this strategy.
    pub fn fails_run(self) -> bool {
        matches!(self, PendingStrategy::Failing)
    }
}
