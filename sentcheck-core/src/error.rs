//! Error types for validator configuration
//!
//! Validation itself never fails; these errors only arise while building or
//! loading a [`ValidatorConfig`](crate::ValidatorConfig).

use crate::rules::RuleKind;
use thiserror::Error;

/// Errors that can occur while loading or building a configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// TOML content could not be deserialized
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// Configuration could not be serialized
    #[error("Failed to serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// Configuration file could not be read
    #[error("Failed to read configuration file {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration was well-formed but semantically invalid
    #[error("Invalid configuration: {reason}")]
    Invalid { reason: String },

    /// A rule name did not match any known rule
    #[error("Unknown rule: {0}")]
    UnknownRule(String),

    /// The same rule was listed more than once
    #[error("Rule listed more than once: {0}")]
    DuplicateRule(RuleKind),
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;
