//! Configuration for the sentence validator

use crate::error::{ConfigError, ConfigResult};
use crate::rules::RuleKind;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Numbers strictly below this value must be spelled out by default
pub const DEFAULT_NUMERAL_LIMIT: u64 = 13;

/// Validator configuration
///
/// The default configuration enables every rule in [`RuleKind::ALL`] order
/// with a numeral limit of [`DEFAULT_NUMERAL_LIMIT`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ValidatorConfig {
    /// Integers strictly below this limit must not appear as numerals
    pub numeral_limit: u64,

    /// Enabled rules, in evaluation order
    pub rules: Vec<RuleKind>,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            numeral_limit: DEFAULT_NUMERAL_LIMIT,
            rules: RuleKind::ALL.to_vec(),
        }
    }
}

impl ValidatorConfig {
    /// Creates a new builder for ValidatorConfig
    pub fn builder() -> ValidatorConfigBuilder {
        ValidatorConfigBuilder::new()
    }

    /// Parse and validate a configuration from TOML
    ///
    /// ```toml
    /// numeral_limit = 13
    /// rules = ["capitalized", "balanced_quotes", "single_period"]
    /// ```
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        let config: ValidatorConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a configuration from a TOML file
    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Serialize the configuration as TOML
    pub fn to_toml_string(&self) -> ConfigResult<String> {
        Ok(toml::to_string(self)?)
    }

    /// Validates the configuration
    pub fn validate(&self) -> ConfigResult<()> {
        if self.rules.is_empty() {
            return Err(ConfigError::Invalid {
                reason: "at least one rule must be enabled".to_string(),
            });
        }

        let mut seen = HashSet::with_capacity(self.rules.len());
        for &kind in &self.rules {
            if !seen.insert(kind) {
                return Err(ConfigError::DuplicateRule(kind));
            }
        }

        Ok(())
    }

    /// Whether a rule is enabled
    pub fn is_enabled(&self, kind: RuleKind) -> bool {
        self.rules.contains(&kind)
    }
}

/// Builder for ValidatorConfig with fluent API
#[derive(Debug, Clone)]
pub struct ValidatorConfigBuilder {
    config: ValidatorConfig,
}

impl ValidatorConfigBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            config: ValidatorConfig::default(),
        }
    }

    /// Sets the numeral limit
    pub fn numeral_limit(mut self, limit: u64) -> Self {
        self.config.numeral_limit = limit;
        self
    }

    /// Replaces the enabled rules; their order becomes the evaluation order
    pub fn rules(mut self, rules: impl IntoIterator<Item = RuleKind>) -> Self {
        self.config.rules = rules.into_iter().collect();
        self
    }

    /// Disables a single rule
    pub fn without(mut self, kind: RuleKind) -> Self {
        self.config.rules.retain(|&enabled| enabled != kind);
        self
    }

    /// Builds and validates the configuration
    pub fn build(self) -> ConfigResult<ValidatorConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

impl Default for ValidatorConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
