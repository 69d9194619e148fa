//! Sentence validation entry points
//!
//! [`validate`] is the canonical predicate: it accepts a value of any type,
//! rejects anything that is not text, then evaluates every rule in
//! [`RuleKind::ALL`] order and stops at the first failure. [`Validator`]
//! performs the same evaluation with an optional [`ValidatorConfig`] and
//! reports which rule failed.

use crate::config::{ValidatorConfig, DEFAULT_NUMERAL_LIMIT};
use crate::error::ConfigResult;
use crate::guard;
use crate::report::{Report, Violation};
use crate::rules::RuleKind;
use serde_json::Value;
use std::any::Any;

/// Check whether a value of unknown type is a valid sentence
///
/// Non-text values are never valid and no rule is evaluated for them. See
/// [`guard::as_text`] for the recognized string types. Borrowed strings with a
/// non-`'static` lifetime cannot be passed as `&dyn Any`; use
/// [`validate_str`] for those.
pub fn validate(input: &dyn Any) -> bool {
    match guard::as_text(input) {
        Some(sentence) => validate_str(sentence),
        None => false,
    }
}

/// Check whether text is a valid sentence under the default rules
pub fn validate_str(sentence: &str) -> bool {
    RuleKind::ALL
        .iter()
        .all(|kind| kind.holds(sentence, DEFAULT_NUMERAL_LIMIT))
}

/// Check whether a JSON value is a valid sentence
///
/// Only `Value::String` can be valid.
pub fn validate_value(value: &Value) -> bool {
    guard::value_text(value).is_some_and(validate_str)
}

/// Configurable sentence validator with diagnostics
#[derive(Debug, Clone, Default)]
pub struct Validator {
    config: ValidatorConfig,
}

impl Validator {
    /// Create a validator with the default rules
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a validator with a custom configuration
    pub fn with_config(config: ValidatorConfig) -> ConfigResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The active configuration
    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Enabled rules in evaluation order
    pub fn rules(&self) -> &[RuleKind] {
        &self.config.rules
    }

    /// Check a sentence and report the first failing rule
    pub fn check(&self, sentence: &str) -> Report {
        self.config
            .rules
            .iter()
            .copied()
            .find(|kind| !kind.holds(sentence, self.config.numeral_limit))
            .map_or(Report::Valid, |kind| Report::Invalid(Violation::Rule(kind)))
    }

    /// Check a value of unknown type
    pub fn check_any(&self, input: &dyn Any) -> Report {
        match guard::as_text(input) {
            Some(sentence) => self.check(sentence),
            None => Report::Invalid(Violation::NotText),
        }
    }

    /// Check a JSON value
    pub fn check_value(&self, value: &Value) -> Report {
        match guard::value_text(value) {
            Some(sentence) => self.check(sentence),
            None => Report::Invalid(Violation::NotText),
        }
    }

    /// Whether a sentence passes every enabled rule
    pub fn is_valid(&self, sentence: &str) -> bool {
        self.check(sentence).is_valid()
    }
}
