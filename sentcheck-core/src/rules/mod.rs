//! Sentence formatting rules
//!
//! Each rule is a pure predicate over the sentence text. Rules share no state
//! and can be evaluated in any order; [`RuleKind::ALL`] fixes the order used
//! for short-circuiting.

mod capitalization;
mod numerals;
mod periods;
mod quotes;

pub use capitalization::starts_with_capital;
pub use numerals::{numerals_spelled_out, parse_numeral, Numeral};
pub use periods::{ends_with_period, has_single_period};
pub use quotes::has_balanced_quotes;

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifies one of the sentence rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    /// The first character is an uppercase letter
    Capitalized,
    /// The number of double quotes is even
    BalancedQuotes,
    /// Exactly one period appears in the sentence
    SinglePeriod,
    /// The last character is a period
    EndsWithPeriod,
    /// Integers below the numeral limit are spelled out
    NumeralsSpelledOut,
}

impl RuleKind {
    /// All rules in evaluation order
    pub const ALL: [RuleKind; 5] = [
        RuleKind::Capitalized,
        RuleKind::BalancedQuotes,
        RuleKind::SinglePeriod,
        RuleKind::EndsWithPeriod,
        RuleKind::NumeralsSpelledOut,
    ];

    /// Stable snake_case name, as used in configuration files
    pub fn name(self) -> &'static str {
        match self {
            RuleKind::Capitalized => "capitalized",
            RuleKind::BalancedQuotes => "balanced_quotes",
            RuleKind::SinglePeriod => "single_period",
            RuleKind::EndsWithPeriod => "ends_with_period",
            RuleKind::NumeralsSpelledOut => "numerals_spelled_out",
        }
    }

    /// Short human-readable description
    pub fn description(self) -> &'static str {
        match self {
            RuleKind::Capitalized => "must start with a capital letter",
            RuleKind::BalancedQuotes => "must contain an even number of double quotes",
            RuleKind::SinglePeriod => "must contain exactly one period",
            RuleKind::EndsWithPeriod => "must end with a period",
            RuleKind::NumeralsSpelledOut => "must spell out numbers below the numeral limit",
        }
    }

    /// Evaluate this rule against a sentence
    ///
    /// `numeral_limit` is only consulted by [`RuleKind::NumeralsSpelledOut`].
    #[inline]
    pub fn holds(self, sentence: &str, numeral_limit: u64) -> bool {
        match self {
            RuleKind::Capitalized => starts_with_capital(sentence),
            RuleKind::BalancedQuotes => has_balanced_quotes(sentence),
            RuleKind::SinglePeriod => has_single_period(sentence),
            RuleKind::EndsWithPeriod => ends_with_period(sentence),
            RuleKind::NumeralsSpelledOut => numerals_spelled_out(sentence, numeral_limit),
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RuleKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        RuleKind::ALL
            .into_iter()
            .find(|kind| kind.name() == normalized)
            .ok_or_else(|| ConfigError::UnknownRule(s.to_string()))
    }
}
