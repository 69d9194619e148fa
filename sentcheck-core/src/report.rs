//! Diagnostic outcome of a validation

use crate::rules::RuleKind;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Why a value was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Violation {
    /// The value was not text, so no rule was evaluated
    NotText,
    /// The first rule that failed
    Rule(RuleKind),
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::NotText => write!(f, "input is not text"),
            Violation::Rule(kind) => write!(f, "{} ({})", kind, kind.description()),
        }
    }
}

/// Outcome of checking a single value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "status", content = "violation", rename_all = "snake_case")]
pub enum Report {
    /// Every enabled rule passed
    Valid,
    /// The value was rejected
    Invalid(Violation),
}

impl Report {
    /// Whether the value passed every rule
    pub fn is_valid(&self) -> bool {
        matches!(self, Report::Valid)
    }

    /// The violation, if the value was rejected
    pub fn violation(&self) -> Option<Violation> {
        match self {
            Report::Valid => None,
            Report::Invalid(violation) => Some(*violation),
        }
    }

    /// The failing rule, if the value was text that broke a rule
    pub fn failed_rule(&self) -> Option<RuleKind> {
        match self {
            Report::Invalid(Violation::Rule(kind)) => Some(*kind),
            _ => None,
        }
    }
}

impl From<Report> for bool {
    fn from(report: Report) -> Self {
        report.is_valid()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Report::Valid => write!(f, "valid"),
            Report::Invalid(violation) => write!(f, "invalid: {violation}"),
        }
    }
}
