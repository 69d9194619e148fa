//! Rule-based sentence formatting validation
//!
//! This crate decides whether a single sentence follows a small, fixed set
//! of mechanical formatting rules. It is not a grammar checker: every rule is
//! an independent predicate over the raw text.
//!
//! # Rules
//!
//! Rules are evaluated in this order and evaluation stops at the first
//! failure:
//!
//! 1. The sentence starts with an uppercase letter.
//! 2. It contains an even number of double quotes (`"`).
//! 3. It contains exactly one period.
//! 4. Its last character is a period.
//! 5. Integers below thirteen are spelled out rather than written as numerals.
//!
//! # Example
//!
//! ```rust
//! use sentcheck_core::{validate, validate_str, Validator, Violation, RuleKind};
//!
//! assert!(validate_str("One lazy dog is too few, 13 is too many."));
//! assert!(!validate_str("One lazy dog is too few, 12 is too many."));
//!
//! // Non-text values are never valid
//! assert!(!validate(&42));
//! assert!(validate(&String::from("The quick brown fox said hello Mr lazy dog.")));
//!
//! // Diagnostics name the first rule that failed
//! let report = Validator::new().check("the lazy dog.");
//! assert_eq!(report.violation(), Some(Violation::Rule(RuleKind::Capitalized)));
//! ```

pub mod config;
pub mod error;
pub mod guard;
pub mod report;
pub mod rules;
pub mod validator;

pub use config::{ValidatorConfig, ValidatorConfigBuilder, DEFAULT_NUMERAL_LIMIT};
pub use error::{ConfigError, ConfigResult};
pub use report::{Report, Violation};
pub use rules::RuleKind;
pub use validator::{validate, validate_str, validate_value, Validator};
