//! Output formatting module

use crate::input::Sentence;
use anyhow::Result;
use sentcheck_core::{Report, Violation};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output the result for a single sentence
    fn format_record(&mut self, record: &CheckRecord) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One line per sentence with a summary
    #[default]
    Text,
    /// JSON array of results
    Json,
}

impl OutputFormat {
    /// All formats, for listing
    pub const ALL: [OutputFormat; 2] = [OutputFormat::Text, OutputFormat::Json];

    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        }
    }

    /// Short description of the format
    pub fn description(&self) -> &'static str {
        match self {
            OutputFormat::Text => "one line per sentence with a summary",
            OutputFormat::Json => "JSON array of results",
        }
    }
}

/// Outcome of checking one sentence, as written by the formatters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckRecord {
    /// Where the sentence came from
    pub source: String,
    /// The sentence text as read
    pub sentence: String,
    /// Whether the sentence passed every rule
    pub valid: bool,
    /// The violation, when invalid
    #[serde(skip_serializing_if = "Option::is_none")]
    pub violation: Option<Violation>,
    /// Human-readable reason, when invalid
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl CheckRecord {
    /// Build a record from a sentence and its report
    pub fn new(sentence: &Sentence, report: Report) -> Self {
        let violation = report.violation();
        Self {
            source: sentence.origin.to_string(),
            sentence: sentence.text.clone(),
            valid: report.is_valid(),
            violation,
            reason: violation.map(|v| v.to_string()),
        }
    }
}

/// Create a formatter for the given format
pub fn create_formatter(
    format: OutputFormat,
    pretty_json: bool,
    writer: Box<dyn Write + Send + Sync>,
) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer, pretty_json)),
    }
}
