//! Check command implementation

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader, Sentence};
use crate::output::{create_formatter, CheckRecord, OutputFormat, OutputFormatter};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::Args;
use sentcheck_core::{Report, RuleKind, Validator, ValidatorConfig};
use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::PathBuf;

/// Arguments for the check command
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Sentences to check (default: read one sentence per line from stdin)
    #[arg(value_name = "SENTENCE")]
    pub sentences: Vec<String>,

    /// Input files or patterns (supports glob), one sentence per line
    #[arg(short, long, value_name = "FILE/PATTERN")]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: from the configuration file, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE", env = "SENTCHECK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Parse each sentence as a JSON value; non-string values are invalid
    #[arg(long)]
    pub json_lines: bool,

    /// Integers below this limit must be spelled out
    #[arg(long, value_name = "N")]
    pub numeral_limit: Option<u64>,

    /// Disable a rule (repeatable)
    #[arg(long, value_name = "RULE")]
    pub skip: Vec<RuleKind>,

    /// Suppress all output; only the exit status reports the result
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Totals for a check run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CheckSummary {
    /// Number of sentences checked
    pub checked: usize,
    /// Number of sentences rejected
    pub invalid: usize,
}

impl CheckSummary {
    /// Whether every checked sentence was valid
    pub fn all_valid(&self) -> bool {
        self.invalid == 0
    }
}

impl CheckArgs {
    /// Execute the check command, reading stdin when no sentences are given
    pub fn execute(&self) -> Result<CheckSummary> {
        self.execute_with_stdin(io::stdin().lock())
    }

    /// Execute the check command with an explicit stdin source
    pub fn execute_with_stdin(&self, stdin: impl Read) -> Result<CheckSummary> {
        self.init_logging();

        log::info!("Starting sentence check");
        log::debug!("Arguments: {:?}", self);

        let config = match &self.config {
            Some(path) => CliConfig::load(path)?,
            None => CliConfig::default(),
        };
        let validator = self.build_validator(&config)?;
        log::debug!("Enabled rules: {:?}", validator.rules());

        let format = self.format.unwrap_or(config.output.format);
        let mut formatter = create_formatter(format, config.output.pretty_json, self.writer()?);
        let mut summary = CheckSummary::default();

        if !self.sentences.is_empty() {
            let sentences = Sentence::from_args(&self.sentences);
            self.check_all(&validator, &sentences, &mut *formatter, &mut summary)?;
        }

        if !self.input.is_empty() {
            let files = resolve_patterns(&self.input)?;
            let mut progress = ProgressReporter::new(self.quiet);
            progress.init_files(files.len() as u64);

            for path in &files {
                let sentences = FileReader::read_sentences(path)?;
                let before = summary;
                self.check_all(&validator, &sentences, &mut *formatter, &mut summary)?;
                log::info!(
                    "{}: {} sentences, {} invalid",
                    path.display(),
                    summary.checked - before.checked,
                    summary.invalid - before.invalid
                );
                progress.file_completed(&path.display().to_string());
            }

            progress.finish();
        }

        if self.sentences.is_empty() && self.input.is_empty() {
            let sentences = FileReader::read_stdin_sentences(stdin)?;
            self.check_all(&validator, &sentences, &mut *formatter, &mut summary)?;
        }

        formatter.finish()?;
        log::info!(
            "Checked {} sentences, {} invalid",
            summary.checked,
            summary.invalid
        );

        Ok(summary)
    }

    /// Build the validator from the configuration file and flag overrides
    fn build_validator(&self, config: &CliConfig) -> Result<Validator> {
        let mut builder = ValidatorConfig::builder()
            .numeral_limit(config.validator.numeral_limit)
            .rules(config.validator.rules.iter().copied());

        if let Some(limit) = self.numeral_limit {
            builder = builder.numeral_limit(limit);
        }
        for &kind in &self.skip {
            builder = builder.without(kind);
        }

        let validator_config = builder
            .build()
            .map_err(CliError::ConfigError)?;

        Ok(Validator::with_config(validator_config)
            .map_err(CliError::ConfigError)?)
    }

    /// Check a batch of sentences and feed the results to the formatter
    fn check_all(
        &self,
        validator: &Validator,
        sentences: &[Sentence],
        formatter: &mut dyn OutputFormatter,
        summary: &mut CheckSummary,
    ) -> Result<()> {
        for sentence in sentences {
            let report = self.check_one(validator, sentence)?;

            summary.checked += 1;
            if let Some(violation) = report.violation() {
                summary.invalid += 1;
                log::debug!("{}: rejected ({})", sentence.origin, violation);
            }

            formatter.format_record(&CheckRecord::new(sentence, report))?;
        }
        Ok(())
    }

    fn check_one(&self, validator: &Validator, sentence: &Sentence) -> Result<Report> {
        if !self.json_lines {
            return Ok(validator.check(&sentence.text));
        }

        let value: serde_json::Value = serde_json::from_str(&sentence.text).map_err(|e| {
            CliError::InputError(format!("{}: not a JSON value: {}", sentence.origin, e))
        })?;
        Ok(validator.check_value(&value))
    }

    /// Open the output destination
    fn writer(&self) -> Result<Box<dyn Write + Send + Sync>> {
        if self.quiet {
            return Ok(Box::new(io::sink()));
        }

        match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                Ok(Box::new(BufWriter::new(file)))
            }
            None => Ok(Box::new(io::stdout())),
        }
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        if self.quiet {
            return;
        }

        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        let env = env_logger::Env::default().default_filter_or(log_level);
        env_logger::Builder::from_env(env).try_init().ok();
    }
}
