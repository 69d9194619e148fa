//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use sentcheck_core::{RuleKind, DEFAULT_NUMERAL_LIMIT};
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,

    /// Overwrite the output file if it already exists
    #[arg(long)]
    pub force: bool,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        if self.output.exists() && !self.force {
            anyhow::bail!(
                "{} already exists (use --force to overwrite)",
                self.output.display()
            );
        }

        println!("Generating configuration template...");
        println!("  Output file: {}", self.output.display());

        fs::write(&self.output, self.generate_template())
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the configuration file to enable or reorder rules");
        println!("2. Validate your configuration:");
        println!("   sentcheck validate-config {}", self.output.display());
        println!("3. Use it for checking:");
        println!(
            "   sentcheck check -i sentences.txt --config {}",
            self.output.display()
        );

        Ok(())
    }

    /// Generate template configuration content
    fn generate_template(&self) -> String {
        let rule_lines: String = RuleKind::ALL
            .iter()
            .map(|kind| format!("    \"{}\",  # {}\n", kind.name(), kind.description()))
            .collect();

        format!(
            r#"# sentcheck configuration

[validator]
# Integers strictly below this limit must be spelled out ("twelve", not "12")
numeral_limit = {DEFAULT_NUMERAL_LIMIT}

# Enabled rules, in evaluation order. Remove a line to disable a rule.
rules = [
{rule_lines}]

[output]
# Default output format: "text" or "json"
format = "text"

# Pretty print JSON output
pretty_json = true
"#
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CliConfig;
    use tempfile::TempDir;

    #[test]
    fn test_generate_config_args_debug() {
        let args = GenerateConfigArgs {
            output: PathBuf::from("sentcheck.toml"),
            force: false,
        };

        let debug_str = format!("{:?}", args);
        assert!(debug_str.contains("GenerateConfigArgs"));
        assert!(debug_str.contains("sentcheck.toml"));
    }

    #[test]
    fn test_generated_template_parses_to_defaults() {
        let args = GenerateConfigArgs {
            output: PathBuf::from("sentcheck.toml"),
            force: false,
        };

        let template = args.generate_template();
        assert!(template.contains("[validator]"));
        assert!(template.contains("[output]"));

        let config = CliConfig::parse(&template).unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_execute_success() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("sentcheck.toml");

        let args = GenerateConfigArgs {
            output: output_path.clone(),
            force: false,
        };

        assert!(args.execute().is_ok());
        assert!(output_path.exists());

        let content = std::fs::read_to_string(&output_path).unwrap();
        assert!(content.contains("numeral_limit = 13"));
    }

    #[test]
    fn test_execute_refuses_to_overwrite() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("sentcheck.toml");
        std::fs::write(&output_path, "keep me").unwrap();

        let args = GenerateConfigArgs {
            output: output_path.clone(),
            force: false,
        };
        assert!(args.execute().is_err());
        assert_eq!(std::fs::read_to_string(&output_path).unwrap(), "keep me");

        let forced = GenerateConfigArgs {
            output: output_path.clone(),
            force: true,
        };
        assert!(forced.execute().is_ok());
        assert_ne!(std::fs::read_to_string(&output_path).unwrap(), "keep me");
    }
}
