//! Validate-config command implementation

use crate::config::CliConfig;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the validate-config command
#[derive(Debug, Args)]
pub struct ValidateConfigArgs {
    /// Path to the configuration file to validate
    #[arg(value_name = "FILE")]
    pub config: PathBuf,
}

impl ValidateConfigArgs {
    /// Execute the validate-config command
    pub fn execute(&self) -> Result<()> {
        println!("Validating configuration: {}", self.config.display());

        match CliConfig::load(&self.config) {
            Ok(config) => {
                println!("✓ Configuration is valid!");
                println!("  Numeral limit: {}", config.validator.numeral_limit);
                let rules: Vec<_> = config.validator.rules.iter().map(|r| r.name()).collect();
                println!("  Rules: {}", rules.join(", "));
                println!("  Output format: {}", config.output.format.as_str());
                Ok(())
            }
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {e:#}");
                Err(e.context("Validation failed"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_validate_valid_config() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(
            temp_file,
            "[validator]\nnumeral_limit = 10\nrules = [\"capitalized\"]\n"
        )
        .unwrap();

        let args = ValidateConfigArgs {
            config: temp_file.path().to_path_buf(),
        };

        assert!(args.execute().is_ok());
    }

    #[test]
    fn test_validate_invalid_config() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(
            temp_file,
            "[validator]\nrules = [\"capitalized\", \"capitalized\"]\n"
        )
        .unwrap();

        let args = ValidateConfigArgs {
            config: temp_file.path().to_path_buf(),
        };

        let err = args.execute().unwrap_err();
        assert!(err.to_string().contains("Validation failed"));
    }
}
