//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;
use sentcheck_core::RuleKind;
use std::io::{self, Write};

use crate::output::OutputFormat;

pub mod check;
pub mod generate_config;
pub mod validate_config;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check sentences against the formatting rules
    Check(check::CheckArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },

    /// Generate a configuration file with the default settings
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// Validate a configuration file
    ValidateConfig(validate_config::ValidateConfigArgs),
}

impl Commands {
    /// Execute the command
    ///
    /// Returns `Ok(false)` when the command ran but found invalid sentences.
    pub fn execute(&self) -> Result<bool> {
        match self {
            Commands::Check(args) => Ok(args.execute()?.all_valid()),
            Commands::List { subcommand } => {
                subcommand.write_to(&mut io::stdout().lock())?;
                Ok(true)
            }
            Commands::GenerateConfig(args) => args.execute().map(|()| true),
            Commands::ValidateConfig(args) => args.execute().map(|()| true),
        }
    }
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List the rules in evaluation order
    Rules,

    /// List available output formats
    Formats,
}

impl ListCommands {
    /// Write the listing
    pub fn write_to(&self, writer: &mut impl Write) -> Result<()> {
        match self {
            ListCommands::Rules => {
                for (i, kind) in RuleKind::ALL.iter().enumerate() {
                    writeln!(writer, "{}. {:<22} {}", i + 1, kind.name(), kind.description())?;
                }
            }
            ListCommands::Formats => {
                for format in OutputFormat::ALL {
                    writeln!(writer, "{:<6} {}", format.as_str(), format.description())?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(subcommand: ListCommands) -> String {
        let mut buffer = Vec::new();
        subcommand.write_to(&mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_list_rules_in_order() {
        let output = listing(ListCommands::Rules);
        let lines: Vec<_> = output.lines().collect();

        assert_eq!(lines.len(), 5);
        assert!(lines[0].starts_with("1. capitalized"));
        assert!(lines[4].starts_with("5. numerals_spelled_out"));
        assert!(lines[3].contains("must end with a period"));
    }

    #[test]
    fn test_list_formats() {
        let output = listing(ListCommands::Formats);
        assert!(output.contains("text"));
        assert!(output.contains("json"));
    }

    #[test]
    fn test_commands_debug_format() {
        let list_cmd = Commands::List {
            subcommand: ListCommands::Rules,
        };

        let debug_str = format!("{:?}", list_cmd);
        assert!(debug_str.contains("List"));
        assert!(debug_str.contains("Rules"));
    }

    #[test]
    fn test_list_command_succeeds() {
        let list_cmd = Commands::List {
            subcommand: ListCommands::Formats,
        };
        assert!(list_cmd.execute().unwrap());
    }
}
