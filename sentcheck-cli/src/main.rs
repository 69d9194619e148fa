//! sentcheck command-line entry point

use clap::Parser;
use sentcheck_cli::commands::Commands;
use std::process::ExitCode;

/// Check sentences against formatting rules
#[derive(Debug, Parser)]
#[command(name = "sentcheck", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command.execute() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(2)
        }
    }
}
