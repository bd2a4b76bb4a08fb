//! lexilens command-line entry point

use clap::Parser;
use lexilens_cli::commands::Commands;
use std::process::ExitCode;

/// Analyse English passages: word counts, emotion, likely books and a summary
#[derive(Debug, Parser)]
#[command(name = "lexilens", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command.execute() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
