//! CLI command implementations

use crate::error::CliResult;
use crate::output::OutputFormat;
use clap::{Subcommand, ValueEnum};
use lexilens_core::EmotionLabel;

pub mod analyze;
pub mod fetch_resources;
pub mod generate_config;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Count words, label the emotion, look up books and summarize a passage
    Analyze(analyze::AnalyzeArgs),

    /// Download the language resources into the cache directory
    FetchResources(fetch_resources::FetchResourcesArgs),

    /// Write a commented configuration file template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List available output formats
    Formats,

    /// List the emotion labels
    Emotions,
}

impl Commands {
    /// Run the command; `Ok(false)` means some passage was not analysed
    pub fn execute(&self) -> CliResult<bool> {
        match self {
            Commands::Analyze(args) => args.execute(),
            Commands::FetchResources(args) => args.execute().map(|_| true),
            Commands::GenerateConfig(args) => args.execute().map(|_| true),
            Commands::List { subcommand } => {
                for line in subcommand.lines() {
                    println!("{line}");
                }
                Ok(true)
            }
        }
    }
}

impl ListCommands {
    /// Lines printed by `list`
    pub fn lines(&self) -> Vec<String> {
        match self {
            ListCommands::Formats => OutputFormat::value_variants()
                .iter()
                .filter_map(|format| format.to_possible_value())
                .map(|value| match value.get_help() {
                    Some(help) => format!("{:<10} {help}", value.get_name()),
                    None => value.get_name().to_string(),
                })
                .collect(),
            ListCommands::Emotions => EmotionLabel::ALL
                .iter()
                .map(|label| label.to_string())
                .collect(),
        }
    }
}

/// Initialize logging based on verbosity level
pub fn init_logging(verbose: u8, quiet: bool) {
    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    if !quiet {
        // A logger may already be installed when commands run in-process
        let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
            .try_init();
    }
}
