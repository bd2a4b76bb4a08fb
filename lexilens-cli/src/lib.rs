//! lexilens CLI library
//!
//! This library provides the command-line interface for lexilens passage
//! analysis: word counts, emotion labels, book candidates and summaries.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};
