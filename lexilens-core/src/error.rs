//! Core error types

use thiserror::Error;

/// Errors raised by the text algorithms
#[derive(Error, Debug)]
pub enum CoreError {
    /// A lexicon line could not be parsed
    #[error("invalid lexicon entry at line {line}: {reason}")]
    InvalidLexiconEntry {
        /// 1-based line number in the lexicon source
        line: usize,
        /// What was wrong with the line
        reason: String,
    },

    /// The lexicon source contained no entries
    #[error("lexicon is empty")]
    EmptyLexicon,

    /// Thresholds that cannot describe a sensible cascade
    #[error("invalid emotion thresholds: {0}")]
    InvalidThresholds(String),

    /// I/O error while reading a resource
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
