//! API error types

use lexilens_core::CoreError;
use std::path::PathBuf;
use std::string::FromUtf8Error;
use thiserror::Error;

/// API-level errors
#[derive(Error, Debug)]
pub enum ApiError {
    /// Error from the text algorithms
    #[error(transparent)]
    Core(#[from] CoreError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// UTF-8 conversion error
    #[error("UTF-8 error: {0}")]
    Utf8(#[from] FromUtf8Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// A language resource could not be downloaded or stored
    #[error("resource '{name}' unavailable: {reason}")]
    Resource {
        /// Resource file name
        name: String,
        /// What went wrong
        reason: String,
    },

    /// Serialization error
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Passage is empty or only whitespace
    #[error("passage is empty")]
    EmptyPassage,
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, ApiError>;

/// Failure to obtain the books API key
///
/// These never abort an analysis; the pipeline reports them as warnings and
/// skips the book search.
#[derive(Error, Debug)]
pub enum CredentialError {
    /// No credential source configured
    #[error("no API key configured; book search skipped")]
    NotConfigured,

    /// Credentials file does not exist
    #[error("credentials file '{0}' not found; book search skipped")]
    FileNotFound(PathBuf),

    /// Credentials file could not be read
    #[error("cannot read credentials file '{path}': {source}")]
    Read {
        /// File that failed
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// Credentials file is not valid TOML
    #[error("invalid credentials file '{path}': {message}")]
    Parse {
        /// File that failed
        path: PathBuf,
        /// Parser message
        message: String,
    },

    /// `[general] api_key` missing from the file
    #[error("no [general] api_key in '{0}'; book search skipped")]
    KeyAbsent(PathBuf),

    /// Key present but empty
    #[error("API key is empty; book search skipped")]
    EmptyKey,
}

/// Failure of a book search request
#[derive(Error, Debug)]
pub enum SearchError {
    /// The service answered with a non-200 status
    #[error("Error: {0}")]
    Status(u16),

    /// The request never got an answer
    #[error("Error: {0}")]
    Transport(String),

    /// The answer was not the expected JSON
    #[error("Error: malformed response: {0}")]
    Malformed(#[from] serde_json::Error),
}
