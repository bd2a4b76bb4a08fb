//! Configuration file handling
//!
//! The file is TOML; every section and key is optional. Command-line flags
//! take precedence over values read here.

use crate::error::CliError;
use anyhow::{Context, Result};
use lexilens_api::books::{DEFAULT_BOOKS_ENDPOINT, DEFAULT_MAX_BOOKS};
use lexilens_api::config::DEFAULT_SUMMARY_SENTENCES;
use lexilens_api::resources::{DEFAULT_CACHE_DIR, DEFAULT_LEXICON_URL};
use lexilens_core::EmotionThresholds;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration structure
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
pub struct CliConfig {
    /// Credentials
    #[serde(default)]
    pub general: GeneralConfig,

    /// Analysis configuration
    #[serde(default)]
    pub analysis: AnalysisConfig,

    /// Emotion cascade overrides
    #[serde(default)]
    pub emotion: EmotionConfig,

    /// Downloaded resources
    #[serde(default)]
    pub resources: ResourcesConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

impl CliConfig {
    /// Read a configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| CliError::ConfigError(e.to_string()).into())
    }

    /// Read `path` when given, defaults otherwise
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}

/// Credential settings
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct GeneralConfig {
    /// Books API key
    pub api_key: Option<String>,

    /// TOML file with `[general] api_key`, used when `api_key` is not set
    pub credentials_file: Option<PathBuf>,
}

/// Analysis settings
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Sentences in the summary (1 to 5)
    pub summary_sentences: usize,

    /// Book candidates to keep
    pub max_books: usize,

    /// Whether to search for books
    pub search_books: bool,

    /// Books volumes endpoint
    pub books_endpoint: String,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            summary_sentences: DEFAULT_SUMMARY_SENTENCES,
            max_books: DEFAULT_MAX_BOOKS,
            search_books: true,
            books_endpoint: DEFAULT_BOOKS_ENDPOINT.to_string(),
        }
    }
}

/// Emotion threshold overrides; unset keys keep their defaults
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct EmotionConfig {
    /// Minimum compound score for joy
    pub joy_compound: Option<f64>,
    /// Maximum compound score for sadness
    pub sadness_compound: Option<f64>,
    /// Negative share above which a balanced passage is disgust
    pub disgust_neg: Option<f64>,
    /// Positive share below which a balanced passage may be fear
    pub fear_pos_max: Option<f64>,
    /// Negative share fear also requires
    pub fear_neg_min: Option<f64>,
    /// Set to false to drop the negative-share condition on fear
    pub fear_requires_negative: bool,
}

impl Default for EmotionConfig {
    fn default() -> Self {
        Self {
            joy_compound: None,
            sadness_compound: None,
            disgust_neg: None,
            fear_pos_max: None,
            fear_neg_min: None,
            fear_requires_negative: true,
        }
    }
}

impl EmotionConfig {
    /// Apply the overrides to the default thresholds
    pub fn thresholds(&self) -> EmotionThresholds {
        let defaults = EmotionThresholds::default();
        EmotionThresholds {
            joy_compound: self.joy_compound.unwrap_or(defaults.joy_compound),
            sadness_compound: self.sadness_compound.unwrap_or(defaults.sadness_compound),
            disgust_neg: self.disgust_neg.unwrap_or(defaults.disgust_neg),
            fear_pos_max: self.fear_pos_max.unwrap_or(defaults.fear_pos_max),
            fear_neg_min: if self.fear_requires_negative {
                self.fear_neg_min.or(defaults.fear_neg_min)
            } else {
                None
            },
        }
    }
}

/// Resource cache settings
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ResourcesConfig {
    /// Directory holding downloaded resources
    pub cache_dir: PathBuf,

    /// VADER lexicon download URL
    pub lexicon_url: String,
}

impl Default for ResourcesConfig {
    fn default() -> Self {
        Self {
            cache_dir: PathBuf::from(DEFAULT_CACHE_DIR),
            lexicon_url: DEFAULT_LEXICON_URL.to_string(),
        }
    }
}

/// Output-related configuration
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: String,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "text".to_string(),
            pretty_json: true,
        }
    }
}
