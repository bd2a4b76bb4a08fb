//! High-level configuration API

use crate::books::{DEFAULT_BOOKS_ENDPOINT, DEFAULT_MAX_BOOKS};
use crate::credentials::CredentialSource;
use crate::error::{ApiError, Result};
use crate::resources::{DEFAULT_CACHE_DIR, DEFAULT_LEXICON_URL};
use lexilens_core::EmotionThresholds;
use std::ops::RangeInclusive;
use std::path::PathBuf;

/// Allowed summary lengths
pub const SUMMARY_SENTENCES: RangeInclusive<usize> = 1..=5;

/// Default summary length
pub const DEFAULT_SUMMARY_SENTENCES: usize = 3;

/// Configuration of an analysis pipeline
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Where the books API key comes from; `None` skips the search with a warning
    pub credential_source: Option<CredentialSource>,
    /// Sentences in the summary, within [`SUMMARY_SENTENCES`]
    pub summary_sentences: usize,
    /// Emotion cascade constants
    pub emotion_thresholds: EmotionThresholds,
    /// Whether to look up book candidates at all
    pub search_books: bool,
    /// Books volumes endpoint
    pub books_endpoint: String,
    /// Candidates kept from a search
    pub max_books: usize,
    /// Directory holding downloaded resources
    pub cache_dir: PathBuf,
    /// Where to download the VADER lexicon from
    pub lexicon_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            credential_source: None,
            summary_sentences: DEFAULT_SUMMARY_SENTENCES,
            emotion_thresholds: EmotionThresholds::default(),
            search_books: true,
            books_endpoint: DEFAULT_BOOKS_ENDPOINT.to_string(),
            max_books: DEFAULT_MAX_BOOKS,
            cache_dir: PathBuf::from(DEFAULT_CACHE_DIR),
            lexicon_url: DEFAULT_LEXICON_URL.to_string(),
        }
    }
}

impl Config {
    /// Create a builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Configuration builder
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set where the API key comes from
    pub fn credential_source(mut self, source: CredentialSource) -> Self {
        self.config.credential_source = Some(source);
        self
    }

    /// Set the summary length
    pub fn summary_sentences(mut self, count: usize) -> Self {
        self.config.summary_sentences = count;
        self
    }

    /// Set the emotion cascade constants
    pub fn emotion_thresholds(mut self, thresholds: EmotionThresholds) -> Self {
        self.config.emotion_thresholds = thresholds;
        self
    }

    /// Enable or disable the book search
    pub fn search_books(mut self, enabled: bool) -> Self {
        self.config.search_books = enabled;
        self
    }

    /// Set the books endpoint
    pub fn books_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.config.books_endpoint = endpoint.into();
        self
    }

    /// Set the number of candidates kept
    pub fn max_books(mut self, max: usize) -> Self {
        self.config.max_books = max;
        self
    }

    /// Set the resource cache directory
    pub fn cache_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.cache_dir = dir.into();
        self
    }

    /// Set the lexicon download URL
    pub fn lexicon_url(mut self, url: impl Into<String>) -> Self {
        self.config.lexicon_url = url.into();
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config> {
        let config = self.config;

        if !SUMMARY_SENTENCES.contains(&config.summary_sentences) {
            return Err(ApiError::Config(format!(
                "summary sentences must be between {} and {}, got {}",
                SUMMARY_SENTENCES.start(),
                SUMMARY_SENTENCES.end(),
                config.summary_sentences
            )));
        }
        config
            .emotion_thresholds
            .validate()
            .map_err(|e| ApiError::Config(e.to_string()))?;
        if config.search_books && config.books_endpoint.trim().is_empty() {
            return Err(ApiError::Config("books endpoint is empty".to_string()));
        }
        if config.lexicon_url.trim().is_empty() {
            return Err(ApiError::Config("lexicon URL is empty".to_string()));
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::builder().build().unwrap();
        assert_eq!(config.summary_sentences, 3);
        assert_eq!(config.max_books, 3);
        assert!(config.search_books);
        assert!(config.credential_source.is_none());
        assert_eq!(
            config.books_endpoint,
            "https://www.googleapis.com/books/v1/volumes"
        );
        assert_eq!(config.cache_dir, PathBuf::from("lexilens_data"));
        assert_eq!(config.emotion_thresholds.disgust_neg, 0.5);
    }

    #[test]
    fn test_summary_sentence_range() {
        for n in 1..=5 {
            assert!(Config::builder().summary_sentences(n).build().is_ok());
        }
        for n in [0, 6, 100] {
            let err = Config::builder().summary_sentences(n).build().unwrap_err();
            assert!(matches!(err, ApiError::Config(_)));
        }
    }

    #[test]
    fn test_invalid_thresholds_rejected() {
        let thresholds = EmotionThresholds {
            joy_compound: -0.5,
            sadness_compound: 0.5,
            ..EmotionThresholds::default()
        };
        let result = Config::builder().emotion_thresholds(thresholds).build();
        assert!(matches!(result, Err(ApiError::Config(_))));
    }

    #[test]
    fn test_credential_source() {
        let config = Config::builder()
            .credential_source(CredentialSource::input("abc"))
            .build()
            .unwrap();
        assert_eq!(
            config.credential_source,
            Some(CredentialSource::Input("abc".to_string()))
        );
    }

    #[test]
    fn test_empty_endpoint_only_matters_when_searching() {
        assert!(Config::builder().books_endpoint("").build().is_err());
        assert!(Config::builder()
            .books_endpoint("")
            .search_books(false)
            .build()
            .is_ok());
    }
}
