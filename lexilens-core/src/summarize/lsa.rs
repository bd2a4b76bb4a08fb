//! Latent semantic analysis summarizer
//!
//! Builds a term-sentence matrix with smoothed term frequencies, takes its
//! singular value decomposition and rates each sentence by the length of its
//! projection onto the strongest latent topics. The best-rated sentences are
//! returned in document order.

use super::linalg::{gram, symmetric_eigen};
use super::Summarizer;
use crate::stopwords::StopwordSet;
use crate::tokenize::{tokenize_sentence, SentenceSplitter};
use regex::Regex;
use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

static WORD: OnceLock<Regex> = OnceLock::new();

/// Tokens that start with a letter and continue with letters, `'` or `-`
fn is_word(token: &str) -> bool {
    WORD.get_or_init(|| {
        Regex::new(r"^[^\W\d_](?:[^\W\d_]|['\-])*$")
            .unwrap_or_else(|e| panic!("invalid word pattern: {e}"))
    })
    .is_match(token)
}

/// Tuning of the LSA summarizer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LsaConfig {
    /// Share of singular values kept as latent topics
    pub reduction_ratio: f64,
    /// Lower bound on the number of latent topics kept
    pub min_dimensions: usize,
    /// Term frequency smoothing in `[0, 1)`
    pub smoothing: f64,
}

impl Default for LsaConfig {
    fn default() -> Self {
        Self {
            reduction_ratio: 1.0,
            min_dimensions: 3,
            smoothing: 0.4,
        }
    }
}

/// Extractive summarizer based on latent semantic analysis
#[derive(Debug, Clone)]
pub struct LsaSummarizer {
    splitter: SentenceSplitter,
    stopwords: Arc<StopwordSet>,
    config: LsaConfig,
}

impl Default for LsaSummarizer {
    fn default() -> Self {
        Self::new()
    }
}

impl LsaSummarizer {
    /// Summarizer with default tuning and no stopword removal
    pub fn new() -> Self {
        Self {
            splitter: SentenceSplitter::new(),
            stopwords: Arc::new(StopwordSet::empty()),
            config: LsaConfig::default(),
        }
    }

    /// Ignore `stopwords` when building the term dictionary
    pub fn with_stopwords(mut self, stopwords: Arc<StopwordSet>) -> Self {
        self.stopwords = stopwords;
        self
    }

    /// Override the tuning
    pub fn with_config(mut self, config: LsaConfig) -> Self {
        self.config = config;
        self
    }

    /// Override the sentence splitter
    pub fn with_splitter(mut self, splitter: SentenceSplitter) -> Self {
        self.splitter = splitter;
        self
    }

    /// Pick up to `count` sentences of `text`, in document order
    pub fn select<'a>(&self, text: &'a str, count: usize) -> Vec<&'a str> {
        let sentences = self.splitter.split(text);
        if sentences.is_empty() || count == 0 {
            return Vec::new();
        }

        let Some(ratings) = self.rate_sentences(&sentences) else {
            return Vec::new();
        };

        let mut ranked: Vec<usize> = (0..sentences.len()).collect();
        // Stable sort keeps document order among equal ratings
        ranked.sort_by(|&a, &b| ratings[b].total_cmp(&ratings[a]));
        ranked.truncate(count);
        ranked.sort_unstable();

        ranked.into_iter().map(|idx| sentences[idx]).collect()
    }

    /// Rating of every sentence, or `None` when no sentence has a usable word
    pub fn rate_sentences(&self, sentences: &[&str]) -> Option<Vec<f64>> {
        let words: Vec<Vec<String>> = sentences
            .iter()
            .map(|s| {
                tokenize_sentence(s)
                    .into_iter()
                    .filter(|t| is_word(t))
                    .map(|t| t.to_lowercase())
                    .collect()
            })
            .collect();

        let mut dictionary: HashMap<&str, usize> = HashMap::new();
        for word in words.iter().flatten() {
            if !self.stopwords.is_stopword(word) {
                let next = dictionary.len();
                dictionary.entry(word.as_str()).or_insert(next);
            }
        }

        if dictionary.is_empty() {
            log::warn!("No words to build an LSA dictionary from; summary is empty");
            return None;
        }
        if dictionary.len() < sentences.len() {
            log::warn!(
                "Number of words ({}) is lower than number of sentences ({}); LSA may be unreliable",
                dictionary.len(),
                sentences.len()
            );
        }

        let columns = self.term_frequencies(&words, &dictionary);
        Some(self.compute_ranks(&columns, dictionary.len()))
    }

    /// Column-major term-sentence matrix with smoothed frequencies
    fn term_frequencies(
        &self,
        words: &[Vec<String>],
        dictionary: &HashMap<&str, usize>,
    ) -> Vec<Vec<f64>> {
        let smoothing = self.config.smoothing;
        words
            .iter()
            .map(|sentence| {
                let mut column = vec![0.0; dictionary.len()];
                for word in sentence {
                    if let Some(&row) = dictionary.get(word.as_str()) {
                        column[row] += 1.0;
                    }
                }

                let max = column.iter().cloned().fold(0.0, f64::max);
                if max != 0.0 {
                    for cell in column.iter_mut() {
                        *cell = smoothing + (1.0 - smoothing) * *cell / max;
                    }
                }
                column
            })
            .collect()
    }

    fn compute_ranks(&self, columns: &[Vec<f64>], terms: usize) -> Vec<f64> {
        let eigen = symmetric_eigen(&gram(columns));

        // A thin SVD has min(terms, sentences) singular values
        let singular_count = terms.min(columns.len());
        let dimensions = self
            .config
            .min_dimensions
            .max((singular_count as f64 * self.config.reduction_ratio) as usize);

        let powered: Vec<f64> = eigen
            .values
            .iter()
            .take(singular_count)
            .enumerate()
            .map(|(i, &value)| if i < dimensions { value.max(0.0) } else { 0.0 })
            .collect();

        (0..columns.len())
            .map(|sentence| {
                powered
                    .iter()
                    .zip(&eigen.vectors)
                    .map(|(sigma_sq, vector)| sigma_sq * vector[sentence] * vector[sentence])
                    .sum::<f64>()
                    .sqrt()
            })
            .collect()
    }
}

impl Summarizer for LsaSummarizer {
    fn summarize(&self, text: &str, sentence_count: usize) -> String {
        self.select(text, sentence_count).join(" ")
    }
}
