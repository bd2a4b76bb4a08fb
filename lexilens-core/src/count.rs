//! Word counting
//!
//! Tokens are dropped only when the whole token is one punctuation
//! character. A token such as `world.` that still carries punctuation is
//! counted as a word, as are multi-character punctuation tokens like `...`.

use crate::stopwords::StopwordSet;
use crate::tokenize::WordTokenizer;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;

/// ASCII punctuation characters
pub const ASCII_PUNCTUATION: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// A set of single-character punctuation tokens
#[derive(Debug, Clone)]
pub struct PunctuationSet {
    chars: HashSet<char>,
}

impl Default for PunctuationSet {
    fn default() -> Self {
        Self::ascii()
    }
}

impl PunctuationSet {
    /// The ASCII punctuation set
    pub fn ascii() -> Self {
        Self::from_chars(ASCII_PUNCTUATION.chars())
    }

    /// Build a set from arbitrary characters
    pub fn from_chars(chars: impl IntoIterator<Item = char>) -> Self {
        Self {
            chars: chars.into_iter().collect(),
        }
    }

    /// Whether `token` is exactly one punctuation character
    pub fn is_punctuation(&self, token: &str) -> bool {
        let mut chars = token.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => self.chars.contains(&ch),
            _ => false,
        }
    }
}

/// Word counts for a passage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WordCounts {
    /// Tokens that are not pure punctuation
    pub total: usize,
    /// Tokens that are neither pure punctuation nor stopwords
    pub without_stopwords: usize,
}

/// Counts words with optional stopword filtering
#[derive(Debug, Clone)]
pub struct WordCounter {
    tokenizer: WordTokenizer,
    punctuation: PunctuationSet,
    stopwords: Arc<StopwordSet>,
}

impl Default for WordCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl WordCounter {
    /// English counter with ASCII punctuation and the NLTK stopword list
    pub fn new() -> Self {
        Self {
            tokenizer: WordTokenizer::new(),
            punctuation: PunctuationSet::ascii(),
            stopwords: StopwordSet::english(),
        }
    }

    /// Replace the punctuation set
    pub fn with_punctuation(mut self, punctuation: PunctuationSet) -> Self {
        self.punctuation = punctuation;
        self
    }

    /// Replace the stopword set
    pub fn with_stopwords(mut self, stopwords: Arc<StopwordSet>) -> Self {
        self.stopwords = stopwords;
        self
    }

    /// Replace the tokenizer
    pub fn with_tokenizer(mut self, tokenizer: WordTokenizer) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    /// Count tokens that are not pure punctuation
    pub fn count(&self, text: &str) -> usize {
        self.tokenizer
            .tokenize(text)
            .iter()
            .filter(|t| !self.punctuation.is_punctuation(t))
            .count()
    }

    /// Count tokens that are neither pure punctuation nor stopwords
    pub fn count_without_stopwords(&self, text: &str) -> usize {
        self.tokenizer
            .tokenize(text)
            .iter()
            .filter(|t| !self.punctuation.is_punctuation(t) && !self.stopwords.is_stopword(t))
            .count()
    }

    /// Both counts from a single tokenization pass
    pub fn counts(&self, text: &str) -> WordCounts {
        let tokens = self.tokenizer.tokenize(text);
        let words: Vec<&String> = tokens
            .iter()
            .filter(|t| !self.punctuation.is_punctuation(t))
            .collect();
        let without_stopwords = words
            .iter()
            .filter(|t| !self.stopwords.is_stopword(t))
            .count();

        WordCounts {
            total: words.len(),
            without_stopwords,
        }
    }
}
