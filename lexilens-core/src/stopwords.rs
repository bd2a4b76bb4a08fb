//! Stopword filtering
//!
//! The built-in English list is the classic NLTK corpus list. It is built
//! once per process and shared.

use std::collections::HashSet;
use std::sync::{Arc, OnceLock};

const ENGLISH: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan",
    "shan't", "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't",
    "wouldn", "wouldn't",
];

static ENGLISH_SET: OnceLock<Arc<StopwordSet>> = OnceLock::new();

/// A case-insensitive set of stopwords
#[derive(Debug, Clone, Default)]
pub struct StopwordSet {
    /// Lower-case stopwords
    words: HashSet<String>,
}

impl StopwordSet {
    /// Shared built-in English stopword set
    pub fn english() -> Arc<StopwordSet> {
        ENGLISH_SET
            .get_or_init(|| Arc::new(Self::from_list(ENGLISH)))
            .clone()
    }

    /// Create an empty set (no filtering)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a set from a custom list
    pub fn from_list(words: &[&str]) -> Self {
        Self {
            words: words.iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    /// Add additional stopwords
    pub fn add_stopwords(&mut self, words: &[&str]) {
        for word in words {
            self.words.insert(word.to_lowercase());
        }
    }

    /// Check whether `word` is a stopword, ignoring case
    pub fn is_stopword(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    /// Number of stopwords in the set
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the set is empty
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
