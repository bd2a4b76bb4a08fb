//! Extractive summarization

pub mod linalg;
pub mod lsa;

pub use lsa::{LsaConfig, LsaSummarizer};

/// Produces a summary made of sentences taken from the input
pub trait Summarizer: Send + Sync {
    /// Summarize `text` in at most `sentence_count` sentences joined by spaces
    fn summarize(&self, text: &str, sentence_count: usize) -> String;
}
