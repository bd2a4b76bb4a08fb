//! Sentence and word tokenization for English text

pub mod sentence;
pub mod word;

pub use sentence::SentenceSplitter;
pub use word::{tokenize_sentence, WordTokenizer};
