//! Text algorithms for passage analysis
//!
//! This crate holds the pure, deterministic parts of lexilens:
//!
//! - **Tokenization**: rule-based English sentence splitting and
//!   Treebank-style word tokenization ([`tokenize`])
//! - **Word counting** with punctuation and stopword filters ([`count`])
//! - **Sentiment**: VADER polarity scores over a valence lexicon
//!   ([`sentiment`])
//! - **Emotion**: a threshold cascade mapping scores to a coarse label
//!   ([`emotion`])
//! - **Summarization**: latent semantic analysis extractive summaries
//!   ([`summarize`])
//!
//! # Example
//!
//! ```rust
//! use lexilens_core::{
//!     EmotionClassifier, EmotionLabel, Lexicon, LsaSummarizer, SentimentAnalyzer, Summarizer,
//!     WordCounter,
//! };
//! use std::sync::Arc;
//!
//! let text = "The garden was lovely. We stayed until dark.";
//!
//! let counts = WordCounter::new().counts(text);
//! assert_eq!(counts.total, 8);
//!
//! let lexicon = Arc::new(Lexicon::from_entries([("lovely", 2.8)]));
//! let score = SentimentAnalyzer::new(lexicon).polarity_scores(text);
//! assert_eq!(EmotionClassifier::new().classify(&score), EmotionLabel::Joy);
//!
//! let summary = LsaSummarizer::new().summarize(text, 1);
//! assert!(text.contains(&summary));
//! ```

#![warn(missing_docs)]

pub mod count;
pub mod emotion;
pub mod error;
pub mod sentiment;
pub mod stopwords;
pub mod summarize;
pub mod tokenize;

pub use count::{PunctuationSet, WordCounter, WordCounts};
pub use emotion::{EmotionClassifier, EmotionLabel, EmotionThresholds};
pub use error::{CoreError, Result};
pub use sentiment::{Lexicon, SentimentAnalyzer, SentimentScore};
pub use stopwords::StopwordSet;
pub use summarize::{LsaConfig, LsaSummarizer, Summarizer};
pub use tokenize::{SentenceSplitter, WordTokenizer};
