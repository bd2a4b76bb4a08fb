//! Lexicon-based sentiment scoring

pub mod lexicon;
pub mod vader;

pub use lexicon::Lexicon;
pub use vader::SentimentAnalyzer;

use serde::{Deserialize, Serialize};

/// Polarity scores of a passage
///
/// `pos`, `neg` and `neu` are proportions in `[0, 1]`; `compound` is the
/// normalized aggregate polarity in `[-1, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SentimentScore {
    /// Proportion of positive sentiment
    pub pos: f64,
    /// Proportion of negative sentiment
    pub neg: f64,
    /// Proportion of neutral tokens
    pub neu: f64,
    /// Normalized aggregate score
    pub compound: f64,
}

impl SentimentScore {
    /// Create a score from its four components
    pub fn new(pos: f64, neg: f64, neu: f64, compound: f64) -> Self {
        Self {
            pos,
            neg,
            neu,
            compound,
        }
    }
}
