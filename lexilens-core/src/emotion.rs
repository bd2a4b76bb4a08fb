//! Emotion labels derived from sentiment scores
//!
//! The classifier is an ordered cascade over a [`SentimentScore`]; the first
//! matching rule wins:
//!
//! 1. `compound >= joy_compound` → joy
//! 2. `compound <= sadness_compound` → sadness
//! 3. `pos > neg` → surprise
//! 4. `neg > pos` → anger
//! 5. `neg > disgust_neg` → disgust
//! 6. `pos < fear_pos_max` (and `neg > fear_neg_min` when set) → fear
//! 7. neutral
//!
//! Rules 5 and 6 can only fire when `pos == neg`, because rules 3 and 4 cover
//! every other case.

use crate::error::{CoreError, Result};
use crate::sentiment::SentimentScore;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse emotion label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmotionLabel {
    /// Clearly positive compound score
    Joy,
    /// Clearly negative compound score
    Sadness,
    /// Near-zero compound, positive tokens dominate
    Surprise,
    /// Near-zero compound, negative tokens dominate
    Anger,
    /// Balanced but strongly negative
    Disgust,
    /// Balanced with little positivity
    Fear,
    /// None of the above
    Neutral,
}

impl EmotionLabel {
    /// All labels in cascade order
    pub const ALL: [EmotionLabel; 7] = [
        EmotionLabel::Joy,
        EmotionLabel::Sadness,
        EmotionLabel::Surprise,
        EmotionLabel::Anger,
        EmotionLabel::Disgust,
        EmotionLabel::Fear,
        EmotionLabel::Neutral,
    ];

    /// Lower-case name of the label
    pub fn as_str(&self) -> &'static str {
        match self {
            EmotionLabel::Joy => "joy",
            EmotionLabel::Sadness => "sadness",
            EmotionLabel::Surprise => "surprise",
            EmotionLabel::Anger => "anger",
            EmotionLabel::Disgust => "disgust",
            EmotionLabel::Fear => "fear",
            EmotionLabel::Neutral => "neutral",
        }
    }
}

impl fmt::Display for EmotionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Numeric constants of the cascade
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmotionThresholds {
    /// Minimum compound score for joy
    pub joy_compound: f64,
    /// Maximum compound score for sadness
    pub sadness_compound: f64,
    /// Negative proportion above which a balanced score is disgust
    pub disgust_neg: f64,
    /// Positive proportion below which a balanced score is fear
    pub fear_pos_max: f64,
    /// Optional negative proportion a fearful score must exceed
    pub fear_neg_min: Option<f64>,
}

impl Default for EmotionThresholds {
    fn default() -> Self {
        Self {
            joy_compound: 0.05,
            sadness_compound: -0.05,
            disgust_neg: 0.5,
            fear_pos_max: 0.1,
            fear_neg_min: Some(0.1),
        }
    }
}

impl EmotionThresholds {
    /// Thresholds with the lower disgust cut-off and no second fear condition
    pub fn lenient() -> Self {
        Self {
            disgust_neg: 0.1,
            fear_neg_min: None,
            ..Self::default()
        }
    }

    /// Check that the thresholds describe a usable cascade
    pub fn validate(&self) -> Result<()> {
        let values = [
            self.joy_compound,
            self.sadness_compound,
            self.disgust_neg,
            self.fear_pos_max,
            self.fear_neg_min.unwrap_or(0.0),
        ];
        if values.iter().any(|v| !v.is_finite()) {
            return Err(CoreError::InvalidThresholds(
                "thresholds must be finite numbers".to_string(),
            ));
        }
        if self.sadness_compound > self.joy_compound {
            return Err(CoreError::InvalidThresholds(format!(
                "sadness_compound ({}) is above joy_compound ({})",
                self.sadness_compound, self.joy_compound
            )));
        }
        Ok(())
    }
}

/// Maps sentiment scores to emotion labels
#[derive(Debug, Clone, Copy, Default)]
pub struct EmotionClassifier {
    thresholds: EmotionThresholds,
}

impl EmotionClassifier {
    /// Classifier with default thresholds
    pub fn new() -> Self {
        Self::default()
    }

    /// Classifier with custom thresholds
    pub fn with_thresholds(thresholds: EmotionThresholds) -> Result<Self> {
        thresholds.validate()?;
        Ok(Self { thresholds })
    }

    /// Thresholds in use
    pub fn thresholds(&self) -> &EmotionThresholds {
        &self.thresholds
    }

    /// Label a score
    pub fn classify(&self, score: &SentimentScore) -> EmotionLabel {
        let t = &self.thresholds;

        if score.compound >= t.joy_compound {
            EmotionLabel::Joy
        } else if score.compound <= t.sadness_compound {
            EmotionLabel::Sadness
        } else if score.pos > score.neg {
            EmotionLabel::Surprise
        } else if score.neg > score.pos {
            EmotionLabel::Anger
        } else if score.neg > t.disgust_neg {
            EmotionLabel::Disgust
        } else if score.pos < t.fear_pos_max && t.fear_neg_min.map_or(true, |min| score.neg > min)
        {
            EmotionLabel::Fear
        } else {
            EmotionLabel::Neutral
        }
    }
}
