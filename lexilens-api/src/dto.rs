//! Data Transfer Objects for API

use crate::error::{ApiError, Result};
use lexilens_core::{EmotionLabel, SentimentScore, WordCounts};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::io::Read;
use std::path::PathBuf;

/// Where a passage comes from
#[derive(Serialize, Deserialize)]
pub enum Input {
    /// Raw text string
    Text(String),
    /// File path
    File(PathBuf),
    /// Raw bytes (UTF-8)
    Bytes(Vec<u8>),
    /// Reader (not serializable)
    #[serde(skip)]
    Reader(Box<dyn Read>),
}

impl fmt::Debug for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Input::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Input::File(path) => f.debug_tuple("File").field(path).finish(),
            Input::Bytes(bytes) => f.debug_tuple("Bytes").field(&bytes.len()).finish(),
            Input::Reader(_) => f.debug_tuple("Reader").field(&"<dyn Read>").finish(),
        }
    }
}

impl Input {
    /// Create input from text
    pub fn from_text(text: impl Into<String>) -> Self {
        Input::Text(text.into())
    }

    /// Create input from file path
    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Input::File(path.into())
    }

    /// Create input from bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Input::Bytes(bytes)
    }

    /// Create input from a reader
    pub fn from_reader<R: Read + 'static>(reader: R) -> Self {
        Input::Reader(Box::new(reader))
    }

    /// Read the passage
    pub fn read_text(self) -> Result<String> {
        match self {
            Input::Text(text) => Ok(text),
            Input::File(path) => fs::read_to_string(&path).map_err(ApiError::Io),
            Input::Bytes(bytes) => String::from_utf8(bytes).map_err(ApiError::Utf8),
            Input::Reader(mut reader) => {
                let mut buffer = String::new();
                reader.read_to_string(&mut buffer)?;
                Ok(buffer)
            }
        }
    }
}

/// A book the passage might come from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookCandidate {
    /// Volume title
    pub title: String,
    /// Volume authors as listed by the service
    pub authors: Vec<String>,
}

impl BookCandidate {
    /// Title used when the service omits one
    pub const NO_TITLE: &'static str = "No title found";
    /// Author used when the service omits the list
    pub const NO_AUTHORS: &'static str = "No authors found";

    /// Build a candidate, filling in the placeholders for missing fields
    pub fn new(title: Option<String>, authors: Option<Vec<String>>) -> Self {
        Self {
            title: title.unwrap_or_else(|| Self::NO_TITLE.to_string()),
            authors: authors.unwrap_or_else(|| vec![Self::NO_AUTHORS.to_string()]),
        }
    }
}

/// Severity of a [`Notice`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    /// Something was skipped
    Warning,
    /// Something failed
    Error,
}

/// Message for the user raised while analysing a passage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    /// Severity
    pub level: NoticeLevel,
    /// Text shown to the user
    pub message: String,
}

impl Notice {
    /// Warning notice
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            message: message.into(),
        }
    }

    /// Error notice
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Everything learned about one passage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Word counts with and without stopwords
    pub word_counts: WordCounts,
    /// VADER scores of the passage
    pub sentiment: SentimentScore,
    /// Label derived from the scores
    pub emotion: EmotionLabel,
    /// Book candidates, possibly empty
    pub books: Vec<BookCandidate>,
    /// Whether a search request was sent
    pub books_searched: bool,
    /// Extractive summary
    pub summary: String,
    /// Requested summary length in sentences
    pub summary_sentences: usize,
    /// Warnings and errors raised along the way
    pub notices: Vec<Notice>,
}

impl AnalysisReport {
    /// Serialize as JSON
    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_read_text() {
        assert_eq!(Input::from_text("abc").read_text().unwrap(), "abc");
        assert_eq!(
            Input::from_bytes(b"bytes".to_vec()).read_text().unwrap(),
            "bytes"
        );
        let reader = std::io::Cursor::new("from reader");
        assert_eq!(
            Input::from_reader(reader).read_text().unwrap(),
            "from reader"
        );
    }

    #[test]
    fn test_input_invalid_utf8() {
        let err = Input::from_bytes(vec![0xff, 0xfe]).read_text().unwrap_err();
        assert!(matches!(err, ApiError::Utf8(_)));
    }

    #[test]
    fn test_book_candidate_placeholders() {
        let book = BookCandidate::new(None, None);
        assert_eq!(book.title, "No title found");
        assert_eq!(book.authors, vec!["No authors found"]);

        // An empty list is kept as given; only a missing list is replaced
        let book = BookCandidate::new(Some("Emma".into()), Some(vec![]));
        assert!(book.authors.is_empty());
    }

    #[test]
    fn test_report_json_shape() {
        let report = AnalysisReport {
            word_counts: WordCounts {
                total: 2,
                without_stopwords: 2,
            },
            sentiment: SentimentScore::new(0.0, 0.0, 1.0, 0.0),
            emotion: EmotionLabel::Neutral,
            books: vec![],
            books_searched: false,
            summary: "Hello, world!".to_string(),
            summary_sentences: 3,
            notices: vec![Notice::warning("no API key configured")],
        };
        let value: serde_json::Value =
            serde_json::from_str(&report.to_json(false).unwrap()).unwrap();
        assert_eq!(value["emotion"], "neutral");
        assert_eq!(value["word_counts"]["total"], 2);
        assert_eq!(value["notices"][0]["level"], "warning");
    }
}
