//! Input handling module
//!
//! A passage comes from `--text`, from files matched by `-i` patterns, or
//! from standard input when neither is given.

pub mod file_reader;
pub mod glob_resolver;

pub use file_reader::FileReader;
pub use glob_resolver::resolve_patterns;

use anyhow::Result;

/// A passage and where it was read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Passage {
    /// File name, or `None` for `--text` and standard input
    pub source: Option<String>,
    /// Passage text
    pub text: String,
}

/// Gather the passages to analyse
pub fn collect_passages(text: Option<&str>, patterns: &[String]) -> Result<Vec<Passage>> {
    if let Some(text) = text {
        return Ok(vec![Passage {
            source: None,
            text: text.to_string(),
        }]);
    }

    if patterns.is_empty() {
        return Ok(vec![Passage {
            source: None,
            text: FileReader::read_stdin()?,
        }]);
    }

    resolve_patterns(patterns)?
        .into_iter()
        .map(|path| {
            Ok(Passage {
                source: Some(path.display().to_string()),
                text: FileReader::read_text(&path)?,
            })
        })
        .collect()
}
