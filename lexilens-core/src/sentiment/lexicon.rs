//! Sentiment lexicon
//!
//! Parses the VADER lexicon format: one entry per line, tab separated, with
//! the token in the first column and its mean valence in the second. Any
//! further columns (standard deviation, raw ratings) are ignored.

use crate::error::{CoreError, Result};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, OnceLock};

/// Parsed lexicons shared by path for the lifetime of the process
static LOADED: OnceLock<Mutex<HashMap<PathBuf, Arc<Lexicon>>>> = OnceLock::new();

/// Token to valence mapping
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    entries: HashMap<String, f64>,
}

impl Lexicon {
    /// Parse a lexicon from its text form
    pub fn parse(source: &str) -> Result<Self> {
        let mut entries = HashMap::new();

        for (idx, line) in source.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }

            let mut fields = line.split('\t');
            let token = fields.next().unwrap_or_default();
            if token.is_empty() {
                return Err(CoreError::InvalidLexiconEntry {
                    line: idx + 1,
                    reason: "missing token".to_string(),
                });
            }

            let valence = fields
                .next()
                .ok_or_else(|| CoreError::InvalidLexiconEntry {
                    line: idx + 1,
                    reason: "missing valence".to_string(),
                })?
                .trim()
                .parse::<f64>()
                .map_err(|e| CoreError::InvalidLexiconEntry {
                    line: idx + 1,
                    reason: e.to_string(),
                })?;

            entries.insert(token.to_string(), valence);
        }

        if entries.is_empty() {
            return Err(CoreError::EmptyLexicon);
        }

        Ok(Self { entries })
    }

    /// Build a lexicon from `(token, valence)` pairs
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        Self {
            entries: entries.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }

    /// Read and parse a lexicon file
    pub fn from_path(path: &Path) -> Result<Self> {
        let source = fs::read_to_string(path)?;
        Self::parse(&source)
    }

    /// Load a lexicon file once per process and share it
    pub fn load_shared(path: &Path) -> Result<Arc<Self>> {
        let cache = LOADED.get_or_init(|| Mutex::new(HashMap::new()));
        let mut guard = cache.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

        if let Some(lexicon) = guard.get(path) {
            log::debug!("Reusing lexicon loaded from {}", path.display());
            return Ok(lexicon.clone());
        }

        let lexicon = Arc::new(Self::from_path(path)?);
        log::info!(
            "Loaded {} lexicon entries from {}",
            lexicon.len(),
            path.display()
        );
        guard.insert(path.to_path_buf(), lexicon.clone());
        Ok(lexicon)
    }

    /// Valence of a lower-case token
    pub fn get(&self, token: &str) -> Option<f64> {
        self.entries.get(token).copied()
    }

    /// Whether the lexicon knows a lower-case token
    pub fn contains(&self, token: &str) -> bool {
        self.entries.contains_key(token)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the lexicon has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
