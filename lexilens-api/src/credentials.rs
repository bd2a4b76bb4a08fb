//! Where the books API key comes from

use crate::error::CredentialError;
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Source of the books API key
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialSource {
    /// TOML file with a `[general]` table holding `api_key`
    File(PathBuf),
    /// Key given directly, for example on the command line
    Input(String),
}

#[derive(Debug, Default, Deserialize)]
struct CredentialsFile {
    #[serde(default)]
    general: GeneralSection,
}

#[derive(Debug, Default, Deserialize)]
struct GeneralSection {
    api_key: Option<String>,
}

impl CredentialSource {
    /// Key stored in a credentials file
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self::File(path.into())
    }

    /// Key supplied by the caller
    pub fn input(key: impl Into<String>) -> Self {
        Self::Input(key.into())
    }

    /// Produce the key
    ///
    /// Surrounding whitespace is trimmed. The key format is not checked.
    pub fn resolve(&self) -> Result<String, CredentialError> {
        let key = match self {
            Self::Input(key) => key.clone(),
            Self::File(path) => read_key_file(path)?,
        };

        let key = key.trim();
        if key.is_empty() {
            return Err(CredentialError::EmptyKey);
        }
        Ok(key.to_string())
    }
}

fn read_key_file(path: &Path) -> Result<String, CredentialError> {
    let content = fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            CredentialError::FileNotFound(path.to_path_buf())
        } else {
            CredentialError::Read {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    let parsed: CredentialsFile =
        toml::from_str(&content).map_err(|e| CredentialError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    log::debug!("Read API key from {}", path.display());
    parsed
        .general
        .api_key
        .ok_or_else(|| CredentialError::KeyAbsent(path.to_path_buf()))
}
