//! Local store for downloadable language resources
//!
//! Resources live as plain files in a cache directory. [`ResourceStore::ensure`]
//! fetches whatever is missing and leaves present files alone, so calling it on
//! every run costs one `stat` per resource.

use crate::error::{ApiError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Default cache directory, relative to the working directory
pub const DEFAULT_CACHE_DIR: &str = "lexilens_data";

/// File name of the VADER lexicon inside the cache directory
pub const LEXICON_FILE: &str = "vader_lexicon.txt";

/// Upstream location of the VADER lexicon
pub const DEFAULT_LEXICON_URL: &str =
    "https://raw.githubusercontent.com/cjhutto/vaderSentiment/master/vaderSentiment/vader_lexicon.txt";

/// A named file and where to get it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resource {
    /// File name inside the cache directory
    pub name: String,
    /// Download URL
    pub url: String,
}

impl Resource {
    /// Create a resource description
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// Downloads the bytes behind a URL
pub trait ResourceFetcher: Send + Sync {
    /// Fetch `url`, failing on anything but a successful response
    fn fetch(&self, url: &str) -> std::result::Result<Vec<u8>, String>;
}

/// [`ResourceFetcher`] over blocking reqwest
#[derive(Debug, Default, Clone, Copy)]
pub struct HttpFetcher;

impl ResourceFetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> std::result::Result<Vec<u8>, String> {
        let response = reqwest::blocking::get(url).map_err(|e| format!("request failed: {e}"))?;
        if !response.status().is_success() {
            return Err(format!("HTTP status {}", response.status()));
        }
        let bytes = response
            .bytes()
            .map_err(|e| format!("reading body failed: {e}"))?;
        Ok(bytes.to_vec())
    }
}

/// Cache directory plus the resources expected in it
pub struct ResourceStore {
    dir: PathBuf,
    resources: Vec<Resource>,
    fetcher: Box<dyn ResourceFetcher>,
}

impl std::fmt::Debug for ResourceStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResourceStore")
            .field("dir", &self.dir)
            .field("resources", &self.resources)
            .finish_non_exhaustive()
    }
}

impl ResourceStore {
    /// Store in `dir` holding the VADER lexicon from `lexicon_url`
    pub fn new(dir: impl Into<PathBuf>, lexicon_url: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            resources: vec![Resource::new(LEXICON_FILE, lexicon_url)],
            fetcher: Box::new(HttpFetcher),
        }
    }

    /// Replace the downloader
    pub fn with_fetcher(mut self, fetcher: Box<dyn ResourceFetcher>) -> Self {
        self.fetcher = fetcher;
        self
    }

    /// Cache directory
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Resources managed by this store
    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    /// Path of the VADER lexicon
    pub fn lexicon_path(&self) -> PathBuf {
        self.dir.join(LEXICON_FILE)
    }

    /// Whether every resource is already on disk
    pub fn is_complete(&self) -> bool {
        self.resources
            .iter()
            .all(|r| self.dir.join(&r.name).is_file())
    }

    /// Download missing resources, returning the names fetched
    pub fn ensure(&self) -> Result<Vec<String>> {
        let mut downloaded = Vec::new();

        for resource in &self.resources {
            let target = self.dir.join(&resource.name);
            if target.is_file() {
                log::debug!("Resource {} already present", target.display());
                continue;
            }

            log::info!("Downloading {} from {}", resource.name, resource.url);
            let bytes = self
                .fetcher
                .fetch(&resource.url)
                .map_err(|reason| resource_error(resource, reason))?;
            if bytes.is_empty() {
                return Err(resource_error(resource, "empty download".to_string()));
            }

            self.store(resource, &target, &bytes)?;
            downloaded.push(resource.name.clone());
        }

        Ok(downloaded)
    }

    fn store(&self, resource: &Resource, target: &Path, bytes: &[u8]) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .map_err(|e| resource_error(resource, format!("cannot create {}: {e}", self.dir.display())))?;

        // Readers only ever see a complete file
        let partial = self.dir.join(format!("{}.part", resource.name));
        fs::write(&partial, bytes)
            .and_then(|_| fs::rename(&partial, target))
            .map_err(|e| {
                let _ = fs::remove_file(&partial);
                resource_error(resource, format!("cannot write {}: {e}", target.display()))
            })
    }
}

fn resource_error(resource: &Resource, reason: String) -> ApiError {
    ApiError::Resource {
        name: resource.name.clone(),
        reason,
    }
}
