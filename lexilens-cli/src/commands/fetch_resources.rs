//! Fetch-resources command implementation

use super::init_logging;
use crate::config::CliConfig;
use anyhow::{Context, Result};
use clap::Args;
use lexilens_api::ResourceStore;
use lexilens_core::Lexicon;
use std::path::PathBuf;

/// Arguments for the fetch-resources command
#[derive(Debug, Args)]
pub struct FetchResourcesArgs {
    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Cache directory (overrides the config file)
    #[arg(short = 'd', long, value_name = "DIR")]
    pub cache_dir: Option<PathBuf>,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl FetchResourcesArgs {
    /// Execute the fetch-resources command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.verbose, false);

        let file_config = CliConfig::load_or_default(self.config.as_deref())?;
        let store = self.store(&file_config);

        let downloaded = store
            .ensure()
            .context("Failed to fetch language resources")?;
        if downloaded.is_empty() {
            println!(
                "All resources already present in {}",
                store.dir().display()
            );
        }
        for name in &downloaded {
            println!("Downloaded {name}");
        }

        let lexicon = Lexicon::from_path(&store.lexicon_path()).with_context(|| {
            format!("Invalid lexicon file: {}", store.lexicon_path().display())
        })?;
        println!("Lexicon ready: {} entries", lexicon.len());

        Ok(())
    }

    fn store(&self, file: &CliConfig) -> ResourceStore {
        let dir = self
            .cache_dir
            .clone()
            .unwrap_or_else(|| file.resources.cache_dir.clone());
        ResourceStore::new(dir, file.resources.lexicon_url.clone())
    }
}
