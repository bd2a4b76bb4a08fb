//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use lexilens_api::books::DEFAULT_BOOKS_ENDPOINT;
use lexilens_api::resources::{DEFAULT_CACHE_DIR, DEFAULT_LEXICON_URL};
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        if self.output.exists() && !self.force {
            anyhow::bail!(
                "{} already exists (use --force to overwrite)",
                self.output.display()
            );
        }

        fs::write(&self.output, Self::template())
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template written to {}", self.output.display());
        println!();
        println!("Next steps:");
        println!("1. Put your Google Books API key under [general]");
        println!("2. Fetch the sentiment lexicon once:");
        println!(
            "   lexilens fetch-resources -c {}",
            self.output.display()
        );
        println!("3. Analyse a passage:");
        println!(
            "   lexilens analyze -i passage.txt -c {}",
            self.output.display()
        );

        Ok(())
    }

    /// Template configuration content
    pub fn template() -> String {
        format!(
            r#"# lexilens configuration

[general]
# Google Books API key. Leave unset to skip the book search, or point
# credentials_file at a TOML file with its own [general] api_key.
# api_key = "your-key"
# credentials_file = ".lexilens/credentials.toml"

[analysis]
# Sentences in the summary (1 to 5)
summary_sentences = 3
# Book candidates shown
max_books = 3
search_books = true
books_endpoint = "{DEFAULT_BOOKS_ENDPOINT}"

[emotion]
# Unset keys keep their defaults.
# joy_compound = 0.05
# sadness_compound = -0.05
# disgust_neg = 0.5
# fear_pos_max = 0.1
# fear_neg_min = 0.1
# Set to false to label fear without looking at the negative share
fear_requires_negative = true

[resources]
cache_dir = "{DEFAULT_CACHE_DIR}"
lexicon_url = "{DEFAULT_LEXICON_URL}"

[output]
# text, json or markdown
default_format = "text"
pretty_json = true
"#
        )
    }
}
