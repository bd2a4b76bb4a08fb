//! File reading utilities

use anyhow::{Context, Result};
use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::Path;

/// File reader with UTF-8 validation
pub struct FileReader;

impl FileReader {
    /// Read a file as UTF-8 text
    pub fn read_text(path: &Path) -> Result<String> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        Ok(content)
    }

    /// Read standard input to the end
    ///
    /// Prompts on stderr when stdin is a terminal.
    pub fn read_stdin() -> Result<String> {
        let stdin = io::stdin();
        if stdin.is_terminal() {
            eprintln!("Enter the passage for analysis (finish with Ctrl-D):");
        }

        let mut content = String::new();
        stdin
            .lock()
            .read_to_string(&mut content)
            .context("Failed to read passage from standard input")?;

        Ok(content)
    }
}
