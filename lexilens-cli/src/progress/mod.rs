//! Progress reporting module

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Spinner showing the current pipeline stage on stderr
#[derive(Clone)]
pub struct ProgressReporter {
    spinner: Option<ProgressBar>,
    quiet: bool,
}

impl ProgressReporter {
    /// Create a new progress reporter
    pub fn new(quiet: bool) -> Self {
        Self {
            spinner: None,
            quiet,
        }
    }

    /// Start the spinner with `message`
    pub fn start(&mut self, message: &str) {
        if self.quiet {
            return;
        }

        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
            spinner.set_style(style);
        }
        spinner.set_message(message.to_string());
        spinner.enable_steady_tick(Duration::from_millis(100));

        self.spinner = Some(spinner);
    }

    /// Show a new stage
    pub fn stage(&self, message: &str) {
        if let Some(spinner) = &self.spinner {
            spinner.set_message(message.to_string());
        }
    }

    /// Run `f` with the spinner hidden, for printing to the terminal
    pub fn suspend<F: FnOnce() -> R, R>(&self, f: F) -> R {
        match &self.spinner {
            Some(spinner) => spinner.suspend(f),
            None => f(),
        }
    }

    /// Finish progress reporting
    pub fn finish(&self) {
        if let Some(spinner) = &self.spinner {
            spinner.finish_and_clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiet_reporter_never_spins() {
        let mut progress = ProgressReporter::new(true);
        progress.start("Loading resources");
        progress.stage("Analysing");
        assert!(progress.spinner.is_none());
        assert_eq!(progress.suspend(|| 42), 42);
        progress.finish();
    }

    #[test]
    fn test_clones_share_the_spinner() {
        let mut progress = ProgressReporter::new(false);
        progress.start("Loading resources");
        let clone = progress.clone();
        clone.stage("Analysing");
        assert_eq!(
            progress.spinner.as_ref().map(|s| s.message()),
            Some("Analysing".to_string())
        );
        progress.finish();
    }
}
