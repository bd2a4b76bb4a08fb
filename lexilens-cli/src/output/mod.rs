//! Output formatting module

use crate::progress::ProgressReporter;
use anyhow::Result;
use lexilens_api::{AnalysisReport, ApiError, Notice, NoticeLevel, ReportSink};
use std::io::Write;

/// Trait for output formatters
pub trait OutputFormatter: Send {
    /// Format one report; `source` names the input file, if any
    fn format_report(&mut self, source: Option<&str>, report: &AnalysisReport) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Labelled lines, one section per result
    Text,
    /// JSON array of reports
    Json,
    /// Markdown tables and lists
    Markdown,
}

impl OutputFormat {
    /// Create the formatter for this format
    pub fn formatter(
        self,
        writer: Box<dyn Write + Send>,
        pretty_json: bool,
    ) -> Box<dyn OutputFormatter> {
        match self {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer, pretty_json)),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
        }
    }
}

/// Adapts an [`OutputFormatter`] to the pipeline's [`ReportSink`]
///
/// Reports go to the formatter, notices to stderr.
pub struct FormatterSink {
    formatter: Box<dyn OutputFormatter>,
    progress: ProgressReporter,
    source: Option<String>,
}

impl FormatterSink {
    /// Create a sink writing through `formatter`
    pub fn new(formatter: Box<dyn OutputFormatter>, progress: ProgressReporter) -> Self {
        Self {
            formatter,
            progress,
            source: None,
        }
    }

    /// Label the next reports with `source`
    pub fn set_source(&mut self, source: Option<String>) {
        self.source = source;
    }

    /// Flush the formatter
    pub fn finish(&mut self) -> Result<()> {
        self.formatter.finish()
    }
}

impl ReportSink for FormatterSink {
    fn notice(&mut self, notice: &Notice) -> lexilens_api::error::Result<()> {
        let line = match (notice.level, &self.source) {
            (NoticeLevel::Warning, Some(source)) => format!("Warning ({source}): {notice}"),
            (NoticeLevel::Warning, None) => format!("Warning: {notice}"),
            (NoticeLevel::Error, Some(source)) => format!("{notice} ({source})"),
            (NoticeLevel::Error, None) => notice.to_string(),
        };
        self.progress.suspend(|| eprintln!("{line}"));
        Ok(())
    }

    fn report(&mut self, report: &AnalysisReport) -> lexilens_api::error::Result<()> {
        self.formatter
            .format_report(self.source.as_deref(), report)
            .map_err(|e| ApiError::Io(std::io::Error::other(format!("{e:#}"))))
    }
}
