//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use lexilens_api::AnalysisReport;
use std::io::Write;

/// Plain text formatter - labelled lines per report
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write + Send> OutputFormatter for TextFormatter<W> {
    fn format_report(&mut self, source: Option<&str>, report: &AnalysisReport) -> Result<()> {
        let w = &mut self.writer;

        if let Some(source) = source {
            writeln!(w, "== {source} ==")?;
        }
        writeln!(w, "Total number of words: {}", report.word_counts.total)?;
        writeln!(
            w,
            "Total number of words (without stopwords): {}",
            report.word_counts.without_stopwords
        )?;
        writeln!(w, "Predominant emotion: {}", report.emotion)?;
        writeln!(w)?;

        writeln!(w, "Possible books the passage might be from:")?;
        if !report.books_searched {
            writeln!(w, "(book search skipped)")?;
            writeln!(w)?;
        } else if report.books.is_empty() {
            writeln!(w, "(no books found)")?;
            writeln!(w)?;
        }
        for book in &report.books {
            writeln!(w, "- Title: {}", book.title)?;
            writeln!(w, "  Authors: {}", book.authors.join(", "))?;
            writeln!(w)?;
        }

        writeln!(w, "Summary:")?;
        writeln!(w, "{}", report.summary)?;
        writeln!(w)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
