//! Markdown output formatter

use super::OutputFormatter;
use anyhow::Result;
use lexilens_api::AnalysisReport;
use std::io::Write;

/// Markdown formatter - one section per report
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    report_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            report_count: 0,
        }
    }
}

impl<W: Write + Send> OutputFormatter for MarkdownFormatter<W> {
    fn format_report(&mut self, source: Option<&str>, report: &AnalysisReport) -> Result<()> {
        self.report_count += 1;
        let w = &mut self.writer;

        match source {
            Some(source) => writeln!(w, "## {source}")?,
            None => writeln!(w, "## Passage {}", self.report_count)?,
        }
        writeln!(w)?;
        writeln!(w, "| Metric | Value |")?;
        writeln!(w, "|---|---|")?;
        writeln!(w, "| Words | {} |", report.word_counts.total)?;
        writeln!(
            w,
            "| Words (without stopwords) | {} |",
            report.word_counts.without_stopwords
        )?;
        writeln!(w, "| Predominant emotion | {} |", report.emotion)?;
        writeln!(w, "| Compound score | {:.4} |", report.sentiment.compound)?;
        writeln!(w)?;

        writeln!(w, "### Possible books")?;
        writeln!(w)?;
        if !report.books_searched {
            writeln!(w, "_Book search skipped._")?;
        } else if report.books.is_empty() {
            writeln!(w, "_No books found._")?;
        }
        for book in &report.books {
            writeln!(w, "- **{}** by {}", book.title, book.authors.join(", "))?;
        }
        writeln!(w)?;

        writeln!(w, "### Summary")?;
        writeln!(w)?;
        writeln!(w, "> {}", report.summary)?;
        writeln!(w)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Passages analysed: {}*", self.report_count)?;
        self.writer.flush()?;
        Ok(())
    }
}
