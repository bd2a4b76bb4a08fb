//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use lexilens_api::AnalysisReport;
use serde::Serialize;
use std::io::Write;

/// JSON formatter - outputs reports as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    entries: Vec<ReportEntry>,
}

/// One element of the JSON array
#[derive(Debug, Serialize)]
pub struct ReportEntry {
    /// Input file, absent for inline text and stdin
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// The report fields
    #[serde(flatten)]
    pub report: AnalysisReport,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            entries: Vec::new(),
        }
    }
}

impl<W: Write + Send> OutputFormatter for JsonFormatter<W> {
    fn format_report(&mut self, source: Option<&str>, report: &AnalysisReport) -> Result<()> {
        self.entries.push(ReportEntry {
            source: source.map(str::to_string),
            report: report.clone(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.entries)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.entries)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::tests::sample_report;
    use serde_json::Value;

    #[test]
    fn test_array_of_reports() {
        let mut formatter = JsonFormatter::new(Vec::new(), false);
        formatter.format_report(None, &sample_report()).unwrap();
        formatter
            .format_report(Some("b.txt"), &sample_report())
            .unwrap();
        formatter.finish().unwrap();

        let value: Value = serde_json::from_slice(&formatter.writer).unwrap();
        let entries = value.as_array().unwrap();
        assert_eq!(entries.len(), 2);
        assert!(entries[0].get("source").is_none());
        assert_eq!(entries[1]["source"], "b.txt");
        assert_eq!(entries[0]["emotion"], "joy");
        assert_eq!(entries[0]["word_counts"]["without_stopwords"], 7);
        assert_eq!(entries[0]["books"][1]["authors"][0], "No authors found");
    }

    #[test]
    fn test_empty_output_is_empty_array() {
        let mut formatter = JsonFormatter::new(Vec::new(), true);
        formatter.finish().unwrap();
        assert_eq!(String::from_utf8(formatter.writer).unwrap(), "[]\n");
    }
}
