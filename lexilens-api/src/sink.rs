//! Where analysis results go

use crate::dto::{AnalysisReport, Notice, NoticeLevel};
use crate::error::Result;

/// Receives what a [`Pipeline`](crate::Pipeline) produces
///
/// Any `FnMut(&AnalysisReport)` closure is a sink; its notices go to the log.
pub trait ReportSink {
    /// Called with each notice as it is raised
    fn notice(&mut self, notice: &Notice) -> Result<()> {
        match notice.level {
            NoticeLevel::Warning => log::warn!("{notice}"),
            NoticeLevel::Error => log::error!("{notice}"),
        }
        Ok(())
    }

    /// Called once per analysed passage
    fn report(&mut self, report: &AnalysisReport) -> Result<()>;
}

impl<F> ReportSink for F
where
    F: FnMut(&AnalysisReport),
{
    fn report(&mut self, report: &AnalysisReport) -> Result<()> {
        self(report);
        Ok(())
    }
}

/// Sink that keeps everything in memory
#[derive(Debug, Default, Clone)]
pub struct CollectingSink {
    /// Reports received so far
    pub reports: Vec<AnalysisReport>,
    /// Notices received so far
    pub notices: Vec<Notice>,
}

impl ReportSink for CollectingSink {
    fn notice(&mut self, notice: &Notice) -> Result<()> {
        self.notices.push(notice.clone());
        Ok(())
    }

    fn report(&mut self, report: &AnalysisReport) -> Result<()> {
        self.reports.push(report.clone());
        Ok(())
    }
}
