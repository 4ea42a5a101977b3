//! Report rendering port trait.

use crate::domain::analysis::AnalysisReport;
use crate::domain::error::CotError;

/// Port for turning a finished analysis into output text.
pub trait ReportPort {
    fn render(&self, report: &AnalysisReport) -> Result<String, CotError>;
}
