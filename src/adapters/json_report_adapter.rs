//! JSON report via serde.

use crate::domain::analysis::AnalysisReport;
use crate::domain::error::CotError;
use crate::ports::report_port::ReportPort;

#[derive(Debug, Clone, Copy)]
pub struct JsonReportAdapter {
    pretty: bool,
}

impl JsonReportAdapter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl ReportPort for JsonReportAdapter {
    fn render(&self, report: &AnalysisReport) -> Result<String, CotError> {
        let rendered = if self.pretty {
            serde_json::to_string_pretty(report)
        } else {
            serde_json::to_string(report)
        };
        rendered.map_err(|e| CotError::Render {
            reason: e.to_string(),
        })
    }
}
