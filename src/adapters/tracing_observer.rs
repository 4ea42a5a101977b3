//! Forwards analysis checkpoints to `tracing`.

use crate::domain::bias::BiasResult;
use crate::domain::instrument::InstrumentSpec;
use crate::domain::record::PositioningRecord;
use crate::domain::report_date::ReportDate;
use crate::ports::observer_port::AnalysisObserver;

#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl AnalysisObserver for TracingObserver {
    fn section_located(&self, spec: &InstrumentSpec, section_len: usize) {
        tracing::debug!(instrument = spec.id, section_len, "section located");
    }

    fn date_resolved(&self, spec: &InstrumentSpec, date: ReportDate) {
        if date.is_known() {
            tracing::info!(instrument = spec.id, report_date = %date, "report date resolved");
        } else {
            tracing::warn!(instrument = spec.id, "report date could not be resolved");
        }
    }

    fn record_built(&self, record: &PositioningRecord) {
        tracing::debug!(
            instrument = %record.instrument_id,
            open_interest = record.total_open_interest,
            noncommercial_long = record.noncommercial_long,
            noncommercial_short = record.noncommercial_short,
            commercial_long = record.commercial_long,
            commercial_short = record.commercial_short,
            weekly_changes = record.weekly_changes.len(),
            "positioning record built"
        );
    }

    fn score_computed(&self, spec: &InstrumentSpec, bias: &BiasResult) {
        tracing::info!(
            instrument = spec.id,
            score = bias.score,
            label = %bias.display_label(),
            confidence = %bias.confidence,
            "bias scored"
        );
    }
}
