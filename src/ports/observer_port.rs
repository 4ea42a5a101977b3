//! Progress checkpoints emitted while an analysis runs.
//!
//! Every method defaults to a no-op, so implementors only override the
//! checkpoints they care about.

use crate::domain::bias::BiasResult;
use crate::domain::instrument::InstrumentSpec;
use crate::domain::record::PositioningRecord;
use crate::domain::report_date::ReportDate;

pub trait AnalysisObserver {
    fn section_located(&self, _spec: &InstrumentSpec, _section_len: usize) {}
    fn date_resolved(&self, _spec: &InstrumentSpec, _date: ReportDate) {}
    fn record_built(&self, _record: &PositioningRecord) {}
    fn score_computed(&self, _spec: &InstrumentSpec, _bias: &BiasResult) {}
}

/// Observer that ignores every checkpoint.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl AnalysisObserver for NoopObserver {}
