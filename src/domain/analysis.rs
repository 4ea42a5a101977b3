//! End-to-end analysis of one instrument.
//!
//! Locate the section, resolve the date, extract the record, derive metrics,
//! score the bias. Each stage reports to an [`AnalysisObserver`].

use super::bias::{BiasResult, score_bias};
use super::error::CotError;
use super::extract;
use super::implications::TradingImplications;
use super::instrument::InstrumentSpec;
use super::metrics::DerivedMetrics;
use super::record::PositioningRecord;
use super::report_date::resolve_date;
use super::section;
use crate::ports::catalog_port::CatalogPort;
use crate::ports::fetch_port::FetchPort;
use crate::ports::observer_port::AnalysisObserver;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub instrument: InstrumentSpec,
    pub record: PositioningRecord,
    pub metrics: DerivedMetrics,
    pub bias: BiasResult,
    pub implications: TradingImplications,
}

/// Analyze `spec` within an already fetched report page.
pub fn analyze(
    raw: &str,
    spec: &InstrumentSpec,
    observer: &dyn AnalysisObserver,
) -> Result<AnalysisReport, CotError> {
    let section = section::locate(raw, spec)?;
    observer.section_located(spec, section.len());

    let report_date = resolve_date(raw);
    observer.date_resolved(spec, report_date);

    let record = extract::extract(spec, section, report_date, raw)?;
    observer.record_built(&record);

    let metrics = DerivedMetrics::compute(&record);
    let bias = score_bias(&record, &metrics);
    observer.score_computed(spec, &bias);

    let implications = TradingImplications::from_bias(spec.id, &bias);

    Ok(AnalysisReport {
        instrument: *spec,
        record,
        metrics,
        bias,
        implications,
    })
}

/// Look up `instrument_id`, fetch its report page and analyze it.
pub fn run_analysis(
    catalog: &dyn CatalogPort,
    fetcher: &dyn FetchPort,
    observer: &dyn AnalysisObserver,
    instrument_id: &str,
) -> Result<AnalysisReport, CotError> {
    let spec = catalog.lookup(instrument_id)?;
    let raw = fetcher.fetch(spec.source_group)?;
    analyze(&raw, &spec, observer)
}
