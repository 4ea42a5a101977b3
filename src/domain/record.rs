//! Normalized positioning record for one instrument at one report date.

use crate::domain::report_date::ReportDate;
use serde::Serialize;

/// Most weekly change columns kept from a report.
pub const MAX_WEEKLY_CHANGES: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PositioningRecord {
    pub instrument_id: String,
    pub report_date: ReportDate,
    pub total_open_interest: u64,
    pub noncommercial_long: u64,
    pub noncommercial_short: u64,
    pub spreading: u64,
    pub commercial_long: u64,
    pub commercial_short: u64,
    /// Reported totals; upstream data does not always sum consistently.
    pub total_long: u64,
    pub total_short: u64,
    pub nonreportable_long: u64,
    pub nonreportable_short: u64,
    /// Week-over-week changes in report column order.
    pub weekly_changes: Vec<i64>,
}

impl PositioningRecord {
    /// A record with every count zeroed.
    pub fn empty(instrument_id: &str, report_date: ReportDate) -> Self {
        Self {
            instrument_id: instrument_id.to_string(),
            report_date,
            total_open_interest: 0,
            noncommercial_long: 0,
            noncommercial_short: 0,
            spreading: 0,
            commercial_long: 0,
            commercial_short: 0,
            total_long: 0,
            total_short: 0,
            nonreportable_long: 0,
            nonreportable_short: 0,
            weekly_changes: Vec::new(),
        }
    }
}
