//! Field extraction from a located report section.
//!
//! Two column layouts exist. [`extract`] dispatches on the instrument's layout
//! so callers never pick a parser themselves.

pub mod alternate;
pub mod standard;

use crate::domain::compile;
use crate::domain::error::CotError;
use crate::domain::instrument::{InstrumentSpec, Layout};
use crate::domain::record::PositioningRecord;
use crate::domain::report_date::ReportDate;
use regex::Regex;
use std::sync::LazyLock;

static DIGIT_RUN: LazyLock<Regex> = LazyLock::new(|| compile(r"\d+"));
static SIGNED_RUN: LazyLock<Regex> = LazyLock::new(|| compile(r"-?\d+"));
static GROUPED_NUMBER: LazyLock<Regex> = LazyLock::new(|| compile(r"\d+(?:,\d+)*"));

/// Extract a positioning record from `section` using the layout of `spec`.
///
/// `raw` is the whole report; the alternate layout reads its date from it
/// when `report_date` is unknown.
pub fn extract(
    spec: &InstrumentSpec,
    section: &str,
    report_date: ReportDate,
    raw: &str,
) -> Result<PositioningRecord, CotError> {
    match spec.layout() {
        Layout::Standard => standard::extract_standard(spec.id, section, report_date),
        Layout::Alternate => alternate::extract_alternate(spec.id, section, report_date, raw),
    }
}

/// Unsigned digit runs after dropping thousands separators.
///
/// A run too long for `u64` saturates in place so later columns keep their
/// positions.
pub(crate) fn unsigned_numbers(line: &str) -> Vec<u64> {
    let clean = line.replace(',', "");
    DIGIT_RUN
        .find_iter(&clean)
        .map(|m| m.as_str().parse().unwrap_or(u64::MAX))
        .collect()
}

/// Signed integer runs after dropping thousands separators. Oversized runs
/// saturate toward their sign.
pub(crate) fn signed_numbers(line: &str) -> Vec<i64> {
    let clean = line.replace(',', "");
    SIGNED_RUN
        .find_iter(&clean)
        .map(|m| {
            let run = m.as_str();
            run.parse().unwrap_or(if run.starts_with('-') { i64::MIN } else { i64::MAX })
        })
        .collect()
}

/// Count of comma-grouped numbers as they appear in the raw line.
pub(crate) fn grouped_number_count(line: &str) -> usize {
    GROUPED_NUMBER.find_iter(line).count()
}

pub(crate) fn value_at(numbers: &[u64], index: usize) -> u64 {
    numbers.get(index).copied().unwrap_or(0)
}
