//! Legacy long-format layout (ICE and CME pages).
//!
//! The positions live on a single `All` row:
//!
//! ```text
//! All  :   32,341:   20,155    11,542       582     9,876    18,443    30,613    30,567     1,728     1,774
//! ```
//!
//! Columns in order: open interest, non-commercial long/short/spreading,
//! commercial long/short, total long/short, nonreportable long/short.

use super::{signed_numbers, unsigned_numbers, value_at};
use crate::domain::error::CotError;
use crate::domain::record::{MAX_WEEKLY_CHANGES, PositioningRecord};
use crate::domain::report_date::ReportDate;

const CHANGES_MARKER: &str = "Changes in Commitments from:";

pub fn extract_standard(
    instrument_id: &str,
    section: &str,
    report_date: ReportDate,
) -> Result<PositioningRecord, CotError> {
    let lines: Vec<&str> = section.split('\n').collect();

    let all_line = find_all_line(&lines).ok_or_else(|| CotError::PositionDataNotFound {
        instrument: instrument_id.to_string(),
    })?;
    let n = unsigned_numbers(all_line);

    Ok(PositioningRecord {
        instrument_id: instrument_id.to_string(),
        report_date,
        total_open_interest: value_at(&n, 0),
        noncommercial_long: value_at(&n, 1),
        noncommercial_short: value_at(&n, 2),
        spreading: value_at(&n, 3),
        commercial_long: value_at(&n, 4),
        commercial_short: value_at(&n, 5),
        total_long: value_at(&n, 6),
        total_short: value_at(&n, 7),
        nonreportable_long: value_at(&n, 8),
        nonreportable_short: value_at(&n, 9),
        weekly_changes: find_changes(&lines),
    })
}

fn find_all_line<'a>(lines: &[&'a str]) -> Option<&'a str> {
    lines
        .iter()
        .find(|line| {
            let trimmed = line.trim();
            trimmed.starts_with("All") && trimmed.contains(':')
        })
        .or_else(|| {
            lines
                .iter()
                .find(|line| line.contains("All") && line.chars().any(|c| c.is_ascii_digit()))
        })
        .copied()
}

/// The row after a `Changes in Commitments from:` marker, minus its leading
/// open-interest change.
fn find_changes(lines: &[&str]) -> Vec<i64> {
    let changes_line = lines
        .windows(2)
        .filter(|pair| pair[0].contains(CHANGES_MARKER))
        .map(|pair| pair[1])
        .find(|next| next.contains(':') && (next.contains('-') || next.contains('+')));

    match changes_line {
        Some(line) => signed_numbers(line)
            .into_iter()
            .skip(1)
            .take(MAX_WEEKLY_CHANGES)
            .collect(),
        None => Vec::new(),
    }
}
