//! Traders in Financial Futures layout.
//!
//! There is no `All` row. Positions are split across dealer, asset manager,
//! leveraged funds, other reportables and nonreportable columns, which are
//! folded back into the legacy commercial / non-commercial buckets:
//! dealer + asset manager count as commercial, leveraged + other as
//! non-commercial.

use super::{grouped_number_count, signed_numbers, unsigned_numbers, value_at};
use crate::domain::compile;
use crate::domain::error::CotError;
use crate::domain::record::{MAX_WEEKLY_CHANGES, PositioningRecord};
use crate::domain::report_date::{self, ReportDate};
use regex::Regex;
use std::sync::LazyLock;

static OPEN_INTEREST: LazyLock<Regex> =
    LazyLock::new(|| compile(r"Open Interest is\s+(\d+(?:,\d+)*)"));

const HEADER_PREFIXES: [&str; 5] = ["CFTC Code", "Positions", "Changes", "Percent", "Number"];

/// Rows with at least this many values use the five-category schema.
const FULL_SCHEMA_LEN: usize = 14;
/// Rows with at least this many values use the compressed schema.
const COMPRESSED_SCHEMA_LEN: usize = 10;

type PositionsMatcher = for<'a> fn(&[&'a str]) -> Option<&'a str>;

/// Tried in order until one finds a positions row.
const POSITIONS_MATCHERS: [PositionsMatcher; 3] =
    [dense_data_row, any_numeric_row, first_row_after_positions];

/// Long/short pair for one trader category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Leg {
    long: u64,
    short: u64,
}

impl Leg {
    fn at(numbers: &[u64], long: usize, short: usize) -> Self {
        Self {
            long: value_at(numbers, long),
            short: value_at(numbers, short),
        }
    }

    fn plus(self, other: Leg) -> Leg {
        Leg {
            long: self.long.saturating_add(other.long),
            short: self.short.saturating_add(other.short),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Buckets {
    noncommercial: Leg,
    commercial: Leg,
    nonreportable: Leg,
}

pub fn extract_alternate(
    instrument_id: &str,
    section: &str,
    report_date: ReportDate,
    raw: &str,
) -> Result<PositioningRecord, CotError> {
    let report_date = match report_date {
        ReportDate::Unknown => report_date::resolve_financial_date(raw),
        known => known,
    };

    let lines: Vec<&str> = section
        .split('\n')
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();

    let open_interest = find_open_interest(&lines);

    let positions_line = POSITIONS_MATCHERS
        .iter()
        .find_map(|matcher| matcher(lines.as_slice()))
        .ok_or_else(|| {
            let head: Vec<&str> = lines.iter().take(15).copied().collect();
            tracing::debug!(
                instrument = instrument_id,
                head = ?head,
                "no positions row in financial section"
            );
            CotError::PositionDataNotFound {
                instrument: instrument_id.to_string(),
            }
        })?;

    let buckets = map_columns(&unsigned_numbers(positions_line));
    let Buckets {
        noncommercial,
        commercial,
        nonreportable,
    } = buckets;

    let total_open_interest = match open_interest {
        Some(oi) if oi > 0 => oi,
        _ => {
            [noncommercial, commercial, nonreportable]
                .iter()
                .fold(0u64, |sum, leg| sum.saturating_add(leg.long).saturating_add(leg.short))
                / 2
        }
    };

    Ok(PositioningRecord {
        instrument_id: instrument_id.to_string(),
        report_date,
        total_open_interest,
        noncommercial_long: noncommercial.long,
        noncommercial_short: noncommercial.short,
        spreading: 0,
        commercial_long: commercial.long,
        commercial_short: commercial.short,
        total_long: noncommercial
            .long
            .saturating_add(commercial.long)
            .saturating_add(nonreportable.long),
        total_short: noncommercial
            .short
            .saturating_add(commercial.short)
            .saturating_add(nonreportable.short),
        nonreportable_long: nonreportable.long,
        nonreportable_short: nonreportable.short,
        weekly_changes: find_changes(&lines),
    })
}

/// Only the first `Open Interest is` line is consulted.
fn find_open_interest(lines: &[&str]) -> Option<u64> {
    let line = lines.iter().find(|l| l.contains("Open Interest is"))?;
    let caps = OPEN_INTEREST.captures(line)?;
    caps.get(1)?.as_str().replace(',', "").parse().ok()
}

fn is_header(line: &str) -> bool {
    HEADER_PREFIXES.iter().any(|p| line.starts_with(p)) || line.contains("Total Traders")
}

fn dense_data_row<'a>(lines: &[&'a str]) -> Option<&'a str> {
    lines
        .iter()
        .find(|l| !is_header(l) && grouped_number_count(l) >= 8)
        .copied()
}

fn any_numeric_row<'a>(lines: &[&'a str]) -> Option<&'a str> {
    lines.iter().find(|l| grouped_number_count(l) >= 6).copied()
}

fn first_row_after_positions<'a>(lines: &[&'a str]) -> Option<&'a str> {
    let mut seen_positions = false;
    for line in lines {
        if line.contains("Positions") {
            seen_positions = true;
            continue;
        }
        if seen_positions && line.chars().any(|c| c.is_ascii_digit()) {
            return Some(*line);
        }
    }
    None
}

fn map_columns(n: &[u64]) -> Buckets {
    let (dealer, asset_mgr, leveraged, other, nonreportable) = if n.len() >= FULL_SCHEMA_LEN {
        (
            Leg::at(n, 0, 1),
            Leg::at(n, 3, 4),
            Leg::at(n, 6, 7),
            Leg::at(n, 9, 10),
            Leg::at(n, 12, 13),
        )
    } else if n.len() >= COMPRESSED_SCHEMA_LEN {
        (
            Leg::at(n, 2, 3),
            Leg::at(n, 4, 5),
            Leg::at(n, 0, 1),
            Leg::at(n, 6, 7),
            Leg::at(n, 8, 9),
        )
    } else {
        return Buckets {
            noncommercial: Leg::at(n, 0, 1),
            commercial: Leg::at(n, 2, 3),
            nonreportable: Leg::at(n, 4, 5),
        };
    };

    Buckets {
        noncommercial: leveraged.plus(other),
        commercial: dealer.plus(asset_mgr),
        nonreportable,
    }
}

fn find_changes(lines: &[&str]) -> Vec<i64> {
    let Some(idx) = lines.iter().position(|l| l.contains("Changes from:")) else {
        return Vec::new();
    };
    lines
        .get(idx + 1)
        .map(|next| {
            signed_numbers(next)
                .into_iter()
                .take(MAX_WEEKLY_CHANGES)
                .collect()
        })
        .unwrap_or_default()
}
