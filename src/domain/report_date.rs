//! Report as-of date resolution.
//!
//! COT positions are always reported as of a Tuesday, so the resolver only
//! trusts dates that land on one. The financial-futures extractor has its own
//! looser fallback, [`resolve_financial_date`], used only when the Tuesday
//! search came up empty.

use chrono::{Datelike, NaiveDate, Weekday};
use regex::{Captures, Regex};
use serde::{Serialize, Serializer};
use std::fmt;
use std::sync::LazyLock;

use super::compile;

const MONTHS: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

static ANCHORED_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile_all(&[
        r"(?is)Commitments of Traders.*?as of (\w+) (\d+), (\d+)",
        r"(?is)COMMITMENTS OF TRADERS.*?(\w+) (\d+), (\d+)",
        r"(?is)Positions as of (\w+) (\d+), (\d+)",
    ])
});

static FINANCIAL_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile_all(&[
        r"(?i)Positions as of (\w+) (\d+), (\d+)",
        r"(?i)as of (\w+) (\d+), (\d+)",
        r"(?i)(\w+) (\d+), (\d+)",
    ])
});

static DATE_TOKEN: LazyLock<Regex> = LazyLock::new(|| compile(r"(\w+) (\d+), (\d+)"));

fn compile_all(patterns: &[&str]) -> Vec<Regex> {
    patterns.iter().map(|p| compile(p)).collect()
}

/// The as-of date of a report, or the `Unknown` sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportDate {
    Known(NaiveDate),
    Unknown,
}

impl ReportDate {
    pub fn is_known(&self) -> bool {
        matches!(self, ReportDate::Known(_))
    }
}

impl fmt::Display for ReportDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportDate::Known(d) => write!(f, "{}", d.format("%d/%b/%Y")),
            ReportDate::Unknown => f.write_str("Unknown"),
        }
    }
}

impl Serialize for ReportDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Resolve the report date from the full report text.
///
/// Anchored phrases are tried first, one candidate per phrase. If none of
/// them is a Tuesday, every `Month Day, Year` token is scanned from the end of
/// the text backwards and the first Tuesday wins.
pub fn resolve_date(raw: &str) -> ReportDate {
    for pattern in ANCHORED_PATTERNS.iter() {
        if let Some(date) = pattern.captures(raw).and_then(|c| date_from_captures(&c)) {
            if date.weekday() == Weekday::Tue {
                return ReportDate::Known(date);
            }
        }
    }

    let tokens: Vec<Captures<'_>> = DATE_TOKEN.captures_iter(raw).collect();
    tokens
        .iter()
        .rev()
        .filter_map(date_from_captures)
        .find(|d| d.weekday() == Weekday::Tue)
        .map(ReportDate::Known)
        .unwrap_or(ReportDate::Unknown)
}

/// Fallback used by the financial-futures layout: the first phrase whose first
/// match is a real calendar date, regardless of weekday.
pub fn resolve_financial_date(raw: &str) -> ReportDate {
    FINANCIAL_PATTERNS
        .iter()
        .find_map(|p| p.captures(raw).and_then(|c| date_from_captures(&c)))
        .map(ReportDate::Known)
        .unwrap_or(ReportDate::Unknown)
}

/// Day must be one or two digits and year exactly four.
fn date_from_captures(caps: &Captures<'_>) -> Option<NaiveDate> {
    let month = month_number(caps.get(1)?.as_str())?;
    let day = caps.get(2)?.as_str();
    let year = caps.get(3)?.as_str();
    if !(1..=2).contains(&day.len()) || year.len() != 4 {
        return None;
    }
    NaiveDate::from_ymd_opt(year.parse().ok()?, month, day.parse().ok()?)
}

/// Full English month name, any case.
fn month_number(name: &str) -> Option<u32> {
    let lower = name.to_lowercase();
    MONTHS
        .iter()
        .position(|m| *m == lower)
        .map(|i| i as u32 + 1)
}
