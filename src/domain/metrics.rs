//! Derived positioning metrics.
//!
//! Anything that cannot be computed (zero open interest, zero shorts, too few
//! weekly changes) is `None`, never zero or NaN.

use super::record::PositioningRecord;
use serde::Serialize;

/// Weekly changes needed before speculative change metrics exist.
const MIN_CHANGES_FOR_WEEKLY: usize = 4;
/// Weekly changes needed before commercial change metrics exist.
const MIN_CHANGES_FOR_COMMERCIAL: usize = 5;

// Positions inside `weekly_changes`, after the open-interest change is dropped.
// Financial-layout changes are read at the same positions in raw column order,
// so there 0/1 are dealer and 3/4 are asset manager changes.
const NONCOMMERCIAL_LONG_CHANGE: usize = 0;
const NONCOMMERCIAL_SHORT_CHANGE: usize = 1;
const COMMERCIAL_LONG_CHANGE: usize = 3;
const COMMERCIAL_SHORT_CHANGE: usize = 4;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DerivedMetrics {
    pub noncommercial_net: i64,
    pub commercial_net: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub noncommercial_long_pct: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub noncommercial_short_pct: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commercial_long_pct: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commercial_short_pct: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub noncommercial_ratio: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commercial_ratio: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weekly: Option<WeeklyChange>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commercial_weekly: Option<WeeklyChange>,
}

/// Week-over-week change for one trader group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WeeklyChange {
    pub long_change: i64,
    pub short_change: i64,
    pub net_change: i64,
}

impl WeeklyChange {
    fn from_changes(changes: &[i64], long: usize, short: usize) -> Self {
        let long_change = changes[long];
        let short_change = changes[short];
        Self {
            long_change,
            short_change,
            net_change: long_change.saturating_sub(short_change),
        }
    }
}

impl DerivedMetrics {
    pub fn compute(record: &PositioningRecord) -> Self {
        let oi = record.total_open_interest;
        let pct = |count: u64| (oi > 0).then(|| count as f64 / oi as f64 * 100.0);
        let ratio = |long: u64, short: u64| (short > 0).then(|| long as f64 / short as f64);

        let changes = &record.weekly_changes;
        let weekly = (changes.len() >= MIN_CHANGES_FOR_WEEKLY).then(|| {
            WeeklyChange::from_changes(changes, NONCOMMERCIAL_LONG_CHANGE, NONCOMMERCIAL_SHORT_CHANGE)
        });
        let commercial_weekly = (changes.len() >= MIN_CHANGES_FOR_COMMERCIAL).then(|| {
            WeeklyChange::from_changes(changes, COMMERCIAL_LONG_CHANGE, COMMERCIAL_SHORT_CHANGE)
        });

        DerivedMetrics {
            noncommercial_net: net(record.noncommercial_long, record.noncommercial_short),
            commercial_net: net(record.commercial_long, record.commercial_short),
            noncommercial_long_pct: pct(record.noncommercial_long),
            noncommercial_short_pct: pct(record.noncommercial_short),
            commercial_long_pct: pct(record.commercial_long),
            commercial_short_pct: pct(record.commercial_short),
            noncommercial_ratio: ratio(record.noncommercial_long, record.noncommercial_short),
            commercial_ratio: ratio(record.commercial_long, record.commercial_short),
            weekly,
            commercial_weekly,
        }
    }
}

fn net(long: u64, short: u64) -> i64 {
    let long = i64::try_from(long).unwrap_or(i64::MAX);
    let short = i64::try_from(short).unwrap_or(i64::MAX);
    long.saturating_sub(short)
}
