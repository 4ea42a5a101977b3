//! Report parsing and bias scoring core.

pub mod analysis;
pub mod bias;
pub mod error;
pub mod extract;
pub mod implications;
pub mod instrument;
pub mod metrics;
pub mod record;
pub mod report_date;
pub mod section;
pub mod settings;

use regex::Regex;

/// Compile a pattern that ships with the binary.
pub(crate) fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| panic!("invalid built-in pattern {pattern}: {e}"))
}
