//! Locating one instrument's section inside a full report page.

use crate::domain::error::CotError;
use crate::domain::instrument::{BoundaryRule, InstrumentSpec};
use regex::Regex;
use std::sync::LazyLock;

use super::compile;

static UPPERCASE_BOUNDARY: LazyLock<Regex> = LazyLock::new(|| compile(r"\n[A-Z][A-Z]|\nUpdated"));

static DASH_BOUNDARY: LazyLock<Regex> = LazyLock::new(|| compile(r"\n-{20,}|\nUpdated"));

fn boundary_regex(rule: BoundaryRule) -> &'static Regex {
    match rule {
        BoundaryRule::UppercaseLine => &*UPPERCASE_BOUNDARY,
        BoundaryRule::DashRule => &*DASH_BOUNDARY,
    }
}

/// Return the text between the instrument's anchor and the next section
/// boundary (or the end of the report).
///
/// The anchor must match exactly, case included; the first occurrence wins.
pub fn locate<'a>(raw: &'a str, spec: &InstrumentSpec) -> Result<&'a str, CotError> {
    let start = raw
        .find(spec.anchor)
        .map(|pos| pos + spec.anchor.len())
        .ok_or_else(|| CotError::SectionNotFound {
            instrument: spec.id.to_string(),
        })?;

    let body = &raw[start..];
    let end = boundary_regex(spec.boundary())
        .find(body)
        .map(|m| m.start())
        .unwrap_or(body.len());

    Ok(&body[..end])
}
