//! Instrument descriptors and report source groups.
//!
//! Each supported instrument lives on one of three weekly CFTC pages. The page
//! decides both how sections are delimited and which column layout the
//! positions use.

use serde::Serialize;
use std::fmt;

/// The report page an instrument is published on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceGroup {
    /// ICE Futures U.S. legacy long-format page (USD index, softs).
    UsdIndex,
    /// Traders in Financial Futures page.
    Financial,
    /// CME legacy long-format page.
    Cme,
}

impl SourceGroup {
    pub const ALL: [SourceGroup; 3] = [SourceGroup::UsdIndex, SourceGroup::Financial, SourceGroup::Cme];

    pub fn key(self) -> &'static str {
        match self {
            SourceGroup::UsdIndex => "usd_index",
            SourceGroup::Financial => "financial",
            SourceGroup::Cme => "cme",
        }
    }

    pub fn boundary(self) -> BoundaryRule {
        match self {
            SourceGroup::UsdIndex | SourceGroup::Cme => BoundaryRule::UppercaseLine,
            SourceGroup::Financial => BoundaryRule::DashRule,
        }
    }

    pub fn layout(self) -> Layout {
        match self {
            SourceGroup::UsdIndex | SourceGroup::Cme => Layout::Standard,
            SourceGroup::Financial => Layout::Alternate,
        }
    }
}

impl fmt::Display for SourceGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.key())
    }
}

/// What ends an instrument's section in the raw report text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryRule {
    /// A line starting with two uppercase letters, or an `Updated` line.
    UppercaseLine,
    /// A run of at least 20 dashes, or an `Updated` line.
    DashRule,
}

/// Column layout of the positions block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Legacy layout with an `All` row of ten columns.
    Standard,
    /// Financial futures layout split by dealer / asset manager / leveraged /
    /// other / nonreportable.
    Alternate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InstrumentSpec {
    pub id: &'static str,
    pub source_group: SourceGroup,
    /// Exact, case-sensitive section header in the report.
    #[serde(skip)]
    pub anchor: &'static str,
    pub description: &'static str,
}

impl InstrumentSpec {
    pub const fn new(
        id: &'static str,
        source_group: SourceGroup,
        anchor: &'static str,
        description: &'static str,
    ) -> Self {
        Self {
            id,
            source_group,
            anchor,
            description,
        }
    }

    pub fn boundary(&self) -> BoundaryRule {
        self.source_group.boundary()
    }

    pub fn layout(&self) -> Layout {
        self.source_group.layout()
    }
}
