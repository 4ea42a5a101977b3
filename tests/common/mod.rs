#![allow(dead_code)]

use cotbias::domain::bias::BiasResult;
use cotbias::domain::error::CotError;
use cotbias::domain::instrument::{InstrumentSpec, SourceGroup};
use cotbias::domain::record::PositioningRecord;
use cotbias::domain::report_date::ReportDate;
use cotbias::ports::fetch_port::FetchPort;
use cotbias::ports::observer_port::AnalysisObserver;
use std::cell::RefCell;
use std::collections::HashMap;

/// ICE legacy long-format page with three sections: USD INDEX (crowded
/// long), COCOA (crowded short) and CANOLA (no positions row).
pub const STANDARD_REPORT: &str = "\
Commitments of Traders - Futures Only, Positions as of March 18, 2025

USD INDEX - ICE FUTURES U.S.                                     Code-098662
     :          :                     Reportable Positions                       :   Nonreportable
     :   Open   :      Non-Commercial       :    Commercial     :      Total      :    Positions
     : Interest :   Long  :  Short  :Spread :   Long  :  Short  :   Long  :  Short :   Long  :  Short
All  :   32,341:   20,155    11,542       582     9,876    18,443    30,613    30,567     1,728     1,774
Old  :   32,341:   20,155    11,542       582     9,876    18,443    30,613    30,567     1,728     1,774
     :          :
     : Changes in Commitments from: March 11, 2025
     :    1,204:      850    -1,310       120       210     2,380     1,180     1,190        24        14
COCOA - ICE FUTURES U.S.                                         Code-073732
     : Interest :   Long  :  Short  :Spread :   Long  :  Short  :   Long  :  Short :   Long  :  Short
All  :  245,000:   40,000   150,000     5,000   180,000    70,000   225,000   225,000    20,000    20,000
CANOLA - ICE FUTURES U.S.                                        Code-135731
     : (no positions reported this week)
Updated March 21, 2025
";

/// Traders in Financial Futures page with BRITISH POUND and EURO FX.
pub const FINANCIAL_REPORT: &str = "\
Traders in Financial Futures - Futures Only Positions as of March 18, 2025
--------------------------------------------------------------------------------
BRITISH POUND - CHICAGO MERCANTILE EXCHANGE
                            (CONTRACTS OF GBP 62,500)
CFTC Code #096742                                                  Open Interest is   245,310
Positions
    18,250    120,400      1,215     45,300     30,150      3,020     95,410     40,220      6,115     20,500     15,040      2,210     18,400     16,920
Changes from:       March 11, 2025                                          Total Change is:     4,120
     1,020     -2,310        115      2,400       -540        210      3,150     -1,020        300       -120        410         50        680        230
Percent of Open Interest Represented by Each Category of Trader
       7.4       49.1        0.5       18.5       12.3        1.2       38.9       16.4        2.5        8.4        6.1        0.9        7.5        6.9
Number of Traders in Each Category                                    Total Traders:   180
--------------------------------------------------------------------------------
EURO FX - CHICAGO MERCANTILE EXCHANGE
                            (CONTRACTS OF EUR 125,000)
CFTC Code #099741                                                  Open Interest is   700,000
Positions
   100,000    300,000      5,000    250,000     60,000      8,000     50,000    240,000      9,000     30,000     20,000      4,000     40,000     50,000
--------------------------------------------------------------------------------
";

pub const USD_INDEX: InstrumentSpec = InstrumentSpec::new(
    "USD INDEX",
    SourceGroup::UsdIndex,
    "USD INDEX - ICE FUTURES U.S.",
    "US Dollar Index futures",
);

/// Fetcher serving canned pages and remembering which groups were asked for.
pub struct MockFetchPort {
    pub pages: HashMap<SourceGroup, String>,
    pub errors: HashMap<SourceGroup, String>,
    pub calls: RefCell<Vec<SourceGroup>>,
}

impl MockFetchPort {
    pub fn new() -> Self {
        Self {
            pages: HashMap::new(),
            errors: HashMap::new(),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn with_page(mut self, group: SourceGroup, page: &str) -> Self {
        self.pages.insert(group, page.to_string());
        self
    }

    pub fn with_error(mut self, group: SourceGroup, reason: &str) -> Self {
        self.errors.insert(group, reason.to_string());
        self
    }

    /// Serves both fixture pages.
    pub fn with_fixtures() -> Self {
        Self::new()
            .with_page(SourceGroup::UsdIndex, STANDARD_REPORT)
            .with_page(SourceGroup::Financial, FINANCIAL_REPORT)
    }
}

impl FetchPort for MockFetchPort {
    fn fetch(&self, group: SourceGroup) -> Result<String, CotError> {
        self.calls.borrow_mut().push(group);
        if let Some(reason) = self.errors.get(&group) {
            return Err(CotError::Fetch {
                source_group: group,
                reason: reason.clone(),
            });
        }
        Ok(self.pages.get(&group).cloned().unwrap_or_default())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Checkpoint {
    SectionLocated(String),
    DateResolved(ReportDate),
    RecordBuilt(u64),
    ScoreComputed(i32),
}

#[derive(Default)]
pub struct RecordingObserver {
    pub checkpoints: RefCell<Vec<Checkpoint>>,
}

impl AnalysisObserver for RecordingObserver {
    fn section_located(&self, spec: &InstrumentSpec, _section_len: usize) {
        self.checkpoints
            .borrow_mut()
            .push(Checkpoint::SectionLocated(spec.id.to_string()));
    }

    fn date_resolved(&self, _spec: &InstrumentSpec, date: ReportDate) {
        self.checkpoints.borrow_mut().push(Checkpoint::DateResolved(date));
    }

    fn record_built(&self, record: &PositioningRecord) {
        self.checkpoints
            .borrow_mut()
            .push(Checkpoint::RecordBuilt(record.total_open_interest));
    }

    fn score_computed(&self, _spec: &InstrumentSpec, bias: &BiasResult) {
        self.checkpoints
            .borrow_mut()
            .push(Checkpoint::ScoreComputed(bias.score));
    }
}

pub fn write_temp(content: &str) -> tempfile::NamedTempFile {
    use std::io::Write;
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}
