//! Serves a saved report page from disk.

use crate::domain::error::CotError;
use crate::domain::instrument::SourceGroup;
use crate::ports::fetch_port::FetchPort;
use std::path::PathBuf;

/// Every source group reads the same file, so one saved page answers any
/// instrument published on it.
pub struct FileFetchAdapter {
    path: PathBuf,
}

impl FileFetchAdapter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl FetchPort for FileFetchAdapter {
    fn fetch(&self, group: SourceGroup) -> Result<String, CotError> {
        tracing::info!(source_group = %group, path = %self.path.display(), "reading saved report");
        Ok(std::fs::read_to_string(&self.path)?)
    }
}
