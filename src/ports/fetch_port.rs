//! Report page retrieval port trait.

use crate::domain::error::CotError;
use crate::domain::instrument::SourceGroup;

/// Port for retrieving the raw text of one report page.
pub trait FetchPort {
    fn fetch(&self, group: SourceGroup) -> Result<String, CotError>;
}
