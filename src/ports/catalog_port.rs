//! Instrument catalog port trait.

use crate::domain::error::CotError;
use crate::domain::instrument::InstrumentSpec;

pub trait CatalogPort {
    /// Resolve an instrument id, failing with [`CotError::UnknownInstrument`].
    fn lookup(&self, id: &str) -> Result<InstrumentSpec, CotError>;

    /// Every known instrument, sorted by id.
    fn list_all(&self) -> Vec<InstrumentSpec>;
}
