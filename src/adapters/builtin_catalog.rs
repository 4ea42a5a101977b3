//! Compile-time instrument catalog.

use crate::domain::error::CotError;
use crate::domain::instrument::InstrumentSpec;
use crate::domain::instrument::SourceGroup::{Cme, Financial, UsdIndex};
use crate::ports::catalog_port::CatalogPort;

macro_rules! cme_anchor {
    ($name:literal) => {
        concat!($name, " - CHICAGO MERCANTILE EXCHANGE")
    };
}

macro_rules! ice_anchor {
    ($name:literal) => {
        concat!($name, " - ICE FUTURES U.S.")
    };
}

pub static INSTRUMENTS: &[InstrumentSpec] = &[
    InstrumentSpec::new("USD INDEX", UsdIndex, ice_anchor!("USD INDEX"), "US Dollar Index futures"),
    // Currencies
    InstrumentSpec::new("BRITISH POUND", Financial, cme_anchor!("BRITISH POUND"), "British Pound futures (GBP/USD)"),
    InstrumentSpec::new("EURO FX", Financial, cme_anchor!("EURO FX"), "Euro FX futures (EUR/USD)"),
    InstrumentSpec::new("JAPANESE YEN", Financial, cme_anchor!("JAPANESE YEN"), "Japanese Yen futures (JPY/USD)"),
    InstrumentSpec::new("CANADIAN DOLLAR", Financial, cme_anchor!("CANADIAN DOLLAR"), "Canadian Dollar futures (CAD/USD)"),
    InstrumentSpec::new("SWISS FRANC", Financial, cme_anchor!("SWISS FRANC"), "Swiss Franc futures (CHF/USD)"),
    InstrumentSpec::new("AUSTRALIAN DOLLAR", Financial, cme_anchor!("AUSTRALIAN DOLLAR"), "Australian Dollar futures (AUD/USD)"),
    InstrumentSpec::new("NEW ZEALAND DOLLAR", Financial, cme_anchor!("NZ DOLLAR"), "New Zealand Dollar futures (NZD/USD)"),
    InstrumentSpec::new("MEXICAN PESO", Financial, cme_anchor!("MEXICAN PESO"), "Mexican Peso futures (MXN/USD)"),
    InstrumentSpec::new("BRAZILIAN REAL", Financial, cme_anchor!("BRAZILIAN REAL"), "Brazilian Real futures (BRL/USD)"),
    InstrumentSpec::new("SOUTH AFRICAN RAND", Financial, cme_anchor!("SO AFRICAN RAND"), "South African Rand futures (ZAR/USD)"),
    // Crypto
    InstrumentSpec::new("BITCOIN", Financial, cme_anchor!("BITCOIN"), "Bitcoin futures"),
    InstrumentSpec::new("ETHEREUM", Financial, cme_anchor!("ETHER CASH SETTLED"), "Ethereum futures"),
    // Stock indices
    InstrumentSpec::new("RUSSELL E-MINI", Cme, cme_anchor!("RUSSELL E-MINI"), "Russell 2000 E-Mini futures"),
    InstrumentSpec::new("NIKKEI STOCK AVERAGE", Cme, cme_anchor!("NIKKEI STOCK AVERAGE YEN DENOM"), "Nikkei Stock Average futures"),
    InstrumentSpec::new("S&P 500 ANNUAL DIVIDEND", Cme, cme_anchor!("S&P 500 ANNUAL DIVIDEND INDEX"), "S&P 500 Annual Dividend Index futures"),
    InstrumentSpec::new("DOW JONES", Financial, "DJIA Consolidated - CHICAGO BOARD OF TRADE", "Dow Jones Industrial Average futures"),
    InstrumentSpec::new("VIX", Financial, "VIX FUTURES - CBOE FUTURES EXCHANGE", "VIX Volatility Index futures"),
    // Livestock and dairy
    InstrumentSpec::new("LEAN HOGS", Cme, cme_anchor!("LEAN HOGS"), "Lean Hogs futures"),
    InstrumentSpec::new("LIVE CATTLE", Cme, cme_anchor!("LIVE CATTLE"), "Live Cattle futures"),
    InstrumentSpec::new("MILK CLASS III", Cme, cme_anchor!("MILK, Class III"), "Milk Class III futures"),
    InstrumentSpec::new("BUTTER", Cme, cme_anchor!("BUTTER (CASH SETTLED)"), "Butter (Cash Settled) futures"),
    InstrumentSpec::new("NON FAT DRY MILK", Cme, cme_anchor!("NON FAT DRY MILK"), "Non Fat Dry Milk futures"),
    // ICE softs
    InstrumentSpec::new("COTTON", UsdIndex, ice_anchor!("COTTON NO. 2"), "Cotton No. 2 futures"),
    InstrumentSpec::new("SUGAR", UsdIndex, ice_anchor!("SUGAR NO. 11"), "Sugar No. 11 futures"),
    InstrumentSpec::new("COFFEE", UsdIndex, ice_anchor!("COFFEE C"), "Coffee C futures"),
    InstrumentSpec::new("COCOA", UsdIndex, ice_anchor!("COCOA"), "Cocoa futures"),
    InstrumentSpec::new("ORANGE JUICE", UsdIndex, ice_anchor!("FRZN CONCENTRATED ORANGE JUICE"), "Frozen Concentrated Orange Juice futures"),
    InstrumentSpec::new("CANOLA", UsdIndex, ice_anchor!("CANOLA"), "Canola futures"),
    // Other
    InstrumentSpec::new("LUMBER", Cme, cme_anchor!("LUMBER"), "Lumber futures"),
    InstrumentSpec::new("EURO SHORT TERM RATE", Cme, cme_anchor!("EURO SHORT TERM RATE"), "Euro Short Term Rate futures"),
];

/// Catalog backed by [`INSTRUMENTS`]. Lookups are exact and case-sensitive.
#[derive(Debug, Default, Clone, Copy)]
pub struct BuiltinCatalog;

impl CatalogPort for BuiltinCatalog {
    fn lookup(&self, id: &str) -> Result<InstrumentSpec, CotError> {
        INSTRUMENTS
            .iter()
            .find(|spec| spec.id == id)
            .copied()
            .ok_or_else(|| CotError::UnknownInstrument { id: id.to_string() })
    }

    fn list_all(&self) -> Vec<InstrumentSpec> {
        let mut all = INSTRUMENTS.to_vec();
        all.sort_by_key(|spec| spec.id);
        all
    }
}
