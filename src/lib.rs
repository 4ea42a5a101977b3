//! cotbias: contrarian market bias from weekly Commitments of Traders reports.
//!
//! Hexagonal architecture: parsing and scoring in [`domain`], port traits in
//! [`ports`], concrete implementations in [`adapters`], command line in [`cli`].

pub mod adapters;
pub mod cli;
pub mod domain;
pub mod ports;
