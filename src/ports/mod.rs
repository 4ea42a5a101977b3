//! Port traits between the analysis core and the outside world.

pub mod catalog_port;
pub mod config_port;
pub mod fetch_port;
pub mod observer_port;
pub mod report_port;
