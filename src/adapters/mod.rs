//! Concrete adapter implementations for ports.

pub mod builtin_catalog;
pub mod file_config_adapter;
pub mod file_fetch_adapter;
#[cfg(feature = "http")]
pub mod http_fetch_adapter;
pub mod json_report_adapter;
pub mod text_report_adapter;
pub mod tracing_observer;
