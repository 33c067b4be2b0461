//! Export module for ledger-trends
//!
//! Renders report results in machine-readable formats:
//! - JSON: for scripts and other tools
//! - YAML: for human-readable archives

pub mod json;
pub mod yaml;

pub use json::{export_json, ReportExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_yaml;
