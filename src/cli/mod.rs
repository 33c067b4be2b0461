//! CLI command handlers for ledger-trends
//!
//! The binary parses arguments with clap and hands them to these
//! handlers, which own the import, filter and report pipeline.

pub mod filter;
pub mod report;

pub use filter::FilterArgs;
pub use report::{run_reports, OutputFormat, ReportArgs, ReportSet};
