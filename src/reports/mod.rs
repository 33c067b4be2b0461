//! Reports module for ledger-trends
//!
//! Provides the totals report and the windowed top-trends report.

pub mod totals;
pub mod trends;

pub use totals::TotalsReport;
pub use trends::{TrendReport, WindowReport};
