//! Display formatting for terminal output

pub mod report;

pub use report::{format_money, format_savings_rate, format_trend_line, separator};
