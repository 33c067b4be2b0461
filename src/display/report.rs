//! Report formatting utilities for terminal output

use crate::models::{Money, Trend};

/// Width of the rule printed between report windows
pub const RULE_WIDTH: usize = 50;

/// Format a money amount with the configured currency symbol
pub fn format_money(amount: Money, symbol: &str) -> String {
    amount.format_with_symbol(symbol)
}

/// Format a savings rate to two decimals, or "n/a" when undefined
pub fn format_savings_rate(rate: Option<f64>) -> String {
    match rate {
        Some(rate) => format!("{:.2}%", rate),
        None => "n/a".to_string(),
    }
}

/// One indented "Description: $X.XX" line
pub fn format_trend_line(trend: &Trend, symbol: &str) -> String {
    format!(
        "  {}: {}",
        trend.description,
        format_money(trend.total_amount, symbol)
    )
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "-".repeat(width)
}
