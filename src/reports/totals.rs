//! Totals Report
//!
//! Total income and total expenses over the filtered ledger.

use serde::Serialize;

use crate::config::Settings;
use crate::display::format_money;
use crate::error::{TrendsError, TrendsResult};
use crate::models::{Ledger, Money};
use crate::services::totals_for;

/// Totals Report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TotalsReport {
    /// Sum of expense magnitudes
    pub total_expenses: Money,
    /// Sum of income
    pub total_income: Money,
    /// Number of transactions summed
    pub transaction_count: usize,
}

impl TotalsReport {
    /// Generate a totals report for a ledger
    pub fn generate(ledger: &Ledger) -> TrendsResult<Self> {
        if ledger.is_empty() {
            return Err(TrendsError::EmptyResult);
        }

        let totals = totals_for(ledger)?;
        Ok(Self {
            total_expenses: totals.expenses,
            total_income: totals.income,
            transaction_count: ledger.len(),
        })
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, settings: &Settings) -> String {
        let symbol = &settings.currency_symbol;
        format!(
            "Total Expenses: {}\nTotal Income: {}\n",
            format_money(self.total_expenses, symbol),
            format_money(self.total_income, symbol)
        )
    }
}
