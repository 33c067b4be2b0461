//! Income and expense totals, and the savings rate derived from them

use serde::Serialize;

use crate::error::{TrendsError, TrendsResult};
use crate::models::{Ledger, Money};

/// Income and expense totals for a ledger
///
/// Both fields are magnitudes and never negative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Totals {
    pub expenses: Money,
    pub income: Money,
}

/// Sum expenses (as absolute values) and income over a ledger
///
/// Fails with [`TrendsError::Overflow`] when a total leaves the `Money` range.
pub fn totals_for(ledger: &Ledger) -> TrendsResult<Totals> {
    let mut totals = Totals::default();
    for txn in ledger {
        let (total, amount) = if txn.is_expense() {
            (&mut totals.expenses, txn.amount().abs())
        } else {
            (&mut totals.income, txn.amount())
        };
        *total = total
            .checked_add(amount)
            .ok_or_else(|| TrendsError::Overflow("income or expense total is too large".into()))?;
    }
    Ok(totals)
}

/// Percentage of income kept after expenses, capped at 100
///
/// The sign of `expenses` is ignored. Zero income has no defined rate and is
/// reported as [`TrendsError::DegenerateMath`].
pub fn savings_rate(income: Money, expenses: Money) -> TrendsResult<f64> {
    if income.is_zero() {
        return Err(TrendsError::DegenerateMath(
            "savings rate is undefined when income is zero".into(),
        ));
    }

    let income = income.as_f64();
    let rate = (income - expenses.as_f64().abs()) / income * 100.0;

    Ok(rate.min(100.0))
}
