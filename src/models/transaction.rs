//! Transaction model
//!
//! A single dated ledger entry. Whether a transaction is income or an
//! expense is always read off the sign of its amount.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// Classification of a transaction by the sign of its amount
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    /// Payments in (amount >= 0)
    Income,
    /// Money out (amount < 0)
    Expense,
}

impl Kind {
    /// Both kinds, in report order
    pub const ALL: [Kind; 2] = [Kind::Income, Kind::Expense];

    /// Classify an amount
    pub fn of(amount: Money) -> Self {
        if amount.is_negative() {
            Self::Expense
        } else {
            Self::Income
        }
    }

    /// Label used in report headers
    pub fn label(&self) -> &'static str {
        match self {
            Self::Income => "Payments",
            Self::Expense => "Expenses",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

/// A financial transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    date: NaiveDate,
    amount: Money,
    description: String,
}

impl Transaction {
    /// Create a new transaction
    pub fn new(date: NaiveDate, amount: Money, description: impl Into<String>) -> Self {
        Self {
            date,
            amount,
            description: description.into(),
        }
    }

    /// Transaction date
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Amount (positive or zero for income, negative for expenses)
    pub fn amount(&self) -> Money {
        self.amount
    }

    /// Free-text description as it appeared in the source
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Income or expense, derived from the amount's sign
    pub fn kind(&self) -> Kind {
        Kind::of(self.amount)
    }

    /// Check if this is income (non-negative amount)
    pub fn is_income(&self) -> bool {
        self.kind() == Kind::Income
    }

    /// Check if this is an expense (negative amount)
    pub fn is_expense(&self) -> bool {
        self.kind() == Kind::Expense
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.date.format("%Y-%m-%d"),
            self.description,
            self.amount
        )
    }
}
