//! Core data models for ledger-trends
//!
//! This module contains the data structures the analysis works over:
//! money amounts, transactions, the working ledger, date ranges and trends.

pub mod date_range;
pub mod ledger;
pub mod money;
pub mod transaction;
pub mod trend;

pub use date_range::DateRange;
pub use ledger::Ledger;
pub use money::{Money, MoneyParseError};
pub use transaction::{Kind, Transaction};
pub use trend::Trend;
