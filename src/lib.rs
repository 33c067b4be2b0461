//! ledger-trends - spending and income trends from bank CSV exports
//!
//! This library reads a CSV of transactions, narrows it with a pipeline of
//! filters, and reports totals, top trends per date window and savings
//! rates.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, transactions, ledgers, date ranges)
//! - `services`: Import, filtering, windowing and aggregation
//! - `reports`: Totals and trend reports
//! - `display`: Terminal formatting helpers
//! - `export`: JSON and YAML output
//! - `cli`: Argument handling for the `trends` binary
//!
//! # Example
//!
//! ```rust,ignore
//! use ledger_trends::services::{ColumnMapping, ImportService, WindowMode};
//! use ledger_trends::reports::TrendReport;
//!
//! let ledger = ImportService::new(ColumnMapping::new()).import_file(path)?;
//! let report = TrendReport::generate(&ledger, WindowMode::WholeRange, 5)?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;

pub use error::TrendsError;
