//! Business logic layer for ledger-trends
//!
//! The filter pipeline, date windowing, trend aggregation and summary
//! totals all operate on [`Ledger`](crate::models::Ledger) values and return
//! new ones. CSV import is the only service that touches the filesystem.

pub mod filter;
pub mod import;
pub mod summary;
pub mod trend;
pub mod window;

pub use filter::{
    filter_by_amount, filter_by_date, filter_by_date_range, filter_by_description, FilterOptions,
};
pub use import::{ColumnMapping, ImportService};
pub use summary::{savings_rate, totals_for, Totals};
pub use trend::aggregate;
pub use window::{date_ranges, WindowMode};
