//! Date ranges used to window a ledger

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A pair of calendar dates bounding a window
///
/// Membership is tested against the open interval: a transaction dated
/// exactly on `start` or `end` is not inside the range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Check if a date lies strictly between the bounds
    pub fn contains_exclusive(&self, date: NaiveDate) -> bool {
        date > self.start && date < self.end
    }

    /// Number of days from start to end
    pub fn num_days(&self) -> i64 {
        (self.end - self.start).num_days()
    }

    /// Format both bounds as "<start> to <end>"
    pub fn format(&self, date_format: &str) -> String {
        format!(
            "{} to {}",
            self.start.format(date_format),
            self.end.format(date_format)
        )
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format("%d-%m-%Y"))
    }
}
