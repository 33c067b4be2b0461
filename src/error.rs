//! Custom error types for ledger-trends
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for ledger-trends operations
#[derive(Error, Debug)]
pub enum TrendsError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Two options were given that cannot be used together
    #[error("Conflicting options: {0}")]
    ConfigConflict(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// A CSV row could not be turned into a transaction
    #[error("Parse error on row {row}: {message}")]
    Parse { row: usize, message: String },

    /// Validation errors for user-supplied values
    #[error("Validation error: {0}")]
    Validation(String),

    /// The filter pipeline left nothing to report on
    #[error("No transactions match the given filters")]
    EmptyResult,

    /// A calculation has no defined result for its inputs
    #[error("Undefined calculation: {0}")]
    DegenerateMath(String),

    /// An amount or date computation left the representable range
    #[error("Value out of range: {0}")]
    Overflow(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl TrendsError {
    /// Create a parse error for a CSV row (1-based row number)
    pub fn parse(row: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            row,
            message: message.into(),
        }
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for TrendsError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Result type alias for ledger-trends operations
pub type TrendsResult<T> = Result<T, TrendsError>;
