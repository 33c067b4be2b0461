//! JSON Export functionality
//!
//! Serializes the reports produced by one run, with schema versioning.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;

use crate::error::{TrendsError, TrendsResult};
use crate::reports::{TotalsReport, TrendReport};

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Everything one invocation reported on
#[derive(Debug, Clone, Serialize)]
pub struct ReportExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub generated_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// CSV file the transactions came from
    pub source: String,

    /// Number of transactions left after filtering
    pub transaction_count: usize,

    /// Totals report, if requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub totals: Option<TotalsReport>,

    /// Whole-range trend report, if requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trends: Option<TrendReport>,

    /// Rolling-window trend report, if requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub windowed_trends: Option<TrendReport>,
}

impl ReportExport {
    /// Start an export for a source file
    pub fn new(source: impl Into<String>, transaction_count: usize) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            generated_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            source: source.into(),
            transaction_count,
            totals: None,
            trends: None,
            windowed_trends: None,
        }
    }
}

/// Write the export as pretty-printed JSON
pub fn export_json<W: Write>(export: &ReportExport, writer: &mut W) -> TrendsResult<()> {
    serde_json::to_writer_pretty(&mut *writer, export)
        .map_err(|e| TrendsError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| TrendsError::Export(e.to_string()))?;
    Ok(())
}
