//! YAML Export functionality

use std::io::Write;

use crate::error::{TrendsError, TrendsResult};
use crate::export::json::ReportExport;

/// Write the export as YAML, preceded by a comment header
pub fn export_yaml<W: Write>(export: &ReportExport, writer: &mut W) -> TrendsResult<()> {
    writeln!(writer, "# ledger-trends report")
        .and_then(|_| writeln!(writer, "# Generated: {}", export.generated_at))
        .and_then(|_| writeln!(writer, "# Source: {}", export.source))
        .map_err(|e| TrendsError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, export).map_err(|e| TrendsError::Export(e.to_string()))?;

    Ok(())
}
