//! CLI handling for reports
//!
//! Imports the CSV file, runs the filter pipeline and renders whichever
//! reports were asked for as text, JSON or YAML.

use std::io::Write;
use std::path::Path;

use clap::{Args, ValueEnum};
use tracing::{debug, info};

use super::filter::FilterArgs;
use crate::config::Settings;
use crate::error::{TrendsError, TrendsResult};
use crate::export::{export_json, export_yaml, ReportExport};
use crate::reports::{TotalsReport, TrendReport};
use crate::services::{ColumnMapping, ImportService, WindowMode};

/// Output format for reports
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Plain text for the terminal
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
    /// YAML
    Yaml,
}

/// Report selection flags
#[derive(Args, Debug, Clone, Default)]
pub struct ReportArgs {
    /// Show total income and total expenses
    #[arg(short = 'e', long)]
    pub totals: bool,

    /// Show the top N income and expense trends over the whole range (0 = all)
    #[arg(short = 't', long, value_name = "N")]
    pub top: Option<i64>,

    /// Show the top N trends for each rolling window (0 = all)
    #[arg(short = 'x', long, value_name = "N")]
    pub top_windowed: Option<i64>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

impl ReportArgs {
    /// Whether any report was requested
    pub fn any_requested(&self) -> bool {
        self.totals || self.top.is_some() || self.top_windowed.is_some()
    }

    fn check(&self) -> TrendsResult<()> {
        for (flag, value) in [("--top", self.top), ("--top-windowed", self.top_windowed)] {
            if matches!(value, Some(n) if n < 0) {
                return Err(TrendsError::Validation(format!(
                    "{} must not be negative",
                    flag
                )));
            }
        }
        Ok(())
    }
}

/// The reports produced by one run
#[derive(Debug, Clone, Default)]
pub struct ReportSet {
    pub totals: Option<TotalsReport>,
    pub trends: Option<TrendReport>,
    pub windowed_trends: Option<TrendReport>,
}

/// Import `file`, filter it and write the requested reports to `out`
pub fn run_reports<W: Write>(
    file: &Path,
    filters: &FilterArgs,
    reports: &ReportArgs,
    settings: &Settings,
    out: &mut W,
) -> TrendsResult<()> {
    // Option conflicts are reported before any input is read
    let options = filters.to_options(settings)?;
    reports.check()?;

    let importer = ImportService::new(ColumnMapping::from_settings(settings));
    let ledger = importer.import_file(file)?;

    let ledger = options.apply(&ledger)?;
    if ledger.is_empty() {
        return Err(TrendsError::EmptyResult);
    }
    info!(transactions = ledger.len(), "filters applied");

    let mut set = ReportSet::default();
    if reports.totals {
        set.totals = Some(TotalsReport::generate(&ledger)?);
    }
    if let Some(top_n) = reports.top {
        set.trends = Some(TrendReport::generate(&ledger, WindowMode::WholeRange, top_n)?);
    }
    if let Some(top_n) = reports.top_windowed {
        let mode = WindowMode::Rolling {
            weeks: settings.window_weeks,
        };
        set.windowed_trends = Some(TrendReport::generate(&ledger, mode, top_n)?);
    }
    debug!(format = ?reports.format, "rendering reports");

    match reports.format {
        OutputFormat::Text => write_text(&set, settings, out),
        OutputFormat::Json | OutputFormat::Yaml => {
            let mut export = ReportExport::new(file.display().to_string(), ledger.len());
            export.totals = set.totals;
            export.trends = set.trends;
            export.windowed_trends = set.windowed_trends;

            if reports.format == OutputFormat::Json {
                export_json(&export, out)
            } else {
                export_yaml(&export, out)
            }
        }
    }
}

fn write_text<W: Write>(set: &ReportSet, settings: &Settings, out: &mut W) -> TrendsResult<()> {
    let mut text = String::new();
    if let Some(totals) = &set.totals {
        text.push_str(&totals.format_terminal(settings));
    }
    for report in [&set.trends, &set.windowed_trends].into_iter().flatten() {
        if !text.is_empty() {
            text.push('\n');
        }
        text.push_str(&report.format_terminal(settings));
    }
    out.write_all(text.as_bytes())?;
    Ok(())
}
