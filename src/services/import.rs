//! CSV import service
//!
//! Reads a bank export into a [`Ledger`]. Every row must parse; a bad date,
//! amount or missing column stops the import with the offending row number.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord};
use tracing::info;

use crate::config::Settings;
use crate::error::{TrendsError, TrendsResult};
use crate::models::{Ledger, Money, Transaction};

/// Column mapping configuration for CSV import
#[derive(Debug, Clone)]
pub struct ColumnMapping {
    /// Index of the date column
    pub date_column: usize,
    /// Index of the signed amount column
    pub amount_column: usize,
    /// Index of the description column
    pub description_column: usize,
    /// Date format string (e.g., "%d/%m/%Y")
    pub date_format: String,
    /// Whether the first row is a header
    pub has_header: bool,
    /// Delimiter character
    pub delimiter: u8,
}

impl Default for ColumnMapping {
    fn default() -> Self {
        Self {
            date_column: 0,
            amount_column: 1,
            description_column: 2,
            date_format: "%d/%m/%Y".to_string(),
            has_header: false,
            delimiter: b',',
        }
    }
}

impl ColumnMapping {
    /// Create a new column mapping
    pub fn new() -> Self {
        Self::default()
    }

    /// Mapping described by the user's settings
    pub fn from_settings(settings: &Settings) -> Self {
        Self::default()
            .with_date_format(&settings.csv_date_format)
            .with_header(settings.csv_has_header)
            .with_delimiter(u8::try_from(settings.csv_delimiter).unwrap_or(b','))
    }

    /// Set the date format
    pub fn with_date_format(mut self, format: &str) -> Self {
        self.date_format = format.to_string();
        self
    }

    /// Set whether first row is header
    pub fn with_header(mut self, has_header: bool) -> Self {
        self.has_header = has_header;
        self
    }

    /// Set the delimiter
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }
}

/// Service for CSV import
pub struct ImportService {
    mapping: ColumnMapping,
}

impl ImportService {
    /// Create a new import service
    pub fn new(mapping: ColumnMapping) -> Self {
        Self { mapping }
    }

    /// Import a CSV file from disk
    pub fn import_file(&self, path: &Path) -> TrendsResult<Ledger> {
        let file = File::open(path).map_err(|e| {
            TrendsError::Io(format!("Failed to open {}: {}", path.display(), e))
        })?;
        let ledger = self.import_reader(file)?;
        info!(
            file = %path.display(),
            transactions = ledger.len(),
            "imported transactions"
        );
        Ok(ledger)
    }

    /// Import CSV data from any reader
    pub fn import_reader<R: Read>(&self, reader: R) -> TrendsResult<Ledger> {
        let mut reader = ReaderBuilder::new()
            .has_headers(self.mapping.has_header)
            .delimiter(self.mapping.delimiter)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let header_rows = usize::from(self.mapping.has_header);
        let mut transactions = Vec::new();

        for (idx, result) in reader.records().enumerate() {
            let fallback_row = idx + 1 + header_rows;
            let record = result.map_err(|e| {
                TrendsError::parse(fallback_row, format!("Error reading CSV record: {}", e))
            })?;
            let row = record
                .position()
                .map(|pos| pos.line() as usize)
                .unwrap_or(fallback_row);

            if record.iter().all(|field| field.is_empty()) {
                continue;
            }

            transactions.push(self.parse_record(&record, row)?);
        }

        Ok(Ledger::new(transactions))
    }

    /// Parse a single CSV record
    fn parse_record(&self, record: &StringRecord, row: usize) -> TrendsResult<Transaction> {
        let field = |col: usize, name: &str| {
            record
                .get(col)
                .ok_or_else(|| TrendsError::parse(row, format!("Missing {} column", name)))
        };

        let date_str = field(self.mapping.date_column, "date")?;
        let date = NaiveDate::parse_from_str(date_str, &self.mapping.date_format)
            .map_err(|_| TrendsError::parse(row, format!("Could not parse date: '{}'", date_str)))?;

        let amount_str = field(self.mapping.amount_column, "amount")?;
        let amount = Money::parse(amount_str).map_err(|e| TrendsError::parse(row, e.to_string()))?;

        let description = field(self.mapping.description_column, "description")?;

        Ok(Transaction::new(date, amount, description))
    }
}
