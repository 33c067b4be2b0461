//! User settings for ledger-trends
//!
//! Controls how CSV files are read and how reports are rendered. Every
//! field has a default, so a missing or partial `config.json` is fine.

use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;

use super::paths::TrendsPaths;
use crate::error::TrendsError;
use crate::services::window::{DEFAULT_WINDOW_WEEKS, MAX_WINDOW_WEEKS};

/// User settings for ledger-trends
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    /// Currency symbol used in report output
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// strftime format of the CSV date column (also used for date flags)
    #[serde(default = "default_csv_date_format")]
    pub csv_date_format: String,

    /// strftime format for dates in report headers
    #[serde(default = "default_header_date_format")]
    pub header_date_format: String,

    /// Whether CSV files start with a header row
    #[serde(default)]
    pub csv_has_header: bool,

    /// Field separator of the CSV file
    #[serde(default = "default_csv_delimiter")]
    pub csv_delimiter: char,

    /// Width of rolling trend windows, in weeks
    #[serde(default = "default_window_weeks")]
    pub window_weeks: u32,
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_csv_date_format() -> String {
    "%d/%m/%Y".to_string()
}

fn default_header_date_format() -> String {
    "%d-%m-%Y".to_string()
}

fn default_csv_delimiter() -> char {
    ','
}

fn default_window_weeks() -> u32 {
    DEFAULT_WINDOW_WEEKS
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency(),
            csv_date_format: default_csv_date_format(),
            header_date_format: default_header_date_format(),
            csv_has_header: false,
            csv_delimiter: default_csv_delimiter(),
            window_weeks: default_window_weeks(),
        }
    }
}

impl Settings {
    /// Load settings from the default location, falling back to defaults
    pub fn load_or_default(paths: &TrendsPaths) -> Result<Self, TrendsError> {
        let settings_path = paths.settings_file();
        if settings_path.exists() {
            Self::load_from(&settings_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load settings from an explicit file, which must exist
    pub fn load_from(path: &Path) -> Result<Self, TrendsError> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            TrendsError::Io(format!(
                "Failed to read settings file {}: {}",
                path.display(),
                e
            ))
        })?;

        let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
            TrendsError::Config(format!("Failed to parse settings file: {}", e))
        })?;

        settings.validate()?;
        Ok(settings)
    }

    /// Check that the settings can actually be used
    pub fn validate(&self) -> Result<(), TrendsError> {
        if self.window_weeks == 0 || self.window_weeks > MAX_WINDOW_WEEKS {
            return Err(TrendsError::Config(format!(
                "window_weeks must be between 1 and {}",
                MAX_WINDOW_WEEKS
            )));
        }
        if !self.csv_delimiter.is_ascii()
            || matches!(self.csv_delimiter, '"' | '\n' | '\r')
        {
            return Err(TrendsError::Config(format!(
                "csv_delimiter {:?} must be a single ASCII character other than a quote or newline",
                self.csv_delimiter
            )));
        }
        for (name, format) in [
            ("csv_date_format", &self.csv_date_format),
            ("header_date_format", &self.header_date_format),
        ] {
            if !is_usable_date_format(format) {
                return Err(TrendsError::Config(format!(
                    "{} '{}' is not a valid date format",
                    name, format
                )));
            }
        }
        Ok(())
    }

    /// Parse a date given on the command line, using the CSV date format
    pub fn parse_date(&self, s: &str) -> Result<NaiveDate, TrendsError> {
        NaiveDate::parse_from_str(s.trim(), &self.csv_date_format).map_err(|_| {
            TrendsError::Validation(format!(
                "Invalid date '{}', expected format {}",
                s, self.csv_date_format
            ))
        })
    }
}

/// A format is usable if a known date survives a format/parse round trip
fn is_usable_date_format(format: &str) -> bool {
    use chrono::format::{Item, StrftimeItems};

    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return false;
    }
    let Some(sample) = NaiveDate::from_ymd_opt(2024, 11, 23) else {
        return false;
    };
    let rendered = sample.format(format).to_string();
    NaiveDate::parse_from_str(&rendered, format).ok() == Some(sample)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.currency_symbol, "$");
        assert_eq!(settings.csv_date_format, "%d/%m/%Y");
        assert_eq!(settings.window_weeks, 4);
        assert!(!settings.csv_has_header);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_load_from_config_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrendsPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(
            paths.settings_file(),
            r#"{"currency_symbol": "€", "window_weeks": 2, "csv_delimiter": ";"}"#,
        )
        .unwrap();

        let loaded = Settings::load_or_default(&paths).unwrap();
        assert_eq!(
            loaded,
            Settings {
                currency_symbol: "€".into(),
                window_weeks: 2,
                csv_delimiter: ';',
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrendsPaths::with_base_dir(temp_dir.path().to_path_buf());
        assert_eq!(Settings::load_or_default(&paths).unwrap(), Settings::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        std::fs::write(&path, r#"{"csv_has_header": true}"#).unwrap();

        let loaded = Settings::load_from(&path).unwrap();
        assert!(loaded.csv_has_header);
        assert_eq!(loaded.window_weeks, 4);
    }

    #[test]
    fn test_zero_window_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        std::fs::write(&path, r#"{"window_weeks": 0}"#).unwrap();

        assert!(matches!(
            Settings::load_from(&path),
            Err(TrendsError::Config(_))
        ));
    }

    #[test]
    fn test_huge_window_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        std::fs::write(&path, r#"{"window_weeks": 20000000}"#).unwrap();

        assert!(matches!(
            Settings::load_from(&path),
            Err(TrendsError::Config(_))
        ));

        let widest = Settings {
            window_weeks: MAX_WINDOW_WEEKS,
            ..Default::default()
        };
        assert!(widest.validate().is_ok());
    }

    #[test]
    fn test_bad_delimiter_rejected() {
        for delimiter in ['"', '\n', '§'] {
            let settings = Settings {
                csv_delimiter: delimiter,
                ..Default::default()
            };
            assert!(settings.validate().is_err());
        }
    }

    #[test]
    fn test_bad_date_format_rejected() {
        let settings = Settings {
            csv_date_format: "%Q".into(),
            ..Default::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_parse_date() {
        let settings = Settings::default();
        assert_eq!(
            settings.parse_date("31/01/2024").unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 31).unwrap()
        );
        assert!(settings.parse_date("2024-01-31").is_err());
    }
}
