//! Path management for ledger-trends
//!
//! ## Path Resolution Order
//!
//! 1. `LEDGER_TRENDS_CONFIG_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/ledger-trends` or `~/.config/ledger-trends`
//! 3. Windows: `%APPDATA%\ledger-trends`

use std::path::PathBuf;

use crate::error::TrendsError;

/// Environment variable overriding the config directory
pub const CONFIG_DIR_ENV: &str = "LEDGER_TRENDS_CONFIG_DIR";

/// Manages all paths used by ledger-trends
#[derive(Debug, Clone)]
pub struct TrendsPaths {
    base_dir: PathBuf,
}

impl TrendsPaths {
    /// Create a new TrendsPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if neither the override variable nor a home
    /// directory can be found.
    pub fn new() -> Result<Self, TrendsError> {
        let base_dir = match std::env::var(CONFIG_DIR_ENV) {
            Ok(custom) => PathBuf::from(custom),
            Err(_) => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create TrendsPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/ledger-trends/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }
}

/// Resolve the default config directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, TrendsError> {
    // Unix (Linux/macOS): Use XDG_CONFIG_HOME if set, otherwise ~/.config
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        return Ok(PathBuf::from(xdg).join("ledger-trends"));
    }
    let home = std::env::var("HOME")
        .map_err(|_| TrendsError::Config("HOME environment variable not set".into()))?;
    Ok(PathBuf::from(home).join(".config").join("ledger-trends"))
}

/// Resolve the default config directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, TrendsError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| TrendsError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("ledger-trends"))
}
