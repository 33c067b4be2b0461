//! Configuration module for ledger-trends
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings (CSV layout, currency symbol, window width)

pub mod paths;
pub mod settings;

pub use paths::TrendsPaths;
pub use settings::Settings;
