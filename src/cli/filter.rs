//! Filter flags
//!
//! Turns the raw strings given on the command line into typed
//! [`FilterOptions`] for the pipeline.

use clap::Args;

use crate::config::Settings;
use crate::error::{TrendsError, TrendsResult};
use crate::models::{DateRange, Money};
use crate::services::FilterOptions;

/// Flags that narrow the set of transactions reported on
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Keep only transactions whose description contains any of these
    /// `|`-separated terms (case-insensitive)
    #[arg(long, visible_alias = "in", value_name = "PATTERN")]
    pub include: Option<String>,

    /// Drop transactions whose description contains any of these
    /// `|`-separated terms (case-insensitive)
    #[arg(long, visible_alias = "ex", value_name = "PATTERN")]
    pub exclude: Option<String>,

    /// Keep transactions with amount greater than or equal to this
    #[arg(long, value_name = "AMOUNT", allow_hyphen_values = true)]
    pub min_amount: Option<String>,

    /// Keep transactions with amount less than or equal to this
    #[arg(long, value_name = "AMOUNT", allow_hyphen_values = true)]
    pub max_amount: Option<String>,

    /// Keep transactions dated strictly after this date
    #[arg(long, value_name = "DATE")]
    pub after: Option<String>,

    /// Keep transactions dated strictly before this date
    #[arg(long, value_name = "DATE")]
    pub before: Option<String>,

    /// Keep transactions dated strictly between two dates
    #[arg(long, num_args = 2, value_names = ["START", "END"])]
    pub between: Option<Vec<String>>,
}

impl FilterArgs {
    /// Parse and check the flags
    ///
    /// Include and exclude together are rejected here, before any
    /// transaction is read.
    pub fn to_options(&self, settings: &Settings) -> TrendsResult<FilterOptions> {
        let options = FilterOptions {
            include: self.include.clone(),
            exclude: self.exclude.clone(),
            min_amount: self.min_amount.as_deref().map(parse_amount).transpose()?,
            max_amount: self.max_amount.as_deref().map(parse_amount).transpose()?,
            after: self
                .after
                .as_deref()
                .map(|s| settings.parse_date(s))
                .transpose()?,
            before: self
                .before
                .as_deref()
                .map(|s| settings.parse_date(s))
                .transpose()?,
            between: self
                .between
                .as_deref()
                .map(|dates| parse_range(dates, settings))
                .transpose()?,
        };

        options.validate()?;
        Ok(options)
    }
}

fn parse_amount(s: &str) -> TrendsResult<Money> {
    Money::parse(s).map_err(|e| TrendsError::Validation(format!("Invalid amount: {}", e)))
}

fn parse_range(dates: &[String], settings: &Settings) -> TrendsResult<DateRange> {
    match dates {
        [start, end] => Ok(DateRange::new(
            settings.parse_date(start)?,
            settings.parse_date(end)?,
        )),
        _ => Err(TrendsError::Validation(
            "--between takes exactly two dates".into(),
        )),
    }
}
