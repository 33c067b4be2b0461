//! Date windowing
//!
//! Decides which date ranges trends are computed over: either one range
//! spanning the whole ledger, or consecutive fixed-width windows walked back
//! from the newest transaction.

use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate};
use tracing::debug;

use crate::error::{TrendsError, TrendsResult};
use crate::models::{DateRange, Ledger};

/// Default rolling window width
pub const DEFAULT_WINDOW_WEEKS: u32 = 4;

/// Widest rolling window accepted, about a century
pub const MAX_WINDOW_WEEKS: u32 = 5_200;

/// How a ledger is split into date ranges
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowMode {
    /// One range from the oldest to the newest transaction
    WholeRange,
    /// Consecutive windows of `weeks` weeks ending at the newest transaction
    Rolling { weeks: u32 },
}

impl WindowMode {
    /// Rolling windows of the default width
    pub fn rolling() -> Self {
        Self::Rolling {
            weeks: DEFAULT_WINDOW_WEEKS,
        }
    }
}

/// The range from the oldest to the newest transaction
pub fn whole_range(ledger: &Ledger) -> TrendsResult<DateRange> {
    match (ledger.oldest(), ledger.newest()) {
        (Some(oldest), Some(newest)) => Ok(DateRange::new(oldest.date(), newest.date())),
        _ => Err(TrendsError::EmptyResult),
    }
}

/// Rolling windows covering the ledger's span, ascending by start date
pub fn rolling_windows(ledger: &Ledger, width_weeks: u32) -> TrendsResult<Vec<DateRange>> {
    let (newest, oldest) = match (ledger.newest(), ledger.oldest()) {
        (Some(newest), Some(oldest)) => (newest.date(), oldest.date()),
        _ => return Err(TrendsError::EmptyResult),
    };
    windows_from(newest, oldest, width_weeks)
}

/// Walk back from `anchor` in strides of `width_weeks` weeks
///
/// The number of whole weeks between `anchor` and `other` decides how many
/// strides are taken; the final window may reach past `other`. Spans shorter
/// than a week produce no windows.
pub fn windows_from(
    anchor: NaiveDate,
    other: NaiveDate,
    width_weeks: u32,
) -> TrendsResult<Vec<DateRange>> {
    if width_weeks == 0 || width_weeks > MAX_WINDOW_WEEKS {
        return Err(TrendsError::Validation(format!(
            "Window width must be between 1 and {} weeks",
            MAX_WINDOW_WEEKS
        )));
    }

    let weeks = (other - anchor).num_days().abs() / 7;
    let width = i64::from(width_weeks);

    let mut by_start: BTreeMap<NaiveDate, NaiveDate> = BTreeMap::new();
    let mut i = 0;
    while i < weeks {
        let start = weeks_before(anchor, i + width)?;
        let end = weeks_before(anchor, i)?;
        by_start.insert(start, end);
        i += width;
    }

    debug!(weeks, windows = by_start.len(), "generated rolling windows");

    Ok(by_start
        .into_iter()
        .map(|(start, end)| DateRange::new(start, end))
        .collect())
}

fn weeks_before(anchor: NaiveDate, weeks: i64) -> TrendsResult<NaiveDate> {
    Duration::try_weeks(weeks)
        .and_then(|offset| anchor.checked_sub_signed(offset))
        .ok_or_else(|| {
            TrendsError::Overflow(format!(
                "{} weeks before {} is not a valid date",
                weeks, anchor
            ))
        })
}

/// Date ranges for the given mode
pub fn date_ranges(ledger: &Ledger, mode: WindowMode) -> TrendsResult<Vec<DateRange>> {
    match mode {
        WindowMode::WholeRange => Ok(vec![whole_range(ledger)?]),
        WindowMode::Rolling { weeks } => rolling_windows(ledger, weeks),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, Transaction};

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn ledger_on(dates: &[NaiveDate]) -> Ledger {
        dates
            .iter()
            .map(|date| Transaction::new(*date, Money::from_cents(100), "x"))
            .collect()
    }

    #[test]
    fn test_whole_range_spans_oldest_to_newest() {
        let ledger = ledger_on(&[d(2024, 3, 1), d(2024, 1, 5), d(2024, 2, 9)]);
        let range = whole_range(&ledger).unwrap();
        assert_eq!(range, DateRange::new(d(2024, 1, 5), d(2024, 3, 1)));
    }

    #[test]
    fn test_whole_range_of_empty_ledger_is_error() {
        assert!(matches!(
            whole_range(&Ledger::empty()),
            Err(TrendsError::EmptyResult)
        ));
    }

    #[test]
    fn test_rolling_windows_over_seventeen_weeks() {
        let ledger = ledger_on(&[d(2024, 1, 1), d(2024, 5, 1)]);
        let windows = rolling_windows(&ledger, 4).unwrap();

        // 121 days -> 17 whole weeks -> strides at 0, 4, 8, 12, 16
        assert_eq!(windows.len(), 5);
        for window in &windows {
            assert_eq!(window.num_days(), 28);
        }
        for pair in windows.windows(2) {
            assert!(pair[0].start < pair[1].start);
            assert_eq!(pair[0].end, pair[1].start);
        }
        assert_eq!(windows.last().unwrap().end, d(2024, 5, 1));
        assert!(windows.first().unwrap().start <= d(2024, 1, 1));
    }

    #[test]
    fn test_rolling_windows_short_span_yields_nothing() {
        let ledger = ledger_on(&[d(2024, 1, 1), d(2024, 1, 6)]);
        assert!(rolling_windows(&ledger, 4).unwrap().is_empty());
    }

    #[test]
    fn test_rolling_windows_custom_width() {
        let windows = windows_from(d(2024, 3, 1), d(2024, 1, 1), 2).unwrap();
        // 60 days -> 8 weeks -> strides at 0, 2, 4, 6
        assert_eq!(windows.len(), 4);
        assert!(windows.iter().all(|w| w.num_days() == 14));
    }

    #[test]
    fn test_zero_width_rejected() {
        assert!(windows_from(d(2024, 3, 1), d(2024, 1, 1), 0).is_err());
    }

    #[test]
    fn test_huge_width_rejected() {
        assert!(matches!(
            windows_from(d(2024, 5, 1), d(2024, 1, 1), 20_000_000),
            Err(TrendsError::Validation(_))
        ));
        assert_eq!(
            windows_from(d(2024, 5, 1), d(2024, 1, 1), MAX_WINDOW_WEEKS).unwrap().len(),
            1
        );
    }

    #[test]
    fn test_window_before_earliest_date_is_error() {
        let anchor = NaiveDate::MIN + Duration::weeks(2);
        assert!(matches!(
            windows_from(anchor, NaiveDate::MIN, 4),
            Err(TrendsError::Overflow(_))
        ));
    }

    #[test]
    fn test_date_ranges_by_mode() {
        let ledger = ledger_on(&[d(2024, 1, 1), d(2024, 5, 1)]);
        assert_eq!(date_ranges(&ledger, WindowMode::WholeRange).unwrap().len(), 1);
        assert_eq!(date_ranges(&ledger, WindowMode::rolling()).unwrap().len(), 5);
    }
}
