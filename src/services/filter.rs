//! Transaction filter pipeline
//!
//! Each filter reads a ledger and returns a new, narrower one. An empty
//! result is a normal value here; deciding whether that is an error is up to
//! the caller.

use chrono::NaiveDate;
use tracing::debug;

use crate::error::{TrendsError, TrendsResult};
use crate::models::{DateRange, Ledger, Money};

/// Keep (`include = true`) or drop (`include = false`) transactions whose
/// description contains any of the `|`-separated substrings, ignoring case
pub fn filter_by_description(ledger: &Ledger, pattern: &str, include: bool) -> Ledger {
    let needles: Vec<String> = pattern
        .split('|')
        .filter(|part| !part.is_empty())
        .map(str::to_lowercase)
        .collect();

    ledger.retain_matching(|txn| {
        let description = txn.description().to_lowercase();
        let matched = needles.iter().any(|needle| description.contains(needle));
        matched == include
    })
}

/// Keep transactions with `amount >= threshold` (`greater_or_equal = true`)
/// or `amount <= threshold`
pub fn filter_by_amount(ledger: &Ledger, threshold: Money, greater_or_equal: bool) -> Ledger {
    ledger.retain_matching(|txn| {
        if greater_or_equal {
            txn.amount() >= threshold
        } else {
            txn.amount() <= threshold
        }
    })
}

/// Keep transactions strictly after (`after = true`) or strictly before `date`
pub fn filter_by_date(ledger: &Ledger, date: NaiveDate, after: bool) -> Ledger {
    ledger.retain_matching(|txn| {
        if after {
            txn.date() > date
        } else {
            txn.date() < date
        }
    })
}

/// Keep transactions strictly between `start` and `end`; both bounds excluded
pub fn filter_by_date_range(ledger: &Ledger, start: NaiveDate, end: NaiveDate) -> Ledger {
    let range = DateRange::new(start, end);
    ledger.retain_matching(|txn| range.contains_exclusive(txn.date()))
}

/// The full set of filters requested for one run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOptions {
    /// Keep only descriptions matching this pattern
    pub include: Option<String>,
    /// Drop descriptions matching this pattern
    pub exclude: Option<String>,
    /// Lower amount bound (inclusive)
    pub min_amount: Option<Money>,
    /// Upper amount bound (inclusive)
    pub max_amount: Option<Money>,
    /// Keep dates strictly after this one
    pub after: Option<NaiveDate>,
    /// Keep dates strictly before this one
    pub before: Option<NaiveDate>,
    /// Keep dates strictly inside this range
    pub between: Option<DateRange>,
}

impl FilterOptions {
    /// Reject combinations that cannot be applied together
    pub fn validate(&self) -> TrendsResult<()> {
        if self.include.is_some() && self.exclude.is_some() {
            return Err(TrendsError::ConfigConflict(
                "--include and --exclude cannot be used together".into(),
            ));
        }
        if let Some(range) = self.between {
            if range.start > range.end {
                return Err(TrendsError::Validation(format!(
                    "Range start {} is after range end {}",
                    range.start, range.end
                )));
            }
        }
        Ok(())
    }

    /// Check if no filter is set
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Run every active filter in order: description, lower amount bound,
    /// upper amount bound, after, before, range
    pub fn apply(&self, ledger: &Ledger) -> TrendsResult<Ledger> {
        self.validate()?;

        let mut current = ledger.clone();

        if let Some(pattern) = &self.exclude {
            current = step("exclude", current, |l| filter_by_description(l, pattern, false));
        }
        if let Some(pattern) = &self.include {
            current = step("include", current, |l| filter_by_description(l, pattern, true));
        }
        if let Some(min) = self.min_amount {
            current = step("min-amount", current, |l| filter_by_amount(l, min, true));
        }
        if let Some(max) = self.max_amount {
            current = step("max-amount", current, |l| filter_by_amount(l, max, false));
        }
        if let Some(date) = self.after {
            current = step("after", current, |l| filter_by_date(l, date, true));
        }
        if let Some(date) = self.before {
            current = step("before", current, |l| filter_by_date(l, date, false));
        }
        if let Some(range) = self.between {
            current = step("between", current, |l| {
                filter_by_date_range(l, range.start, range.end)
            });
        }

        Ok(current)
    }
}

fn step<F>(name: &str, ledger: Ledger, filter: F) -> Ledger
where
    F: FnOnce(&Ledger) -> Ledger,
{
    let filtered = filter(&ledger);
    debug!(
        filter = name,
        before = ledger.len(),
        after = filtered.len(),
        "applied filter"
    );
    filtered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Transaction;

    fn d(m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, m, day).unwrap()
    }

    fn sample() -> Ledger {
        Ledger::new(vec![
            Transaction::new(d(1, 1), Money::from_cents(-4550), "WOOLWORTHS Metro"),
            Transaction::new(d(1, 15), Money::from_cents(250000), "Salary ACME"),
            Transaction::new(d(1, 20), Money::from_cents(-1200), "Netflix"),
            Transaction::new(d(1, 31), Money::from_cents(-9900), "Coles"),
            Transaction::new(d(2, 3), Money::from_cents(0), "Interest"),
        ])
    }

    fn descriptions(ledger: &Ledger) -> Vec<&str> {
        ledger.iter().map(|t| t.description()).collect()
    }

    #[test]
    fn test_description_is_case_insensitive_any_of() {
        let ledger = sample();
        let kept = filter_by_description(&ledger, "woolworths|coles", true);
        assert_eq!(descriptions(&kept), vec!["Coles", "WOOLWORTHS Metro"]);
    }

    #[test]
    fn test_description_include_exclude_partition() {
        let ledger = sample();
        let included = filter_by_description(&ledger, "sal|NET", true);
        let excluded = filter_by_description(&ledger, "sal|NET", false);

        assert_eq!(included.len() + excluded.len(), ledger.len());
        for txn in &ledger {
            let in_included = included.iter().any(|t| t == txn);
            let in_excluded = excluded.iter().any(|t| t == txn);
            assert!(in_included ^ in_excluded, "{} not partitioned", txn);
        }
    }

    #[test]
    fn test_description_empty_alternatives_ignored() {
        let ledger = sample();
        let kept = filter_by_description(&ledger, "netflix||", true);
        assert_eq!(descriptions(&kept), vec!["Netflix"]);
    }

    #[test]
    fn test_amount_bounds_are_inclusive() {
        let ledger = sample();
        let at_least = filter_by_amount(&ledger, Money::from_cents(-1200), true);
        assert_eq!(at_least.len(), 3);

        let at_most = filter_by_amount(&ledger, Money::from_cents(-1200), false);
        assert_eq!(descriptions(&at_most), vec!["Coles", "Netflix", "WOOLWORTHS Metro"]);
    }

    #[test]
    fn test_zero_threshold_is_a_real_filter() {
        let ledger = sample();
        let non_positive = filter_by_amount(&ledger, Money::zero(), false);
        assert_eq!(non_positive.len(), 4);
    }

    #[test]
    fn test_amount_filter_is_idempotent() {
        let ledger = sample();
        let once = filter_by_amount(&ledger, Money::zero(), true);
        let twice = filter_by_amount(&once, Money::zero(), true);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_date_bounds_are_strict() {
        let ledger = sample();
        let after = filter_by_date(&ledger, d(1, 20), true);
        assert_eq!(descriptions(&after), vec!["Interest", "Coles"]);

        let before = filter_by_date(&ledger, d(1, 20), false);
        assert_eq!(descriptions(&before), vec!["Salary ACME", "WOOLWORTHS Metro"]);
    }

    #[test]
    fn test_date_range_excludes_both_boundaries() {
        let ledger = Ledger::new(vec![
            Transaction::new(d(1, 1), Money::from_cents(100), "first"),
            Transaction::new(d(1, 15), Money::from_cents(100), "middle"),
            Transaction::new(d(1, 31), Money::from_cents(100), "last"),
        ]);
        let kept = filter_by_date_range(&ledger, d(1, 1), d(1, 31));
        assert_eq!(descriptions(&kept), vec!["middle"]);
    }

    #[test]
    fn test_filter_does_not_mutate_input() {
        let ledger = sample();
        let snapshot = ledger.clone();
        let _ = filter_by_description(&ledger, "coles", false);
        assert_eq!(ledger, snapshot);
    }

    #[test]
    fn test_no_match_is_empty_not_error() {
        let ledger = sample();
        let kept = filter_by_description(&ledger, "does-not-exist", true);
        assert!(kept.is_empty());
    }

    #[test]
    fn test_options_reject_include_and_exclude() {
        let options = FilterOptions {
            include: Some("a".into()),
            exclude: Some("b".into()),
            ..Default::default()
        };
        let err = options.apply(&sample()).unwrap_err();
        assert!(matches!(err, TrendsError::ConfigConflict(_)));
    }

    #[test]
    fn test_options_reject_inverted_range() {
        let options = FilterOptions {
            between: Some(DateRange::new(d(2, 1), d(1, 1))),
            ..Default::default()
        };
        assert!(matches!(
            options.validate(),
            Err(TrendsError::Validation(_))
        ));
    }

    #[test]
    fn test_options_compose_in_sequence() {
        let options = FilterOptions {
            exclude: Some("netflix".into()),
            min_amount: Some(Money::from_cents(-10000)),
            max_amount: Some(Money::zero()),
            after: Some(d(1, 1)),
            ..Default::default()
        };
        let result = options.apply(&sample()).unwrap();
        assert_eq!(descriptions(&result), vec!["Interest", "Coles"]);
    }

    #[test]
    fn test_empty_options_are_identity() {
        let options = FilterOptions::default();
        assert!(options.is_empty());
        assert_eq!(options.apply(&sample()).unwrap(), sample());
    }
}
