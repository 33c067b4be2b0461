//! Trend aggregation
//!
//! Groups one kind of transaction by description, sums each group and ranks
//! the groups by size.

use std::collections::HashMap;

use crate::error::{TrendsError, TrendsResult};
use crate::models::{Kind, Ledger, Money, Trend};

/// Rank descriptions of one kind by their summed amounts
///
/// Descriptions are grouped exactly as written (case-sensitive). Income
/// trends are ordered largest first, expense trends most negative first.
/// Equal totals keep the order in which their descriptions were first seen.
/// When `top_n > 0` only the first `top_n` trends are returned.
pub fn aggregate(ledger: &Ledger, kind: Kind, top_n: i64) -> TrendsResult<Vec<Trend>> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut trends: Vec<Trend> = Vec::new();

    for txn in ledger.iter().filter(|txn| txn.kind() == kind) {
        match index.get(txn.description()) {
            Some(&i) => {
                let trend = &mut trends[i];
                trend.total_amount = trend
                    .total_amount
                    .checked_add(txn.amount())
                    .ok_or_else(|| overflow(&trend.description))?;
            }
            None => {
                index.insert(txn.description(), trends.len());
                trends.push(Trend::new(txn.description(), txn.amount()));
            }
        }
    }

    match kind {
        Kind::Income => trends.sort_by(|a, b| b.total_amount.cmp(&a.total_amount)),
        Kind::Expense => trends.sort_by(|a, b| a.total_amount.cmp(&b.total_amount)),
    }

    if top_n > 0 {
        trends.truncate(usize::try_from(top_n).unwrap_or(usize::MAX));
    }

    Ok(trends)
}

/// Sum of the trend totals
pub fn total_of(trends: &[Trend]) -> TrendsResult<Money> {
    Money::checked_sum(trends.iter().map(|t| t.total_amount))
        .ok_or_else(|| TrendsError::Overflow("trend total is too large".into()))
}

fn overflow(description: &str) -> TrendsError {
    TrendsError::Overflow(format!("total for '{}' is too large", description))
}
