//! The working set of transactions
//!
//! A `Ledger` is always ordered newest-first. Filtering produces a new
//! ledger and never touches the one it was called on, so an earlier working
//! set can simply be kept around and reused.

use serde::Serialize;

use super::transaction::{Kind, Transaction};

/// An ordered, owned set of transactions (index 0 = newest)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Ledger {
    transactions: Vec<Transaction>,
}

impl Ledger {
    /// Build a ledger, sorting newest-first
    ///
    /// The sort is stable, so same-day transactions keep their source order.
    pub fn new(mut transactions: Vec<Transaction>) -> Self {
        transactions.sort_by(|a, b| b.date().cmp(&a.date()));
        Self { transactions }
    }

    /// An empty ledger
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Transaction> {
        self.transactions.iter()
    }

    pub fn as_slice(&self) -> &[Transaction] {
        &self.transactions
    }

    /// The most recent transaction
    pub fn newest(&self) -> Option<&Transaction> {
        self.transactions.first()
    }

    /// The oldest transaction
    pub fn oldest(&self) -> Option<&Transaction> {
        self.transactions.last()
    }

    /// Copy out the transactions satisfying `predicate`, preserving order
    pub fn retain_matching<F>(&self, predicate: F) -> Self
    where
        F: Fn(&Transaction) -> bool,
    {
        Self {
            transactions: self
                .transactions
                .iter()
                .filter(|txn| predicate(txn))
                .cloned()
                .collect(),
        }
    }

    /// Only the transactions of one kind
    pub fn of_kind(&self, kind: Kind) -> Self {
        self.retain_matching(|txn| txn.kind() == kind)
    }
}

impl FromIterator<Transaction> for Ledger {
    fn from_iter<I: IntoIterator<Item = Transaction>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Ledger {
    type Item = &'a Transaction;
    type IntoIter = std::slice::Iter<'a, Transaction>;

    fn into_iter(self) -> Self::IntoIter {
        self.transactions.iter()
    }
}
