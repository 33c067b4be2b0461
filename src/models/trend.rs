//! Trend model

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// The summed amount of every transaction sharing one description
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trend {
    pub description: String,
    pub total_amount: Money,
}

impl Trend {
    pub fn new(description: impl Into<String>, total_amount: Money) -> Self {
        Self {
            description: description.into(),
            total_amount,
        }
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.description, self.total_amount)
    }
}
