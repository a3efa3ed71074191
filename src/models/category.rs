//! Expense category
//!
//! A category is free text as far as the ledger is concerned: the only
//! rule is that it is not blank. The set of choices offered to the user
//! comes from `Settings::categories`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A non-blank category value, e.g. `groceries`
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Category(String);

impl Category {
    /// Build a category from raw input, trimming whitespace
    ///
    /// Returns `None` when nothing is left after trimming.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    /// The stored value
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Human-facing label: the value with its first letter capitalized
    pub fn label(&self) -> String {
        let mut chars = self.0.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Category {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
