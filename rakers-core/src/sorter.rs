//! Result ordering
//!
//! Sorting is stable: phrases that compare equal keep the order of their
//! first occurrence in the text.

use crate::error::{RakeError, Result};
use crate::keywords::Keywords;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::str::FromStr;
use std::sync::Arc;

/// Names of the built-in sorters
pub const SORTER_NAMES: [&str; 2] = [ScoreSorter::NAME, WordSorter::NAME];

/// Orders an extraction result
pub trait Sorter: Debug + Send + Sync {
    /// Return the result in the sorter's order
    fn sort(&self, keywords: Keywords) -> Keywords;
}

/// Sort direction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Order {
    /// Smallest first
    #[serde(alias = "ascending")]
    Asc,
    /// Largest first
    #[default]
    #[serde(alias = "descending")]
    Desc,
}

impl FromStr for Order {
    type Err = RakeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(Order::Asc),
            "desc" | "descending" => Ok(Order::Desc),
            _ => Err(RakeError::InvalidOption {
                option: "order".to_string(),
                expected: "\"asc\" or \"desc\"".to_string(),
            }),
        }
    }
}

/// Resolve a built-in sorter by name
pub fn sorter_by_name(name: &str, order: Order) -> Result<Arc<dyn Sorter>> {
    match name {
        ScoreSorter::NAME => Ok(Arc::new(ScoreSorter::new(order))),
        WordSorter::NAME => Ok(Arc::new(WordSorter::new(order))),
        other => Err(RakeError::UnknownComponent {
            kind: "sorter",
            name: other.to_string(),
        }),
    }
}

/// Orders by score (default: descending)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreSorter {
    order: Order,
}

impl ScoreSorter {
    /// Configuration name
    pub const NAME: &'static str = "score";

    /// Create a score sorter
    pub fn new(order: Order) -> Self {
        Self { order }
    }
}

impl Sorter for ScoreSorter {
    fn sort(&self, mut keywords: Keywords) -> Keywords {
        match self.order {
            Order::Asc => keywords.sort_by(|a, b| a.1.total_cmp(&b.1)),
            Order::Desc => keywords.sort_by(|a, b| b.1.total_cmp(&a.1)),
        }
        keywords
    }
}

/// Orders by phrase (default: descending)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WordSorter {
    order: Order,
}

impl WordSorter {
    /// Configuration name
    pub const NAME: &'static str = "word";

    /// Create a phrase sorter
    pub fn new(order: Order) -> Self {
        Self { order }
    }
}

impl Sorter for WordSorter {
    fn sort(&self, mut keywords: Keywords) -> Keywords {
        match self.order {
            Order::Asc => keywords.sort_by(|a, b| a.0.cmp(b.0)),
            Order::Desc => keywords.sort_by(|a, b| b.0.cmp(a.0)),
        }
        keywords
    }
}
