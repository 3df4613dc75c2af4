//! Candidate modifiers
//!
//! A modifier receives the candidate list produced by segmentation and
//! returns a replacement list, before any scoring happens.

use crate::error::{RakeError, Result};
use regex::Regex;
use std::collections::HashSet;
use std::fmt::Debug;
use std::sync::{Arc, OnceLock};

static NUMERIC_RUN: OnceLock<Regex> = OnceLock::new();
static POSSESSIVE: OnceLock<Regex> = OnceLock::new();

/// Names of the built-in modifiers
pub const MODIFIER_NAMES: [&str; 2] = [NumericSplit::NAME, PossessiveStrip::NAME];

/// Alters the candidate list before scoring
pub trait Modifier: Debug + Send + Sync {
    /// Return the replacement candidate list
    fn modify(&self, sequences: Vec<String>) -> Vec<String>;
}

/// Resolve a built-in modifier by name
pub fn modifier_by_name(name: &str) -> Result<Arc<dyn Modifier>> {
    match name {
        NumericSplit::NAME => Ok(Arc::new(NumericSplit)),
        PossessiveStrip::NAME => Ok(Arc::new(PossessiveStrip)),
        other => Err(RakeError::UnknownComponent {
            kind: "modifier",
            name: other.to_string(),
        }),
    }
}

/// Splits candidates on standalone numbers
///
/// `"split 42 words"` becomes `"split"` and `"words"`. Fragments are
/// deduplicated across the whole list.
#[derive(Debug, Clone, Copy, Default)]
pub struct NumericSplit;

impl NumericSplit {
    /// Configuration name
    pub const NAME: &'static str = "numeric";
}

impl Modifier for NumericSplit {
    fn modify(&self, sequences: Vec<String>) -> Vec<String> {
        let numeric = NUMERIC_RUN.get_or_init(|| Regex::new(r"\b\d+\b").expect("valid numeric run"));

        let mut seen = HashSet::new();
        let mut fragments = Vec::new();
        for sequence in &sequences {
            for part in numeric.split(sequence) {
                let part = part.trim();
                if seen.insert(part.to_string()) {
                    fragments.push(part.to_string());
                }
            }
        }
        fragments
    }
}

/// Strips possessive `'s` endings
///
/// Removes `'s` (or a bare `'`) before whitespace or at the end of a
/// candidate, so `"brother's bag"` becomes `"brother bag"`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PossessiveStrip;

impl PossessiveStrip {
    /// Configuration name
    pub const NAME: &'static str = "possession";
}

impl Modifier for PossessiveStrip {
    fn modify(&self, sequences: Vec<String>) -> Vec<String> {
        let possessive =
            POSSESSIVE.get_or_init(|| Regex::new(r"(?i)'(s)?(\s+|$)").expect("valid possessive"));

        sequences
            .into_iter()
            .map(|sequence| possessive.replace_all(&sequence, "${2}").into_owned())
            .collect()
    }
}

/// The registered modifiers
///
/// Every modifier sees the segmented candidates, not the output of the
/// modifier before it; only the last modifier's output is kept. Empty
/// entries are dropped and the rest trimmed afterwards.
#[derive(Debug, Clone, Default)]
pub struct ModifierPipeline {
    modifiers: Vec<Arc<dyn Modifier>>,
}

impl ModifierPipeline {
    /// Create a pipeline
    pub fn new(modifiers: Vec<Arc<dyn Modifier>>) -> Self {
        Self { modifiers }
    }

    /// Number of registered modifiers
    pub fn len(&self) -> usize {
        self.modifiers.len()
    }

    /// Whether no modifier is registered
    pub fn is_empty(&self) -> bool {
        self.modifiers.is_empty()
    }

    /// Apply the pipeline to segmented candidates
    pub fn apply(&self, candidates: Vec<String>) -> Vec<String> {
        // stages do not chain, so only the last one can affect the result
        let Some(last) = self.modifiers.last() else {
            return candidates;
        };

        last.modify(candidates)
            .into_iter()
            .filter(|candidate| !candidate.trim().is_empty())
            .map(|candidate| candidate.trim().to_string())
            .collect()
    }
}
