//! Effective stop-word set
//!
//! Built as `base − exclusions ∪ (inclusions − exclusions)`. Exclusions always
//! win over inclusions.

use super::form::{normalize, StopWordForm};
use crate::error::{RakeError, Result};
use regex::RegexBuilder;
use std::collections::HashMap;

/// Stop words after exclusion and inclusion adjustments
#[derive(Debug, Clone, Default)]
pub struct StopwordSet {
    words: Vec<StopWordForm>,
    /// lower-cased word -> exact casing that must not be treated as a stop word
    case_exceptions: HashMap<String, String>,
}

impl StopwordSet {
    /// Build the effective set
    ///
    /// Fails when an opaque exclusion cannot be compiled.
    pub fn build<B, E, I>(base: B, exclude: E, include: I) -> Result<Self>
    where
        B: IntoIterator,
        B::Item: AsRef<str>,
        E: IntoIterator,
        E::Item: AsRef<str>,
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut words = normalize(base);
        let exclusions = normalize(exclude);
        let mut inclusions = normalize(include);

        let mut case_exceptions = HashMap::new();
        for exclusion in &exclusions {
            match exclusion {
                StopWordForm::Opaque(pattern) => {
                    let full = RegexBuilder::new(&format!("^(?:{pattern})$"))
                        .case_insensitive(true)
                        .build()
                        .map_err(|source| RakeError::Pattern {
                            pattern: pattern.clone(),
                            source,
                        })?;
                    words.retain(|word| word.is_opaque() || !full.is_match(word.text()));
                    inclusions.retain(|word| word.is_opaque() || !full.is_match(word.text()));
                }
                other => {
                    let text = other.text();
                    let lower = text.to_lowercase();
                    if text == lower {
                        words.retain(|word| word.text().to_lowercase() != lower);
                    } else {
                        case_exceptions.insert(lower, text.to_string());
                    }
                }
            }
        }

        // a mixed-case exclusion only adds a case exception
        let excluded: Vec<&str> = exclusions
            .iter()
            .filter(|form| form.is_opaque() || form.text() == form.text().to_lowercase())
            .map(StopWordForm::text)
            .collect();
        inclusions.retain(|word| !excluded.contains(&word.text()));

        for inclusion in inclusions {
            if !words.contains(&inclusion) {
                words.push(inclusion);
            }
        }

        log::debug!(
            "stop-word set: {} words, {} case exceptions",
            words.len(),
            case_exceptions.len()
        );

        Ok(Self {
            words,
            case_exceptions,
        })
    }

    /// Effective stop words in matcher order
    pub fn words(&self) -> &[StopWordForm] {
        &self.words
    }

    /// Number of effective stop words
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether no stop word survived
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Whether `text` is an exact-case exclusion
    pub fn is_case_exception(&self, text: &str) -> bool {
        self.case_exceptions
            .get(&text.to_lowercase())
            .is_some_and(|exact| exact == text)
    }

    /// Whether `word` is an effective literal stop word (case-insensitive)
    pub fn contains(&self, word: &str) -> bool {
        let lower = word.to_lowercase();
        self.words
            .iter()
            .any(|form| !form.is_opaque() && form.text().to_lowercase() == lower)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NONE: [&str; 0] = [];

    #[test]
    fn test_exclusion_removes_base_word() {
        let set = StopwordSet::build(["this", "is"], ["this"], NONE).unwrap();
        assert!(!set.contains("this"));
        assert!(set.contains("is"));
    }

    #[test]
    fn test_exclusion_wins_over_inclusion() {
        let set = StopwordSet::build(["the", "about"], ["about"], ["about"]).unwrap();
        assert!(!set.contains("about"));
    }

    #[test]
    fn test_mixed_case_exclusion_keeps_lower_case_inclusion() {
        let set = StopwordSet::build(["a"], ["New"], ["new"]).unwrap();
        assert!(set.contains("new"));
        assert!(set.is_case_exception("New"));
    }

    #[test]
    fn test_opaque_exclusion_drops_identical_inclusion() {
        let set = StopwordSet::build(["a"], [".+(ly)"], [".+(ly)"]).unwrap();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_mixed_case_exclusion_becomes_case_exception() {
        let set = StopwordSet::build(["new", "now"], ["New"], NONE).unwrap();
        assert!(set.contains("new"));
        assert!(set.is_case_exception("New"));
        assert!(!set.is_case_exception("new"));
        assert!(!set.is_case_exception("NEW"));
    }

    #[test]
    fn test_unfolded_exclusion_removes_every_variant() {
        let set = StopwordSet::build(["the", "cause", "causes"], ["cause(s)"], NONE).unwrap();
        assert!(!set.contains("cause"));
        assert!(!set.contains("causes"));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_complex_exclusion_removes_nothing() {
        let set = StopwordSet::build(["cause", "causes"], [r"cause(\w+){1,2}"], NONE).unwrap();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_opaque_exclusion_removes_matching_words() {
        let set = StopwordSet::build(["only", "mostly", "the"], [".+(ly)"], NONE).unwrap();
        assert!(!set.contains("only"));
        assert!(!set.contains("mostly"));
        assert!(set.contains("the"));
    }

    #[test]
    fn test_empty_entries_are_ignored() {
        let set = StopwordSet::build(["is", " "], ["", "  "], ["beautiful", ""]).unwrap();
        assert_eq!(set.len(), 2);
        assert!(set.contains("beautiful"));
    }

    #[test]
    fn test_inclusions_are_appended_after_base_words() {
        let set = StopwordSet::build(["a"], NONE, ["live(s)"]).unwrap();
        let texts: Vec<_> = set.words().iter().map(StopWordForm::text).collect();
        assert_eq!(texts, vec!["a", "live", "lives"]);
    }
}
