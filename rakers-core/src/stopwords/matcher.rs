//! Combined stop-word matcher

use super::set::StopwordSet;
use crate::error::{RakeError, Result};
use regex::{Captures, Regex, RegexBuilder};
use std::borrow::Cow;

/// Symbol that replaces every stop-word hit
pub const SEPARATOR: &str = "|";

const SIZE_LIMIT: usize = 64 * (1 << 20);

/// Locates whole-token stop words inside a string
#[derive(Debug, Clone)]
pub struct BoundaryMatcher {
    regex: Option<Regex>,
    set: StopwordSet,
}

impl BoundaryMatcher {
    /// Compile a matcher for the given set
    ///
    /// Every stop word becomes a `\b(?:...)\b` alternative of a single
    /// case-insensitive regex. An empty set yields a matcher that never matches.
    pub fn new(set: StopwordSet) -> Result<Self> {
        for form in set.words().iter().filter(|form| form.is_opaque()) {
            Regex::new(&form.fragment()).map_err(|source| RakeError::Pattern {
                pattern: form.text().to_string(),
                source,
            })?;
        }

        if set.is_empty() {
            log::debug!("empty stop-word set, matcher disabled");
            return Ok(Self { regex: None, set });
        }

        let pattern = set
            .words()
            .iter()
            .map(|form| format!(r"\b(?:{})\b", form.fragment()))
            .collect::<Vec<_>>()
            .join("|");

        let regex = RegexBuilder::new(&pattern)
            .case_insensitive(true)
            .size_limit(SIZE_LIMIT)
            .build()
            .map_err(|source| RakeError::Pattern {
                pattern: "<combined stop-word matcher>".to_string(),
                source,
            })?;

        log::debug!("compiled stop-word matcher from {} words", set.len());

        Ok(Self {
            regex: Some(regex),
            set,
        })
    }

    /// Effective stop words behind this matcher
    pub fn stopwords(&self) -> &StopwordSet {
        &self.set
    }

    /// Whether any stop word occurs in `text`
    pub fn is_match(&self, text: &str) -> bool {
        let Some(regex) = &self.regex else {
            return false;
        };
        regex
            .find_iter(text)
            .any(|hit| !self.set.is_case_exception(hit.as_str()))
    }

    /// Replace every stop-word hit with [`SEPARATOR`]
    ///
    /// Hits whose exact text is a case exception are left in place.
    pub fn mark<'t>(&self, text: &'t str) -> Cow<'t, str> {
        let Some(regex) = &self.regex else {
            return Cow::Borrowed(text);
        };
        regex.replace_all(text, |caps: &Captures| {
            let hit = &caps[0];
            if self.set.is_case_exception(hit) {
                hit.to_string()
            } else {
                SEPARATOR.to_string()
            }
        })
    }
}
