//! Ordered phrase → score mapping

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::cmp::Ordering;
use std::collections::HashMap;

/// Extraction result
///
/// Keeps insertion order. Inserting an existing phrase overwrites its score
/// in place, so the phrase keeps the position of its first occurrence.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Keywords {
    entries: Vec<(String, f64)>,
    index: HashMap<String, usize>,
}

impl Keywords {
    /// Create an empty result
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty result with room for `capacity` phrases
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    /// Insert or overwrite a phrase, returning the previous score
    pub fn insert(&mut self, phrase: impl Into<String>, score: f64) -> Option<f64> {
        let phrase = phrase.into();
        if let Some(&position) = self.index.get(&phrase) {
            let previous = self.entries[position].1;
            self.entries[position].1 = score;
            return Some(previous);
        }
        self.index.insert(phrase.clone(), self.entries.len());
        self.entries.push((phrase, score));
        None
    }

    /// Score of a phrase
    pub fn get(&self, phrase: &str) -> Option<f64> {
        self.index.get(phrase).map(|&position| self.entries[position].1)
    }

    /// Whether a phrase is present
    pub fn contains(&self, phrase: &str) -> bool {
        self.index.contains_key(phrase)
    }

    /// Number of distinct phrases
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the result is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// First entry in the current order
    pub fn first(&self) -> Option<(&str, f64)> {
        self.entries
            .first()
            .map(|(phrase, score)| (phrase.as_str(), *score))
    }

    /// Iterate over `(phrase, score)` pairs in order
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.entries
            .iter()
            .map(|(phrase, score)| (phrase.as_str(), *score))
    }

    /// Phrases in order
    pub fn phrases(&self) -> Vec<String> {
        self.entries.iter().map(|(phrase, _)| phrase.clone()).collect()
    }

    /// Scores in order
    pub fn scores(&self) -> Vec<f64> {
        self.entries.iter().map(|(_, score)| *score).collect()
    }

    /// Keep only the first `len` entries
    pub fn truncate(&mut self, len: usize) {
        if len >= self.entries.len() {
            return;
        }
        for (phrase, _) in self.entries.drain(len..) {
            self.index.remove(&phrase);
        }
    }

    /// Stable sort with a comparator over `(phrase, score)` pairs
    pub fn sort_by<F>(&mut self, mut compare: F)
    where
        F: FnMut((&str, f64), (&str, f64)) -> Ordering,
    {
        self.entries
            .sort_by(|a, b| compare((a.0.as_str(), a.1), (b.0.as_str(), b.1)));
        self.reindex();
    }

    fn reindex(&mut self) {
        self.index.clear();
        for (position, (phrase, _)) in self.entries.iter().enumerate() {
            self.index.insert(phrase.clone(), position);
        }
    }
}

impl IntoIterator for Keywords {
    type Item = (String, f64);
    type IntoIter = std::vec::IntoIter<(String, f64)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Keywords {
    type Item = (&'a str, f64);
    type IntoIter = Box<dyn Iterator<Item = (&'a str, f64)> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for Keywords {
    fn from_iter<T: IntoIterator<Item = (S, f64)>>(iter: T) -> Self {
        let mut keywords = Keywords::new();
        for (phrase, score) in iter {
            keywords.insert(phrase, score);
        }
        keywords
    }
}

impl Serialize for Keywords {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (phrase, score) in &self.entries {
            map.serialize_entry(phrase, score)?;
        }
        map.end()
    }
}
