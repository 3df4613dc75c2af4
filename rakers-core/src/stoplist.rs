//! Stop-word sources
//!
//! A [`Stoplist`] only has to hand out its words. Comment lines (entries
//! starting with `#`) are dropped by the source itself, never by the
//! extractor.

use std::fmt::Debug;
use std::sync::OnceLock;

const SMART_STOPLIST: &str = include_str!("../resources/smart_stoplist.txt");

static SMART_WORDS: OnceLock<Vec<String>> = OnceLock::new();

/// A source of stop words
pub trait Stoplist: Debug + Send + Sync {
    /// Return the current list of stop words, in order
    fn words(&self) -> Vec<String>;
}

/// Turn stop-list file contents into words
///
/// One word per line; blank lines and lines starting with `#` are skipped.
pub fn parse_stoplist(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

/// The SMART stop list (Salton, 1971) that RAKE ships with
#[derive(Debug, Clone, Copy, Default)]
pub struct SmartStoplist;

impl SmartStoplist {
    /// Create the embedded SMART stop list
    pub fn new() -> Self {
        Self
    }
}

impl Stoplist for SmartStoplist {
    fn words(&self) -> Vec<String> {
        SMART_WORDS
            .get_or_init(|| parse_stoplist(SMART_STOPLIST))
            .clone()
    }
}

/// An in-memory stop list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    /// Create a list from any sequence of words
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// Create a list from stop-list file contents
    pub fn parse(content: &str) -> Self {
        Self {
            words: parse_stoplist(content),
        }
    }
}

impl Stoplist for WordList {
    fn words(&self) -> Vec<String> {
        self.words
            .iter()
            .filter(|word| !word.starts_with('#'))
            .cloned()
            .collect()
    }
}
