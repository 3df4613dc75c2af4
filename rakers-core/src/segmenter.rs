//! Text to candidate phrases

use crate::stopwords::{BoundaryMatcher, SEPARATOR};
use regex::Regex;
use std::sync::OnceLock;

static LINE_BREAKS: OnceLock<Regex> = OnceLock::new();
static BOUNDARIES: OnceLock<Regex> = OnceLock::new();

fn line_breaks() -> &'static Regex {
    LINE_BREAKS.get_or_init(|| {
        Regex::new(r"(?:\r\n|[\n\x0B\x0C\r\u{85}\u{2028}\u{2029}])+").expect("valid line breaks")
    })
}

/// Punctuation, the stop-word separator and a standalone ` - `
fn boundaries() -> &'static Regex {
    BOUNDARIES.get_or_init(|| {
        Regex::new(r#"[.!?,;:\t"\\()\u{2018}\u{2019}\u{201C}\u{201D}\u{2013}|]|\s-\s"#)
            .expect("valid boundaries")
    })
}

/// Splits text into lower-cased candidate phrases
#[derive(Debug, Clone)]
pub struct Segmenter {
    matcher: BoundaryMatcher,
}

impl Segmenter {
    /// Create a segmenter around a compiled matcher
    pub fn new(matcher: BoundaryMatcher) -> Self {
        Self { matcher }
    }

    /// The stop-word matcher in use
    pub fn matcher(&self) -> &BoundaryMatcher {
        &self.matcher
    }

    /// Candidates in order of appearance, repeats included
    pub fn candidates(&self, text: &str) -> Vec<String> {
        let flat = line_breaks().replace_all(text, " ");

        // stop words are matched per sequence, never across punctuation
        boundaries()
            .split(&flat)
            .map(str::trim)
            .filter(|sequence| !sequence.is_empty())
            .flat_map(|sequence| {
                self.matcher
                    .mark(sequence)
                    .split(SEPARATOR)
                    .map(str::trim)
                    .filter(|candidate| !candidate.is_empty())
                    .map(str::to_lowercase)
                    .collect::<Vec<_>>()
            })
            .collect()
    }
}
