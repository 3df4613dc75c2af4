//! Word and phrase scoring
//!
//! Classic RAKE statistics: for each candidate of `n` words every member
//! gets `frequency += 1` and `degree += n - 1`; afterwards each word's
//! degree is increased by its frequency and the score is `degree / frequency`.

use crate::keywords::Keywords;
use regex::Regex;
use smallvec::SmallVec;
use std::collections::HashMap;
use std::sync::OnceLock;

static WORD_SEPARATOR: OnceLock<Regex> = OnceLock::new();
static NUMBER: OnceLock<Regex> = OnceLock::new();

/// Words of one candidate
pub type Words<'a> = SmallVec<[&'a str; 8]>;

/// Split a candidate into scoreable words
///
/// Splits on anything outside `[A-Za-z0-9_+\-/]` and drops empty and purely
/// numeric tokens.
pub fn tokenize(candidate: &str) -> Words<'_> {
    let separator = WORD_SEPARATOR
        .get_or_init(|| Regex::new(r"[^a-zA-Z0-9_+\-/]").expect("valid word separator"));

    separator
        .split(candidate)
        .filter(|token| !token.is_empty() && !is_numeric(token))
        .collect()
}

/// Whether a token reads as a number (`42`, `-3`, `1e5`)
pub fn is_numeric(token: &str) -> bool {
    let number = NUMBER.get_or_init(|| {
        Regex::new(r"^[+-]?(?:\d+(?:\.\d*)?|\.\d+)(?:[eE][+-]?\d+)?$").expect("valid number")
    });
    number.is_match(token)
}

/// Frequency and degree of one word
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WordStat {
    /// Occurrences across all candidates
    pub frequency: usize,
    /// Co-occurrence degree including the word's own frequency
    pub degree: usize,
}

impl WordStat {
    /// `degree / frequency`
    pub fn score(&self) -> f64 {
        if self.frequency == 0 {
            return 0.0;
        }
        self.degree as f64 / self.frequency as f64
    }
}

/// Accumulates per-word statistics over a candidate list
#[derive(Debug, Default)]
pub struct WordScorer {
    stats: HashMap<String, WordStat>,
}

impl WordScorer {
    /// Compute statistics for the candidates
    pub fn from_candidates(candidates: &[String]) -> Self {
        let mut stats: HashMap<String, WordStat> = HashMap::new();

        for candidate in candidates {
            let words = tokenize(candidate);
            let co_occurrence = words.len().saturating_sub(1);
            for word in words {
                let stat = stats.entry(word.to_string()).or_default();
                stat.frequency += 1;
                stat.degree += co_occurrence;
            }
        }

        for stat in stats.values_mut() {
            stat.degree += stat.frequency;
        }

        Self { stats }
    }

    /// Statistics for a word
    pub fn stat(&self, word: &str) -> Option<WordStat> {
        self.stats.get(word).copied()
    }

    /// Score for a word (0.0 when unknown)
    pub fn score(&self, word: &str) -> f64 {
        self.stats.get(word).map_or(0.0, WordStat::score)
    }

    /// Scores of every distinct word
    pub fn scores(&self) -> HashMap<String, f64> {
        self.stats
            .iter()
            .map(|(word, stat)| (word.clone(), stat.score()))
            .collect()
    }

    /// Sum of member word scores for a candidate
    pub fn phrase_score(&self, candidate: &str) -> f64 {
        let mut score = 0.0;
        for word in tokenize(candidate) {
            score += self.score(word);
        }
        score
    }

    /// Score every candidate; repeated candidates keep their first position
    pub fn keywords(&self, candidates: &[String]) -> Keywords {
        let mut keywords = Keywords::with_capacity(candidates.len());
        for candidate in candidates {
            keywords.insert(candidate.clone(), self.phrase_score(candidate));
        }
        keywords
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_tokenize() {
        let words = tokenize("linear diophantine equations");
        assert_eq!(words.as_slice(), &["linear", "diophantine", "equations"]);
    }

    #[test]
    fn test_tokenize_drops_numbers() {
        let words = tokenize("42 words 3.5 c++ i/o -7");
        assert_eq!(words.as_slice(), &["words", "c++", "i/o"]);
    }

    #[test]
    fn test_tokenize_keeps_word_like_numbers() {
        assert_eq!(tokenize("nan inf mp3").as_slice(), &["nan", "inf", "mp3"]);
    }

    #[test]
    fn test_is_numeric() {
        for token in ["42", "-3", "+3", "1e5", "0.5"] {
            assert!(is_numeric(token), "{token}");
        }
        for token in ["nan", "inf", "mp3", "1-2", "e5"] {
            assert!(!is_numeric(token), "{token}");
        }
    }

    #[test]
    fn test_word_stats() {
        let scorer = WordScorer::from_candidates(&strings(&["data", "text", "test", "test text"]));
        assert_eq!(scorer.stat("data"), Some(WordStat { frequency: 1, degree: 1 }));
        assert_eq!(scorer.stat("text"), Some(WordStat { frequency: 2, degree: 3 }));
        assert_eq!(scorer.score("test"), 1.5);
        assert_eq!(scorer.phrase_score("test text"), 3.0);
    }

    #[test]
    fn test_fractional_scores() {
        let scorer = WordScorer::from_candidates(&strings(&[
            "minimal set",
            "minimal generating sets",
            "minimal supporting set",
        ]));
        assert_eq!(scorer.stat("minimal"), Some(WordStat { frequency: 3, degree: 8 }));
        assert_eq!(scorer.score("minimal"), 8.0 / 3.0);
    }

    #[test]
    fn test_numeric_only_candidate_scores_zero() {
        let scorer = WordScorer::from_candidates(&strings(&["4", "2 words"]));
        assert_eq!(scorer.phrase_score("4"), 0.0);
        assert_eq!(scorer.phrase_score("2 words"), 1.0);
    }

    #[test]
    fn test_keywords_deduplicate_repeated_candidates() {
        let candidates = strings(&["solutions", "minimal set", "solutions"]);
        let scorer = WordScorer::from_candidates(&candidates);
        let keywords = scorer.keywords(&candidates);
        assert_eq!(keywords.len(), 2);
        assert_eq!(keywords.phrases(), vec!["solutions", "minimal set"]);
    }

    #[test]
    fn test_scores_map() {
        let scorer = WordScorer::from_candidates(&strings(&["split", "phrase"]));
        let scores = scorer.scores();
        assert_eq!(scores.len(), 2);
        assert_eq!(scores["split"], 1.0);
    }
}
