//! Stop-word forms
//!
//! A stop word is usually a plain token, but it may also be written as a
//! small pattern. Patterns with an obvious expansion are unfolded into
//! literal words; anything that looks like a composed regular expression is
//! kept as an opaque fragment.

use regex::Regex;
use std::sync::OnceLock;

static OPAQUE: OnceLock<Regex> = OnceLock::new();
static WORD_ENDINGS: OnceLock<Regex> = OnceLock::new();
static ALTERNATIVES: OnceLock<Regex> = OnceLock::new();

fn opaque_marker() -> &'static Regex {
    OPAQUE.get_or_init(|| Regex::new(r"\.[.+]\(\w+\)").expect("valid opaque marker"))
}

fn word_endings() -> &'static Regex {
    WORD_ENDINGS.get_or_init(|| {
        Regex::new(r"(?i)^(?P<word>\w+)\((?P<ends>[a-z0-9|]+)\)$").expect("valid word endings")
    })
}

fn alternatives() -> &'static Regex {
    ALTERNATIVES.get_or_init(|| {
        Regex::new(r"(?i)^\((?P<words>[a-z0-9|]+)\)$").expect("valid alternatives")
    })
}

/// A parsed stop-word entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StopWordForm {
    /// Matched verbatim (regex-escaped when compiled)
    Literal(String),
    /// `word(end1|end2)` or `(alt1|alt2)`
    Alternation {
        /// Common stem, absent for a bare `(alt1|alt2)`
        stem: Option<String>,
        /// Endings appended to the stem, or whole alternatives
        alternatives: Vec<String>,
    },
    /// A regular-expression fragment passed through untouched
    Opaque(String),
}

impl StopWordForm {
    /// Classify an entry
    ///
    /// The input is expected to be trimmed and non-empty.
    pub fn parse(entry: &str) -> Self {
        if opaque_marker().is_match(entry) {
            return StopWordForm::Opaque(entry.to_string());
        }

        if let Some(caps) = word_endings().captures(entry) {
            return StopWordForm::Alternation {
                stem: Some(caps["word"].to_string()),
                alternatives: split_alternatives(&caps["ends"]),
            };
        }

        if let Some(caps) = alternatives().captures(entry) {
            return StopWordForm::Alternation {
                stem: None,
                alternatives: split_alternatives(&caps["words"]),
            };
        }

        StopWordForm::Literal(entry.to_string())
    }

    /// Expand into forms that need no further expansion
    ///
    /// `word(s|d)` yields `word`, `words`, `wordd`; `(a|b)` yields `a`, `b`.
    pub fn unfold(self) -> Vec<StopWordForm> {
        match self {
            StopWordForm::Alternation { stem, alternatives } => match stem {
                Some(stem) => std::iter::once(stem.clone())
                    .chain(alternatives.into_iter().map(|end| format!("{stem}{end}")))
                    .map(StopWordForm::Literal)
                    .collect(),
                None => alternatives
                    .into_iter()
                    .map(StopWordForm::Literal)
                    .collect(),
            },
            other => vec![other],
        }
    }

    /// The source text of an unfolded form
    pub fn text(&self) -> &str {
        match self {
            StopWordForm::Literal(text) | StopWordForm::Opaque(text) => text,
            StopWordForm::Alternation { .. } => "",
        }
    }

    /// Whether this form is passed to the matcher verbatim
    pub fn is_opaque(&self) -> bool {
        matches!(self, StopWordForm::Opaque(_))
    }

    /// The regex fragment for an unfolded form
    pub fn fragment(&self) -> String {
        match self {
            StopWordForm::Literal(text) => regex::escape(text),
            StopWordForm::Opaque(text) => text.clone(),
            StopWordForm::Alternation { stem, alternatives } => {
                let alts = alternatives
                    .iter()
                    .map(|alt| regex::escape(alt))
                    .collect::<Vec<_>>()
                    .join("|");
                match stem {
                    Some(stem) => format!("{}(?:{alts})?", regex::escape(stem)),
                    None => format!("(?:{alts})"),
                }
            }
        }
    }
}

fn split_alternatives(raw: &str) -> Vec<String> {
    raw.split('|')
        .filter(|alt| !alt.is_empty())
        .map(str::to_string)
        .collect()
}

/// Normalize a raw word list
///
/// Entries are trimmed, whitespace-only entries dropped, every entry is
/// unfolded, and duplicates are removed keeping the first occurrence.
pub fn normalize<I, S>(entries: I) -> Vec<StopWordForm>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut forms: Vec<StopWordForm> = Vec::new();

    for entry in entries {
        let entry = entry.as_ref().trim();
        if entry.is_empty() {
            continue;
        }

        for form in StopWordForm::parse(entry).unfold() {
            if form.text().trim().is_empty() || forms.contains(&form) {
                continue;
            }
            forms.push(form);
        }
    }

    forms
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_word_is_literal() {
        assert_eq!(
            StopWordForm::parse("about"),
            StopWordForm::Literal("about".to_string())
        );
    }

    #[test]
    fn test_word_endings_unfold() {
        let forms = StopWordForm::parse("change(s|d)").unfold();
        let texts: Vec<_> = forms.iter().map(StopWordForm::text).collect();
        assert_eq!(texts, vec!["change", "changes", "changed"]);
    }

    #[test]
    fn test_bare_alternatives_unfold() {
        let forms = StopWordForm::parse("(change|changes)").unfold();
        let texts: Vec<_> = forms.iter().map(StopWordForm::text).collect();
        assert_eq!(texts, vec!["change", "changes"]);
    }

    #[test]
    fn test_simple_match_regex_is_opaque() {
        let form = StopWordForm::parse(".+(ly)");
        assert!(form.is_opaque());
        assert_eq!(form.fragment(), ".+(ly)");
    }

    #[test]
    fn test_complex_regex_is_quoted() {
        let form = StopWordForm::parse(r"cause(\w+){1,2}");
        assert_eq!(form, StopWordForm::Literal(r"cause(\w+){1,2}".to_string()));
        assert_eq!(form.fragment(), r"cause\(\\w\+\)\{1,2\}");
    }

    #[test]
    fn test_alternation_fragment_before_unfolding() {
        let form = StopWordForm::parse("live(s)");
        assert_eq!(form.fragment(), "live(?:s)?");
    }

    #[test]
    fn test_normalize_cleans_and_deduplicates() {
        let forms = normalize(["test", " ", "", "test", "change(s|d)", "change"]);
        let texts: Vec<_> = forms.iter().map(StopWordForm::text).collect();
        assert_eq!(texts, vec!["test", "change", "changes", "changed"]);
    }

    #[test]
    fn test_normalize_trims_entries() {
        let forms = normalize(["  split example  "]);
        assert_eq!(forms, vec![StopWordForm::Literal("split example".to_string())]);
    }
}
