//! Property-based tests

use proptest::prelude::*;
use rakers_core::{Rake, RakeConfig, WordList};

fn rake() -> Rake {
    RakeConfig::builder()
        .stoplist(WordList::new(["a", "the", "of", "is", "and"]))
        .build_extractor()
        .unwrap()
}

proptest! {
    #[test]
    fn extraction_is_deterministic(text in "\\PC{0,200}") {
        let rake = rake();
        prop_assert_eq!(rake.extract(&text), rake.extract(&text));
    }

    #[test]
    fn phrases_are_trimmed_lower_case_and_unique(text in "[A-Za-z ,.;]{0,120}") {
        let keywords = rake().extract(&text);
        let phrases = keywords.phrases();
        for phrase in &phrases {
            prop_assert!(!phrase.is_empty());
            prop_assert_eq!(phrase.trim(), phrase.as_str());
            prop_assert_eq!(phrase.to_lowercase(), phrase.clone());
            prop_assert!(!phrase.contains(['|', ',', '.', ';']));
        }
        let mut unique = phrases.clone();
        unique.sort();
        unique.dedup();
        prop_assert_eq!(unique.len(), phrases.len());
    }

    #[test]
    fn scores_are_sorted_descending(text in "[a-z ,.]{0,120}") {
        let scores = rake().extract_scores(&text);
        prop_assert!(scores.windows(2).all(|pair| pair[0] >= pair[1]));
    }

    #[test]
    fn text_without_stop_words_is_one_candidate(words in prop::collection::vec("[b-z]{3,8}", 1..6)) {
        let text = words.join(" ");
        prop_assume!(!words.iter().any(|w| ["the", "and"].contains(&w.as_str())));
        let keywords = rake().extract(&text);
        let n = words.len() as f64;
        prop_assert_eq!(keywords.len(), 1);
        prop_assert_eq!(keywords.first().map(|(phrase, _)| phrase.to_string()), Some(text.clone()));
        // each word scores degree / frequency == n
        prop_assert_eq!(keywords.scores()[0], n * n);
    }
}
