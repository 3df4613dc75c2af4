//! The RAKE extractor

use crate::config::{RakeConfig, RakeSettings};
use crate::error::Result;
use crate::keywords::Keywords;
use crate::modifier::ModifierPipeline;
use crate::scorer::WordScorer;
use crate::segmenter::Segmenter;
use crate::sorter::Sorter;
use crate::stopwords::{BoundaryMatcher, StopwordSet};
use std::sync::Arc;

/// Rapid Automatic Keyword Extraction
///
/// The stop-word matcher is compiled once during construction; the extractor
/// is immutable afterwards and can be shared across threads.
///
/// ```
/// use rakers_core::Rake;
///
/// let rake = Rake::new().unwrap();
/// let keywords = rake.extract("split this phrase");
/// assert_eq!(keywords.phrases(), vec!["split", "phrase"]);
/// ```
#[derive(Debug, Clone)]
pub struct Rake {
    segmenter: Segmenter,
    pipeline: ModifierPipeline,
    sorter: Arc<dyn Sorter>,
}

impl Rake {
    /// Create an extractor with the SMART stop list and default ordering
    pub fn new() -> Result<Self> {
        Self::with_config(RakeConfig::default())
    }

    /// Create an extractor from a configuration
    pub fn with_config(config: RakeConfig) -> Result<Self> {
        let RakeConfig {
            stoplist,
            exclude,
            include,
            modifiers,
            sorter,
        } = config;

        let set = StopwordSet::build(stoplist.words(), exclude, include)?;
        let matcher = BoundaryMatcher::new(set)?;

        Ok(Self {
            segmenter: Segmenter::new(matcher),
            pipeline: ModifierPipeline::new(modifiers),
            sorter,
        })
    }

    /// Create an extractor from named settings
    pub fn from_settings(settings: RakeSettings) -> Result<Self> {
        Self::with_config(settings.into_config()?)
    }

    /// Effective stop words
    pub fn stopwords(&self) -> &StopwordSet {
        self.segmenter.matcher().stopwords()
    }

    /// Candidate phrases after segmentation and modifiers
    pub fn candidates(&self, text: &str) -> Vec<String> {
        let candidates = self.segmenter.candidates(text);
        self.pipeline.apply(candidates)
    }

    /// Extract scored phrases in sorter order
    pub fn extract(&self, text: &str) -> Keywords {
        let candidates = self.candidates(text);
        let scorer = WordScorer::from_candidates(&candidates);
        let keywords = scorer.keywords(&candidates);

        log::trace!(
            "extracted {} candidates, {} distinct phrases",
            candidates.len(),
            keywords.len()
        );

        self.sorter.sort(keywords)
    }

    /// Phrases only, in sorter order
    pub fn extract_words(&self, text: &str) -> Vec<String> {
        self.extract(text).phrases()
    }

    /// Scores only, in the same order as [`Rake::extract_words`]
    pub fn extract_scores(&self, text: &str) -> Vec<f64> {
        self.extract(text).scores()
    }

    /// Extract from many independent texts in parallel
    #[cfg(feature = "parallel")]
    pub fn extract_batch<S>(&self, texts: &[S]) -> Vec<Keywords>
    where
        S: AsRef<str> + Sync,
    {
        use rayon::prelude::*;

        texts
            .par_iter()
            .map(|text| self.extract(text.as_ref()))
            .collect()
    }

    /// Extract from many independent texts
    #[cfg(not(feature = "parallel"))]
    pub fn extract_batch<S>(&self, texts: &[S]) -> Vec<Keywords>
    where
        S: AsRef<str> + Sync,
    {
        texts.iter().map(|text| self.extract(text.as_ref())).collect()
    }
}

impl Default for Rake {
    fn default() -> Self {
        Self::new().expect("default extractor creation should not fail")
    }
}
