//! Rapid Automatic Keyword Extraction
//!
//! RAKE scores candidate phrases using word co-occurrence inside a single
//! text. Candidates are the runs of words between stop words and
//! punctuation; each word scores `degree / frequency` and a phrase scores the
//! sum of its words.
//!
//! ```
//! use rakers_core::{Order, RakeConfig, ScoreSorter};
//!
//! let rake = RakeConfig::builder()
//!     .exclude(["new"])
//!     .sorter(ScoreSorter::new(Order::Desc))
//!     .build_extractor()
//!     .unwrap();
//!
//! let keywords = rake.extract("New York City is a beautiful one");
//! assert_eq!(keywords.first(), Some(("new york city", 9.0)));
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod keywords;
pub mod modifier;
pub mod rake;
pub mod scorer;
pub mod segmenter;
pub mod sorter;
pub mod stoplist;
pub mod stopwords;

pub use config::{ConfigBuilder, RakeConfig, RakeSettings, SorterSettings};
pub use error::{RakeError, Result};
pub use keywords::Keywords;
pub use modifier::{Modifier, ModifierPipeline, NumericSplit, PossessiveStrip, MODIFIER_NAMES};
pub use rake::Rake;
pub use scorer::{WordScorer, WordStat};
pub use segmenter::Segmenter;
pub use sorter::{Order, ScoreSorter, Sorter, WordSorter, SORTER_NAMES};
pub use stoplist::{parse_stoplist, SmartStoplist, Stoplist, WordList};
pub use stopwords::{BoundaryMatcher, StopWordForm, StopwordSet};
