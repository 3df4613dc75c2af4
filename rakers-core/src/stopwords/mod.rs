//! Stop-word handling: entry forms, the effective set and the matcher

pub mod form;
pub mod matcher;
pub mod set;

pub use form::{normalize, StopWordForm};
pub use matcher::{BoundaryMatcher, SEPARATOR};
pub use set::StopwordSet;
