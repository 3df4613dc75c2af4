//! Output formatting module

use anyhow::Result;
use rakers_core::Keywords;

/// Trait for output formatters
pub trait OutputFormatter {
    /// Format the keywords extracted from one source
    fn format_keywords(&mut self, source: &str, keywords: &Keywords) -> Result<()>;

    /// Finalize output (e.g., close the JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;
