//! Error types for extractor construction
//!
//! Every error is raised while building a [`crate::Rake`]; extraction itself
//! never fails once an extractor exists.

use thiserror::Error;

/// Errors raised while configuring or building an extractor
#[derive(Error, Debug)]
pub enum RakeError {
    /// An option holds a value of the wrong shape
    #[error("option `{option}` must be of type {expected}")]
    InvalidOption {
        /// Name of the offending option
        option: String,
        /// Human readable description of the accepted values
        expected: String,
    },

    /// A modifier or sorter name that has no built-in implementation
    #[error("unknown {kind} `{name}`")]
    UnknownComponent {
        /// Component family ("modifier" or "sorter")
        kind: &'static str,
        /// The name that could not be resolved
        name: String,
    },

    /// The combined stop-word matcher could not be compiled
    #[error("cannot compile stop-word pattern `{pattern}`: {source}")]
    Pattern {
        /// The pattern fragment (or combined pattern) that failed
        pattern: String,
        /// Underlying regex error
        #[source]
        source: regex::Error,
    },

    /// Settings could not be parsed
    #[error("invalid settings: {0}")]
    Config(String),
}

impl From<toml::de::Error> for RakeError {
    fn from(err: toml::de::Error) -> Self {
        RakeError::Config(err.to_string())
    }
}

/// Result type for extractor construction
pub type Result<T> = std::result::Result<T, RakeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_option_display() {
        let error = RakeError::InvalidOption {
            option: "exclude".to_string(),
            expected: "array of strings".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "option `exclude` must be of type array of strings"
        );
    }

    #[test]
    fn test_unknown_component_display() {
        let error = RakeError::UnknownComponent {
            kind: "modifier",
            name: "stemmer".to_string(),
        };
        assert_eq!(error.to_string(), "unknown modifier `stemmer`");
    }

    #[test]
    fn test_pattern_error_keeps_source() {
        let source = regex::Regex::new("(unclosed").unwrap_err();
        let error = RakeError::Pattern {
            pattern: "(unclosed".to_string(),
            source,
        };
        assert!(error.to_string().starts_with("cannot compile stop-word pattern"));
        assert!(std::error::Error::source(&error).is_some());
    }
}
