//! rakers CLI library
//!
//! Command-line interface over the `rakers-core` keyword extractor.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;

pub use error::CliError;
