//! Reading input texts and stop lists

use crate::error::CliError;
use anyhow::{Context, Result};
use rakers_core::WordList;
use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// Argument that names standard input
pub const STDIN_ARG: &str = "-";

/// One text to extract from
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum InputSource {
    /// Standard input
    Stdin,
    /// A regular file
    File(PathBuf),
}

impl InputSource {
    /// Read the whole source as UTF-8 text
    pub fn read(&self) -> Result<String> {
        match self {
            InputSource::Stdin => FileReader::read_stdin(),
            InputSource::File(path) => FileReader::read_text(path),
        }
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputSource::Stdin => f.write_str("<stdin>"),
            InputSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// File reader with UTF-8 validation
pub struct FileReader;

impl FileReader {
    /// Expand input arguments into sources
    ///
    /// `-` stands for standard input and every other argument is a glob
    /// pattern. Sources keep the order in which they are first named; a source
    /// named twice is read once. No arguments at all means standard input.
    pub fn resolve(inputs: &[String]) -> Result<Vec<InputSource>> {
        if inputs.is_empty() {
            return Ok(vec![InputSource::Stdin]);
        }

        let mut seen = HashSet::new();
        let mut sources = Vec::new();

        for input in inputs {
            if input == STDIN_ARG {
                if seen.insert(InputSource::Stdin) {
                    sources.push(InputSource::Stdin);
                }
                continue;
            }

            let paths =
                glob::glob(input).map_err(|_| CliError::InvalidPattern(input.clone()))?;
            for entry in paths {
                let path = entry.with_context(|| format!("Error resolving pattern: {input}"))?;
                if !path.is_file() {
                    continue;
                }
                let source = InputSource::File(path);
                if seen.insert(source.clone()) {
                    sources.push(source);
                } else {
                    log::debug!("skipping repeated input {source}");
                }
            }
        }

        if sources.is_empty() {
            anyhow::bail!("No files found matching the provided patterns");
        }

        Ok(sources)
    }

    /// Read a file as UTF-8 text
    pub fn read_text(path: &Path) -> Result<String> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        Ok(content)
    }

    /// Read all of standard input
    pub fn read_stdin() -> Result<String> {
        let mut content = String::new();
        io::stdin()
            .read_to_string(&mut content)
            .context("Failed to read standard input")?;
        Ok(content)
    }

    /// Load a stop-list file (one word per line, `#` comments)
    pub fn read_stoplist(path: &Path) -> Result<WordList> {
        if !path.is_file() {
            return Err(CliError::FileNotFound(path.display().to_string()).into());
        }
        let content = Self::read_text(path)?;
        let list = WordList::parse(&content);
        log::debug!("loaded stop list from {}", path.display());
        Ok(list)
    }
}
