//! Configuration file loading

use crate::error::CliError;
use anyhow::{Context, Result};
use rakers_core::RakeSettings;
use std::fs;
use std::path::Path;

/// Load extractor settings from a TOML file
///
/// ```toml
/// exclude = ["new"]
/// include = ["live(s)"]
/// modifiers = ["numeric"]
///
/// [sorter]
/// by = "score"
/// order = "desc"
/// ```
pub fn load_settings(path: &Path) -> Result<RakeSettings> {
    if !path.is_file() {
        return Err(CliError::FileNotFound(path.display().to_string()).into());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config: {}", path.display()))?;

    let settings = RakeSettings::from_toml_str(&content).map_err(CliError::from)?;
    log::debug!("loaded settings from {}: {:?}", path.display(), settings);
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_settings() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("rakers.toml");
        fs::write(&path, "exclude = [\"new\"]\n[sorter]\nby = \"word\"\n").unwrap();

        let settings = load_settings(&path).unwrap();
        assert_eq!(settings.exclude, vec!["new"]);
        assert_eq!(settings.sorter.by, "word");
    }

    #[test]
    fn test_load_settings_wrong_type() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("rakers.toml");
        fs::write(&path, "include = \"wrong\"\n").unwrap();

        let err = load_settings(&path).unwrap_err();
        assert!(err.to_string().starts_with("Configuration error"));
        assert!(err.to_string().contains("array of strings"));
    }

    #[test]
    fn test_load_settings_missing_file() {
        let err = load_settings(Path::new("/nonexistent/rakers.toml")).unwrap_err();
        assert!(err.to_string().starts_with("File not found"));
    }
}
