//! Extractor configuration
//!
//! [`RakeConfig`] is the strongly typed form built with
//! [`RakeConfig::builder`]. [`RakeSettings`] is the serde form that names
//! components by string and can be loaded from TOML.

use crate::error::{RakeError, Result};
use crate::modifier::{modifier_by_name, Modifier};
use crate::sorter::{sorter_by_name, Order, ScoreSorter, Sorter};
use crate::stoplist::{SmartStoplist, Stoplist};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Configuration for a [`crate::Rake`] extractor
#[derive(Debug, Clone)]
pub struct RakeConfig {
    pub(crate) stoplist: Arc<dyn Stoplist>,
    pub(crate) exclude: Vec<String>,
    pub(crate) include: Vec<String>,
    pub(crate) modifiers: Vec<Arc<dyn Modifier>>,
    pub(crate) sorter: Arc<dyn Sorter>,
}

impl Default for RakeConfig {
    fn default() -> Self {
        Self {
            stoplist: Arc::new(SmartStoplist),
            exclude: Vec::new(),
            include: Vec::new(),
            modifiers: Vec::new(),
            sorter: Arc::new(ScoreSorter::default()),
        }
    }
}

impl RakeConfig {
    /// Create a builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Words excluded from the stop list
    pub fn exclude(&self) -> &[String] {
        &self.exclude
    }

    /// Words added to the stop list
    pub fn include(&self) -> &[String] {
        &self.include
    }

    /// Number of registered modifiers
    pub fn modifier_count(&self) -> usize {
        self.modifiers.len()
    }
}

/// Configuration builder
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: RakeConfig,
}

impl ConfigBuilder {
    /// Set the stop-word source
    pub fn stoplist(mut self, stoplist: impl Stoplist + 'static) -> Self {
        self.config.stoplist = Arc::new(stoplist);
        self
    }

    /// Set a shared stop-word source
    pub fn shared_stoplist(mut self, stoplist: Arc<dyn Stoplist>) -> Self {
        self.config.stoplist = stoplist;
        self
    }

    /// Words or patterns removed from the stop list
    pub fn exclude<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.exclude.extend(words.into_iter().map(Into::into));
        self
    }

    /// Words or patterns added to the stop list
    pub fn include<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.include.extend(words.into_iter().map(Into::into));
        self
    }

    /// Register a modifier
    pub fn modifier(mut self, modifier: impl Modifier + 'static) -> Self {
        self.config.modifiers.push(Arc::new(modifier));
        self
    }

    /// Register a shared modifier
    pub fn shared_modifier(mut self, modifier: Arc<dyn Modifier>) -> Self {
        self.config.modifiers.push(modifier);
        self
    }

    /// Set the sorter
    pub fn sorter(mut self, sorter: impl Sorter + 'static) -> Self {
        self.config.sorter = Arc::new(sorter);
        self
    }

    /// Set a shared sorter
    pub fn shared_sorter(mut self, sorter: Arc<dyn Sorter>) -> Self {
        self.config.sorter = sorter;
        self
    }

    /// Build the configuration
    pub fn build(self) -> RakeConfig {
        self.config
    }

    /// Build an extractor directly
    pub fn build_extractor(self) -> Result<crate::Rake> {
        crate::Rake::with_config(self.build())
    }
}

/// Sorter selection by name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SorterSettings {
    /// `"score"` or `"word"`
    #[serde(default = "default_sort_key")]
    pub by: String,
    /// Sort direction
    #[serde(default)]
    pub order: Order,
}

fn default_sort_key() -> String {
    ScoreSorter::NAME.to_string()
}

impl Default for SorterSettings {
    fn default() -> Self {
        Self {
            by: default_sort_key(),
            order: Order::Desc,
        }
    }
}

/// Serializable extractor options
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
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RakeSettings {
    /// Words or patterns removed from the stop list
    #[serde(default)]
    pub exclude: Vec<String>,
    /// Words or patterns added to the stop list
    #[serde(default)]
    pub include: Vec<String>,
    /// Built-in modifier names, in registration order
    #[serde(default)]
    pub modifiers: Vec<String>,
    /// Sorter selection
    #[serde(default)]
    pub sorter: SorterSettings,
}

impl RakeSettings {
    /// Parse settings from TOML
    ///
    /// Option shapes are checked before deserializing so that a wrongly
    /// typed option is reported by name.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let table: toml::Table = content.parse()?;

        for option in ["exclude", "include", "modifiers"] {
            if let Some(value) = table.get(option) {
                let valid = value
                    .as_array()
                    .is_some_and(|items| items.iter().all(toml::Value::is_str));
                if !valid {
                    return Err(RakeError::InvalidOption {
                        option: option.to_string(),
                        expected: "array of strings".to_string(),
                    });
                }
            }
        }

        if let Some(value) = table.get("sorter") {
            if !value.is_table() {
                return Err(RakeError::InvalidOption {
                    option: "sorter".to_string(),
                    expected: "table with `by` and `order`".to_string(),
                });
            }
        }

        let settings: RakeSettings = toml::Value::Table(table).try_into()?;
        Ok(settings)
    }

    /// Resolve component names into a configuration
    ///
    /// Uses the SMART stop list; call [`RakeSettings::into_config_with`] to
    /// supply another source.
    pub fn into_config(self) -> Result<RakeConfig> {
        self.into_config_with(Arc::new(SmartStoplist))
    }

    /// Resolve component names using the given stop-word source
    pub fn into_config_with(self, stoplist: Arc<dyn Stoplist>) -> Result<RakeConfig> {
        let modifiers = self
            .modifiers
            .iter()
            .map(|name| modifier_by_name(name))
            .collect::<Result<Vec<_>>>()?;
        let sorter = sorter_by_name(&self.sorter.by, self.sorter.order)?;

        Ok(RakeConfig {
            stoplist,
            exclude: self.exclude,
            include: self.include,
            modifiers,
            sorter,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modifier::NumericSplit;
    use crate::stoplist::WordList;

    #[test]
    fn test_builder_collects_options() {
        let config = RakeConfig::builder()
            .stoplist(WordList::new(["a", "is"]))
            .exclude(["new"])
            .include(vec!["live(s)".to_string()])
            .modifier(NumericSplit)
            .sorter(ScoreSorter::new(Order::Asc))
            .build();

        assert_eq!(config.exclude(), ["new"]);
        assert_eq!(config.include(), ["live(s)"]);
        assert_eq!(config.modifier_count(), 1);
        assert_eq!(config.stoplist.words(), vec!["a", "is"]);
    }

    #[test]
    fn test_settings_from_toml() {
        let settings = RakeSettings::from_toml_str(
            r#"
            exclude = ["new", ""]
            modifiers = ["numeric", "possession"]

            [sorter]
            by = "word"
            order = "asc"
            "#,
        )
        .unwrap();

        assert_eq!(settings.exclude, vec!["new", ""]);
        assert!(settings.include.is_empty());
        assert_eq!(settings.modifiers.len(), 2);
        assert_eq!(settings.sorter.by, "word");
        assert_eq!(settings.sorter.order, Order::Asc);
    }

    #[test]
    fn test_settings_defaults() {
        let settings = RakeSettings::from_toml_str("").unwrap();
        assert_eq!(settings, RakeSettings::default());
        assert_eq!(settings.sorter.by, "score");
        assert_eq!(settings.sorter.order, Order::Desc);
    }

    #[test]
    fn test_wrong_exclude_type() {
        let err = RakeSettings::from_toml_str(r#"exclude = "wrong""#).unwrap_err();
        assert!(err.to_string().contains("array"));
        assert!(err.to_string().contains("of type"));
    }

    #[test]
    fn test_wrong_include_element_type() {
        let err = RakeSettings::from_toml_str("include = [1, 2]").unwrap_err();
        assert!(matches!(err, RakeError::InvalidOption { ref option, .. } if option == "include"));
    }

    #[test]
    fn test_wrong_sorter_type() {
        let err = RakeSettings::from_toml_str(r#"sorter = "score""#).unwrap_err();
        assert!(matches!(err, RakeError::InvalidOption { ref option, .. } if option == "sorter"));
    }

    #[test]
    fn test_unknown_key_is_config_error() {
        let err = RakeSettings::from_toml_str("colour = true").unwrap_err();
        assert!(matches!(err, RakeError::Config(_)));
    }

    #[test]
    fn test_unknown_modifier_fails_resolution() {
        let settings = RakeSettings {
            modifiers: vec!["stemmer".to_string()],
            ..RakeSettings::default()
        };
        let err = settings.into_config().unwrap_err();
        assert_eq!(err.to_string(), "unknown modifier `stemmer`");
    }

    #[test]
    fn test_long_order_names() {
        let settings = RakeSettings::from_toml_str("[sorter]\norder = \"ascending\"").unwrap();
        assert_eq!(settings.sorter.order, Order::Asc);
        let settings = RakeSettings::from_toml_str("[sorter]\norder = \"descending\"").unwrap();
        assert_eq!(settings.sorter.order, Order::Desc);
    }

    #[test]
    fn test_invalid_order_value() {
        let err = RakeSettings::from_toml_str("[sorter]\norder = \"up\"").unwrap_err();
        assert!(matches!(err, RakeError::Config(_)));
    }
}
