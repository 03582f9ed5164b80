//! Loader configuration.
//!
//! Every field has a default matching the bundled tables, so a JSON
//! configuration only needs to name what it changes:
//!
//! ```json
//! { "null_marker": "_", "files": { "finals": "endings.txt" } }
//! ```

use crate::error::LoadError;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    /// Spelling of the null morph in table sources.
    pub null_marker: char,
    /// Template text meaning "no surface form".
    pub empty_sentinel: String,
    /// Prefix used for person labels the prefix table does not list.
    pub default_prefix: String,
    /// Desinence context meaning "any other, consonant-final stem".
    pub elsewhere_context: String,
    pub files: TableFiles,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        LoaderConfig {
            null_marker: '0',
            empty_sentinel: "EMPTY".into(),
            default_prefix: "t".into(),
            elsewhere_context: "C".into(),
            files: TableFiles::default(),
        }
    }
}

impl LoaderConfig {
    pub fn from_json(text: &str) -> Result<Self, LoadError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn from_path(path: &Path) -> Result<Self, LoadError> {
        let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }
}

/// File names of the six sources inside a table directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableFiles {
    pub prefixes: String,
    pub nonpast_suffixes: String,
    pub past_suffixes: String,
    pub nonpast_patterns: String,
    pub past_patterns: String,
    pub finals: String,
}

impl Default for TableFiles {
    fn default() -> Self {
        TableFiles {
            prefixes: "prefixes".into(),
            nonpast_suffixes: "suffixes".into(),
            past_suffixes: "suffixes_prime".into(),
            nonpast_patterns: "forms".into(),
            past_patterns: "forms_prime".into(),
            finals: "finals".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn partial_json_keeps_defaults() {
        let config =
            LoaderConfig::from_json(r#"{ "null_marker": "_", "files": { "finals": "endings" } }"#)
                .unwrap();
        assert_eq!(config.null_marker, '_');
        assert_eq!(config.empty_sentinel, "EMPTY");
        assert_eq!(config.files.finals, "endings");
        assert_eq!(config.files.prefixes, "prefixes");
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        assert!(matches!(
            LoaderConfig::from_json("{ null_marker"),
            Err(LoadError::Config(_))
        ));
    }
}
