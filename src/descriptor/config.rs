//! Configuration for descriptor translation.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ContentQueryError, Result};

/// Document fields callers are allowed to retrieve.
pub const ELASTIC_FIELDS: &[&str] = &[
    "canonicalUrl",
    "pageUri",
    "site",
    "date",
    "primaryHeadline",
    "plaintextPrimaryHeadline",
    "shortHeadline",
    "plaintextShortHeadline",
    "teaser",
    "plaintextTeaser",
    "feedImgUrl",
    "tags",
    "authors",
    "rubric",
    "contentChannel",
    "featureTypes",
];

/// Configuration for [`QueryTranslator`](super::QueryTranslator).
///
/// The `should` threshold is not configurable; see
/// [`MINIMUM_SHOULD_MATCH`](crate::query::MINIMUM_SHOULD_MATCH).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TranslatorConfig {
    /// Field allowlist emitted as `_source`.
    pub source_fields: Vec<String>,
    /// Index used when a descriptor does not name one.
    pub default_index: Option<String>,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            source_fields: ELASTIC_FIELDS.iter().map(|field| field.to_string()).collect(),
            default_index: None,
        }
    }
}

impl TranslatorConfig {
    /// Load a configuration from a JSON file.
    ///
    /// Missing keys take defaults; unknown keys are rejected.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let config: TranslatorConfig = serde_json::from_str(&content).map_err(|e| {
            ContentQueryError::config(format!("{}: {e}", path.display()))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check the configuration for values the translator cannot use.
    pub fn validate(&self) -> Result<()> {
        if self.source_fields.iter().any(|field| field.trim().is_empty()) {
            return Err(ContentQueryError::config("source_fields contains a blank field"));
        }
        Ok(())
    }

    /// Set the `_source` allowlist.
    pub fn with_source_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.source_fields = fields.into_iter().map(Into::into).collect();
        self
    }

    /// Set the fallback index.
    pub fn with_default_index<S: Into<String>>(mut self, index: S) -> Self {
        self.default_index = Some(index.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_translator_config_default() {
        let config = TranslatorConfig::default();
        assert_eq!(config.source_fields.len(), ELASTIC_FIELDS.len());
        assert_eq!(config.source_fields[0], "canonicalUrl");
        assert_eq!(config.default_index, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_from_file_partial() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"default_index": "published-articles"}}"#).unwrap();

        let config = TranslatorConfig::from_file(file.path()).unwrap();
        assert_eq!(config.default_index.as_deref(), Some("published-articles"));
        assert_eq!(config.source_fields, TranslatorConfig::default().source_fields);
    }

    #[test]
    fn test_config_from_file_invalid() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"source_fields": ["canonicalUrl", " "]}}"#).unwrap();
        assert!(matches!(
            TranslatorConfig::from_file(file.path()),
            Err(ContentQueryError::Config(_))
        ));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(matches!(
            TranslatorConfig::from_file(file.path()),
            Err(ContentQueryError::Config(_))
        ));
    }

    #[test]
    fn test_config_rejects_should_threshold() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"minimum_should_match": 3}}"#).unwrap();

        let result = TranslatorConfig::from_file(file.path());
        match result {
            Err(ContentQueryError::Config(msg)) => assert!(msg.contains("minimum_should_match")),
            other => panic!("Expected config error, got {other:?}"),
        }
    }

    #[test]
    fn test_config_missing_file() {
        let result = TranslatorConfig::from_file("/nonexistent/content-query.json");
        assert!(matches!(result, Err(ContentQueryError::Io(_))));
    }
}
