//! Content descriptors and request context.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::Result;

/// Editorial criteria describing which documents to select.
///
/// Field names follow the stored component data (camelCase). Missing fields
/// default to empty and unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContentDescriptor {
    /// Selects a single document by canonical URL, bypassing everything else.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub override_url: Option<String>,
    /// Index the request targets.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elastic_index: Option<String>,

    #[serde(deserialize_with = "null_as_empty")]
    pub include_tags: Vec<String>,
    #[serde(deserialize_with = "null_as_empty")]
    pub exclude_tags: Vec<String>,
    #[serde(deserialize_with = "null_as_empty")]
    pub include_content_channels: Vec<String>,
    #[serde(deserialize_with = "null_as_empty")]
    pub exclude_content_channels: Vec<String>,
    #[serde(deserialize_with = "null_as_empty")]
    pub include_feature_types: Vec<String>,
    #[serde(deserialize_with = "null_as_empty")]
    pub exclude_feature_types: Vec<String>,
    #[serde(deserialize_with = "null_as_empty")]
    pub include_story_characteristics: Vec<String>,
    #[serde(deserialize_with = "null_as_empty")]
    pub exclude_story_characteristics: Vec<String>,
    #[serde(deserialize_with = "null_as_empty")]
    pub include_feeds: Vec<String>,
    #[serde(deserialize_with = "null_as_empty")]
    pub exclude_feeds: Vec<String>,

    #[serde(deserialize_with = "null_as_empty")]
    pub site_prefixes: Vec<String>,
    #[serde(deserialize_with = "null_as_empty")]
    pub crossposts: Vec<String>,
    #[serde(deserialize_with = "null_as_empty")]
    pub site_slugs: Vec<String>,

    /// Round-tripped by the editing layer; not used for query translation.
    #[serde(deserialize_with = "null_as_empty")]
    pub dedupe_contexts: Vec<String>,
}

impl ContentDescriptor {
    /// Create an empty descriptor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode a descriptor from a JSON value.
    ///
    /// Values of the wrong type (a string where a list is expected, a list of
    /// objects instead of strings) are reported as JSON errors.
    pub fn from_value(value: Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }

    /// Decode a descriptor from JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Set the override URL.
    pub fn with_override_url<S: Into<String>>(mut self, url: S) -> Self {
        self.override_url = Some(url.into());
        self
    }

    /// Set the target index.
    pub fn with_elastic_index<S: Into<String>>(mut self, index: S) -> Self {
        self.elastic_index = Some(index.into());
        self
    }

    /// The override URL, if set to a non-blank value.
    pub fn override_url(&self) -> Option<&str> {
        self.override_url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
    }
}

// Stored component data uses `null` for a list that was never filled in.
fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Entries of a list field that are not blank.
pub(crate) fn non_blank(values: &[String]) -> impl Iterator<Item = &str> {
    values
        .iter()
        .map(String::as_str)
        .filter(|value| !value.trim().is_empty())
}

/// The site a request is served for.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Site {
    pub slug: String,
}

/// Request-scoped data available to the translator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RequestContext {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site: Option<Site>,
}

impl RequestContext {
    /// Context with no current site.
    pub fn new() -> Self {
        Self::default()
    }

    /// Context for the given site slug.
    pub fn for_site<S: Into<String>>(slug: S) -> Self {
        RequestContext {
            site: Some(Site { slug: slug.into() }),
        }
    }

    /// The current site slug, if one is set and not blank.
    pub fn site_slug(&self) -> Option<&str> {
        self.site
            .as_ref()
            .map(|site| site.slug.as_str())
            .filter(|slug| !slug.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_descriptor_from_camel_case_json() {
        let descriptor = ContentDescriptor::from_value(json!({
            "overrideUrl": "http://foo.com",
            "includeTags": ["a", "b"],
            "excludeStoryCharacteristics": ["c"],
            "siteSlugs": ["d"],
            "elasticIndex": "published-articles"
        }))
        .unwrap();

        assert_eq!(descriptor.override_url(), Some("http://foo.com"));
        assert_eq!(descriptor.include_tags, vec!["a", "b"]);
        assert_eq!(descriptor.exclude_story_characteristics, vec!["c"]);
        assert_eq!(descriptor.site_slugs, vec!["d"]);
        assert_eq!(descriptor.elastic_index.as_deref(), Some("published-articles"));
        assert!(descriptor.crossposts.is_empty());
    }

    #[test]
    fn test_descriptor_ignores_unknown_fields() {
        let descriptor = ContentDescriptor::from_json(r#"{"size": 10, "title": "x"}"#).unwrap();
        assert_eq!(descriptor, ContentDescriptor::default());
    }

    #[test]
    fn test_descriptor_rejects_wrong_shape() {
        assert!(ContentDescriptor::from_value(json!({"includeTags": "a"})).is_err());
        assert!(ContentDescriptor::from_value(json!({"includeTags": [{"text": "a"}]})).is_err());
    }

    #[test]
    fn test_null_fields_are_absent() {
        let descriptor = ContentDescriptor::from_value(json!({
            "overrideUrl": null,
            "elasticIndex": null,
            "includeTags": null,
            "crossposts": null,
            "dedupeContexts": null,
            "excludeTags": ["a"]
        }))
        .unwrap();

        assert_eq!(descriptor.override_url(), None);
        assert!(descriptor.include_tags.is_empty());
        assert!(descriptor.crossposts.is_empty());
        assert_eq!(descriptor.exclude_tags, vec!["a"]);
        assert_eq!(descriptor, ContentDescriptor::from_value(json!({"excludeTags": ["a"]})).unwrap());
    }

    #[test]
    fn test_blank_override_url_is_ignored() {
        let descriptor = ContentDescriptor::new().with_override_url("  ");
        assert_eq!(descriptor.override_url(), None);
    }

    #[test]
    fn test_non_blank() {
        let values = vec!["a".to_string(), "".to_string(), "  ".to_string(), "b".to_string()];
        assert_eq!(non_blank(&values).collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn test_request_context() {
        let context: RequestContext = serde_json::from_value(json!({"site": {"slug": "zar"}})).unwrap();
        assert_eq!(context.site_slug(), Some("zar"));
        assert_eq!(context, RequestContext::for_site("zar"));

        assert_eq!(RequestContext::new().site_slug(), None);
        assert_eq!(RequestContext::for_site("").site_slug(), None);

        let context: RequestContext = serde_json::from_value(json!({})).unwrap();
        assert_eq!(context.site_slug(), None);
    }
}
