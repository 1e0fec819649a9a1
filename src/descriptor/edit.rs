//! Conversion between stored descriptors and their editing form.
//!
//! Stored component data keeps list fields as arrays of strings. The editing
//! form wants arrays of `{"text": "..."}` objects. [`save`] converts edited
//! data back into the stored form, [`render`] does the opposite. Keys that
//! are not list fields pass through untouched.

use serde_json::{Map, Value};

/// Descriptor keys holding lists of strings.
pub const LIST_FIELDS: &[&str] = &[
    "includeTags",
    "excludeTags",
    "includeContentChannels",
    "excludeContentChannels",
    "includeFeatureTypes",
    "excludeFeatureTypes",
    "includeStoryCharacteristics",
    "excludeStoryCharacteristics",
    "includeFeeds",
    "excludeFeeds",
    "sitePrefixes",
    "crossposts",
    "siteSlugs",
    "dedupeContexts",
];

const OVERRIDE_URL_FIELD: &str = "overrideUrl";
const TEXT_KEY: &str = "text";

/// Whether the data comes from (or goes to) the editing form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EditMode {
    /// Plain stored data; list fields are left alone.
    #[default]
    View,
    /// Editing form; list fields are converted.
    Edit,
}

impl EditMode {
    pub fn from_flag(edit: bool) -> Self {
        if edit { EditMode::Edit } else { EditMode::View }
    }
}

/// Convert component data into its stored form.
///
/// In edit mode every list field becomes an array of the non-blank `text`
/// values of its items. The override URL is always normalized to `http:`.
pub fn save(mut data: Map<String, Value>, mode: EditMode) -> Map<String, Value> {
    if mode == EditMode::Edit {
        for field in LIST_FIELDS {
            if let Some(Value::Array(items)) = data.get_mut(*field) {
                let texts = items
                    .iter()
                    .filter_map(item_text)
                    .filter(|text| !text.trim().is_empty())
                    .map(|text| Value::String(text.to_string()))
                    .collect();
                *items = texts;
            }
        }
    }

    if let Some(Value::String(url)) = data.get_mut(OVERRIDE_URL_FIELD) {
        *url = normalize_override_url(url);
    }

    data
}

/// Convert stored component data into the form the editor displays.
pub fn render(mut data: Map<String, Value>, mode: EditMode) -> Map<String, Value> {
    if mode == EditMode::Edit {
        for field in LIST_FIELDS {
            if let Some(Value::Array(items)) = data.get_mut(*field) {
                for item in items.iter_mut() {
                    if let Value::String(text) = item {
                        let mut object = Map::with_capacity(1);
                        object.insert(TEXT_KEY.to_string(), Value::String(std::mem::take(text)));
                        *item = Value::Object(object);
                    }
                }
            }
        }
    }
    data
}

/// Rewrite an override URL to the `http:` scheme.
///
/// `https://x` and protocol-relative `//x` both become `http://x`; anything
/// else is returned unchanged.
pub fn normalize_override_url(url: &str) -> String {
    if let Some(rest) = url.strip_prefix("https://") {
        format!("http://{rest}")
    } else if url.starts_with("//") {
        format!("http:{url}")
    } else {
        url.to_string()
    }
}

// Editor items are `{"text": "..."}`; bare strings are accepted as-is.
fn item_text(item: &Value) -> Option<&str> {
    match item {
        Value::Object(object) => object.get(TEXT_KEY).and_then(Value::as_str),
        Value::String(text) => Some(text),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("Expected JSON object"),
        }
    }

    #[test]
    fn test_save_edit_mode_flattens_lists() {
        let data = object(json!({
            "includeTags": [{"text": "a"}, {"text": ""}, {"text": "b"}],
            "crossposts": [{"text": "k"}],
            "size": 5
        }));

        let saved = save(data, EditMode::Edit);
        assert_eq!(saved["includeTags"], json!(["a", "b"]));
        assert_eq!(saved["crossposts"], json!(["k"]));
        assert_eq!(saved["size"], json!(5));
    }

    #[test]
    fn test_save_view_mode_keeps_lists() {
        let data = object(json!({"includeTags": [{"text": "a"}]}));
        let saved = save(data, EditMode::View);
        assert_eq!(saved["includeTags"], json!([{"text": "a"}]));
    }

    #[test]
    fn test_save_normalizes_override_url() {
        let saved = save(object(json!({"overrideUrl": "https://foo.com"})), EditMode::View);
        assert_eq!(saved["overrideUrl"], json!("http://foo.com"));
    }

    #[test]
    fn test_render_edit_mode_wraps_lists() {
        let data = object(json!({"excludeTags": ["c"], "title": "x"}));
        let rendered = render(data, EditMode::Edit);
        assert_eq!(rendered["excludeTags"], json!([{"text": "c"}]));
        assert_eq!(rendered["title"], json!("x"));
    }

    #[test]
    fn test_normalize_override_url() {
        assert_eq!(normalize_override_url("https://foo.com"), "http://foo.com");
        assert_eq!(normalize_override_url("//foo.com"), "http://foo.com");
        assert_eq!(normalize_override_url("http://foo.com"), "http://foo.com");
        assert_eq!(normalize_override_url(""), "");
    }

    #[test]
    fn test_edit_mode_from_flag() {
        assert_eq!(EditMode::from_flag(true), EditMode::Edit);
        assert_eq!(EditMode::from_flag(false), EditMode::View);
    }
}
