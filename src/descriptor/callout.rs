//! Callout labels derived from an article's tags.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Label shown next to an article teaser.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Callout {
    Video,
    Gallery,
    #[default]
    #[serde(rename = "")]
    None,
}

impl Callout {
    pub fn as_str(&self) -> &'static str {
        match self {
            Callout::Video => "video",
            Callout::Gallery => "gallery",
            Callout::None => "",
        }
    }
}

impl fmt::Display for Callout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a tag list. Video wins over gallery.
pub fn callout<S: AsRef<str>>(tags: Option<&[S]>) -> Callout {
    let tags = tags.unwrap_or_default();
    let has = |wanted: &str| tags.iter().any(|tag| tag.as_ref() == wanted);

    if has("video") || has("original video") {
        Callout::Video
    } else if has("gallery") {
        Callout::Gallery
    } else {
        Callout::None
    }
}
