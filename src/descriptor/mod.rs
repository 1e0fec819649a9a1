//! Content descriptors and their translation into search requests.

pub mod callout;
pub mod config;
#[allow(clippy::module_inception)]
pub mod descriptor;
pub mod edit;
pub mod translator;

pub use self::callout::{Callout, callout};
pub use self::config::{ELASTIC_FIELDS, TranslatorConfig};
pub use self::descriptor::{ContentDescriptor, RequestContext, Site};
pub use self::edit::{EditMode, LIST_FIELDS, normalize_override_url, render, save};
pub use self::translator::{
    CANONICAL_URL_FIELD, QueryTranslator, SITE_FIELD, SearchBody, SearchRequest, translate,
};
