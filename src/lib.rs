//! # content-query
//!
//! Translates editorial content descriptors into search engine requests.
//!
//! ## Features
//!
//! - Bool query builder with nested sub-queries
//! - Field-by-field descriptor translation with shared site scoping
//! - Conversion between stored and editor descriptor forms
//! - Callout classification from article tags

pub mod cli;
pub mod descriptor;
pub mod error;
pub mod query;

pub mod prelude {
    pub use crate::descriptor::{ContentDescriptor, QueryTranslator, RequestContext, SearchRequest};
    pub use crate::error::{ContentQueryError, Result};
    pub use crate::query::{BoolQuery, BooleanQueryBuilder, Clause, ClauseRequest, Occur};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
