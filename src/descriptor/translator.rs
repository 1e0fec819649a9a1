//! Translation of content descriptors into search requests.

use log::{debug, trace};
use serde::Serialize;

use crate::descriptor::config::TranslatorConfig;
use crate::descriptor::descriptor::{ContentDescriptor, RequestContext, non_blank};
use crate::query::{BooleanQueryBuilder, Clause, ClauseRequest, Occur, TERM_KIND};

/// Field holding a document's canonical URL.
pub const CANONICAL_URL_FIELD: &str = "canonicalUrl";

/// Field holding a document's site slug.
pub const SITE_FIELD: &str = "site";

/// How the values of one descriptor field combine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Grouping {
    /// One `filter` clause wrapping a nested `should` over all values.
    AnyOf,
    /// One `filter` clause per value.
    AllOf,
    /// One `must_not` clause per value.
    NoneOf,
    /// Appended to the root `should` bucket shared by all site scoping fields.
    SiteScope,
}

/// The predicate built for each value.
#[derive(Debug, Clone, Copy)]
enum Target {
    /// `term: {<field>: value}`
    Term(&'static str),
    /// `term: {"<object>.<value>": true}`
    Flag(&'static str),
    /// `prefix: {<field>: value}`
    Prefix(&'static str),
}

impl Target {
    fn clause(self, value: &str) -> ClauseRequest<'static> {
        match self {
            Target::Term(field) => ClauseRequest::term(field, value),
            Target::Flag(object) => ClauseRequest::term(format!("{object}.{value}"), true),
            Target::Prefix(field) => ClauseRequest::prefix(field, value),
        }
    }
}

struct FieldRule {
    name: &'static str,
    values: fn(&ContentDescriptor) -> &[String],
    grouping: Grouping,
    target: Target,
}

const FIELD_RULES: &[FieldRule] = &[
    FieldRule {
        name: "includeTags",
        values: |d| d.include_tags.as_slice(),
        grouping: Grouping::AnyOf,
        target: Target::Term("tags"),
    },
    FieldRule {
        name: "excludeTags",
        values: |d| d.exclude_tags.as_slice(),
        grouping: Grouping::NoneOf,
        target: Target::Term("tags"),
    },
    FieldRule {
        name: "includeContentChannels",
        values: |d| d.include_content_channels.as_slice(),
        grouping: Grouping::AnyOf,
        target: Target::Term("contentChannel"),
    },
    FieldRule {
        name: "excludeContentChannels",
        values: |d| d.exclude_content_channels.as_slice(),
        grouping: Grouping::NoneOf,
        target: Target::Term("contentChannel"),
    },
    FieldRule {
        name: "includeFeatureTypes",
        values: |d| d.include_feature_types.as_slice(),
        grouping: Grouping::AnyOf,
        target: Target::Flag("featureTypes"),
    },
    FieldRule {
        name: "excludeFeatureTypes",
        values: |d| d.exclude_feature_types.as_slice(),
        grouping: Grouping::NoneOf,
        target: Target::Flag("featureTypes"),
    },
    FieldRule {
        name: "includeStoryCharacteristics",
        values: |d| d.include_story_characteristics.as_slice(),
        grouping: Grouping::AllOf,
        target: Target::Flag("storyCharacteristics"),
    },
    FieldRule {
        name: "excludeStoryCharacteristics",
        values: |d| d.exclude_story_characteristics.as_slice(),
        grouping: Grouping::NoneOf,
        target: Target::Flag("storyCharacteristics"),
    },
    FieldRule {
        name: "includeFeeds",
        values: |d| d.include_feeds.as_slice(),
        grouping: Grouping::AllOf,
        target: Target::Flag("feeds"),
    },
    FieldRule {
        name: "excludeFeeds",
        values: |d| d.exclude_feeds.as_slice(),
        grouping: Grouping::NoneOf,
        target: Target::Flag("feeds"),
    },
    FieldRule {
        name: "sitePrefixes",
        values: |d| d.site_prefixes.as_slice(),
        grouping: Grouping::SiteScope,
        target: Target::Prefix(CANONICAL_URL_FIELD),
    },
    FieldRule {
        name: "crossposts",
        values: |d| d.crossposts.as_slice(),
        grouping: Grouping::SiteScope,
        target: Target::Flag("crosspost"),
    },
    FieldRule {
        name: "siteSlugs",
        values: |d| d.site_slugs.as_slice(),
        grouping: Grouping::SiteScope,
        target: Target::Term(SITE_FIELD),
    },
];

/// Body of a search request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchBody {
    pub query: Clause,
    #[serde(rename = "_source")]
    pub source: Vec<String>,
}

/// A search request ready to hand to the search client.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<String>,
    pub body: SearchBody,
}

/// Translates content descriptors into search requests.
#[derive(Debug, Clone, Default)]
pub struct QueryTranslator {
    config: TranslatorConfig,
}

impl QueryTranslator {
    /// Create a translator with the given configuration.
    pub fn new(config: TranslatorConfig) -> Self {
        QueryTranslator { config }
    }

    /// Get the configuration.
    pub fn config(&self) -> &TranslatorConfig {
        &self.config
    }

    /// Translate a descriptor into a complete search request.
    pub fn translate(
        &self,
        descriptor: &ContentDescriptor,
        context: &RequestContext,
    ) -> SearchRequest {
        let index = descriptor
            .elastic_index
            .clone()
            .or_else(|| self.config.default_index.clone());

        SearchRequest {
            index,
            body: SearchBody {
                query: self.build_query(descriptor, context),
                source: self.config.source_fields.clone(),
            },
        }
    }

    /// Build only the query part of the request.
    ///
    /// An override URL yields a bare term clause on the canonical URL and
    /// every other field is ignored. Otherwise the result is a bool query,
    /// empty when the descriptor selects nothing.
    pub fn build_query(&self, descriptor: &ContentDescriptor, context: &RequestContext) -> Clause {
        if let Some(url) = descriptor.override_url() {
            debug!("override url {url} replaces all other content descriptors");
            return Clause::leaf(TERM_KIND, serde_json::json!({ CANONICAL_URL_FIELD: url }));
        }

        let mut builder = BooleanQueryBuilder::new();

        for rule in FIELD_RULES {
            let values: Vec<&str> = non_blank((rule.values)(descriptor)).collect();
            if values.is_empty() {
                continue;
            }
            trace!("{}: {} value(s)", rule.name, values.len());
            apply_rule(&mut builder, rule, &values);
        }

        if let Some(slug) = context.site_slug() {
            trace!("scoping to current site {slug}");
            builder.add_term(Occur::Should, SITE_FIELD, slug);
        }

        let query = builder.into_query();
        debug!("built bool query with {} clause(s)", query.len());
        Clause::Bool(query)
    }
}

fn apply_rule(builder: &mut BooleanQueryBuilder, rule: &FieldRule, values: &[&str]) {
    let target = rule.target;
    match rule.grouping {
        Grouping::AnyOf => {
            builder.add_clause(
                Occur::Filter,
                ClauseRequest::nested_bool(|group| {
                    for value in values {
                        group.add_clause(Occur::Should, target.clause(value));
                    }
                }),
            );
        }
        Grouping::AllOf => {
            for value in values {
                builder.add_clause(Occur::Filter, target.clause(value));
            }
        }
        Grouping::NoneOf => {
            for value in values {
                builder.add_clause(Occur::MustNot, target.clause(value));
            }
        }
        Grouping::SiteScope => {
            for value in values {
                builder.add_clause(Occur::Should, target.clause(value));
            }
        }
    }
}

/// Translate with the default configuration.
pub fn translate(descriptor: &ContentDescriptor, context: &RequestContext) -> SearchRequest {
    QueryTranslator::default().translate(descriptor, context)
}
