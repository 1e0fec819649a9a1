//! Boolean query builder for search engine bool query documents.
//!
//! A [`BooleanQueryBuilder`] accumulates clauses into the four occurrence
//! buckets of a bool query (`must`, `filter`, `should`, `must_not`) and
//! serializes them into a [`BoolQuery`], whose JSON form is the engine's
//! native bool query body.

use std::fmt;
use std::str::FromStr;

use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{ContentQueryError, Result};

/// Predicate kind used for nested boolean sub-queries.
pub const BOOL_KIND: &str = "bool";

/// Predicate kind for exact term equality.
pub const TERM_KIND: &str = "term";

/// Predicate kind for prefix matching.
pub const PREFIX_KIND: &str = "prefix";

/// Number of `should` clauses that must match once any are present.
pub const MINIMUM_SHOULD_MATCH: u32 = 1;

/// Occurrence requirements for boolean clauses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Occur {
    /// The clause must match and contributes to scoring.
    Must,
    /// The clause must match but does not contribute to scoring.
    Filter,
    /// The clause should match (equivalent to OR).
    Should,
    /// The clause must not match (equivalent to NOT).
    MustNot,
}

impl Occur {
    /// All occurrences, in serialization order.
    pub const ALL: [Occur; 4] = [Occur::Must, Occur::Filter, Occur::Should, Occur::MustNot];

    /// The key this occurrence uses in a bool query document.
    pub fn as_str(&self) -> &'static str {
        match self {
            Occur::Must => "must",
            Occur::Filter => "filter",
            Occur::Should => "should",
            Occur::MustNot => "must_not",
        }
    }
}

impl fmt::Display for Occur {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Occur {
    type Err = ContentQueryError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "must" => Ok(Occur::Must),
            "filter" => Ok(Occur::Filter),
            "should" => Ok(Occur::Should),
            "must_not" => Ok(Occur::MustNot),
            other => Err(ContentQueryError::invalid_argument(format!(
                "unknown occurrence '{other}'"
            ))),
        }
    }
}

/// A single clause in a bool query.
///
/// Serializes as a one-key object: `{"<kind>": <body>}` for leaf predicates
/// and `{"bool": {...}}` for nested sub-queries.
#[derive(Debug, Clone, PartialEq)]
pub enum Clause {
    /// A leaf predicate such as `term` or `prefix`.
    Leaf {
        /// The predicate kind, passed through verbatim.
        kind: String,
        /// The predicate body.
        body: Value,
    },
    /// A nested boolean sub-query.
    Bool(BoolQuery),
}

impl Clause {
    /// Create a leaf clause from a predicate kind and a fully formed body.
    pub fn leaf<K: Into<String>>(kind: K, body: Value) -> Self {
        Clause::Leaf {
            kind: kind.into(),
            body,
        }
    }

    /// Get the predicate kind of this clause.
    pub fn kind(&self) -> &str {
        match self {
            Clause::Leaf { kind, .. } => kind,
            Clause::Bool(_) => BOOL_KIND,
        }
    }

    /// Convert this clause into a JSON value.
    pub fn to_value(&self) -> Value {
        let body = match self {
            Clause::Leaf { body, .. } => body.clone(),
            Clause::Bool(query) => query.to_value(),
        };
        let mut object = Map::with_capacity(1);
        object.insert(self.kind().to_string(), body);
        Value::Object(object)
    }
}

impl Serialize for Clause {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        match self {
            Clause::Leaf { kind, body } => map.serialize_entry(kind, body)?,
            Clause::Bool(query) => map.serialize_entry(BOOL_KIND, query)?,
        }
        map.end()
    }
}

/// A serialized bool query: one ordered clause list per occurrence.
///
/// Empty buckets are omitted from the JSON form, and `minimum_should_match`
/// is only present alongside a non-empty `should` bucket.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BoolQuery {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub must: Vec<Clause>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub filter: Vec<Clause>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub should: Vec<Clause>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub must_not: Vec<Clause>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_should_match: Option<u32>,
}

impl BoolQuery {
    /// Get the clauses of one occurrence bucket.
    pub fn clauses(&self, occur: Occur) -> &[Clause] {
        match occur {
            Occur::Must => &self.must,
            Occur::Filter => &self.filter,
            Occur::Should => &self.should,
            Occur::MustNot => &self.must_not,
        }
    }

    fn clauses_mut(&mut self, occur: Occur) -> &mut Vec<Clause> {
        match occur {
            Occur::Must => &mut self.must,
            Occur::Filter => &mut self.filter,
            Occur::Should => &mut self.should,
            Occur::MustNot => &mut self.must_not,
        }
    }

    /// Total number of clauses across all buckets.
    pub fn len(&self) -> usize {
        Occur::ALL.iter().map(|occur| self.clauses(*occur).len()).sum()
    }

    /// Check if no clause has been added.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Convert this query into a JSON value.
    pub fn to_value(&self) -> Value {
        let mut object = Map::new();
        for occur in Occur::ALL {
            let clauses = self.clauses(occur);
            if !clauses.is_empty() {
                object.insert(
                    occur.as_str().to_string(),
                    Value::Array(clauses.iter().map(Clause::to_value).collect()),
                );
            }
        }
        if let Some(minimum) = self.minimum_should_match {
            object.insert("minimum_should_match".to_string(), Value::from(minimum));
        }
        Value::Object(object)
    }
}

/// A request to add one clause, resolved by [`BooleanQueryBuilder::add_clause`].
pub enum ClauseRequest<'a> {
    /// `{kind: {field: value}}`.
    LeafField {
        kind: String,
        field: String,
        value: Value,
    },
    /// `{kind: body}` where the body is already fully formed.
    LeafRaw { kind: String, body: Value },
    /// A nested bool query populated by the callback on a fresh builder.
    NestedBool(Box<dyn FnOnce(&mut BooleanQueryBuilder) + 'a>),
}

impl<'a> ClauseRequest<'a> {
    /// Leaf predicate over a single field.
    pub fn leaf_field<K, F, V>(kind: K, field: F, value: V) -> Self
    where
        K: Into<String>,
        F: Into<String>,
        V: Into<Value>,
    {
        ClauseRequest::LeafField {
            kind: kind.into(),
            field: field.into(),
            value: value.into(),
        }
    }

    /// Leaf predicate with a caller-supplied body.
    pub fn leaf_raw<K: Into<String>>(kind: K, body: Value) -> Self {
        ClauseRequest::LeafRaw {
            kind: kind.into(),
            body,
        }
    }

    /// Nested bool sub-query.
    ///
    /// The builder handed to `populate` only lives for the duration of the
    /// call; it is serialized into the outer bucket right afterwards.
    pub fn nested_bool<F>(populate: F) -> Self
    where
        F: FnOnce(&mut BooleanQueryBuilder) + 'a,
    {
        ClauseRequest::NestedBool(Box::new(populate))
    }

    /// `{"term": {field: value}}`.
    pub fn term<F: Into<String>, V: Into<Value>>(field: F, value: V) -> Self {
        Self::leaf_field(TERM_KIND, field, value)
    }

    /// `{"prefix": {field: value}}`.
    pub fn prefix<F: Into<String>, V: Into<Value>>(field: F, value: V) -> Self {
        Self::leaf_field(PREFIX_KIND, field, value)
    }
}

impl fmt::Debug for ClauseRequest<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClauseRequest::LeafField { kind, field, value } => f
                .debug_struct("LeafField")
                .field("kind", kind)
                .field("field", field)
                .field("value", value)
                .finish(),
            ClauseRequest::LeafRaw { kind, body } => f
                .debug_struct("LeafRaw")
                .field("kind", kind)
                .field("body", body)
                .finish(),
            ClauseRequest::NestedBool(_) => f.write_str("NestedBool(..)"),
        }
    }
}

/// Builder for creating bool query documents.
///
/// A non-empty `should` bucket always carries [`MINIMUM_SHOULD_MATCH`].
#[derive(Debug, Clone, Default)]
pub struct BooleanQueryBuilder {
    query: BoolQuery,
}

impl BooleanQueryBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        BooleanQueryBuilder {
            query: BoolQuery::default(),
        }
    }

    /// Add a clause to the given occurrence bucket.
    ///
    /// Clauses are appended in call order. Predicate kinds and field names
    /// are not validated.
    pub fn add_clause(&mut self, occur: Occur, request: ClauseRequest<'_>) -> &mut Self {
        let clause = match request {
            ClauseRequest::LeafField { kind, field, value } => {
                let mut body = Map::with_capacity(1);
                body.insert(field, value);
                Clause::Leaf {
                    kind,
                    body: Value::Object(body),
                }
            }
            ClauseRequest::LeafRaw { kind, body } => Clause::Leaf { kind, body },
            ClauseRequest::NestedBool(populate) => {
                let mut nested = BooleanQueryBuilder::new();
                populate(&mut nested);
                Clause::Bool(nested.into_query())
            }
        };

        self.query.clauses_mut(occur).push(clause);
        if occur == Occur::Should {
            self.query.minimum_should_match = Some(MINIMUM_SHOULD_MATCH);
        }
        self
    }

    /// Add a term clause.
    pub fn add_term<F: Into<String>, V: Into<Value>>(
        &mut self,
        occur: Occur,
        field: F,
        value: V,
    ) -> &mut Self {
        self.add_clause(occur, ClauseRequest::term(field, value))
    }

    /// Get the clauses of one occurrence bucket.
    pub fn clauses(&self, occur: Occur) -> &[Clause] {
        self.query.clauses(occur)
    }

    /// Check if no clause has been added.
    pub fn is_empty(&self) -> bool {
        self.query.is_empty()
    }

    /// Total number of clauses across all buckets.
    pub fn len(&self) -> usize {
        self.query.len()
    }

    /// Build the bool query. Calling this repeatedly yields equal results.
    pub fn build(&self) -> BoolQuery {
        self.query.clone()
    }

    /// Consume the builder and return the bool query.
    pub fn into_query(self) -> BoolQuery {
        self.query
    }
}
