//! Boolean query construction.

pub mod boolean;

pub use self::boolean::{
    BOOL_KIND, BoolQuery, BooleanQueryBuilder, Clause, ClauseRequest, MINIMUM_SHOULD_MATCH,
    Occur, PREFIX_KIND, TERM_KIND,
};
