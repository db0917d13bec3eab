//! Query construction for the backing Solr collection.
//!
//! User text reaches a query only through [`Clause`] constructors, which
//! escape it. Every function here is pure.

pub mod builder;
pub mod clause;
pub mod escape;

pub use builder::{
    build_facet_query, build_search_query, build_search_select, build_suggest_query,
    build_suggest_query_with_rows, SelectQuery, Suggest, DEFAULT_SUGGEST_ROWS,
};
pub use clause::{Clause, QueryExpression};
pub use escape::{escape_phrase, escape_term, EscapedPhrase, EscapedTerm};
