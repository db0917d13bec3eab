//! Typed query building and result relay in front of a faceted Solr collection.
//!
//! ```
//! use solrgate::{build_search_query, SearchRequest};
//!
//! let req = SearchRequest::default()
//!     .with_free_text("cat")
//!     .with_category("fiction");
//! assert_eq!(
//!     build_search_query(&req).to_string(),
//!     "(title:cat* OR author:cat*) AND category:fiction"
//! );
//! ```

pub mod config;
pub mod error;
pub mod facets;
pub mod query;
pub mod solr;
pub mod suggest;
pub mod types;

pub use config::SolrConfig;
pub use error::{Result, SolrgateError};
pub use facets::{extract_facet_values, facet_values_from_response};
pub use query::{
    build_facet_query, build_search_query, build_search_select, build_suggest_query, Clause,
    QueryExpression, SelectQuery, Suggest,
};
pub use solr::SolrClient;
pub use suggest::suggestions_from_response;
pub use types::{FacetResult, Field, SearchRequest, SuggestRequest};
