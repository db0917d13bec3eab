use serde::{Deserialize, Serialize};
use solrgate::types::{SearchRequest, SuggestRequest, DEFAULT_ROWS};
use utoipa::ToSchema;

fn default_rows() -> i64 {
    DEFAULT_ROWS
}

/// Query string of `GET /search/`.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct SearchParams {
    /// Free text, prefix-matched against title and author.
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub published: Option<bool>,
    #[serde(default = "default_rows")]
    pub rows: i64,
    #[serde(default)]
    pub start: i64,
}

impl From<SearchParams> for SearchRequest {
    fn from(params: SearchParams) -> Self {
        SearchRequest {
            free_text: params.q,
            category: params.category,
            author: params.author,
            published: params.published,
            rows: params.rows,
            start: params.start,
        }
    }
}

/// Query string of `GET /suggest/`.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct SuggestParams {
    /// Autocomplete prefix.
    pub q: String,
}

impl From<SuggestParams> for SuggestRequest {
    fn from(params: SuggestParams) -> Self {
        SuggestRequest { prefix: params.q }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SuggestResponse {
    pub suggestions: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct FiltersResponse {
    pub categories: Vec<String>,
    pub authors: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    /// `up` when the collection answers its ping handler, `down` otherwise.
    pub backend: String,
    pub uptime_secs: u64,
    pub version: String,
}
