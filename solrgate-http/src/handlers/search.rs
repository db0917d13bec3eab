use axum::{
    extract::{Query, State},
    Json,
};
use solrgate::{SearchRequest, SolrgateError};
use std::sync::Arc;

use super::AppState;
use crate::dto::SearchParams;

/// Search the collection and relay Solr's JSON response as-is
#[utoipa::path(
    get,
    path = "/search/",
    tag = "search",
    params(
        ("q" = Option<String>, Query, description = "Free text, prefix-matched on title and author"),
        ("category" = Option<String>, Query, description = "Filter by category"),
        ("author" = Option<String>, Query, description = "Filter by author (exact phrase)"),
        ("published" = Option<bool>, Query, description = "Filter by published status"),
        ("rows" = Option<i64>, Query, description = "Number of results to return (default 10)"),
        ("start" = Option<i64>, Query, description = "Starting index (default 0)")
    ),
    responses(
        (status = 200, description = "Raw Solr select response", body = serde_json::Value),
        (status = 502, description = "Search backend returned an error"),
        (status = 503, description = "Search backend unreachable")
    )
)]
pub async fn search(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Result<Json<serde_json::Value>, SolrgateError> {
    let req = SearchRequest::from(params);
    match state.solr.search(&req).await {
        Ok(body) => Ok(Json(body)),
        Err(e) => {
            if e.is_backend_failure() {
                tracing::warn!(error = %e, "search failed");
            }
            Err(e)
        }
    }
}
