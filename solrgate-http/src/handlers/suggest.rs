use axum::{
    extract::{Query, State},
    Json,
};
use solrgate::SuggestRequest;
use std::sync::Arc;

use super::AppState;
use crate::dto::{SuggestParams, SuggestResponse};

/// Title autocomplete. Backend failures degrade to an empty list.
#[utoipa::path(
    get,
    path = "/suggest/",
    tag = "search",
    params(
        ("q" = String, Query, description = "Autocomplete prefix")
    ),
    responses(
        (status = 200, description = "Matching titles", body = SuggestResponse),
        (status = 400, description = "Missing q parameter")
    )
)]
pub async fn suggest(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SuggestParams>,
) -> Json<SuggestResponse> {
    let req = SuggestRequest::from(params);
    let suggestions = match state.solr.suggest(&req.prefix).await {
        Ok(titles) => titles,
        Err(e) => {
            tracing::warn!(prefix = %req.prefix, error = %e, "suggest failed");
            Vec::new()
        }
    };
    Json(SuggestResponse { suggestions })
}
