use axum::{extract::State, Json};
use solrgate::Field;
use std::sync::Arc;

use super::AppState;
use crate::dto::FiltersResponse;

/// Distinct categories and authors available for filtering
#[utoipa::path(
    get,
    path = "/filters/",
    tag = "search",
    responses(
        (status = 200, description = "Filter options", body = FiltersResponse)
    )
)]
pub async fn get_filters(State(state): State<Arc<AppState>>) -> Json<FiltersResponse> {
    let category = Field::Category.as_str();
    let author = Field::Author.as_str();
    let mut facets = state.solr.facets(&[category, author]).await;

    Json(FiltersResponse {
        categories: facets.shift_remove(category).unwrap_or_default(),
        authors: facets.shift_remove(author).unwrap_or_default(),
    })
}
