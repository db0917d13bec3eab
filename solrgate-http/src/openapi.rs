use utoipa::OpenApi;

use crate::dto::{FiltersResponse, HealthResponse, SuggestResponse};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Solr Search API",
        description = "Query building and result relay in front of a Solr collection"
    ),
    paths(
        crate::handlers::search::search,
        crate::handlers::suggest::suggest,
        crate::handlers::filters::get_filters,
        crate::handlers::health::health,
    ),
    components(schemas(SuggestResponse, FiltersResponse, HealthResponse)),
    tags(
        (name = "search", description = "Search, autocomplete and filter listing"),
        (name = "health", description = "Liveness and backend reachability")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_every_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();
        for expected in ["/search/", "/suggest/", "/filters/", "/health"] {
            assert!(
                paths.iter().any(|p| p.as_str() == expected),
                "missing {} in {:?}",
                expected,
                paths
            );
        }
    }
}
