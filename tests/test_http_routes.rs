//! Full router against a mocked Solr collection: every public route, both
//! slash variants, CORS and error shaping.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use solrgate::{SolrClient, SolrConfig};
use solrgate_http::handlers::AppState;
use std::sync::Arc;
use tower::ServiceExt;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn app(base_uri: &str) -> Router {
    let config = SolrConfig::new(format!("{}/solr", base_uri), "books");
    let solr = SolrClient::new(&config).unwrap();
    solrgate_http::router(Arc::new(AppState::new(solr)))
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let resp = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = resp.status();
    let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap()
    };
    (status, json)
}

#[tokio::test]
async fn search_relays_backend_response_verbatim() {
    let server = MockServer::start().await;
    let solr_body = json!({
        "responseHeader": {"status": 0, "QTime": 2},
        "response": {"numFound": 1, "start": 0, "docs": [
            {"id": "1", "title": "Catch-22", "author": "Heller"}
        ]}
    });
    Mock::given(method("GET"))
        .and(path("/solr/books/select"))
        .and(query_param(
            "q",
            "(title:cat* OR author:cat*) AND category:fiction",
        ))
        .and(query_param("wt", "json"))
        .and(query_param("rows", "10"))
        .and(query_param("start", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(solr_body.clone()))
        .expect(2)
        .mount(&server)
        .await;

    for uri in ["/search/?q=cat&category=fiction", "/search?q=cat&category=fiction"] {
        let (status, body) = get(app(&server.uri()), uri).await;
        assert_eq!(status, StatusCode::OK, "{}", uri);
        assert_eq!(body, solr_body, "{}", uri);
    }
}

#[tokio::test]
async fn search_passes_paging_through() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("q", "*:* AND published:true"))
        .and(query_param("rows", "3"))
        .and(query_param("start", "6"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"response": {}})))
        .expect(1)
        .mount(&server)
        .await;

    let (status, _) = get(app(&server.uri()), "/search/?published=true&rows=3&start=6").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn search_backend_error_is_not_leaked() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500).set_body_string("org.apache.solr.SyntaxError"))
        .mount(&server)
        .await;

    let (status, body) = get(app(&server.uri()), "/search/?q=x").await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["message"], "Failed to fetch results from Solr");
    assert!(!body.to_string().contains("SyntaxError"));
}

#[tokio::test]
async fn search_unreachable_backend() {
    let (status, body) = get(app("http://127.0.0.1:1"), "/search/").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["message"], "Failed to fetch results from Solr");
}

#[tokio::test]
async fn suggest_returns_titles() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("q", "title:har*"))
        .and(query_param("fl", "title"))
        .and(query_param("rows", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "response": {"docs": [{"title": "Harry Potter"}, {"title": "Harvest"}]}
        })))
        .mount(&server)
        .await;

    for uri in ["/suggest/?q=har", "/suggest?q=har"] {
        let (status, body) = get(app(&server.uri()), uri).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"suggestions": ["Harry Potter", "Harvest"]}));
    }
}

#[tokio::test]
async fn suggest_empty_prefix_skips_backend() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let (status, body) = get(app(&server.uri()), "/suggest/?q=").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"suggestions": []}));
}

#[tokio::test]
async fn filters_lists_categories_and_authors() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("facet.field", "category"))
        .and(query_param("facet.limit", "-1"))
        .and(query_param("rows", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "facet_counts": {"facet_fields": {"category": ["Fiction", 12, "Drama", 3]}}
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(query_param("facet.field", "author"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let (status, body) = get(app(&server.uri()), "/filters/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"categories": ["Fiction", "Drama"], "authors": []})
    );
}

#[tokio::test]
async fn health_without_backend() {
    let (status, body) = get(app("http://127.0.0.1:1"), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["backend"], "down");
}

#[tokio::test]
async fn responses_carry_cors_headers() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"response": {"docs": []}})))
        .mount(&server)
        .await;

    let resp = app(&server.uri())
        .oneshot(
            Request::builder()
                .uri("/suggest/?q=a")
                .header(header::ORIGIN, "http://localhost:3000")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap(),
        "http://localhost:3000"
    );
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let (status, _) = get(app("http://127.0.0.1:1"), "/select").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
