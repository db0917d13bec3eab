//! Facet and suggestion decoding against realistic backend payloads.

use serde_json::json;
use solrgate::{extract_facet_values, facet_values_from_response, suggestions_from_response};

#[test]
fn flat_facet_list_keeps_values_in_order() {
    let flat = vec![json!("Fiction"), json!(12), json!("Drama"), json!(3)];
    assert_eq!(extract_facet_values(&flat), vec!["Fiction", "Drama"]);
}

#[test]
fn odd_length_list_keeps_trailing_value() {
    let flat = vec![json!("Fiction"), json!(12), json!("Drama")];
    assert_eq!(extract_facet_values(&flat), vec!["Fiction", "Drama"]);
}

#[test]
fn empty_facet_list() {
    assert!(extract_facet_values(&[]).is_empty());
}

#[test]
fn facet_values_from_full_response() {
    let response = json!({
        "responseHeader": {"status": 0, "QTime": 1},
        "response": {"numFound": 15, "start": 0, "docs": []},
        "facet_counts": {
            "facet_queries": {},
            "facet_fields": {
                "category": ["Fiction", 12, "Drama", 3],
                "author": ["Austen", 2]
            }
        }
    });
    assert_eq!(
        facet_values_from_response(&response, "category"),
        vec!["Fiction", "Drama"]
    );
    assert_eq!(facet_values_from_response(&response, "author"), vec!["Austen"]);
}

#[test]
fn missing_facet_field_yields_nothing() {
    let response = json!({"facet_counts": {"facet_fields": {}}});
    assert!(facet_values_from_response(&response, "category").is_empty());
    assert!(facet_values_from_response(&json!({}), "category").is_empty());
}

#[test]
fn suggestions_take_titles_in_document_order() {
    let response = json!({
        "response": {"docs": [
            {"title": "Harry Potter"},
            {"title": ["Harvest", "Harvest (2nd ed.)"]},
            {"author": "no title here"},
            {"title": "Hard Times"}
        ]}
    });
    assert_eq!(
        suggestions_from_response(&response),
        vec!["Harry Potter", "Harvest", "Hard Times"]
    );
}

#[test]
fn suggestions_from_empty_response() {
    assert!(suggestions_from_response(&json!({"response": {"docs": []}})).is_empty());
    assert!(suggestions_from_response(&json!({})).is_empty());
}
