use serde_json::Value;

/// Keep the values of a flat `[value, count, value, count, ...]` facet list,
/// in order, dropping the counts.
pub fn extract_facet_values(flat: &[Value]) -> Vec<String> {
    flat.iter().step_by(2).map(value_to_string).collect()
}

/// Facet values for `field` from a raw `/select` response. A response without
/// a `facet_counts.facet_fields.<field>` list yields no values.
pub fn facet_values_from_response(response: &Value, field: &str) -> Vec<String> {
    response
        .get("facet_counts")
        .and_then(|fc| fc.get("facet_fields"))
        .and_then(|ff| ff.get(field))
        .and_then(Value::as_array)
        .map(|flat| extract_facet_values(flat))
        .unwrap_or_default()
}

fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
