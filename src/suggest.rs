use serde_json::Value;

use crate::types::Field;

/// Titles of the documents in a suggestion `/select` response, in order.
///
/// Documents without a title are skipped; a multi-valued title contributes
/// its first value.
pub fn suggestions_from_response(response: &Value) -> Vec<String> {
    let docs = match response
        .get("response")
        .and_then(|r| r.get("docs"))
        .and_then(Value::as_array)
    {
        Some(docs) => docs,
        None => return Vec::new(),
    };

    docs.iter()
        .filter_map(|doc| doc.get(Field::Title.as_str()))
        .filter_map(|title| match title {
            Value::String(s) => Some(s.clone()),
            Value::Array(values) => values.first().and_then(Value::as_str).map(str::to_string),
            _ => None,
        })
        .collect()
}
