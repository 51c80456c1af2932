use serde_json::{Map, Value};

/// Parses a request body as JSON, treating an empty body as `{}`.
///
/// Returns `None` when the bytes are not valid JSON; callers pick the message.
#[must_use]
pub fn json_or_empty(body: &[u8]) -> Option<Value> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Some(Value::Object(Map::new()));
    }
    serde_json::from_slice(body).ok()
}
