//! Pulling JSON payloads out of free-form model replies.
//!
//! Models asked for JSON frequently wrap it in a markdown code fence. Callers
//! strip the fence, attempt a strict parse, and fall back to the raw text
//! themselves when the parse fails.

use serde_json::{Map, Value};

/// Remove a leading ```` ```json ```` / ```` ``` ```` marker and a trailing
/// ```` ``` ````, then trim surrounding whitespace.
pub fn strip_code_fence(text: &str) -> &str {
    let mut body = text.trim();

    if let Some(rest) = body.strip_prefix("```json") {
        body = rest;
    } else if let Some(rest) = body.strip_prefix("```") {
        body = rest;
    }

    if let Some(rest) = body.strip_suffix("```") {
        body = rest;
    }

    body.trim()
}

/// Strictly parse a reply as a JSON object after stripping any code fence.
///
/// Returns `None` for invalid JSON and for JSON that is not an object.
pub fn parse_json_object(text: &str) -> Option<Map<String, Value>> {
    match serde_json::from_str::<Value>(strip_code_fence(text)) {
        Ok(Value::Object(map)) => Some(map),
        _ => None,
    }
}

/// String field of a parsed reply, exactly as given.
///
/// `None` only when the key is absent or holds a non-string value.
pub fn string_field(map: &Map<String, Value>, key: &str) -> Option<String> {
    map.get(key).and_then(Value::as_str).map(str::to_string)
}
