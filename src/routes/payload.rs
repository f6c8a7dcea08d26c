//! Lenient request parsing and the timestamp formats responses use.
//!
//! Mock endpoints never reject a request: bodies that are missing, empty or
//! not a JSON object read as `{}` and every field falls back to a default.

use chrono::{Local, Utc};
use serde_json::{Map, Value};

/// Parse a request body as a JSON object, or an empty object if it is not one.
#[must_use]
pub fn parse_body(bytes: &[u8]) -> Value {
    match serde_json::from_slice::<Value>(bytes) {
        Ok(value @ Value::Object(_)) => value,
        Ok(_) | Err(_) => Value::Object(Map::new()),
    }
}

/// Read a field for interpolation into a string. `null` counts as missing.
#[must_use]
pub fn text_field(body: &Value, key: &str, default: &str) -> String {
    display_text(&echo_field(body, key, || Value::from(default)))
}

/// Strings as-is, anything else as its JSON text.
#[must_use]
pub fn display_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Read a field verbatim for echoing back. `null` counts as missing.
#[must_use]
pub fn echo_field(body: &Value, key: &str, default: impl FnOnce() -> Value) -> Value {
    match body.get(key) {
        None | Some(Value::Null) => default(),
        Some(value) => value.clone(),
    }
}

/// Local time as ISO-8601 with microseconds and no offset.
#[must_use]
pub fn iso_timestamp() -> String {
    Local::now().naive_local().format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
}

/// Whole seconds since the Unix epoch.
#[must_use]
pub fn unix_seconds() -> i64 {
    Utc::now().timestamp()
}
