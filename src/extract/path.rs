//! Fixed-path traversal over JSON responses

use crate::error::{Error, Result};
use serde_json::Value;

/// Walk object keys from `value`, returning `None` on the first missing
/// key or non-object step
pub fn lookup<'a>(value: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let mut current = value;
    for part in path {
        match current {
            Value::Object(map) => {
                current = map.get(*part)?;
            }
            _ => return None,
        }
    }
    Some(current)
}

/// Read a string at `path`. Anything other than a JSON string is `None`.
pub fn string_at(value: &Value, path: &[&str]) -> Option<String> {
    match lookup(value, path)? {
        Value::String(s) => Some(s.clone()),
        _ => None,
    }
}

/// Resolve the array at `path` or fail with a malformed body error
pub fn require_array<'a>(value: &'a Value, path: &[&str]) -> Result<&'a Vec<Value>> {
    match lookup(value, path) {
        Some(Value::Array(items)) => Ok(items),
        Some(other) => Err(Error::malformed(
            path.join("."),
            format!("expected an array, found {}", kind_of(other)),
        )),
        None => Err(Error::malformed(path.join("."), "container is missing")),
    }
}

/// Read a scalar field from a record entry.
///
/// Strings pass through and numbers are rendered as text; anything else,
/// including absence, is malformed.
pub fn scalar_field(entry: &Value, field: &str, context: &str) -> Result<String> {
    match entry.get(field) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(Value::Number(n)) => Ok(n.to_string()),
        Some(other) => Err(Error::malformed(
            format!("{context}.{field}"),
            format!("expected a string, found {}", kind_of(other)),
        )),
        None => Err(Error::malformed(
            format!("{context}.{field}"),
            "field is missing",
        )),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
