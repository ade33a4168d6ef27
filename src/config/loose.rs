//! Helpers for loosely typed configuration JSON.
//!
//! Host editors store every parameter as a string: numbers arrive as `"12"`,
//! booleans as `"true"`, and nested structs or lists as JSON encoded inside
//! a string. These helpers accept both the loose and the plain JSON forms.
//!
//! Lookups return `None` for missing, `null` or blank values so callers can
//! substitute their default, and `Some(Err(raw))` when a value is present
//! but cannot be read.

use serde::{Deserialize, Deserializer, de};
use serde_json::{Map, Value};

/// Decode a string holding JSON, leaving other values untouched.
#[must_use]
pub fn decode_nested(value: &Value) -> Value {
    match value {
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.starts_with('{') || trimmed.starts_with('[') {
                serde_json::from_str(trimmed).unwrap_or_else(|_| value.clone())
            } else {
                value.clone()
            }
        }
        other => other.clone(),
    }
}

/// Read an object, decoding it from a string if needed.
#[must_use]
pub fn as_object(value: &Value) -> Option<Map<String, Value>> {
    match decode_nested(value) {
        Value::Object(map) => Some(map),
        _ => None,
    }
}

/// Read an array, decoding it (and nothing inside it) from a string if needed.
#[must_use]
pub fn as_array(value: &Value) -> Option<Vec<Value>> {
    match decode_nested(value) {
        Value::Array(items) => Some(items),
        _ => None,
    }
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        _ => false,
    }
}

/// Raw text of a value, for error messages.
#[must_use]
pub fn raw_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Read a number from a JSON number or numeric string.
#[must_use]
pub fn number(value: &Value) -> Option<Result<f64, String>> {
    if is_blank(value) {
        return None;
    }
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    Some(
        parsed
            .filter(|n| n.is_finite())
            .ok_or_else(|| raw_text(value)),
    )
}

/// Read a boolean from a JSON bool or `"true"` / `"false"` (any case).
#[must_use]
pub fn boolean(value: &Value) -> Option<Result<bool, String>> {
    if is_blank(value) {
        return None;
    }
    let parsed = match value {
        Value::Bool(b) => Some(*b),
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "on" => Some(true),
            "false" | "off" => Some(false),
            _ => None,
        },
        _ => None,
    };
    Some(parsed.ok_or_else(|| raw_text(value)))
}

/// Read non-blank text.
#[must_use]
pub fn text(value: &Value) -> Option<&str> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim()),
        _ => None,
    }
}

/// `deserialize_with` adapter for numbers that may arrive as strings.
pub fn de_f32<'de, D>(deserializer: D) -> Result<f32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match number(&value) {
        Some(Ok(n)) => Ok(n as f32),
        Some(Err(raw)) => Err(de::Error::custom(format!("expected a number, got {raw:?}"))),
        None => Err(de::Error::custom("expected a number, got a blank value")),
    }
}

/// `deserialize_with` adapter for booleans that may arrive as strings.
pub fn de_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match boolean(&value) {
        Some(Ok(b)) => Ok(b),
        Some(Err(raw)) => Err(de::Error::custom(format!("expected true or false, got {raw:?}"))),
        None => Err(de::Error::custom("expected true or false, got a blank value")),
    }
}
