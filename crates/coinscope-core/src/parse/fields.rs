use serde_json::{Map, Value};

use crate::ParseError;

pub(crate) type Object = Map<String, Value>;

/// Numeric field lookup where a missing key or a non-number reads as `default`.
pub fn get_number_or(obj: &Map<String, Value>, key: &str, default: f64) -> f64 {
    obj.get(key).and_then(Value::as_f64).unwrap_or(default)
}

/// Numeric field lookup where a missing key or a non-number reads as zero.
pub fn get_number(obj: &Map<String, Value>, key: &str) -> f64 {
    get_number_or(obj, key, 0.0)
}

/// String field lookup; non-strings read as absent.
pub fn get_string(obj: &Map<String, Value>, key: &str) -> Option<String> {
    obj.get(key).and_then(Value::as_str).map(str::to_owned)
}

pub(crate) fn parse_document(json: &[u8]) -> Result<Value, ParseError> {
    serde_json::from_slice(json).map_err(|error| ParseError::malformed(&error))
}
