//! HTTP handlers for the four resources, plus boundary helpers shared by
//! them: identifier parsing and body-shape checks.

pub mod favorites;
pub mod people;
pub mod planets;
pub mod users;

use crate::error::AppError;
use axum::Json;
use serde_json::{Map, Value};

/// Parse a path identifier as a positive integer; anything else fails with
/// the given message.
pub(crate) fn parse_id(id_str: &str, message: &str) -> Result<i64, AppError> {
    match id_str.parse::<i64>() {
        Ok(id) if id >= 1 => Ok(id),
        _ => Err(AppError::BadRequest(message.to_string())),
    }
}

/// Require a JSON object body; a missing body or any other JSON shape fails
/// with the given message.
pub(crate) fn body_object(
    body: Option<Json<Value>>,
    message: &str,
) -> Result<Map<String, Value>, AppError> {
    match body {
        Some(Json(Value::Object(map))) => Ok(map),
        _ => Err(AppError::BadRequest(message.to_string())),
    }
}

/// Read an id out of loosely-typed request data: a JSON integer or a string
/// holding one.
pub(crate) fn value_as_id(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parse_id_accepts_positive_integers_only() {
        assert_eq!(parse_id("7", "Invalid ID").unwrap(), 7);
        for bad in ["0", "-3", "abc", "1.5", ""] {
            let err = parse_id(bad, "Invalid ID").unwrap_err();
            assert_eq!(err.to_string(), "Invalid ID");
        }
    }

    #[test]
    fn body_object_rejects_missing_and_non_object_bodies() {
        assert!(body_object(Some(Json(json!({"a": 1}))), "Invalid data").is_ok());
        assert!(body_object(None, "Invalid data").is_err());
        assert!(body_object(Some(Json(json!([1, 2]))), "Invalid data").is_err());
        assert!(body_object(Some(Json(json!("x"))), "Invalid data").is_err());
    }

    #[test]
    fn value_as_id_handles_numbers_and_numeric_strings() {
        assert_eq!(value_as_id(&json!(4)), Some(4));
        assert_eq!(value_as_id(&json!("4")), Some(4));
        assert_eq!(value_as_id(&json!("four")), None);
        assert_eq!(value_as_id(&json!(true)), None);
    }
}
