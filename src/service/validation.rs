//! Create-body validation: required-field checks with human-readable
//! field names in the failure message.

use crate::error::AppError;
use serde_json::{Map, Value};

pub struct RequestValidator;

impl RequestValidator {
    /// Every field must be present and non-null, checked in order; the first
    /// missing one fails with "{Field label} is required".
    pub fn require_fields(body: &Map<String, Value>, fields: &[&str]) -> Result<(), AppError> {
        for field in fields {
            match body.get(*field) {
                None | Some(Value::Null) => {
                    return Err(AppError::BadRequest(format!(
                        "{} is required",
                        field_label(field)
                    )))
                }
                Some(_) => {}
            }
        }
        Ok(())
    }

    /// `name` must be a non-empty string.
    pub fn require_name(body: &Map<String, Value>) -> Result<(), AppError> {
        match body.get("name") {
            Some(Value::String(s)) if !s.is_empty() => Ok(()),
            _ => Err(AppError::BadRequest("Name is required".into())),
        }
    }
}

/// Render a column name for messages: underscores become spaces and the
/// first letter is capitalized ("surface_water" -> "Surface water").
pub fn field_label(name: &str) -> String {
    let spaced = name.replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => spaced,
    }
}
