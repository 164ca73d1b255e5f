//! Field validation helpers
//!
//! Resource validators compose these checks over the `data` object of a
//! request body and turn the first failure into a [`ValidationError`].

pub mod validators;

pub use validators::{FieldCheck, field_value, first_failure, loose_number};

use crate::core::error::ValidationError;
use serde_json::{Map, Value};

/// Text content of a field, empty when absent or not a string
pub fn text_field(data: &Map<String, Value>, field: &str) -> String {
    field_value(data, field)
        .as_str()
        .unwrap_or_default()
        .to_string()
}

/// The body's `id`, if it is a non-empty string.
///
/// Any other shape (number, empty string, absent) counts as "no id given".
pub fn body_id(data: &Map<String, Value>) -> Option<String> {
    match field_value(data, "id") {
        Value::String(id) if !id.is_empty() => Some(id.clone()),
        _ => None,
    }
}

/// Fail when the body names a different record than the route
pub fn ensure_matching_id(route_id: &str, body_id: Option<&str>) -> Result<(), ValidationError> {
    match body_id {
        Some(id) if id != route_id => Err(ValidationError::IdMismatch {
            route_id: route_id.to_string(),
            body_id: id.to_string(),
        }),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_body_id_ignores_empty_and_non_string() {
        let data = json!({ "id": "" });
        assert_eq!(body_id(data.as_object().unwrap()), None);

        let data = json!({ "id": 17 });
        assert_eq!(body_id(data.as_object().unwrap()), None);

        let data = json!({ "id": "abc" });
        assert_eq!(body_id(data.as_object().unwrap()), Some("abc".to_string()));
    }

    #[test]
    fn test_ensure_matching_id() {
        assert!(ensure_matching_id("abc", None).is_ok());
        assert!(ensure_matching_id("abc", Some("abc")).is_ok());

        let err = ensure_matching_id("abc", Some("xyz")).unwrap_err();
        assert_eq!(err.to_string(), "Route abc does not match given id xyz");
    }

    #[test]
    fn test_text_field_defaults_to_empty() {
        let data = json!({ "name": "Taco", "price": 5 });
        let data = data.as_object().unwrap();

        assert_eq!(text_field(data, "name"), "Taco");
        assert_eq!(text_field(data, "price"), "");
        assert_eq!(text_field(data, "missing"), "");
    }
}
