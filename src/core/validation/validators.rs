//! Reusable field validators
//!
//! Each validator inspects one JSON value and reports a per-field message.
//! Absent fields are passed in as `Value::Null`.

use serde_json::Value;

static NULL: Value = Value::Null;

/// Signature shared by all field validators
pub type FieldCheck = fn(&str, &Value) -> Result<(), String>;

/// Validator: field is a string with at least one character
pub fn required_text(field: &str, value: &Value) -> Result<(), String> {
    match value.as_str() {
        Some(s) if !s.is_empty() => Ok(()),
        Some(_) => Err(format!("'{}' must not be empty", field)),
        None => Err(format!("'{}' is required", field)),
    }
}

/// Validator: field coerces to a number strictly greater than zero
///
/// Numeric strings are coerced, so `"5"` passes here; callers that need a
/// JSON number check the type afterwards.
pub fn positive(field: &str, value: &Value) -> Result<(), String> {
    match loose_number(value) {
        Some(num) if num > 0.0 => Ok(()),
        Some(num) => Err(format!("'{}' must be positive (value: {})", field, num)),
        None => Err(format!("'{}' is required", field)),
    }
}

/// Validator: field is present and not empty
///
/// Strings, arrays and objects are empty when they have no content; every
/// other non-null value counts as present.
pub fn non_empty(field: &str, value: &Value) -> Result<(), String> {
    let empty = match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        _ => false,
    };

    if empty {
        Err(format!("'{}' is required", field))
    } else {
        Ok(())
    }
}

/// Run `checks` in order and return the first failing field with its message
pub fn first_failure(
    data: &serde_json::Map<String, Value>,
    checks: &[(&str, FieldCheck)],
) -> Option<(String, String)> {
    checks.iter().find_map(|(field, check)| {
        check(field, field_value(data, field))
            .err()
            .map(|message| (field.to_string(), message))
    })
}

/// Look up a field, treating absence as null
pub fn field_value<'a>(data: &'a serde_json::Map<String, Value>, field: &str) -> &'a Value {
    data.get(field).unwrap_or(&NULL)
}

/// Coerce a value to a number the way loosely typed clients expect:
/// numbers as-is, numeric strings parsed, everything else rejected.
pub fn loose_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // === required_text() ===

    #[test]
    fn test_required_text_rejects_empty_and_missing() {
        assert!(required_text("name", &json!("")).is_err());
        assert!(required_text("name", &Value::Null).is_err());
        assert!(required_text("name", &json!(12)).is_err());
    }

    #[test]
    fn test_required_text_accepts_text() {
        assert!(required_text("name", &json!("Taco")).is_ok());
    }

    // === positive() ===

    #[test]
    fn test_positive_rejects_zero_and_negative() {
        assert!(positive("price", &json!(0)).is_err());
        assert!(positive("price", &json!(-3)).is_err());
        assert!(positive("price", &json!(-0.5)).is_err());
    }

    #[test]
    fn test_positive_coerces_numeric_strings() {
        assert!(positive("price", &json!("5")).is_ok());
        assert!(positive("price", &json!("abc")).is_err());
    }

    #[test]
    fn test_positive_error_mentions_value() {
        let err = positive("price", &json!(-2)).unwrap_err();
        assert!(err.contains("-2"));
    }

    // === non_empty() ===

    #[test]
    fn test_non_empty() {
        assert!(non_empty("dishes", &json!([])).is_err());
        assert!(non_empty("dishes", &json!({})).is_err());
        assert!(non_empty("dishes", &Value::Null).is_err());
        assert!(non_empty("dishes", &json!([{"id": "1"}])).is_ok());
        assert!(non_empty("dishes", &json!("taco")).is_ok());
    }

    // === first_failure() ===

    #[test]
    fn test_first_failure_reports_first_field_in_order() {
        let data = json!({ "name": "", "price": 0 });
        let data = data.as_object().unwrap();

        let checks: [(&str, FieldCheck); 2] = [("name", required_text), ("price", positive)];

        let failure = first_failure(data, &checks);
        assert_eq!(failure.map(|(field, _)| field), Some("name".to_string()));
    }

    #[test]
    fn test_first_failure_none_when_all_pass() {
        let data = json!({ "name": "Taco", "price": 5 });
        let data = data.as_object().unwrap();

        let checks: [(&str, FieldCheck); 2] = [("name", required_text), ("price", positive)];

        assert!(first_failure(data, &checks).is_none());
    }
}
