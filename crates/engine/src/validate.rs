//! Field-level validation helpers shared by the resource validators.
//!
//! Every helper appends at most one human-readable error for its field and
//! returns `None` when the field is unusable, so a validator can run all
//! checks in declaration order and still collect every violation.

use serde_json::{Map, Value};

/// Payload-is-object check. This is the only short-circuiting rule: a
/// non-object payload yields a single error and no further checks run.
pub fn object<'a>(payload: &'a Value, resource: &str) -> Result<&'a Map<String, Value>, Vec<String>> {
    payload
        .as_object()
        .ok_or_else(|| vec![format!("{resource} payload must be an object.")])
}

/// Required string field, non-empty after trimming. Returns the trimmed
/// value so stored strings never carry leading or trailing whitespace.
pub fn required_string(
    map: &Map<String, Value>,
    field: &str,
    errors: &mut Vec<String>,
) -> Option<String> {
    match map.get(field) {
        Some(Value::String(s)) if !s.trim().is_empty() => Some(s.trim().to_string()),
        _ => {
            errors.push(format!(
                "{field} is required and must be a non-empty string."
            ));
            None
        }
    }
}

/// Required finite number >= 0 (`amount`, `price`). Zero is valid.
pub fn required_amount(
    map: &Map<String, Value>,
    field: &str,
    errors: &mut Vec<String>,
) -> Option<f64> {
    match map.get(field).and_then(Value::as_f64) {
        Some(n) if n.is_finite() && n >= 0.0 => Some(n),
        _ => {
            errors.push(format!(
                "{field} is required and must be a non-negative number."
            ));
            None
        }
    }
}

/// Required integer >= 0 (`quantity`). A fractional number is rejected
/// with this message, not the generic numeric one.
pub fn required_quantity(
    map: &Map<String, Value>,
    field: &str,
    errors: &mut Vec<String>,
) -> Option<i64> {
    match map.get(field).and_then(Value::as_i64) {
        Some(n) if n >= 0 => Some(n),
        _ => {
            errors.push(format!(
                "{field} is required and must be a non-negative integer."
            ));
            None
        }
    }
}

/// Required ISO-8601 date string, date-only or date-time shape.
pub fn required_date(
    map: &Map<String, Value>,
    field: &str,
    errors: &mut Vec<String>,
) -> Option<String> {
    match map.get(field) {
        Some(Value::String(s)) if is_iso_date_like(s) => Some(s.clone()),
        _ => {
            errors.push(format!(
                "{field} is required and must be ISO-8601 (YYYY-MM-DD or ISO datetime)."
            ));
            None
        }
    }
}

/// Optional string field: absent or null is fine, anything else must be a
/// non-empty string. Returns the trimmed value when present.
///
/// The outer `None` means the field was present but invalid.
pub fn optional_string(
    map: &Map<String, Value>,
    field: &str,
    errors: &mut Vec<String>,
) -> Option<Option<String>> {
    match map.get(field) {
        None | Some(Value::Null) => Some(None),
        Some(Value::String(s)) if !s.trim().is_empty() => Some(Some(s.trim().to_string())),
        Some(_) => {
            errors.push(format!("{field}, if provided, must be a non-empty string."));
            None
        }
    }
}

/// Shape check for ISO-8601 dates.
///
/// Accepts `YYYY-MM-DD` or `YYYY-MM-DDTHH:MM(:SS)?(Z|+HH:MM|-HH:MM)?`.
/// This is a shape check only; it does not reject impossible calendar
/// dates.
pub fn is_iso_date_like(value: &str) -> bool {
    let b = value.as_bytes();
    if b.len() < 10 || !is_date(&b[..10]) {
        return false;
    }
    if b.len() == 10 {
        return true;
    }

    // Date-time: THH:MM, then optional :SS, then optional zone.
    let rest = &b[10..];
    if rest.len() < 6 || rest[0] != b'T' || !is_clock(&rest[1..6]) {
        return false;
    }
    let mut rest = &rest[6..];
    if rest.len() >= 3 && rest[0] == b':' && rest[1].is_ascii_digit() && rest[2].is_ascii_digit() {
        rest = &rest[3..];
    }
    match rest {
        [] | [b'Z'] => true,
        [sign, h1, h2, b':', m1, m2] => {
            matches!(sign, b'+' | b'-')
                && h1.is_ascii_digit()
                && h2.is_ascii_digit()
                && m1.is_ascii_digit()
                && m2.is_ascii_digit()
        }
        _ => false,
    }
}

fn is_date(b: &[u8]) -> bool {
    b.len() == 10
        && b[..4].iter().all(u8::is_ascii_digit)
        && b[4] == b'-'
        && b[5..7].iter().all(u8::is_ascii_digit)
        && b[7] == b'-'
        && b[8..10].iter().all(u8::is_ascii_digit)
}

fn is_clock(b: &[u8]) -> bool {
    b.len() == 5
        && b[0].is_ascii_digit()
        && b[1].is_ascii_digit()
        && b[2] == b':'
        && b[3].is_ascii_digit()
        && b[4].is_ascii_digit()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn date_only_shapes() {
        assert!(is_iso_date_like("2024-03-01"));
        assert!(is_iso_date_like("1999-12-31"));
        assert!(!is_iso_date_like("2024-3-1"));
        assert!(!is_iso_date_like("2024/03/01"));
        assert!(!is_iso_date_like("20240301"));
        assert!(!is_iso_date_like(""));
    }

    #[test]
    fn date_time_shapes() {
        assert!(is_iso_date_like("2024-03-01T10:30"));
        assert!(is_iso_date_like("2024-03-01T10:30:00"));
        assert!(is_iso_date_like("2024-03-01T10:30Z"));
        assert!(is_iso_date_like("2024-03-01T10:30:00Z"));
        assert!(is_iso_date_like("2024-03-01T10:30:00+02:00"));
        assert!(is_iso_date_like("2024-03-01T10:30-05:30"));
        assert!(!is_iso_date_like("2024-03-01T10"));
        assert!(!is_iso_date_like("2024-03-01T10:30:00+0200"));
        assert!(!is_iso_date_like("2024-03-01T10:30:00X"));
        assert!(!is_iso_date_like("2024-03-01 10:30:00"));
    }

    #[test]
    fn amount_boundaries() {
        let map = json!({"amount": 0.0});
        let mut errors = Vec::new();
        assert_eq!(
            required_amount(map.as_object().unwrap(), "amount", &mut errors),
            Some(0.0)
        );
        assert!(errors.is_empty());

        let map = json!({"amount": -0.01});
        assert!(required_amount(map.as_object().unwrap(), "amount", &mut errors).is_none());
        assert_eq!(
            errors,
            vec!["amount is required and must be a non-negative number."]
        );
    }

    #[test]
    fn quantity_must_be_integer() {
        let map = json!({"quantity": 2.5});
        let mut errors = Vec::new();
        assert!(required_quantity(map.as_object().unwrap(), "quantity", &mut errors).is_none());
        assert_eq!(
            errors,
            vec!["quantity is required and must be a non-negative integer."]
        );

        let map = json!({"quantity": 0});
        let mut errors = Vec::new();
        assert_eq!(
            required_quantity(map.as_object().unwrap(), "quantity", &mut errors),
            Some(0)
        );
        assert!(errors.is_empty());
    }

    #[test]
    fn strings_are_trimmed() {
        let map = json!({"item_name": "  Widget  "});
        let mut errors = Vec::new();
        assert_eq!(
            required_string(map.as_object().unwrap(), "item_name", &mut errors),
            Some("Widget".to_string())
        );

        let map = json!({"item_name": "   "});
        assert!(required_string(map.as_object().unwrap(), "item_name", &mut errors).is_none());
    }

    #[test]
    fn optional_string_accepts_absent_and_null() {
        let mut errors = Vec::new();
        let map = json!({});
        assert_eq!(
            optional_string(map.as_object().unwrap(), "customer", &mut errors),
            Some(None)
        );
        let map = json!({"customer": null});
        assert_eq!(
            optional_string(map.as_object().unwrap(), "customer", &mut errors),
            Some(None)
        );
        assert!(errors.is_empty());

        let map = json!({"customer": 42});
        assert!(optional_string(map.as_object().unwrap(), "customer", &mut errors).is_none());
        assert_eq!(errors, vec!["customer, if provided, must be a non-empty string."]);
    }
}
