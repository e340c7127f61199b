//! Field rules and the emptiness semantics they share.

use serde_json::Value;

use super::error::{ValidationError, ValidationErrorKind};

/// Countries a person or campaign may belong to.
pub const COUNTRIES: &[&str] = &["CAN", "USA"];

/// One check against a named field of a data block.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rule {
    /// Field must be set and non-empty.
    Presence(&'static str),
    /// Field must be set to one of the allowed strings.
    Inclusion(&'static str, &'static [&'static str]),
}

/// Rules for `user_data` and every `admin_data` block.
pub const PERSON_RULES: &[Rule] = &[
    Rule::Presence("id"),
    Rule::Presence("name"),
    Rule::Presence("email"),
    Rule::Inclusion("country", COUNTRIES),
];

/// Rules for `campaign_data`.
pub const CAMPAIGN_RULES: &[Rule] = &[
    Rule::Presence("id"),
    Rule::Presence("name"),
    Rule::Presence("category"),
    Rule::Inclusion("country", COUNTRIES),
];

/// Rules for `group_data`.
pub const GROUP_RULES: &[Rule] = &[Rule::Presence("name")];

/// Rules for `organization_data`.
pub const ORGANIZATION_RULES: &[Rule] = &[Rule::Presence("id"), Rule::Presence("name")];

impl Rule {
    /// Check `data` and return the failure, if any, keyed to `label`.
    pub fn check(&self, label: &str, data: &Value) -> Option<ValidationError> {
        match *self {
            Rule::Presence(key) => is_blank_field(data, key).then(|| {
                ValidationError::new(
                    ValidationErrorKind::FieldMissing,
                    label,
                    format!("{key} missing."),
                )
            }),
            Rule::Inclusion(key, allowed) => {
                let included = field(data, key)
                    .and_then(Value::as_str)
                    .is_some_and(|value| allowed.contains(&value));
                (!included).then(|| {
                    ValidationError::new(
                        ValidationErrorKind::FieldNotInSet,
                        label,
                        format!("{key} must be one of: '{}'.", allowed.join(", ")),
                    )
                })
            }
        }
    }
}

/// Apply `rules` in order, appending every failure to `errors`.
pub fn apply_rules(label: &str, data: &Value, rules: &[Rule], errors: &mut Vec<ValidationError>) {
    errors.extend(rules.iter().filter_map(|rule| rule.check(label, data)));
}

/// Payloads may be JSON objects or (possibly empty) JSON arrays.
pub fn is_map_like(value: &Value) -> bool {
    matches!(value, Value::Object(_) | Value::Array(_))
}

/// Look up a named field. Only objects have named fields.
pub fn field<'a>(data: &'a Value, key: &str) -> Option<&'a Value> {
    match data {
        Value::Object(map) => map.get(key),
        _ => None,
    }
}

/// Named field that is set to something other than `null`.
pub fn present_field<'a>(data: &'a Value, key: &str) -> Option<&'a Value> {
    field(data, key).filter(|value| !value.is_null())
}

/// Absent or blank per [`is_blank`].
pub fn is_blank_field(data: &Value, key: &str) -> bool {
    field(data, key).map_or(true, is_blank)
}

/// `null`, `false`, zero, `""`, `"0"`, and empty arrays or objects are blank.
pub fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty() || s == "0",
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_blank_values() {
        for value in [json!(null), json!(false), json!(0), json!(0.0), json!(""), json!("0"), json!([]), json!({})] {
            assert!(is_blank(&value), "{value} should be blank");
        }
        for value in [json!(true), json!(7), json!("CAN"), json!([1]), json!({"a": 1})] {
            assert!(!is_blank(&value), "{value} should not be blank");
        }
    }

    #[test]
    fn test_presence_message() {
        let err = Rule::Presence("email").check("user_data", &json!({})).unwrap();
        assert_eq!(err.label(), "user_data");
        assert_eq!(err.message(), "email missing.");
        assert_eq!(err.kind(), ValidationErrorKind::FieldMissing);

        assert!(Rule::Presence("email").check("user_data", &json!({"email": "a@b.c"})).is_none());
    }

    #[test]
    fn test_inclusion_message() {
        let rule = Rule::Inclusion("country", COUNTRIES);
        let err = rule.check("user_data", &json!({"country": "MEX"})).unwrap();
        assert_eq!(err.message(), "country must be one of: 'CAN, USA'.");
        assert_eq!(err.kind(), ValidationErrorKind::FieldNotInSet);

        assert!(rule.check("user_data", &json!({"country": "USA"})).is_none());
        assert!(rule.check("user_data", &json!({"country": null})).is_some());
        assert!(rule.check("user_data", &json!({"country": 1})).is_some());
    }

    #[test]
    fn test_fields_only_on_objects() {
        assert!(field(&json!([]), "id").is_none());
        assert!(field(&json!("id"), "id").is_none());
        assert!(present_field(&json!({"id": null}), "id").is_none());
        assert_eq!(present_field(&json!({"id": 3}), "id"), Some(&json!(3)));
    }

    #[test]
    fn test_apply_rules_keeps_order() {
        let mut errors = Vec::new();
        apply_rules("campaign_data", &json!([]), CAMPAIGN_RULES, &mut errors);
        let messages: Vec<_> = errors.iter().map(|e| e.message()).collect();
        assert_eq!(
            messages,
            [
                "id missing.",
                "name missing.",
                "category missing.",
                "country must be one of: 'CAN, USA'."
            ]
        );
    }
}
