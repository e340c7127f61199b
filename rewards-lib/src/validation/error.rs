//! Validation error records.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// The rule that produced a [`ValidationError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValidationErrorKind {
    /// Payload is not map-like.
    MalformedPayload,
    /// Neither `user_data` nor `campaign_data` is usable.
    MissingRequiredData,
    /// A required field is absent or empty.
    FieldMissing,
    /// A field is not one of its allowed values.
    FieldNotInSet,
}

/// A single failed rule: a context label and a human-readable message.
///
/// Serializes as the single-entry map `{label: message}`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationError {
    kind: ValidationErrorKind,
    label: String,
    message: String,
}

impl ValidationError {
    /// Create an error for `label`.
    pub fn new(
        kind: ValidationErrorKind,
        label: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            label: label.into(),
            message: message.into(),
        }
    }

    /// Rule that failed.
    pub fn kind(&self) -> ValidationErrorKind {
        self.kind
    }

    /// Context the error belongs to, e.g. `payload` or `campaign_admin_data`.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Message such as `id missing.`.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Message if this error is keyed to `label`.
    pub fn get(&self, label: &str) -> Option<&str> {
        (self.label == label).then_some(self.message.as_str())
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.label, self.message)
    }
}

impl Serialize for ValidationError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.label, &self.message)?;
        map.end()
    }
}

/// Outcome of validating one payload.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    errors: Vec<ValidationError>,
}

impl ValidationReport {
    pub(crate) fn new(errors: Vec<ValidationError>) -> Self {
        Self { errors }
    }

    /// True when no rule failed.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Failed rules in evaluation order.
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Consume the report, keeping the ordered errors.
    pub fn into_errors(self) -> Vec<ValidationError> {
        self.errors
    }

    /// Number of failed rules.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Same as [`is_valid`](Self::is_valid).
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_as_single_entry_map() {
        let err = ValidationError::new(ValidationErrorKind::FieldMissing, "group_data", "name missing.");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json, serde_json::json!({"group_data": "name missing."}));
    }

    #[test]
    fn test_get_by_label() {
        let err = ValidationError::new(ValidationErrorKind::FieldMissing, "user_data", "id missing.");
        assert_eq!(err.get("user_data"), Some("id missing."));
        assert_eq!(err.get("payload"), None);
        assert_eq!(err.to_string(), "user_data: id missing.");
    }

    #[test]
    fn test_report_verdict() {
        assert!(ValidationReport::default().is_valid());
        let report = ValidationReport::new(vec![ValidationError::new(
            ValidationErrorKind::MalformedPayload,
            "payload",
            "Payload must be an array.",
        )]);
        assert!(!report.is_valid());
        assert_eq!(report.len(), 1);
    }
}
