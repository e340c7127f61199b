//! Structural validation of token payloads.
//!
//! Validation walks the payload as JSON and collects every failed rule in
//! evaluation order; no rule stops the ones after it. Errors are returned
//! per call in a [`ValidationReport`], so one validator can be shared
//! freely between threads.
//!
//! # Evaluation order
//!
//! 1. the payload must be map-like
//! 2. it must carry `user_data` or `campaign_data`
//! 3. `user_data` as a person
//! 4. `campaign_data`, then its `admin_data` as a person under `campaign_admin_data`
//! 5. `group_data`
//! 6. `organization_data`, then its `admin_data` as a person under `organization_admin_data`
//!
//! # Example
//!
//! ```
//! use rewards_lib::validation::PayloadValidator;
//! use serde_json::json;
//!
//! let report = PayloadValidator::new().validate(&json!({}));
//! assert!(!report.is_valid());
//! assert_eq!(
//!     report.errors()[0].get("payload"),
//!     Some("At least must contain user_data or campaign_data.")
//! );
//! ```

mod error;
mod rules;

use serde_json::Value;

pub use error::{ValidationError, ValidationErrorKind, ValidationReport};
pub use rules::{is_blank, Rule, COUNTRIES};

use rules::{
    apply_rules, is_blank_field, is_map_like, present_field, CAMPAIGN_RULES, GROUP_RULES,
    ORGANIZATION_RULES, PERSON_RULES,
};

/// Label for payload-level errors.
pub const PAYLOAD_LABEL: &str = "payload";
/// Token holder block, also the label for its errors.
pub const USER_DATA: &str = "user_data";
/// Campaign block.
pub const CAMPAIGN_DATA: &str = "campaign_data";
/// Group block.
pub const GROUP_DATA: &str = "group_data";
/// Organization block.
pub const ORGANIZATION_DATA: &str = "organization_data";
/// Label for errors in a campaign's `admin_data`.
pub const CAMPAIGN_ADMIN_DATA: &str = "campaign_admin_data";
/// Label for errors in an organization's `admin_data`.
pub const ORGANIZATION_ADMIN_DATA: &str = "organization_admin_data";

const ADMIN_DATA: &str = "admin_data";

pub const MALFORMED_PAYLOAD_MESSAGE: &str = "Payload must be an array.";
pub const MISSING_DATA_MESSAGE: &str = "At least must contain user_data or campaign_data.";

static EMPTY: Value = Value::Null;

/// Validates identified-token payloads against the fixed rule set.
#[derive(Clone, Copy, Debug, Default)]
pub struct PayloadValidator;

impl PayloadValidator {
    pub fn new() -> Self {
        Self
    }

    /// Run every rule against `payload`.
    pub fn validate(&self, payload: &Value) -> ValidationReport {
        let mut errors = Vec::new();

        if !is_map_like(payload) {
            errors.push(ValidationError::new(
                ValidationErrorKind::MalformedPayload,
                PAYLOAD_LABEL,
                MALFORMED_PAYLOAD_MESSAGE,
            ));
        }

        if is_blank(payload)
            || (is_blank_field(payload, USER_DATA) && is_blank_field(payload, CAMPAIGN_DATA))
        {
            errors.push(ValidationError::new(
                ValidationErrorKind::MissingRequiredData,
                PAYLOAD_LABEL,
                MISSING_DATA_MESSAGE,
            ));
        }

        if let Some(user) = present_field(payload, USER_DATA) {
            validate_person(USER_DATA, user, &mut errors);
        }

        if let Some(campaign) = present_field(payload, CAMPAIGN_DATA) {
            apply_rules(CAMPAIGN_DATA, campaign, CAMPAIGN_RULES, &mut errors);
            validate_admin(CAMPAIGN_ADMIN_DATA, campaign, &mut errors);
        }

        if let Some(group) = present_field(payload, GROUP_DATA) {
            apply_rules(GROUP_DATA, group, GROUP_RULES, &mut errors);
        }

        if let Some(organization) = present_field(payload, ORGANIZATION_DATA) {
            apply_rules(ORGANIZATION_DATA, organization, ORGANIZATION_RULES, &mut errors);
            validate_admin(ORGANIZATION_ADMIN_DATA, organization, &mut errors);
        }

        ValidationReport::new(errors)
    }
}

/// Validate `payload` with a default [`PayloadValidator`].
pub fn validate(payload: &Value) -> ValidationReport {
    PayloadValidator::new().validate(payload)
}

fn validate_person(label: &str, data: &Value, errors: &mut Vec<ValidationError>) {
    apply_rules(label, data, PERSON_RULES, errors);
}

fn validate_admin(label: &str, parent: &Value, errors: &mut Vec<ValidationError>) {
    let admin = present_field(parent, ADMIN_DATA).unwrap_or(&EMPTY);
    validate_person(label, admin, errors);
}
