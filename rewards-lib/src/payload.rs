//! Typed payload models.
//!
//! Tokens carry arbitrary JSON; these types are a convenient way to build
//! and read the shapes the validator knows about. Every field is optional
//! so that incomplete data can still be expressed and reported by
//! validation instead of failing at deserialization. Unrecognized
//! top-level keys are kept in [`Payload::extra`].

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Value of the `type` claim in partner tokens.
pub const PARTNER_TYPE: &str = "partner";

/// Countries accepted for people and campaigns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Country {
    /// Canada.
    Can,
    /// United States.
    Usa,
}

impl Country {
    /// Every accepted country, in validation order.
    pub const ALL: [Country; 2] = [Country::Can, Country::Usa];

    /// ISO 3166 alpha-3 code.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Can => "CAN",
            Self::Usa => "USA",
        }
    }
}

/// Identifier of a person, campaign or organization.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Identifier {
    Number(i64),
    Text(String),
}

impl From<i64> for Identifier {
    fn from(id: i64) -> Self {
        Self::Number(id)
    }
}

impl From<&str> for Identifier {
    fn from(id: &str) -> Self {
        Self::Text(id.to_string())
    }
}

impl From<String> for Identifier {
    fn from(id: String) -> Self {
        Self::Text(id)
    }
}

/// A person: the token holder or an admin of a campaign or organization.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Identifier>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<Country>,
}

impl PersonData {
    pub fn new(
        id: impl Into<Identifier>,
        name: impl Into<String>,
        email: impl Into<String>,
        country: Country,
    ) -> Self {
        Self {
            id: Some(id.into()),
            name: Some(name.into()),
            email: Some(email.into()),
            country: Some(country),
        }
    }
}

/// A campaign and its administrator.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Identifier>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<Country>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_data: Option<PersonData>,
}

impl CampaignData {
    pub fn new(
        id: impl Into<Identifier>,
        name: impl Into<String>,
        category: impl Into<String>,
        country: Country,
        admin: PersonData,
    ) -> Self {
        Self {
            id: Some(id.into()),
            name: Some(name.into()),
            category: Some(category.into()),
            country: Some(country),
            admin_data: Some(admin),
        }
    }
}

/// A group within a campaign.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl GroupData {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }
}

/// An organization and its administrator.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizationData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Identifier>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_data: Option<PersonData>,
}

impl OrganizationData {
    pub fn new(id: impl Into<Identifier>, name: impl Into<String>, admin: PersonData) -> Self {
        Self {
            id: Some(id.into()),
            name: Some(name.into()),
            admin_data: Some(admin),
        }
    }
}

/// An identified-token payload.
///
/// # Example
///
/// ```
/// use rewards_lib::payload::{Country, Payload, PersonData};
///
/// let payload = Payload::default()
///     .with_user(PersonData::new(482913, "Ada Palmer", "ada@example.com", Country::Can))
///     .with_extra("locale", "en-CA");
///
/// let json = serde_json::to_value(&payload).unwrap();
/// assert_eq!(json["user_data"]["country"], "CAN");
/// assert_eq!(json["locale"], "en-CA");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Payload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_data: Option<PersonData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub campaign_data: Option<CampaignData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_data: Option<GroupData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization_data: Option<OrganizationData>,
    /// Top-level keys not covered by validation, carried through as-is.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Payload {
    /// Set `user_data`.
    pub fn with_user(mut self, user: PersonData) -> Self {
        self.user_data = Some(user);
        self
    }

    /// Set `campaign_data`.
    pub fn with_campaign(mut self, campaign: CampaignData) -> Self {
        self.campaign_data = Some(campaign);
        self
    }

    /// Set `group_data`.
    pub fn with_group(mut self, group: GroupData) -> Self {
        self.group_data = Some(group);
        self
    }

    /// Set `organization_data`.
    pub fn with_organization(mut self, organization: OrganizationData) -> Self {
        self.organization_data = Some(organization);
        self
    }

    /// Add a top-level key outside the validated blocks.
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

/// Claims carried by a partner token.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartnerClaims {
    /// Token kind; `partner` for tokens from [`Rewards::partner_token`](crate::Rewards::partner_token).
    #[serde(rename = "type")]
    pub kind: String,
    /// Expiry as unix seconds.
    pub expires: i64,
}

impl PartnerClaims {
    /// Partner claims expiring at `expires`.
    pub fn new(expires: i64) -> Self {
        Self {
            kind: PARTNER_TYPE.to_string(),
            expires,
        }
    }

    /// True when `type` is `partner`.
    pub fn is_partner(&self) -> bool {
        self.kind == PARTNER_TYPE
    }

    /// A token is usable up to and including its `expires` second.
    pub fn is_expired(&self, now: i64) -> bool {
        now > self.expires
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{self, COUNTRIES};
    use serde_json::json;

    fn admin() -> PersonData {
        PersonData::new(551002, "Grace Hopper", "grace@example.com", Country::Usa)
    }

    #[test]
    fn test_country_matches_validation_set() {
        let names: Vec<_> = Country::ALL.iter().map(Country::as_str).collect();
        assert_eq!(names, COUNTRIES);
        assert_eq!(serde_json::to_value(Country::Can).unwrap(), json!("CAN"));
    }

    #[test]
    fn test_identifier_forms() {
        assert_eq!(serde_json::to_value(Identifier::from(7)).unwrap(), json!(7));
        assert_eq!(serde_json::to_value(Identifier::from("c-7")).unwrap(), json!("c-7"));
        let id: Identifier = serde_json::from_value(json!(123456)).unwrap();
        assert_eq!(id, Identifier::Number(123456));
    }

    #[test]
    fn test_typed_payload_validates() {
        let payload = Payload::default()
            .with_user(admin())
            .with_campaign(CampaignData::new(771204, "falcons", "Running", Country::Can, admin()))
            .with_group(GroupData::new("Tigers"))
            .with_organization(OrganizationData::new(310022, "Riverside", admin()));

        let value = serde_json::to_value(&payload).unwrap();
        assert!(validation::validate(&value).is_valid());
    }

    #[test]
    fn test_empty_fields_are_omitted() {
        let payload = Payload::default().with_group(GroupData::default());
        assert_eq!(serde_json::to_value(&payload).unwrap(), json!({"group_data": {}}));
    }

    #[test]
    fn test_extra_keys_preserved() {
        let value = json!({
            "user_data": {"id": 1, "name": "A", "email": "a@example.com", "country": "USA"},
            "division_data": {"name": "north"},
        });
        let payload: Payload = serde_json::from_value(value.clone()).unwrap();
        assert_eq!(payload.extra.get("division_data"), Some(&json!({"name": "north"})));
        assert_eq!(serde_json::to_value(&payload).unwrap(), value);
    }

    #[test]
    fn test_partner_claims() {
        let claims = PartnerClaims::new(1_700_003_600);
        assert_eq!(
            serde_json::to_string(&claims).unwrap(),
            r#"{"type":"partner","expires":1700003600}"#
        );
        assert!(claims.is_partner());
        assert!(!claims.is_expired(1_700_003_600));
        assert!(claims.is_expired(1_700_003_601));
    }
}
