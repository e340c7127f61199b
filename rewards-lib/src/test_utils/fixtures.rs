//! Fake payload data.

use rand::seq::SliceRandom;
use rand::Rng;
use serde_json::{json, Value};

use crate::payload::{
    CampaignData, Country, GroupData, OrganizationData, Payload, PersonData,
};

const FIRST_NAMES: &[&str] = &["Ada", "Grace", "Alan", "Edsger", "Barbara", "Donald", "Frances"];
const LAST_NAMES: &[&str] = &["Palmer", "Hopper", "Turing", "Dijkstra", "Liskov", "Knuth", "Allen"];
const WORDS: &[&str] = &["falcons", "comets", "harbor", "maple", "summit", "raptors", "orchard"];
const DOMAINS: &[&str] = &["example.com", "example.org", "example.net"];

/// Shop id used throughout the test suites.
pub const TEST_SHOP_ID: &str = "A2DE537C";

/// Secret used throughout the test suites.
pub const TEST_SECRET: &str = "sk_61c394cf3346077b";

/// Random six-digit id.
pub fn random_id() -> i64 {
    rand::thread_rng().gen_range(100_000..=999_999)
}

fn pick(words: &[&'static str]) -> &'static str {
    words.choose(&mut rand::thread_rng()).copied().unwrap_or("test")
}

pub fn word() -> String {
    pick(WORDS).to_string()
}

pub fn person() -> PersonData {
    let first = pick(FIRST_NAMES);
    let last = pick(LAST_NAMES);
    PersonData::new(
        random_id(),
        format!("{first} {last}"),
        format!("{}.{}@{}", first.to_lowercase(), last.to_lowercase(), pick(DOMAINS)),
        Country::Can,
    )
}

pub fn campaign() -> CampaignData {
    CampaignData::new(random_id(), word(), "Running", Country::Can, person())
}

pub fn group() -> GroupData {
    GroupData::new(word())
}

pub fn organization() -> OrganizationData {
    OrganizationData::new(random_id(), word(), person())
}

/// A valid payload with user and campaign data.
pub fn typed_payload() -> Payload {
    Payload::default().with_user(person()).with_campaign(campaign())
}

/// A valid payload with user and campaign data, as JSON.
pub fn payload() -> Value {
    json!({
        "user_data": person(),
        "campaign_data": campaign(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate;

    #[test]
    fn test_fixtures_are_valid() {
        assert!(validate(&payload()).is_valid());

        let mut full = payload();
        full["group_data"] = json!(group());
        full["organization_data"] = json!(organization());
        assert!(validate(&full).is_valid());
    }

    #[test]
    fn test_random_id_range() {
        for _ in 0..100 {
            assert!((100_000..=999_999).contains(&random_id()));
        }
    }
}
