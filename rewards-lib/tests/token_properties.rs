//! Property tests for tamper detection and issuer binding.

use proptest::prelude::*;
use rewards_lib::{Rewards, RewardsError};
use serde_json::json;

const SHOP_ID: &str = "A2DE537C";
const SECRET: &str = "sk_61c394cf3346077b";

const BASE64URL: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

fn issue() -> (Rewards, String) {
    let rewards = Rewards::new(SHOP_ID, SECRET).unwrap();
    let token = rewards
        .identified_token(&json!({
            "user_data": {"id": 482913, "name": "Ada Palmer", "email": "ada@example.com", "country": "CAN"},
            "note": "tamper target",
        }))
        .unwrap();
    (rewards, token)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn flipped_envelope_character_fails_authentication(
        position in any::<prop::sample::Index>(),
        replacement in any::<prop::sample::Index>(),
    ) {
        let (rewards, token) = issue();
        let (envelope, shop) = token.split_once('@').unwrap();

        let mut bytes = envelope.as_bytes().to_vec();
        let at = position.index(bytes.len());
        let original = bytes[at];
        let mut candidate = BASE64URL[replacement.index(BASE64URL.len())];
        if candidate == original {
            candidate = if original == b'A' { b'B' } else { b'A' };
        }
        bytes[at] = candidate;

        let tampered = format!("{}@{shop}", String::from_utf8(bytes).unwrap());
        let err = rewards.read_token(&tampered).unwrap_err();
        prop_assert!(err.is_auth_failure(), "unexpected error: {err:?}");
    }

    #[test]
    fn foreign_shop_suffix_is_rejected(suffix in "[^@]{0,16}") {
        prop_assume!(suffix != SHOP_ID);

        let (rewards, token) = issue();
        let (envelope, _) = token.split_once('@').unwrap();

        let result = rewards.read_token(&format!("{envelope}@{suffix}"));
        prop_assert!(matches!(result, Err(RewardsError::InvalidToken)));
    }

    #[test]
    fn unknown_keys_round_trip(key in "[a-z]{1,12}", value in any::<i64>()) {
        prop_assume!(!["user_data", "campaign_data", "group_data", "organization_data"].contains(&key.as_str()));

        let rewards = Rewards::new(SHOP_ID, SECRET).unwrap();
        let mut payload = json!({
            "user_data": {"id": 1, "name": "A", "email": "a@example.com", "country": "USA"},
        });
        payload[key.as_str()] = json!(value);

        let token = rewards.identified_token(&payload).unwrap();
        prop_assert_eq!(rewards.read_token(&token).unwrap(), payload);
    }
}
