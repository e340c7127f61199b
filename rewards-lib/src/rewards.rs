//! Token issuance and verification for one shop.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::clock::{Clock, SystemClock};
use crate::config::RewardsConfig;
use crate::errors::RewardsError;
use crate::jwe::{Compression, TokenCodec};
use crate::payload::PartnerClaims;
use crate::secret::Secret;
use crate::validation::{PayloadValidator, ValidationReport};
use crate::Result;

/// Lifetime of a partner token in seconds.
pub const PARTNER_TOKEN_TTL: i64 = 3600;

/// Separates the envelope from the shop id in a token.
pub const SHOP_SEPARATOR: char = '@';

/// Issues and reads `envelope@shop_id` tokens.
///
/// Holds no per-call state, so a single instance can be shared across
/// threads behind an `Arc`.
///
/// # Example
///
/// ```
/// use rewards_lib::Rewards;
/// use serde_json::json;
///
/// let rewards = Rewards::new("A2DE537C", "sk_61c394cf3346077b")?;
/// let payload = json!({
///     "user_data": {"id": 482913, "name": "Ada Palmer", "email": "ada@example.com", "country": "CAN"}
/// });
///
/// let token = rewards.identified_token(&payload)?;
/// assert!(token.ends_with("@A2DE537C"));
/// assert_eq!(rewards.read_token(&token)?, payload);
/// # Ok::<(), rewards_lib::RewardsError>(())
/// ```
#[derive(Clone)]
pub struct Rewards {
    shop_id: String,
    codec: TokenCodec,
    validator: PayloadValidator,
    clock: Arc<dyn Clock>,
}

impl Rewards {
    /// Create an issuer for `shop_id` from a secret such as `sk_61c394cf3346077b`.
    pub fn new(shop_id: impl Into<String>, secret: &str) -> Result<Self> {
        Self::from_config(&RewardsConfig::new(shop_id, secret))
    }

    /// Create an issuer from loaded configuration.
    ///
    /// # Errors
    ///
    /// [`RewardsError::Config`] for an unusable shop id and
    /// [`RewardsError::InvalidSecret`] for a key of the wrong length.
    pub fn from_config(config: &RewardsConfig) -> Result<Self> {
        config.validate()?;
        let secret = Secret::from_config(&config.secret)?;
        let codec = TokenCodec::new(&secret).with_compression(config.compression);

        tracing::debug!(shop_id = %config.shop_id, compression = ?codec.compression(), "issuer configured");

        Ok(Self {
            shop_id: config.shop_id.clone(),
            codec,
            validator: PayloadValidator::new(),
            clock: Arc::new(SystemClock),
        })
    }

    /// Replace the time source used for partner tokens.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Choose the compression used for tokens issued from now on.
    pub fn with_compression(mut self, compression: Compression) -> Self {
        self.codec = self.codec.with_compression(compression);
        self
    }

    /// Shop id appended to every token.
    pub fn shop_id(&self) -> &str {
        &self.shop_id
    }

    /// Validate a payload without issuing a token.
    pub fn valid_identified(&self, payload: &Value) -> ValidationReport {
        self.validator.validate(payload)
    }

    /// Validate `payload` and issue a token for it.
    ///
    /// # Errors
    ///
    /// [`RewardsError::InvalidPayload`] with every failed rule when the
    /// payload does not validate; nothing is encrypted in that case.
    #[tracing::instrument(skip_all, fields(shop_id = %self.shop_id))]
    pub fn identified_token<T: Serialize + ?Sized>(&self, payload: &T) -> Result<String> {
        let value = serde_json::to_value(payload)?;

        let report = self.validator.validate(&value);
        if !report.is_valid() {
            tracing::debug!(errors = report.len(), "payload rejected");
            return Err(RewardsError::InvalidPayload {
                errors: report.into_errors(),
            });
        }

        let envelope = self.codec.encrypt(&value)?;
        tracing::debug!("identified token issued");
        Ok(self.format_token(&envelope))
    }

    /// Issue a partner token expiring [`PARTNER_TOKEN_TTL`] seconds from now.
    ///
    /// Partner tokens carry no person data and skip validation.
    #[tracing::instrument(skip_all, fields(shop_id = %self.shop_id))]
    pub fn partner_token(&self) -> Result<String> {
        let claims = PartnerClaims::new(self.clock.now() + PARTNER_TOKEN_TTL);
        let envelope = self.codec.encrypt(&claims)?;
        tracing::debug!(expires = claims.expires, "partner token issued");
        Ok(self.format_token(&envelope))
    }

    /// Verify a token's shop and decrypt its payload.
    ///
    /// # Errors
    ///
    /// - [`RewardsError::InvalidToken`] if the shop suffix is not this
    ///   issuer's; no decryption is attempted
    /// - [`RewardsError::Authentication`] if the envelope does not verify
    #[tracing::instrument(skip_all, fields(shop_id = %self.shop_id))]
    pub fn read_token(&self, token: &str) -> Result<Value> {
        self.read_token_as(token)
    }

    /// Like [`read_token`](Self::read_token), deserializing into `T`.
    pub fn read_token_as<T: DeserializeOwned>(&self, token: &str) -> Result<T> {
        let envelope = self.envelope_for_shop(token)?;

        let plaintext = self.codec.decrypt(envelope).map_err(|err| {
            tracing::warn!(error = %err, "token envelope rejected");
            err
        })?;

        Ok(serde_json::from_slice(&plaintext)?)
    }

    /// Read a partner token and check that it has not expired.
    #[tracing::instrument(skip_all, fields(shop_id = %self.shop_id))]
    pub fn read_partner_token(&self, token: &str) -> Result<PartnerClaims> {
        let value: Value = self.read_token_as(token)?;
        let claims: PartnerClaims =
            serde_json::from_value(value).map_err(|_| RewardsError::NotPartnerToken)?;
        if !claims.is_partner() {
            return Err(RewardsError::NotPartnerToken);
        }

        if claims.is_expired(self.clock.now()) {
            return Err(RewardsError::PartnerTokenExpired {
                expired_at: claims.expires,
            });
        }
        Ok(claims)
    }

    fn format_token(&self, envelope: &str) -> String {
        format!("{envelope}{SHOP_SEPARATOR}{}", self.shop_id)
    }

    fn envelope_for_shop<'a>(&self, token: &'a str) -> Result<&'a str> {
        match token.split_once(SHOP_SEPARATOR) {
            Some((envelope, shop_id)) if shop_id == self.shop_id => Ok(envelope),
            _ => {
                tracing::warn!("token shop id does not match");
                Err(RewardsError::InvalidToken)
            }
        }
    }
}

impl std::fmt::Debug for Rewards {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rewards")
            .field("shop_id", &self.shop_id)
            .field("codec", &self.codec)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::test_utils::fixtures;
    use serde_json::json;

    const SHOP_ID: &str = "A2DE537C";
    const SECRET: &str = "sk_61c394cf3346077b";

    fn rewards() -> Rewards {
        Rewards::new(SHOP_ID, SECRET).unwrap()
    }

    #[test]
    fn test_token_ends_with_shop_id() {
        let token = rewards().identified_token(&fixtures::payload()).unwrap();
        let (envelope, shop) = token.split_once('@').unwrap();
        assert_eq!(shop, SHOP_ID);
        assert!(!envelope.contains(SHOP_ID));
    }

    #[test]
    fn test_typed_round_trip() {
        let rewards = rewards();
        let payload = fixtures::typed_payload();
        let token = rewards.identified_token(&payload).unwrap();
        let decoded: crate::payload::Payload = rewards.read_token_as(&token).unwrap();
        assert_eq!(decoded, payload);
    }

    #[test]
    fn test_invalid_payload_is_not_encrypted() {
        let err = rewards().identified_token(&json!("foobar")).unwrap_err();
        assert!(matches!(err, RewardsError::InvalidPayload { .. }));
        assert_eq!(err.validation_errors().len(), 2);
    }

    #[test]
    fn test_shop_mismatch_skips_decryption() {
        let rewards = rewards();
        // Not a valid envelope: a decrypt attempt would be an auth failure.
        let err = rewards.read_token("garbage@foobar").unwrap_err();
        assert!(matches!(err, RewardsError::InvalidToken));

        let err = rewards.read_token("no-separator").unwrap_err();
        assert!(matches!(err, RewardsError::InvalidToken));
    }

    #[test]
    fn test_partner_token_expiry() {
        let clock = Arc::new(FixedClock::new(1_700_000_000));
        let rewards = rewards().with_clock(clock.clone());

        let token = rewards.partner_token().unwrap();
        assert_eq!(
            rewards.read_token(&token).unwrap(),
            json!({"type": "partner", "expires": 1_700_003_600})
        );
        assert_eq!(rewards.read_partner_token(&token).unwrap().expires, 1_700_003_600);

        clock.advance(PARTNER_TOKEN_TTL + 1);
        let err = rewards.read_partner_token(&token).unwrap_err();
        assert!(matches!(
            err,
            RewardsError::PartnerTokenExpired { expired_at: 1_700_003_600 }
        ));
    }

    #[test]
    fn test_identified_token_is_not_partner() {
        let rewards = rewards();
        let token = rewards.identified_token(&fixtures::payload()).unwrap();
        assert!(matches!(
            rewards.read_partner_token(&token),
            Err(RewardsError::NotPartnerToken)
        ));
    }

    #[test]
    fn test_non_partner_type_rejected() {
        let rewards = rewards();
        let envelope = rewards
            .codec
            .encrypt(&json!({"type": "customer", "expires": i64::MAX}))
            .unwrap();
        let token = rewards.format_token(&envelope);
        assert!(matches!(
            rewards.read_partner_token(&token),
            Err(RewardsError::NotPartnerToken)
        ));
    }

    #[test]
    fn test_authenticated_non_json_is_serialization_error() {
        let rewards = rewards();
        let envelope = rewards.codec.encrypt_bytes(b"not json").unwrap();
        let token = format!("{envelope}@{SHOP_ID}");

        let err = rewards.read_token(&token).unwrap_err();
        assert!(matches!(err, RewardsError::Serialization(_)));
        assert!(!err.is_auth_failure());
    }

    #[test]
    fn test_invalid_shop_id_rejected() {
        assert!(matches!(
            Rewards::new("A2@DE", SECRET),
            Err(RewardsError::Config(_))
        ));
        assert!(matches!(
            Rewards::new(SHOP_ID, "sk_tooshort"),
            Err(RewardsError::InvalidSecret(_))
        ));
    }
}
