//! Rewards token library.
//!
//! Issues and verifies opaque identity tokens bound to a shop. A token is
//! a JWE compact envelope (direct key agreement, AES-128-GCM) followed by
//! `@` and the shop id:
//!
//! ```text
//! eyJhbGciOiJkaXIiLCJlbmMiOiJBMTI4R0NNIiwiemlwIjoiREVGIn0..<iv>.<ciphertext>.<tag>@A2DE537C
//! ```
//!
//! # Features
//!
//! - **Identified tokens**: person, campaign, group and organization data,
//!   validated before encryption
//! - **Partner tokens**: typeless credentials valid for one hour
//! - **Issuer binding**: the shop id travels in clear text and is checked
//!   before any decryption
//!
//! # Example
//!
//! ```
//! use rewards_lib::payload::{CampaignData, Country, Payload, PersonData};
//! use rewards_lib::Rewards;
//!
//! let rewards = Rewards::new("A2DE537C", "sk_61c394cf3346077b")?;
//!
//! let admin = PersonData::new(551002, "Grace Hopper", "grace@example.com", Country::Usa);
//! let payload = Payload::default()
//!     .with_user(PersonData::new(482913, "Ada Palmer", "ada@example.com", Country::Can))
//!     .with_campaign(CampaignData::new(771204, "falcons", "Running", Country::Can, admin));
//!
//! let token = rewards.identified_token(&payload)?;
//! let decoded: Payload = rewards.read_token_as(&token)?;
//! assert_eq!(decoded, payload);
//! # Ok::<(), rewards_lib::RewardsError>(())
//! ```

pub mod clock;
pub mod config;
pub mod errors;
pub mod jwe;
pub mod payload;
pub mod prelude;
mod rewards;
mod secret;
pub mod validation;

/// Test utilities for token testing.
///
/// This module is only available with the `test-utils` feature or in test builds.
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::RewardsConfig;
pub use errors::{RewardsError, RewardsErrorCode};
pub use rewards::{Rewards, PARTNER_TOKEN_TTL, SHOP_SEPARATOR};
pub use secret::{Secret, KEY_LEN, SECRET_PREFIX};

/// Common result alias for token operations.
pub type Result<T> = std::result::Result<T, RewardsError>;
