//! Shop secret key material.

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::errors::RewardsError;

/// Prefix carried by configured secrets, stripped before use.
pub const SECRET_PREFIX: &str = "sk_";

/// A128GCM key length in bytes.
pub const KEY_LEN: usize = 16;

/// Raw symmetric key for a shop.
///
/// The key bytes are the secret's characters after the `sk_` prefix,
/// so `sk_61c394cf3346077b` yields the 16 ASCII bytes `61c394cf3346077b`.
/// Cleared from memory on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Secret {
    key: [u8; KEY_LEN],
}

impl Secret {
    /// Build from a configuration string such as `sk_61c394cf3346077b`.
    ///
    /// Only a leading `sk_` is removed. Secrets that contain `sk_` elsewhere
    /// keep it as key material, whereas a replace-all strip would drop every
    /// occurrence and derive a different key.
    pub fn from_config(secret: &str) -> Result<Self, RewardsError> {
        let raw = secret.strip_prefix(SECRET_PREFIX).unwrap_or(secret);
        Self::from_bytes(raw.as_bytes())
    }

    /// Build from raw key bytes that have already had any prefix removed.
    pub fn from_bytes(raw: &[u8]) -> Result<Self, RewardsError> {
        let key: [u8; KEY_LEN] = raw.try_into().map_err(|_| {
            RewardsError::InvalidSecret(format!(
                "expected {KEY_LEN} bytes of key material, got {}",
                raw.len()
            ))
        })?;
        Ok(Self { key })
    }

    pub(crate) fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.key
    }
}

impl std::fmt::Debug for Secret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Secret([REDACTED])")
    }
}
