//! Issuer configuration.
//!
//! # Environment Variables
//!
//! - `REWARDS_SHOP_ID` - Shop identifier appended to every token
//! - `REWARDS_SECRET` - Shop secret, e.g. `sk_61c394cf3346077b`
//! - `REWARDS_COMPRESSION` - `deflate` (default) or `none` (optional)

use std::path::Path;

use serde::Deserialize;

use crate::errors::RewardsError;
use crate::jwe::Compression;
use crate::Result;

pub const ENV_SHOP_ID: &str = "REWARDS_SHOP_ID";
pub const ENV_SECRET: &str = "REWARDS_SECRET";
pub const ENV_COMPRESSION: &str = "REWARDS_COMPRESSION";

/// Settings for a [`Rewards`](crate::Rewards) issuer.
#[derive(Clone, Deserialize)]
pub struct RewardsConfig {
    /// Shop identifier. Must not contain `@`.
    pub shop_id: String,

    /// Shop secret, with or without the `sk_` prefix.
    pub secret: String,

    /// Compression for new tokens: `deflate` or `none`.
    #[serde(default)]
    pub compression: Compression,
}

impl RewardsConfig {
    /// Create a configuration with the default compression.
    pub fn new(shop_id: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            shop_id: shop_id.into(),
            secret: secret.into(),
            compression: Compression::default(),
        }
    }

    /// Set the compression used for new tokens.
    pub fn with_compression(mut self, compression: Compression) -> Self {
        self.compression = compression;
        self
    }

    /// Check the settings without building any key material.
    pub fn validate(&self) -> Result<()> {
        if self.shop_id.is_empty() {
            return Err(RewardsError::Config("shop id is empty".into()));
        }
        if self.shop_id.contains('@') {
            return Err(RewardsError::Config("shop id must not contain '@'".into()));
        }
        Ok(())
    }

    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let shop_id = std::env::var(ENV_SHOP_ID)
            .map_err(|_| RewardsError::Config(format!("{ENV_SHOP_ID} is not set")))?;
        let secret = std::env::var(ENV_SECRET)
            .map_err(|_| RewardsError::Config(format!("{ENV_SECRET} is not set")))?;

        let mut config = Self::new(shop_id, secret);
        if let Ok(compression) = std::env::var(ENV_COMPRESSION) {
            config.compression = Compression::parse(&compression).ok_or_else(|| {
                RewardsError::Config(format!("{ENV_COMPRESSION}: unknown compression {compression}"))
            })?;
        }
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from a JSON document.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| RewardsError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read configuration from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| RewardsError::Config(format!("{}: {e}", path.display())))?;
        Self::from_json(&json)
    }
}

impl std::fmt::Debug for RewardsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RewardsConfig")
            .field("shop_id", &self.shop_id)
            .field("secret", &"[REDACTED]")
            .field("compression", &self.compression)
            .finish()
    }
}
