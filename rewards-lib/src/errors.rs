//! Error types for token issuance and verification.
//!
//! Every failure the library surfaces is a [`RewardsError`]. Validation
//! problems are collected in full before [`RewardsError::InvalidPayload`] is
//! returned, while issuer mismatches and authentication failures are
//! returned immediately and never carry a partially decoded payload.

use crate::validation::ValidationError;

/// Error codes for FFI and service integration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum RewardsErrorCode {
    /// Envelope could not be authenticated or decoded
    Authentication = 3000,
    /// Partner token past its expiry
    TokenExpired = 3001,
    /// Token was issued for another shop
    InvalidToken = 3002,
    /// Secret is not usable as key material
    InvalidSecret = 3003,
    /// Decoded payload is not a partner token
    InvalidData = 5000,
    /// Payload failed validation
    ValidationFailed = 5001,
    /// Serialization error
    Serialization = 5002,
    /// Configuration missing or malformed
    Config = 5003,
    /// Internal/unexpected error
    Internal = 9999,
}

/// Comprehensive error type for token operations.
#[derive(Debug, thiserror::Error)]
pub enum RewardsError {
    /// The payload failed one or more validation rules.
    #[error("invalid payload: {} validation error(s)", .errors.len())]
    InvalidPayload {
        /// Every failed rule, in evaluation order
        errors: Vec<ValidationError>,
    },

    /// The token's shop suffix does not match this issuer.
    #[error("token was not issued for this shop")]
    InvalidToken,

    /// The envelope failed authentication or could not be decoded.
    #[error("token authentication failed: {0}")]
    Authentication(String),

    /// The configured secret cannot be used as an A128GCM key.
    #[error("invalid secret: {0}")]
    InvalidSecret(String),

    /// A partner token was presented after its expiry.
    #[error("partner token expired at timestamp {expired_at}")]
    PartnerTokenExpired {
        /// Expiration timestamp (unix epoch seconds)
        expired_at: i64,
    },

    /// The decoded token does not carry partner claims.
    #[error("token is not a partner token")]
    NotPartnerToken,

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Configuration is missing or malformed.
    #[error("configuration error: {0}")]
    Config(String),

    /// The cipher refused to encrypt.
    #[error("encryption failed: {0}")]
    Encryption(String),
}

impl RewardsError {
    /// Get the error code for FFI/service integration.
    pub fn code(&self) -> RewardsErrorCode {
        match self {
            Self::InvalidPayload { .. } => RewardsErrorCode::ValidationFailed,
            Self::InvalidToken => RewardsErrorCode::InvalidToken,
            Self::Authentication(_) => RewardsErrorCode::Authentication,
            Self::InvalidSecret(_) => RewardsErrorCode::InvalidSecret,
            Self::PartnerTokenExpired { .. } => RewardsErrorCode::TokenExpired,
            Self::NotPartnerToken => RewardsErrorCode::InvalidData,
            Self::Serialization(_) => RewardsErrorCode::Serialization,
            Self::Config(_) => RewardsErrorCode::Config,
            Self::Encryption(_) => RewardsErrorCode::Internal,
        }
    }

    /// Get the error message as an owned String (useful for FFI).
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Validation errors carried by [`RewardsError::InvalidPayload`].
    ///
    /// Empty for every other variant.
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            Self::InvalidPayload { errors } => errors,
            _ => &[],
        }
    }

    /// Returns true if the envelope itself was rejected by the cipher.
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, Self::Authentication(_))
    }

    /// Create an authentication error.
    pub fn authentication(reason: impl Into<String>) -> Self {
        Self::Authentication(reason.into())
    }
}

impl From<serde_json::Error> for RewardsError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
