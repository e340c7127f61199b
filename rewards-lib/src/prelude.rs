//! Prelude module for convenient imports.
//!
//! ```rust,ignore
//! use rewards_lib::prelude::*;
//! ```

// Issuer
pub use crate::{Rewards, RewardsConfig, PARTNER_TOKEN_TTL};

// Error handling
pub use crate::errors::{RewardsError, RewardsErrorCode};
pub use crate::Result;

// Payload models
pub use crate::payload::{
    CampaignData, Country, GroupData, Identifier, OrganizationData, PartnerClaims, Payload,
    PersonData,
};

// Validation
pub use crate::validation::{PayloadValidator, ValidationError, ValidationErrorKind, ValidationReport};

// Time
pub use crate::clock::{Clock, FixedClock, SystemClock};
