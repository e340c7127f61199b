//! Test utilities for token tests.
//!
//! Random but valid person, campaign, group and organization data, plus the
//! shop id and secret the test suites share.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use rewards_lib::test_utils::fixtures;
//! use rewards_lib::Rewards;
//!
//! let rewards = Rewards::new(fixtures::TEST_SHOP_ID, fixtures::TEST_SECRET)?;
//! let token = rewards.identified_token(&fixtures::payload())?;
//! ```

pub mod fixtures;

pub use fixtures::{TEST_SECRET, TEST_SHOP_ID};
