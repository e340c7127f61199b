//! Issue command - validate a payload and print its token

use anyhow::Result;
use rewards_lib::{Rewards, RewardsError};

use crate::ui;

pub fn run(rewards: &Rewards, source: &str, verbose: bool) -> Result<()> {
    let payload = super::read_payload(source)?;

    match rewards.identified_token(&payload) {
        Ok(token) => {
            if verbose {
                ui::success(&format!("Issued token for shop {}", rewards.shop_id()));
            }
            println!("{token}");
            Ok(())
        }
        Err(err @ RewardsError::InvalidPayload { .. }) => {
            super::print_validation_errors(err.validation_errors());
            Err(err.into())
        }
        Err(err) => Err(err.into()),
    }
}
