//! Partner command - issue a short-lived partner token

use anyhow::Result;
use rewards_lib::{Rewards, PARTNER_TOKEN_TTL};

use crate::ui;

pub fn run(rewards: &Rewards, verbose: bool) -> Result<()> {
    let token = rewards.partner_token()?;
    if verbose {
        ui::info(&format!("Partner token valid for {PARTNER_TOKEN_TTL} seconds"));
    }
    println!("{token}");
    Ok(())
}
