//! Read command - verify and decode a token

use anyhow::Result;
use rewards_lib::Rewards;

use crate::ui;

pub fn run(rewards: &Rewards, token: &str, partner: bool, verbose: bool) -> Result<()> {
    let token = token.trim();

    if partner {
        let claims = rewards.read_partner_token(token)?;
        if verbose {
            ui::success("Partner token is valid");
            ui::key_value("Expires", &claims.expires.to_string());
        }
        println!("{}", serde_json::to_string_pretty(&claims)?);
        return Ok(());
    }

    let payload = rewards.read_token(token)?;
    if verbose {
        ui::success(&format!("Token verified for shop {}", rewards.shop_id()));
    }
    println!("{}", serde_json::to_string_pretty(&payload)?);
    Ok(())
}
