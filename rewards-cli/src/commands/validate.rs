//! Validate command - report every validation error for a payload

use anyhow::Result;
use rewards_lib::validation::PayloadValidator;

use crate::ui;

pub fn run(source: &str, verbose: bool) -> Result<()> {
    let payload = super::read_payload(source)?;
    let report = PayloadValidator::new().validate(&payload);

    println!("{}", serde_json::to_string_pretty(report.errors())?);

    if report.is_valid() {
        if verbose {
            ui::success("Payload is valid");
        }
        Ok(())
    } else {
        super::print_validation_errors(report.errors());
        anyhow::bail!("payload is invalid")
    }
}
