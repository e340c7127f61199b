//! CLI command implementations

pub mod issue;
pub mod partner;
pub mod read;
pub mod validate;

use std::io::Read;

use anyhow::{Context, Result};
use rewards_lib::validation::ValidationError;
use serde_json::Value;

use crate::ui;

/// Read a payload from a file, or from stdin when `source` is `-`.
pub fn read_payload(source: &str) -> Result<Value> {
    let json = if source == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read payload from stdin")?;
        buf
    } else {
        std::fs::read_to_string(source)
            .with_context(|| format!("failed to read payload file {source}"))?
    };

    serde_json::from_str(&json).context("payload is not valid JSON")
}

/// Print validation errors in evaluation order.
pub fn print_validation_errors(errors: &[ValidationError]) {
    ui::error(&format!("Payload has {} validation error(s)", errors.len()));
    for (i, err) in errors.iter().enumerate() {
        ui::key_value(&format!("{} {}", i + 1, err.label()), err.message());
    }
}
