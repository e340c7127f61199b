//! Terminal UI utilities
//!
//! Everything here writes to stderr; stdout is reserved for tokens and
//! decoded payloads so they can be piped.

use colored::Colorize;

/// Print a success message
pub fn success(message: &str) {
    eprintln!("{} {}", "✓".green().bold(), message);
}

/// Print an error message
pub fn error(message: &str) {
    eprintln!("{} {}", "✗".red().bold(), message);
}

/// Print an info message
pub fn info(message: &str) {
    eprintln!("{} {}", "ℹ".blue().bold(), message);
}

/// Print a key-value pair
pub fn key_value(key: &str, value: &str) {
    eprintln!("  {}: {}", key.cyan(), value);
}
