//! Plaintext compression for the `zip` header.
//!
//! Tokens are compressed with raw DEFLATE at level 0: stored blocks only,
//! so the step changes framing but not size in any meaningful way.

use std::io::{Read, Write};

use flate2::{read::DeflateDecoder, write::DeflateEncoder, Compression as Level};
use serde::{Deserialize, Serialize};

/// Compression applied to the plaintext before encryption.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Compression {
    /// Raw DEFLATE at level 0, declared as `"zip": "DEF"`.
    #[default]
    #[serde(alias = "def")]
    Deflate,
    /// No compression and no `zip` header.
    #[serde(alias = "off")]
    None,
}

impl Compression {
    /// Parse `deflate` or `none` (case-insensitive).
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "deflate" | "def" => Some(Self::Deflate),
            "none" | "off" => Some(Self::None),
            _ => None,
        }
    }
}

pub fn deflate(data: &[u8]) -> std::io::Result<Vec<u8>> {
    let mut encoder = DeflateEncoder::new(Vec::with_capacity(data.len() + 16), Level::none());
    encoder.write_all(data)?;
    encoder.finish()
}

pub fn inflate(data: &[u8]) -> std::io::Result<Vec<u8>> {
    let mut out = Vec::with_capacity(data.len());
    DeflateDecoder::new(data).read_to_end(&mut out)?;
    Ok(out)
}
