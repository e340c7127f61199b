//! JWE compact serialization.
//!
//! ```text
//! BASE64URL(header).BASE64URL(encrypted key).BASE64URL(iv).BASE64URL(ciphertext).BASE64URL(tag)
//! ```
//!
//! Segments are unpadded base64url. Direct key agreement leaves the
//! encrypted key segment empty.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};

const SEGMENTS: usize = 5;

/// A parsed five-segment envelope.
///
/// `encoded_header` keeps the header exactly as it appeared on the wire
/// because it is the additional authenticated data.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompactJwe {
    pub encoded_header: String,
    pub encrypted_key: Vec<u8>,
    pub iv: Vec<u8>,
    pub ciphertext: Vec<u8>,
    pub tag: Vec<u8>,
}

impl CompactJwe {
    /// Join the segments with `.`.
    pub fn serialize(&self) -> String {
        [
            self.encoded_header.clone(),
            encode(&self.encrypted_key),
            encode(&self.iv),
            encode(&self.ciphertext),
            encode(&self.tag),
        ]
        .join(".")
    }

    /// Split and decode an envelope.
    pub fn parse(envelope: &str) -> Result<Self, String> {
        let segments: Vec<&str> = envelope.split('.').collect();
        if segments.len() != SEGMENTS {
            return Err(format!(
                "expected {SEGMENTS} segments, found {}",
                segments.len()
            ));
        }

        // Decoding validates the header segment's alphabet up front.
        decode(segments[0], "header")?;

        Ok(Self {
            encoded_header: segments[0].to_string(),
            encrypted_key: decode(segments[1], "encrypted key")?,
            iv: decode(segments[2], "iv")?,
            ciphertext: decode(segments[3], "ciphertext")?,
            tag: decode(segments[4], "tag")?,
        })
    }

    /// Decoded header bytes.
    pub fn header_bytes(&self) -> Result<Vec<u8>, String> {
        decode(&self.encoded_header, "header")
    }

    /// Additional authenticated data: the ASCII of the encoded header.
    pub fn aad(&self) -> &[u8] {
        self.encoded_header.as_bytes()
    }
}

pub fn encode(bytes: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(bytes)
}

fn decode(segment: &str, name: &str) -> Result<Vec<u8>, String> {
    URL_SAFE_NO_PAD
        .decode(segment)
        .map_err(|e| format!("invalid {name} segment: {e}"))
}
