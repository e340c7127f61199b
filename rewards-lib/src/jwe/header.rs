//! JOSE protected header for direct-key A128GCM envelopes.

use serde::{Deserialize, Serialize};

/// Key management algorithm: the shared secret is the content key.
pub const ALG_DIR: &str = "dir";

/// Content encryption: AES-128 in Galois/Counter Mode.
pub const ENC_A128GCM: &str = "A128GCM";

/// Compression: raw DEFLATE (RFC 1951).
pub const ZIP_DEFLATE: &str = "DEF";

/// Protected header carried in the first envelope segment.
///
/// Field order is the serialized order, so an uncompressed header encodes
/// as exactly `{"alg":"dir","enc":"A128GCM"}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct JweHeader {
    pub alg: String,
    pub enc: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
}

impl JweHeader {
    /// Header for a direct-key A128GCM envelope.
    pub fn direct_a128gcm() -> Self {
        Self {
            alg: ALG_DIR.to_string(),
            enc: ENC_A128GCM.to_string(),
            zip: None,
        }
    }

    /// Declare DEFLATE compression of the plaintext.
    pub fn with_deflate(mut self) -> Self {
        self.zip = Some(ZIP_DEFLATE.to_string());
        self
    }

    /// True if the plaintext was compressed before encryption.
    pub fn is_deflated(&self) -> bool {
        self.zip.as_deref() == Some(ZIP_DEFLATE)
    }

    /// Reject headers this codec cannot decrypt.
    pub fn ensure_supported(&self) -> Result<(), String> {
        if self.alg != ALG_DIR {
            return Err(format!("unsupported alg: {}", self.alg));
        }
        if self.enc != ENC_A128GCM {
            return Err(format!("unsupported enc: {}", self.enc));
        }
        match self.zip.as_deref() {
            None | Some(ZIP_DEFLATE) => Ok(()),
            Some(other) => Err(format!("unsupported zip: {other}")),
        }
    }
}
