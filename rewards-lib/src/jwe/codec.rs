//! AES-128-GCM token envelopes.
//!
//! # Security Properties
//!
//! - **Confidentiality**: AES-128 encryption under the shop secret
//! - **Integrity**: the GCM tag covers the ciphertext and the encoded header
//! - **Unique Nonces**: random 96-bit IV per envelope
//!
//! Any failure while opening an envelope (bad segment, unknown header,
//! tag mismatch, bad compression) is reported as
//! [`RewardsError::Authentication`] and nothing is returned.

use aes_gcm::{
    aead::{AeadInPlace, KeyInit},
    Aes128Gcm, Key, Nonce, Tag,
};
use serde::Serialize;

use super::compact::{encode, CompactJwe};
use super::compression::{self, Compression};
use super::header::JweHeader;
use crate::errors::RewardsError;
use crate::secret::Secret;
use crate::Result;

/// Size of the IV in bytes (96 bits for GCM).
pub const IV_SIZE: usize = 12;

/// Size of the authentication tag in bytes.
pub const TAG_SIZE: usize = 16;

/// Encrypts and decrypts token envelopes with one shop secret.
///
/// # Example
///
/// ```
/// use rewards_lib::jwe::TokenCodec;
/// use rewards_lib::Secret;
///
/// let codec = TokenCodec::new(&Secret::from_config("sk_61c394cf3346077b")?);
/// let envelope = codec.encrypt(&serde_json::json!({"type": "partner"}))?;
/// assert_eq!(envelope.split('.').count(), 5);
///
/// let plaintext = codec.decrypt(&envelope)?;
/// assert_eq!(plaintext, br#"{"type":"partner"}"#);
/// # Ok::<(), rewards_lib::RewardsError>(())
/// ```
#[derive(Clone)]
pub struct TokenCodec {
    cipher: Aes128Gcm,
    compression: Compression,
}

impl TokenCodec {
    /// Create a codec that deflates plaintexts before encryption.
    pub fn new(secret: &Secret) -> Self {
        Self {
            cipher: Aes128Gcm::new(Key::<Aes128Gcm>::from_slice(secret.as_bytes())),
            compression: Compression::default(),
        }
    }

    /// Choose the compression used for new envelopes.
    ///
    /// Decryption follows whatever the envelope header declares.
    pub fn with_compression(mut self, compression: Compression) -> Self {
        self.compression = compression;
        self
    }

    /// Compression applied to new envelopes.
    pub fn compression(&self) -> Compression {
        self.compression
    }

    /// Serialize `payload` as JSON and encrypt it.
    pub fn encrypt<T: Serialize + ?Sized>(&self, payload: &T) -> Result<String> {
        let plaintext = serde_json::to_vec(payload)?;
        self.encrypt_bytes(&plaintext)
    }

    /// Encrypt raw plaintext into a compact envelope.
    pub fn encrypt_bytes(&self, plaintext: &[u8]) -> Result<String> {
        let mut header = JweHeader::direct_a128gcm();
        let mut buffer = match self.compression {
            Compression::Deflate => {
                header = header.with_deflate();
                compression::deflate(plaintext)
                    .map_err(|e| RewardsError::Encryption(e.to_string()))?
            }
            Compression::None => plaintext.to_vec(),
        };

        let encoded_header = encode(&serde_json::to_vec(&header)?);

        let mut iv = [0u8; IV_SIZE];
        rand::RngCore::fill_bytes(&mut rand::thread_rng(), &mut iv);

        let tag = self
            .cipher
            .encrypt_in_place_detached(
                Nonce::from_slice(&iv),
                encoded_header.as_bytes(),
                &mut buffer,
            )
            .map_err(|e| RewardsError::Encryption(e.to_string()))?;

        Ok(CompactJwe {
            encoded_header,
            encrypted_key: Vec::new(),
            iv: iv.to_vec(),
            ciphertext: buffer,
            tag: tag.to_vec(),
        }
        .serialize())
    }

    /// Authenticate and decrypt an envelope, returning the plaintext bytes.
    pub fn decrypt(&self, envelope: &str) -> Result<Vec<u8>> {
        let jwe = CompactJwe::parse(envelope).map_err(RewardsError::Authentication)?;

        let header: JweHeader = serde_json::from_slice(
            &jwe.header_bytes().map_err(RewardsError::Authentication)?,
        )
        .map_err(|e| RewardsError::authentication(format!("invalid header: {e}")))?;
        header
            .ensure_supported()
            .map_err(RewardsError::Authentication)?;

        if !jwe.encrypted_key.is_empty() {
            return Err(RewardsError::authentication(
                "direct key agreement requires an empty encrypted key",
            ));
        }
        if jwe.iv.len() != IV_SIZE {
            return Err(RewardsError::authentication(format!(
                "iv must be {IV_SIZE} bytes, got {}",
                jwe.iv.len()
            )));
        }
        if jwe.tag.len() != TAG_SIZE {
            return Err(RewardsError::authentication(format!(
                "tag must be {TAG_SIZE} bytes, got {}",
                jwe.tag.len()
            )));
        }

        let mut buffer = jwe.ciphertext.clone();
        self.cipher
            .decrypt_in_place_detached(
                Nonce::from_slice(&jwe.iv),
                jwe.aad(),
                &mut buffer,
                Tag::from_slice(&jwe.tag),
            )
            .map_err(|_| RewardsError::authentication("tag mismatch"))?;

        if header.is_deflated() {
            compression::inflate(&buffer)
                .map_err(|e| RewardsError::authentication(format!("invalid deflate data: {e}")))
        } else {
            Ok(buffer)
        }
    }
}

impl std::fmt::Debug for TokenCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenCodec")
            .field("alg", &super::header::ALG_DIR)
            .field("enc", &super::header::ENC_A128GCM)
            .field("compression", &self.compression)
            .finish()
    }
}
