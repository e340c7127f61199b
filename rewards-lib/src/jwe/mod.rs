//! JWE envelopes: direct key agreement with AES-128-GCM.
//!
//! Tokens carry their payload in a JWE compact serialization:
//!
//! ```text
//! header . (empty) . iv . ciphertext . tag
//! ```
//!
//! The header is `{"alg":"dir","enc":"A128GCM"}` plus `"zip":"DEF"` when the
//! plaintext was deflated. The shop secret is the content encryption key.

mod codec;
mod compact;
mod compression;
mod header;

pub use codec::{TokenCodec, IV_SIZE, TAG_SIZE};
pub use compact::CompactJwe;
pub use compression::Compression;
pub use header::{JweHeader, ALG_DIR, ENC_A128GCM, ZIP_DEFLATE};
