//! CryptoJS salted-container wire format
//!
//! Password-mode ciphertext travels as base64 over the wire; the decoded
//! bytes are laid out as:
//!
//! ```text
//! [MAGIC "Salted__" (8)][SALT (8)][CIPHERTEXT (16*n)]
//! ```
//!
//! This is the OpenSSL `openssl enc` container that CryptoJS emits in
//! password mode. The decoder accepts exactly this shape and nothing else:
//! an earlier revision of the system had its own ad-hoc CBC framing, and
//! that format is now permanently refused rather than silently dropped from
//! the dispatch logic.

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};

use crate::error::{CryptoError, Result};
use crate::kdf::SALT_LENGTH;

/// Container magic, fixed ASCII prefix
pub const MAGIC: &[u8; 8] = b"Salted__";

/// Base64 of any byte string starting with `Salted__`
///
/// The first 10 base64 symbols only encode the magic (60 of 64 prefix bits),
/// so the check is exact regardless of what follows.
const MAGIC_B64_PREFIX: &str = "U2FsdGVkX1";

/// Minimum decoded container size: magic plus salt
const MIN_CONTAINER_LENGTH: usize = MAGIC.len() + SALT_LENGTH;

/// Wire format classification for an incoming base64 payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerFormat {
    /// CryptoJS/OpenSSL salted container
    Salted,
    /// The retired ad-hoc CBC framing from an earlier revision
    ///
    /// Recognized only to be refused: decryption of this variant always
    /// fails. It exists in the dispatch so the compatibility boundary is
    /// explicit.
    LegacyCbc,
}

impl ContainerFormat {
    /// Classify a base64 payload without decoding it
    pub fn detect(encoded: &str) -> Self {
        if encoded.starts_with(MAGIC_B64_PREFIX) {
            Self::Salted
        } else {
            Self::LegacyCbc
        }
    }
}

/// Decoded salted container: 8-byte salt plus raw CBC ciphertext
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaltedContainer {
    /// Salt fed to the key derivation
    pub salt: [u8; SALT_LENGTH],
    /// Raw AES-CBC ciphertext, padded to a 16-byte multiple
    pub ciphertext: Vec<u8>,
}

impl SaltedContainer {
    /// Assemble a container from a fresh salt and ciphertext
    pub fn new(salt: [u8; SALT_LENGTH], ciphertext: Vec<u8>) -> Self {
        Self { salt, ciphertext }
    }

    /// Serialize to the raw byte layout: magic, salt, ciphertext
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(MIN_CONTAINER_LENGTH + self.ciphertext.len());
        buf.extend_from_slice(MAGIC);
        buf.extend_from_slice(&self.salt);
        buf.extend_from_slice(&self.ciphertext);
        buf
    }

    /// Serialize and base64-encode for wire transport
    pub fn encode(&self) -> String {
        BASE64.encode(self.to_bytes())
    }

    /// Parse a base64 wire payload into salt and ciphertext
    ///
    /// # Errors
    ///
    /// * [`CryptoError::Encoding`] if the base64 is malformed
    /// * [`CryptoError::Format`] if the decoded payload is shorter than 16
    ///   bytes or does not start with the `Salted__` magic
    pub fn decode(encoded: &str) -> Result<Self> {
        let decoded = BASE64
            .decode(encoded)
            .map_err(|e| CryptoError::Encoding(e.to_string()))?;

        if decoded.len() < MIN_CONTAINER_LENGTH {
            return Err(CryptoError::Format(format!(
                "container too short: {} bytes, expected at least {}",
                decoded.len(),
                MIN_CONTAINER_LENGTH
            )));
        }

        if &decoded[..MAGIC.len()] != MAGIC {
            return Err(CryptoError::Format("missing Salted__ magic".to_string()));
        }

        let mut salt = [0u8; SALT_LENGTH];
        salt.copy_from_slice(&decoded[MAGIC.len()..MIN_CONTAINER_LENGTH]);

        Ok(Self {
            salt,
            ciphertext: decoded[MIN_CONTAINER_LENGTH..].to_vec(),
        })
    }
}
