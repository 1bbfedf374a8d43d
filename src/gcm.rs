//! AES-GCM with length-normalized keys, node-forge-compatible
//!
//! Mirrors the browser-side node-forge usage: the secret is coerced to a
//! valid AES key length by [`normalize_key`], the nonce is 12 bytes, the
//! 16-byte authentication tag is appended to the ciphertext, and both
//! ciphertext-with-tag and nonce travel as independent base64 strings.
//! Associated data is always empty.
//!
//! All three AES variants are reachable: the normalizer emits 16-, 24-, or
//! 32-byte keys depending on the secret length.

use aes::Aes192;
use aes_gcm::aead::{Aead, KeyInit, Nonce};
use aes_gcm::{Aes128Gcm, Aes256Gcm, AesGcm};
use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use getrandom::fill;
use typenum::U12;

use crate::error::{CryptoError, Result};
use crate::key::{
    AES_128_KEY_LENGTH, AES_192_KEY_LENGTH, AES_256_KEY_LENGTH, normalize_key,
};

/// GCM nonce size (12 bytes, the GCM standard)
pub const NONCE_LENGTH: usize = 12;

/// GCM authentication tag size (16 bytes)
pub const TAG_LENGTH: usize = 16;

// aes-gcm only aliases the 128 and 256 variants.
type Aes192Gcm = AesGcm<Aes192, U12>;

// The nonce array type is identical for all three key sizes.
type GcmNonce = Nonce<Aes256Gcm>;

/// Encrypt plaintext under a normalized secret
///
/// Generates a fresh random 12-byte nonce and seals with empty associated
/// data. Returns `(base64(ciphertext || tag), base64(nonce))`; callers that
/// need single-field transport conventionally join the pair with `|`, see
/// [`join_wire_pair`].
///
/// # Errors
///
/// * [`CryptoError::Random`] if the OS random source is unavailable
/// * [`CryptoError::Encryption`] if the AEAD seal fails
pub fn encrypt(plaintext: &[u8], secret: &[u8]) -> Result<(String, String)> {
    let key = normalize_key(secret);

    let mut nonce_bytes = [0u8; NONCE_LENGTH];
    fill(&mut nonce_bytes).map_err(|_| CryptoError::Random)?;

    let sealed = seal(&key, &GcmNonce::from(nonce_bytes), plaintext)?;

    Ok((BASE64.encode(sealed), BASE64.encode(nonce_bytes)))
}

/// Decrypt a base64 `(ciphertext || tag, nonce)` pair
///
/// The tag is verified before any plaintext is returned; corruption and
/// tampering are indistinguishable by design.
///
/// # Errors
///
/// * [`CryptoError::Encoding`] on malformed base64
/// * [`CryptoError::KeyLength`] if the normalized key is not 16/24/32 bytes
///   (unreachable through [`normalize_key`], checked defensively)
/// * [`CryptoError::NonceLength`] if the decoded nonce is not 12 bytes
/// * [`CryptoError::Authentication`] if the tag does not verify
pub fn decrypt(cipher_b64: &str, nonce_b64: &str, secret: &[u8]) -> Result<Vec<u8>> {
    let key = normalize_key(secret);

    let sealed = BASE64
        .decode(cipher_b64)
        .map_err(|e| CryptoError::Encoding(format!("ciphertext: {e}")))?;
    let nonce_bytes = BASE64
        .decode(nonce_b64)
        .map_err(|e| CryptoError::Encoding(format!("nonce: {e}")))?;

    if !matches!(
        key.len(),
        AES_128_KEY_LENGTH | AES_192_KEY_LENGTH | AES_256_KEY_LENGTH
    ) {
        return Err(CryptoError::KeyLength(key.len()));
    }

    let nonce_len = nonce_bytes.len();
    let nonce_bytes: [u8; NONCE_LENGTH] = nonce_bytes
        .try_into()
        .map_err(|_| CryptoError::NonceLength(nonce_len, NONCE_LENGTH))?;

    open(&key, &GcmNonce::from(nonce_bytes), &sealed)
}

/// Join a ciphertext/nonce pair into the `cipher|nonce` transport form
pub fn join_wire_pair(cipher_b64: &str, nonce_b64: &str) -> String {
    format!("{cipher_b64}|{nonce_b64}")
}

/// Split the `cipher|nonce` transport form back into its two components
///
/// # Errors
///
/// * [`CryptoError::Format`] if the separator is missing
pub fn split_wire_pair(wire: &str) -> Result<(&str, &str)> {
    wire.split_once('|')
        .ok_or_else(|| CryptoError::Format("expected 'cipher|nonce' wire pair".to_string()))
}

/// Seal with the AES variant selected by key length
fn seal(key: &[u8], nonce: &GcmNonce, plaintext: &[u8]) -> Result<Vec<u8>> {
    let sealed = match key.len() {
        AES_128_KEY_LENGTH => Aes128Gcm::new_from_slice(key)
            .map_err(|_| CryptoError::KeyLength(key.len()))?
            .encrypt(nonce, plaintext),
        AES_192_KEY_LENGTH => Aes192Gcm::new_from_slice(key)
            .map_err(|_| CryptoError::KeyLength(key.len()))?
            .encrypt(nonce, plaintext),
        AES_256_KEY_LENGTH => Aes256Gcm::new_from_slice(key)
            .map_err(|_| CryptoError::KeyLength(key.len()))?
            .encrypt(nonce, plaintext),
        len => return Err(CryptoError::KeyLength(len)),
    };

    sealed.map_err(|_| CryptoError::Encryption("AEAD seal failed".to_string()))
}

/// Open with the AES variant selected by key length, verifying the tag
fn open(key: &[u8], nonce: &GcmNonce, sealed: &[u8]) -> Result<Vec<u8>> {
    let opened = match key.len() {
        AES_128_KEY_LENGTH => Aes128Gcm::new_from_slice(key)
            .map_err(|_| CryptoError::KeyLength(key.len()))?
            .decrypt(nonce, sealed),
        AES_192_KEY_LENGTH => Aes192Gcm::new_from_slice(key)
            .map_err(|_| CryptoError::KeyLength(key.len()))?
            .decrypt(nonce, sealed),
        AES_256_KEY_LENGTH => Aes256Gcm::new_from_slice(key)
            .map_err(|_| CryptoError::KeyLength(key.len()))?
            .decrypt(nonce, sealed),
        len => return Err(CryptoError::KeyLength(len)),
    };

    opened.map_err(|_| CryptoError::Authentication)
}
