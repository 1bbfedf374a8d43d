//! OpenSSL `EVP_BytesToKey` emulation for CryptoJS password mode
//!
//! CryptoJS's `AES.encrypt(text, passphrase)` derives its key and IV with
//! OpenSSL's legacy `EVP_BytesToKey` algorithm: MD5, one iteration, chained
//! digests. This module reproduces that derivation byte-for-byte so that
//! ciphertext can cross between the two sides.
//!
//! This is not a modern KDF. There is no stretching beyond the digest
//! chaining, which is exactly why it stays compatible with the browser side.

use md5::{Digest, Md5};

/// Derived key size for AES-256 (32 bytes)
pub const KEY_LENGTH: usize = 32;

/// IV size for AES-CBC (16 bytes)
pub const IV_LENGTH: usize = 16;

/// Salt size used by password mode (8 bytes)
pub const SALT_LENGTH: usize = 8;

/// Key and IV produced by [`evp_bytes_to_key`]
///
/// A deterministic function of `(password, salt)`: identical inputs always
/// yield identical material. Ephemeral by design, computed per call and
/// never cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedKey {
    /// AES-256 key
    pub key: [u8; KEY_LENGTH],
    /// CBC initialization vector
    pub iv: [u8; IV_LENGTH],
}

/// Derive a 32-byte key and 16-byte IV from a password and 8-byte salt
///
/// Algorithm: `D0 = MD5(password || salt)`, then
/// `Di = MD5(D(i-1) || password || salt)` appended until at least 48 bytes
/// are accumulated. Bytes 0..32 become the key, 32..48 the IV. Single
/// iteration, matching OpenSSL's default and CryptoJS.
pub fn evp_bytes_to_key(password: &[u8], salt: &[u8; SALT_LENGTH]) -> DerivedKey {
    let mut material = Vec::with_capacity(KEY_LENGTH + IV_LENGTH);
    let mut digest = [0u8; 16];

    let mut hasher = Md5::new();
    hasher.update(password);
    hasher.update(salt);
    digest.copy_from_slice(&hasher.finalize());
    material.extend_from_slice(&digest);

    while material.len() < KEY_LENGTH + IV_LENGTH {
        let mut hasher = Md5::new();
        hasher.update(digest);
        hasher.update(password);
        hasher.update(salt);
        digest.copy_from_slice(&hasher.finalize());
        material.extend_from_slice(&digest);
    }

    let mut key = [0u8; KEY_LENGTH];
    let mut iv = [0u8; IV_LENGTH];
    key.copy_from_slice(&material[..KEY_LENGTH]);
    iv.copy_from_slice(&material[KEY_LENGTH..KEY_LENGTH + IV_LENGTH]);

    DerivedKey { key, iv }
}
