//! Key-length normalization for the GCM path
//!
//! Replicates the exact padding/truncation rules of the node-forge frontend,
//! which accepts arbitrary-length secrets and silently coerces them to a
//! valid AES key size before encrypting. The branch order below is a frozen
//! interoperability contract: a 20-byte secret is padded to 32 bytes, never
//! truncated to 16, because that is what the browser side does. Changing any
//! branch breaks cross-side decryption without any visible error.

/// AES-128 key size (16 bytes)
pub const AES_128_KEY_LENGTH: usize = 16;

/// AES-192 key size (24 bytes)
pub const AES_192_KEY_LENGTH: usize = 24;

/// AES-256 key size (32 bytes)
pub const AES_256_KEY_LENGTH: usize = 32;

/// Normalize an arbitrary-length secret to a valid AES key length
///
/// Rules, applied in order:
/// 1. Shorter than 16 bytes: zero-pad right to exactly 16.
/// 2. Longer than 32 bytes: truncate to the first 32.
/// 3. Length not one of 16/24/32: zero-pad right to 32.
/// 4. Otherwise: use as-is.
///
/// Never fails; the result is always 16, 24, or 32 bytes.
///
/// # Example
///
/// ```
/// use aescompat::normalize_key;
///
/// assert_eq!(normalize_key(b"short").len(), 16);
/// assert_eq!(normalize_key(&[0x61; 20]).len(), 32);
/// assert_eq!(normalize_key(&[0x61; 40]).len(), 32);
/// ```
pub fn normalize_key(secret: &[u8]) -> Vec<u8> {
    let mut key = secret.to_vec();

    if key.len() < AES_128_KEY_LENGTH {
        key.resize(AES_128_KEY_LENGTH, 0);
    } else if key.len() > AES_256_KEY_LENGTH {
        key.truncate(AES_256_KEY_LENGTH);
    } else if key.len() != AES_128_KEY_LENGTH
        && key.len() != AES_192_KEY_LENGTH
        && key.len() != AES_256_KEY_LENGTH
    {
        key.resize(AES_256_KEY_LENGTH, 0);
    }

    key
}
