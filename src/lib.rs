//! # aescompat
//!
//! A cross-runtime symmetric-encryption compatibility layer: pure,
//! deterministic transforms that let a server exchange ciphertext with
//! browser-side cryptography libraries without either side adopting the
//! other's conventions.
//!
//! ## Features
//!
//! - OpenSSL `EVP_BytesToKey` derivation (MD5, single iteration), matching
//!   CryptoJS "password mode"
//! - The `"Salted__" || salt || ciphertext` wire container, base64-framed
//! - AES-256-CBC with PKCS#7 padding over the derived key material
//! - AES-GCM with the key-length normalization node-forge applies to
//!   arbitrary-length secrets
//!
//! Correctness here means byte-for-byte interoperability with the foreign
//! side, not internal convention; the derivation, normalization, and
//! framing rules are frozen contracts guarded by checked-in golden vectors.
//!
//! ## Example
//!
//! ```
//! use aescompat::{cbc, gcm};
//!
//! # fn main() -> aescompat::Result<()> {
//! // CryptoJS password mode: one base64 salted container.
//! let container = cbc::encrypt(b"hello", b"passphrase")?;
//! assert_eq!(cbc::decrypt(&container, b"passphrase")?, b"hello");
//!
//! // node-forge GCM: independent base64 ciphertext and nonce.
//! let (cipher, nonce) = gcm::encrypt(b"hello", b"any-length secret")?;
//! assert_eq!(gcm::decrypt(&cipher, &nonce, b"any-length secret")?, b"hello");
//! # Ok(())
//! # }
//! ```
//!
//! Every function is a pure transform over its explicit inputs: no key
//! store, no caching, no shared mutable state. The only external resource
//! is the OS random source used for fresh salts and nonces, so all
//! operations are safe to call concurrently.

pub mod cbc;
pub mod error;
pub mod format;
pub mod gcm;
pub mod kdf;
pub mod key;

// Re-export main types
// `self::` disambiguates from the external `cbc` crate.
pub use self::cbc::BLOCK_LENGTH;
pub use error::{CryptoError, Result};
pub use format::{ContainerFormat, MAGIC, SaltedContainer};
pub use gcm::{NONCE_LENGTH, TAG_LENGTH, join_wire_pair, split_wire_pair};
pub use kdf::{DerivedKey, IV_LENGTH, KEY_LENGTH, SALT_LENGTH, evp_bytes_to_key};
pub use key::{
    AES_128_KEY_LENGTH, AES_192_KEY_LENGTH, AES_256_KEY_LENGTH, normalize_key,
};

#[cfg(test)]
mod tests;
