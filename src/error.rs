//! Error types for the compatibility core

use thiserror::Error;

/// Main error type for encryption and decryption operations
///
/// Every variant is a deterministic pure-function failure: identical inputs
/// always reproduce the identical error, so nothing is retried internally.
/// Messages carry the failure category and offending sizes, never key
/// material or plaintext.
#[derive(Error, Debug)]
pub enum CryptoError {
    /// Malformed base64 input
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// Container does not match the salted wire format
    #[error("Format error: {0}")]
    Format(String),

    /// Ciphertext length is not a multiple of the AES block size
    #[error("Ciphertext length {0} is not a multiple of the block size")]
    BlockAlignment(usize),

    /// Invalid PKCS#7 padding after decryption
    #[error("Padding error: {0}")]
    Padding(String),

    /// Key length is not 16, 24, or 32 bytes
    #[error("Invalid key length: {0} bytes, expected 16, 24, or 32")]
    KeyLength(usize),

    /// Nonce length does not match the GCM standard
    #[error("Invalid nonce length: {0} bytes, expected {1}")]
    NonceLength(usize, usize),

    /// GCM authentication tag did not verify
    ///
    /// Covers both corruption and tampering; no further distinction is
    /// surfaced.
    #[error("Authentication failed")]
    Authentication,

    /// Cipher-layer encryption failed
    #[error("Encryption error: {0}")]
    Encryption(String),

    /// The operating system random source is unavailable
    #[error("System random source unavailable")]
    Random,
}

/// Result type alias for crypto operations
pub type Result<T> = std::result::Result<T, CryptoError>;
