//! Crypto error types.

use thiserror::Error;

/// Cryptographic and codec errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CryptoError {
    /// Input is not valid hexadecimal
    #[error("Invalid hex: {0}")]
    InvalidHex(String),

    /// Transaction ended before a field could be read
    #[error("Truncated transaction: missing {0}")]
    TruncatedTransaction(&'static str),

    /// Bytes left over after the lock time
    #[error("Unexpected {0} trailing bytes after transaction")]
    TrailingBytes(usize),

    /// Invalid public key
    #[error("Invalid public key")]
    InvalidPublicKey,

    /// Invalid private key
    #[error("Invalid private key")]
    InvalidPrivateKey,

    /// Signature is not base64 or not 65 bytes
    #[error("Invalid signature format")]
    InvalidSignatureFormat,

    /// Compact signature header outside 27..=34
    #[error("Invalid recovery header: {0}")]
    InvalidRecoveryHeader(u8),

    /// Failed to recover public key from signature
    #[error("Failed to recover public key")]
    RecoveryFailed,

    /// Signature verification failed
    #[error("Signature verification failed")]
    SignatureVerificationFailed,
}
