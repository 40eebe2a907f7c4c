//! # Shared Crypto - Bitcoin Primitives
//!
//! ## Components
//!
//! | Module | Algorithm | Use Case |
//! |--------|-----------|----------|
//! | `hashing` | SHA-256, SHA-256d | Transaction ids, BRFC ids, message digests |
//! | `transaction` | Bitcoin wire format | Decoding raw transactions, txid |
//! | `ecdsa` | secp256k1 | Sender public keys, message signing keys |
//! | `message` | Bitcoin Signed Message | Sender signature over a txid |
//!
//! ## Security Properties
//!
//! - **secp256k1**: RFC 6979 deterministic signing, low-S normalization on verify
//! - **Decoding**: every length prefix is bounds-checked before allocation

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod ecdsa;
pub mod errors;
pub mod hashing;
pub mod message;
pub mod transaction;

// Re-exports
pub use ecdsa::{Secp256k1KeyPair, Secp256k1PublicKey};
pub use errors::CryptoError;
pub use hashing::{sha256, sha256d, Hash};
pub use message::{magic_hash, sign_message, verify_message, MESSAGE_MAGIC};
pub use transaction::{RawTransaction, TxInput, TxOutput};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
