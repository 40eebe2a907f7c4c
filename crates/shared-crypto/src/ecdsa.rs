//! # ECDSA Keys (secp256k1)
//!
//! Sender keys arrive as hex strings in either SEC1 form. They are always
//! normalized to the 33-byte compressed encoding, which is what a Paymail
//! sender's address is derived from.

use crate::CryptoError;
use k256::ecdsa::{SigningKey, VerifyingKey};

/// Compressed secp256k1 public key (33 bytes).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Secp256k1PublicKey([u8; 33]);

impl Secp256k1PublicKey {
    /// Parse SEC1 bytes (33-byte compressed or 65-byte uncompressed).
    pub fn from_sec1_bytes(bytes: &[u8]) -> Result<Self, CryptoError> {
        let verifying_key =
            VerifyingKey::from_sec1_bytes(bytes).map_err(|_| CryptoError::InvalidPublicKey)?;
        Self::from_verifying_key(&verifying_key)
    }

    /// Parse a hex-encoded SEC1 public key.
    pub fn from_hex(pubkey: &str) -> Result<Self, CryptoError> {
        let bytes = hex::decode(pubkey.trim()).map_err(|e| CryptoError::InvalidHex(e.to_string()))?;
        Self::from_sec1_bytes(&bytes)
    }

    /// Compress a k256 verifying key.
    pub fn from_verifying_key(key: &VerifyingKey) -> Result<Self, CryptoError> {
        let sec1 = key.to_sec1_bytes();
        let bytes: [u8; 33] = sec1
            .as_ref()
            .try_into()
            .map_err(|_| CryptoError::InvalidPublicKey)?;
        Ok(Self(bytes))
    }

    /// Get raw compressed bytes.
    pub fn as_bytes(&self) -> &[u8; 33] {
        &self.0
    }

    /// Lowercase hex of the compressed encoding.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

/// secp256k1 keypair used to sign Bitcoin messages.
pub struct Secp256k1KeyPair {
    signing_key: SigningKey,
}

impl Secp256k1KeyPair {
    /// Generate random keypair.
    pub fn generate() -> Self {
        let signing_key = SigningKey::random(&mut rand::thread_rng());
        Self { signing_key }
    }

    /// Create from secret key bytes (32 bytes).
    pub fn from_bytes(bytes: [u8; 32]) -> Result<Self, CryptoError> {
        let signing_key =
            SigningKey::from_bytes((&bytes).into()).map_err(|_| CryptoError::InvalidPrivateKey)?;
        Ok(Self { signing_key })
    }

    /// Get public key (compressed, 33 bytes).
    pub fn public_key(&self) -> Secp256k1PublicKey {
        let sec1 = self.signing_key.verifying_key().to_sec1_bytes();
        let mut bytes = [0u8; 33];
        bytes.copy_from_slice(&sec1[..33]);
        Secp256k1PublicKey(bytes)
    }

    pub(crate) fn signing_key(&self) -> &SigningKey {
        &self.signing_key
    }

    /// Get secret key bytes (for serialization).
    pub fn to_bytes(&self) -> [u8; 32] {
        self.signing_key.to_bytes().into()
    }
}
