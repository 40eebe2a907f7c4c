//! # Bitcoin Signed Message
//!
//! Compact recoverable signatures over `varint(len(magic)) || magic ||
//! varint(len(msg)) || msg`, hashed with SHA-256d and transported as 65-byte
//! base64 strings: `header || r || s`.
//!
//! Header byte: `27 + recovery_id`, plus 4 when the signer's key is
//! compressed. Paymail senders identify with compressed keys, so a signature
//! flagged uncompressed never verifies against one.

use crate::ecdsa::{Secp256k1KeyPair, Secp256k1PublicKey};
use crate::hashing::{sha256d, Hash};
use crate::transaction::write_varint;
use crate::CryptoError;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use k256::ecdsa::{RecoveryId, Signature, VerifyingKey};

/// Prefix mixed into every signed message digest.
pub const MESSAGE_MAGIC: &str = "Bitcoin Signed Message:\n";

const COMPACT_SIGNATURE_LEN: usize = 65;
const HEADER_BASE: u8 = 27;
const HEADER_COMPRESSED: u8 = 4;

/// Digest that is actually signed for `message`.
pub fn magic_hash(message: &str) -> Hash {
    let mut buf = Vec::with_capacity(MESSAGE_MAGIC.len() + message.len() + 10);
    write_varint(&mut buf, MESSAGE_MAGIC.len() as u64);
    buf.extend_from_slice(MESSAGE_MAGIC.as_bytes());
    write_varint(&mut buf, message.len() as u64);
    buf.extend_from_slice(message.as_bytes());
    sha256d(&buf)
}

/// Sign `message` and return the base64 compact signature.
pub fn sign_message(keypair: &Secp256k1KeyPair, message: &str) -> Result<String, CryptoError> {
    let digest = magic_hash(message);
    let (signature, recovery_id) = keypair
        .signing_key()
        .sign_prehash_recoverable(&digest)
        .map_err(|_| CryptoError::InvalidPrivateKey)?;

    let mut compact = [0u8; COMPACT_SIGNATURE_LEN];
    compact[0] = HEADER_BASE + HEADER_COMPRESSED + recovery_id.to_byte();
    compact[1..].copy_from_slice(&signature.to_bytes());
    Ok(STANDARD.encode(compact))
}

/// Recover the signing key from a base64 compact signature.
///
/// Returns the key and whether the header claims a compressed key.
pub fn recover_public_key(
    signature: &str,
    message: &str,
) -> Result<(Secp256k1PublicKey, bool), CryptoError> {
    let raw = STANDARD
        .decode(signature.trim())
        .map_err(|_| CryptoError::InvalidSignatureFormat)?;
    if raw.len() != COMPACT_SIGNATURE_LEN {
        return Err(CryptoError::InvalidSignatureFormat);
    }

    let header = raw[0];
    if !(HEADER_BASE..HEADER_BASE + 8).contains(&header) {
        return Err(CryptoError::InvalidRecoveryHeader(header));
    }
    let compressed = header >= HEADER_BASE + HEADER_COMPRESSED;
    let recovery_byte = (header - HEADER_BASE) & 0x03;
    let mut recovery_id =
        RecoveryId::from_byte(recovery_byte).ok_or(CryptoError::InvalidRecoveryHeader(header))?;

    let mut signature =
        Signature::from_slice(&raw[1..]).map_err(|_| CryptoError::InvalidSignatureFormat)?;
    // k256 only verifies low-S; flipping S mirrors the point, so flip parity too.
    if let Some(normalized) = signature.normalize_s() {
        signature = normalized;
        recovery_id = RecoveryId::new(!recovery_id.is_y_odd(), recovery_id.is_x_reduced());
    }

    let digest = magic_hash(message);
    let key = VerifyingKey::recover_from_prehash(&digest, &signature, recovery_id)
        .map_err(|_| CryptoError::RecoveryFailed)?;
    Ok((Secp256k1PublicKey::from_verifying_key(&key)?, compressed))
}

/// Verify that `signature` over `message` was produced by `expected`.
pub fn verify_message(
    expected: &Secp256k1PublicKey,
    signature: &str,
    message: &str,
) -> Result<(), CryptoError> {
    let (recovered, compressed) = recover_public_key(signature, message)?;
    if compressed && recovered == *expected {
        Ok(())
    } else {
        Err(CryptoError::SignatureVerificationFailed)
    }
}
