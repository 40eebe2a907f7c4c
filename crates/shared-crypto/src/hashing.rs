//! # SHA-256 Hashing
//!
//! Bitcoin hashes everything that matters twice: transaction ids, message
//! digests and BRFC ids are all SHA-256d.

use sha2::{Digest, Sha256};

/// SHA-256 output (256-bit).
pub type Hash = [u8; 32];

/// Hash data with SHA-256 (one-shot).
pub fn sha256(data: &[u8]) -> Hash {
    Sha256::digest(data).into()
}

/// Hash data with SHA-256 twice.
pub fn sha256d(data: &[u8]) -> Hash {
    sha256(&sha256(data))
}

/// Hex-encode a hash in display order (byte-reversed), as txids are shown.
pub fn to_display_hex(hash: &Hash) -> String {
    let mut reversed = *hash;
    reversed.reverse();
    hex::encode(reversed)
}
