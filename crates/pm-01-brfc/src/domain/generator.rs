//! # Identifier Generation
//!
//! Both schemes hash the same canonical bytes with SHA-256d and differ only
//! in how the digest is cut down to text.
//!
//! | Scheme | Digest order | Bytes kept | Encoding | Length |
//! |--------|--------------|------------|----------|--------|
//! | `Bsvalias` | reversed (display order) | 6 | lowercase hex | 12 |
//! | `Compact` | as produced | 5 | standard base64 | 8 |
//!
//! `Bsvalias` is what published capability documents use, so it is the
//! default. `Compact` exists for deployments that settled on the shorter
//! base64 form.

use super::entities::BrfcId;
use super::errors::BrfcError;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};
use shared_crypto::hashing::{sha256d, Hash};

/// Bytes kept by [`BrfcIdScheme::Bsvalias`].
pub const BSVALIAS_ID_BYTES: usize = 6;
/// Bytes kept by [`BrfcIdScheme::Compact`].
pub const COMPACT_ID_BYTES: usize = 5;

/// How the SHA-256d digest is turned into an identifier.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BrfcIdScheme {
    /// Reverse, keep 6 bytes, hex.
    #[default]
    Bsvalias,
    /// Keep the first 5 bytes, base64.
    Compact,
}

impl BrfcIdScheme {
    fn encode(self, digest: &Hash) -> String {
        match self {
            BrfcIdScheme::Bsvalias => {
                let display: Vec<u8> = digest
                    .iter()
                    .rev()
                    .take(BSVALIAS_ID_BYTES)
                    .copied()
                    .collect();
                hex::encode(display)
            }
            BrfcIdScheme::Compact => STANDARD.encode(&digest[..COMPACT_ID_BYTES]),
        }
    }
}

/// Derive the identifier for the given descriptive fields.
///
/// Fields are trimmed before hashing. `title` and `version` must not be
/// empty after trimming; `author` may be.
pub fn generate_id(
    title: &str,
    author: &str,
    version: &str,
    scheme: BrfcIdScheme,
) -> Result<BrfcId, BrfcError> {
    let title = title.trim();
    let author = author.trim();
    let version = version.trim();

    if title.is_empty() {
        return Err(BrfcError::InvalidSpec("title is empty".into()));
    }
    if version.is_empty() {
        return Err(BrfcError::InvalidSpec("version is empty".into()));
    }

    let digest = sha256d(&canonical_bytes(title, author, version));
    Ok(BrfcId::new(scheme.encode(&digest)))
}

fn canonical_bytes(title: &str, author: &str, version: &str) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(title.len() + author.len() + version.len());
    bytes.extend_from_slice(title.as_bytes());
    bytes.extend_from_slice(author.as_bytes());
    bytes.extend_from_slice(version.as_bytes());
    bytes
}
