//! # Domain Entities
//!
//! Core data structures for the receipt pipeline.

use serde::{Deserialize, Deserializer, Serialize};

// =============================================================================
// Submission
// =============================================================================

/// Optional sender-supplied metadata.
///
/// Every field is either present with content or absent. Blank strings are
/// treated as absent, both when deserializing and when built through
/// [`SenderMetadata::new`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SenderMetadata {
    /// Sender's paymail
    #[serde(
        default,
        deserialize_with = "blank_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub sender: Option<String>,
    /// Hex SEC1 public key of the sender
    #[serde(
        default,
        deserialize_with = "blank_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub pubkey: Option<String>,
    /// Signature of the txid by `pubkey`
    #[serde(
        default,
        deserialize_with = "blank_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub signature: Option<String>,
    /// Human readable note for the receiver
    #[serde(
        default,
        deserialize_with = "blank_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub note: Option<String>,
}

impl SenderMetadata {
    /// Build metadata, dropping blank fields.
    pub fn new(
        sender: Option<String>,
        pubkey: Option<String>,
        signature: Option<String>,
        note: Option<String>,
    ) -> Self {
        Self {
            sender: present(sender),
            pubkey: present(pubkey),
            signature: present(signature),
            note: present(note),
        }
    }

    /// Signature, if one was supplied.
    pub fn signature(&self) -> Option<&str> {
        self.signature.as_deref().filter(|s| !s.trim().is_empty())
    }

    /// Public key, if one was supplied.
    pub fn pubkey(&self) -> Option<&str> {
        self.pubkey.as_deref().filter(|s| !s.trim().is_empty())
    }

    /// Note, or empty.
    pub fn note_or_empty(&self) -> &str {
        self.note.as_deref().unwrap_or_default()
    }
}

/// An incoming P2P transaction.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmittedTransaction {
    /// Serialized transaction, hex encoded
    #[serde(default)]
    pub hex: String,
    /// Reference handed out by the earlier payment-destination request
    #[serde(default)]
    pub reference: String,
    /// Optional sender metadata
    #[serde(default)]
    pub metadata: SenderMetadata,
}

impl SubmittedTransaction {
    pub fn new(hex: impl Into<String>, reference: impl Into<String>) -> Self {
        Self {
            hex: hex.into(),
            reference: reference.into(),
            metadata: SenderMetadata::default(),
        }
    }

    pub fn with_metadata(mut self, metadata: SenderMetadata) -> Self {
        self.metadata = metadata;
        self
    }
}

/// Successful receipt: `{"note": .., "txid": ..}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptPayload {
    #[serde(default)]
    pub note: String,
    pub txid: String,
}

// =============================================================================
// Addressing
// =============================================================================

/// Sanitizer output.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PaymailAddress {
    pub alias: String,
    pub domain: String,
    /// Normalized full address; empty when the input had nothing usable
    pub address: String,
}

/// A paymail record as returned by the directory.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressInformation {
    pub alias: String,
    pub domain: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl AddressInformation {
    pub fn new(alias: impl Into<String>, domain: impl Into<String>) -> Self {
        Self {
            alias: alias.into(),
            domain: domain.into(),
            ..Self::default()
        }
    }
}

// =============================================================================
// Request context
// =============================================================================

/// Transport-level facts about the request, supplied by the caller.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RequestContext {
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
    pub request_uri: Option<String>,
}

/// Per-request metadata handed to the directory and the ledger.
///
/// `note` is left empty by the receipt pipeline; the sender's note travels
/// in [`SenderMetadata`] instead.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct RequestMetadata {
    pub alias: String,
    pub domain: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl RequestMetadata {
    pub fn new(address: &PaymailAddress, context: &RequestContext) -> Self {
        Self {
            alias: address.alias.clone(),
            domain: address.domain.clone(),
            ip_address: context.ip_address.clone(),
            user_agent: context.user_agent.clone(),
            request_uri: context.request_uri.clone(),
            note: None,
        }
    }
}

// =============================================================================
// Verifier output
// =============================================================================

/// What the pipeline needs from a decoded transaction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodedTransaction {
    /// Canonical transaction id (display hex)
    pub txid: String,
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(present(raw))
}
