//! # Outbound Ports (Driven Ports / SPI)
//!
//! Collaborators the receipt pipeline depends on:
//!
//! | Port | Kind | Used by stage |
//! |------|------|---------------|
//! | `AddressSanitizer` | pure | 1 |
//! | `TransactionVerifier` | pure | 4, 5 |
//! | `PaymailDirectory` | async I/O | 6 |
//! | `TransactionLedger` | async I/O | 7 |

use crate::domain::entities::{
    AddressInformation, DecodedTransaction, PaymailAddress, ReceiptPayload, RequestMetadata,
    SubmittedTransaction,
};
use thiserror::Error;

/// Normalizes a raw paymail into `(alias, domain)`.
pub trait AddressSanitizer: Send + Sync {
    /// An empty `address` in the result means nothing usable was supplied.
    fn sanitize(&self, raw: &str) -> PaymailAddress;
}

/// Error from the cryptographic capability.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum VerifierError {
    /// Raw transaction could not be decoded
    #[error("{0}")]
    Decode(String),

    /// Public key could not be turned into an address
    #[error("{0}")]
    PublicKey(String),

    /// Signature is malformed or does not verify
    #[error("{0}")]
    Signature(String),
}

/// Transaction decoding, key recovery and message verification.
///
/// All operations are pure and synchronous.
pub trait TransactionVerifier: Send + Sync {
    /// Decode a hex transaction and compute its id.
    fn decode_transaction(&self, raw_hex: &str) -> Result<DecodedTransaction, VerifierError>;

    /// Derive the address a signature from `pubkey` verifies against.
    fn recover_address(&self, pubkey: &str) -> Result<String, VerifierError>;

    /// Check that `signature` over `message` was made by `address`.
    fn verify_message(
        &self,
        address: &str,
        signature: &str,
        message: &str,
    ) -> Result<(), VerifierError>;
}

/// Error from directory operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DirectoryError {
    /// Backend failure
    #[error("{0}")]
    Backend(String),
}

/// Paymail record lookup.
#[async_trait::async_trait]
pub trait PaymailDirectory: Send + Sync {
    /// Find the record for `alias@domain`.
    ///
    /// # Returns
    /// * `Ok(None)` - no such paymail
    async fn get_paymail_by_alias(
        &self,
        alias: &str,
        domain: &str,
        metadata: &RequestMetadata,
    ) -> Result<Option<AddressInformation>, DirectoryError>;
}

/// Error from ledger operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LedgerError {
    /// Backend failure
    #[error("{0}")]
    Backend(String),

    /// Reference already used for a different transaction
    #[error("reference already recorded: {0}")]
    DuplicateReference(String),
}

/// Persists and broadcasts accepted transactions.
#[async_trait::async_trait]
pub trait TransactionLedger: Send + Sync {
    /// Record a validated submission.
    ///
    /// `receipt` is the payload the pipeline would return on its own; the
    /// ledger may return it unchanged or enrich it.
    async fn record_transaction(
        &self,
        submission: &SubmittedTransaction,
        receipt: ReceiptPayload,
        metadata: &RequestMetadata,
    ) -> Result<ReceiptPayload, LedgerError>;
}

// =============================================================================
// Shared handles
// =============================================================================

impl<T: AddressSanitizer + ?Sized> AddressSanitizer for std::sync::Arc<T> {
    fn sanitize(&self, raw: &str) -> PaymailAddress {
        (**self).sanitize(raw)
    }
}

impl<T: TransactionVerifier + ?Sized> TransactionVerifier for std::sync::Arc<T> {
    fn decode_transaction(&self, raw_hex: &str) -> Result<DecodedTransaction, VerifierError> {
        (**self).decode_transaction(raw_hex)
    }

    fn recover_address(&self, pubkey: &str) -> Result<String, VerifierError> {
        (**self).recover_address(pubkey)
    }

    fn verify_message(
        &self,
        address: &str,
        signature: &str,
        message: &str,
    ) -> Result<(), VerifierError> {
        (**self).verify_message(address, signature, message)
    }
}

#[async_trait::async_trait]
impl<T: PaymailDirectory + ?Sized> PaymailDirectory for std::sync::Arc<T> {
    async fn get_paymail_by_alias(
        &self,
        alias: &str,
        domain: &str,
        metadata: &RequestMetadata,
    ) -> Result<Option<AddressInformation>, DirectoryError> {
        (**self).get_paymail_by_alias(alias, domain, metadata).await
    }
}

#[async_trait::async_trait]
impl<T: TransactionLedger + ?Sized> TransactionLedger for std::sync::Arc<T> {
    async fn record_transaction(
        &self,
        submission: &SubmittedTransaction,
        receipt: ReceiptPayload,
        metadata: &RequestMetadata,
    ) -> Result<ReceiptPayload, LedgerError> {
        (**self).record_transaction(submission, receipt, metadata).await
    }
}
