//! # P2P Receive Service
//!
//! Application service layer that implements the `P2pReceiveApi` trait.
//!
//! ## Architecture
//!
//! This is the hexagonal "application service" that:
//! - Implements the inbound port (`P2pReceiveApi`)
//! - Runs the local validation stages against the injected `TransactionVerifier`
//! - Uses the outbound ports (`PaymailDirectory`, `TransactionLedger`) only
//!   once a submission has passed every local check
//!
//! ## Stage Order
//!
//! | # | Stage | Failure |
//! |---|-------|---------|
//! | 1 | Address sanitation | `InvalidAddress` |
//! | 2 | Domain authorization | `UnknownDomain` |
//! | 3 | Required fields | `MissingHex`, `MissingReference` |
//! | 4 | Transaction decode | `InvalidTransaction` |
//! | 5 | Sender signature (conditional) | `MissingSignature`, `MissingPubKey`, `InvalidPubKey`, `InvalidSignature` |
//! | 6 | Directory lookup | `LookupFailed`, `RecordNotFound` |
//! | 7 | Ledger record | `RecordingFailed` |

use crate::domain::config::ReceiverConfig;
use crate::domain::entities::{
    PaymailAddress, ReceiptPayload, RequestContext, RequestMetadata, SenderMetadata,
    SubmittedTransaction,
};
use crate::domain::errors::ReceiveError;
use crate::domain::sanitize::PaymailSanitizer;
use crate::ports::inbound::P2pReceiveApi;
use crate::ports::outbound::{
    AddressSanitizer, PaymailDirectory, TransactionLedger, TransactionVerifier,
};
use tracing::{debug, info, warn};

/// A submission that passed every local stage (1-5).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidatedSubmission {
    /// Sanitized recipient
    pub address: PaymailAddress,
    /// Payload returned when the ledger does not enrich it
    pub receipt: ReceiptPayload,
    /// Whether stage 5 ran
    pub sender_verified: bool,
}

/// P2P Receive Service.
///
/// Holds immutable configuration and the collaborators; no per-request state
/// survives a call, so one instance can serve concurrent submissions.
pub struct P2pReceiveService<V, D, L, S = PaymailSanitizer> {
    config: ReceiverConfig,
    verifier: V,
    directory: D,
    ledger: L,
    sanitizer: S,
}

impl<V, D, L> P2pReceiveService<V, D, L, PaymailSanitizer>
where
    V: TransactionVerifier,
    D: PaymailDirectory,
    L: TransactionLedger,
{
    /// Create a new receive service with the default address sanitizer.
    ///
    /// # Arguments
    /// * `config` - Allow-list and sender validation policy
    /// * `verifier` - Transaction decoding and signature capability
    /// * `directory` - Paymail record lookup
    /// * `ledger` - Transaction recording and broadcast
    pub fn new(config: ReceiverConfig, verifier: V, directory: D, ledger: L) -> Self {
        Self {
            config,
            verifier,
            directory,
            ledger,
            sanitizer: PaymailSanitizer,
        }
    }
}

impl<V, D, L, S> P2pReceiveService<V, D, L, S>
where
    V: TransactionVerifier,
    D: PaymailDirectory,
    L: TransactionLedger,
    S: AddressSanitizer,
{
    /// Replace the address sanitizer.
    pub fn with_sanitizer<S2: AddressSanitizer>(
        self,
        sanitizer: S2,
    ) -> P2pReceiveService<V, D, L, S2> {
        P2pReceiveService {
            config: self.config,
            verifier: self.verifier,
            directory: self.directory,
            ledger: self.ledger,
            sanitizer,
        }
    }

    pub fn config(&self) -> &ReceiverConfig {
        &self.config
    }

    /// Run stages 1-5. No collaborator is consulted.
    pub fn validate_submission(
        &self,
        paymail_address: &str,
        submission: &SubmittedTransaction,
    ) -> Result<ValidatedSubmission, ReceiveError> {
        // 1. Address sanitation
        let address = self.sanitizer.sanitize(paymail_address);
        if address.address.is_empty() {
            return Err(ReceiveError::InvalidAddress(paymail_address.to_string()));
        }

        // 2. Domain authorization
        if !self.config.is_allowed_domain(&address.domain) {
            return Err(ReceiveError::UnknownDomain(address.domain));
        }

        // 3. Required fields
        if submission.hex.is_empty() {
            return Err(ReceiveError::MissingHex);
        }
        if submission.reference.is_empty() {
            return Err(ReceiveError::MissingReference);
        }

        // 4. Transaction decode
        let decoded = self
            .verifier
            .decode_transaction(&submission.hex)
            .map_err(|e| ReceiveError::InvalidTransaction(e.to_string()))?;
        debug!(txid = %decoded.txid, reference = %submission.reference, "transaction decoded");

        // 5. Sender signature
        let sender_verified = self.requires_sender_verification(&submission.metadata);
        if sender_verified {
            self.verify_sender(&submission.metadata, &decoded.txid)?;
            debug!(txid = %decoded.txid, "sender signature verified");
        }

        Ok(ValidatedSubmission {
            address,
            receipt: ReceiptPayload {
                note: submission.metadata.note_or_empty().to_string(),
                txid: decoded.txid,
            },
            sender_verified,
        })
    }

    /// Policy on, or the sender volunteered a signature.
    fn requires_sender_verification(&self, metadata: &SenderMetadata) -> bool {
        self.config.sender_validation_enabled || metadata.signature().is_some()
    }

    fn verify_sender(&self, metadata: &SenderMetadata, txid: &str) -> Result<(), ReceiveError> {
        let signature = metadata.signature().ok_or(ReceiveError::MissingSignature)?;
        let pubkey = metadata.pubkey().ok_or(ReceiveError::MissingPubKey)?;

        let address = self
            .verifier
            .recover_address(pubkey)
            .map_err(|e| ReceiveError::InvalidPubKey(e.to_string()))?;

        self.verifier
            .verify_message(&address, signature, txid)
            .map_err(|e| ReceiveError::InvalidSignature(e.to_string()))
    }

    /// Run the full pipeline.
    async fn process(
        &self,
        paymail_address: &str,
        submission: &SubmittedTransaction,
        context: &RequestContext,
    ) -> Result<ReceiptPayload, ReceiveError> {
        let validated = self.validate_submission(paymail_address, submission)?;
        let metadata = RequestMetadata::new(&validated.address, context);

        // 6. Directory lookup
        let record = self
            .directory
            .get_paymail_by_alias(&validated.address.alias, &validated.address.domain, &metadata)
            .await
            .map_err(|e| ReceiveError::LookupFailed(e.to_string()))?;
        if record.is_none() {
            return Err(ReceiveError::RecordNotFound);
        }

        // 7. Record & finalize
        self.ledger
            .record_transaction(submission, validated.receipt, &metadata)
            .await
            .map_err(|e| ReceiveError::RecordingFailed(e.to_string()))
    }
}

#[async_trait::async_trait]
impl<V, D, L, S> P2pReceiveApi for P2pReceiveService<V, D, L, S>
where
    V: TransactionVerifier,
    D: PaymailDirectory,
    L: TransactionLedger,
    S: AddressSanitizer,
{
    async fn receive_transaction(
        &self,
        paymail_address: &str,
        submission: &SubmittedTransaction,
        context: &RequestContext,
    ) -> Result<ReceiptPayload, ReceiveError> {
        let result = self.process(paymail_address, submission, context).await;

        match &result {
            Ok(receipt) => info!(
                paymail = %paymail_address,
                reference = %submission.reference,
                txid = %receipt.txid,
                "P2P transaction recorded"
            ),
            Err(e) => warn!(
                paymail = %paymail_address,
                reference = %submission.reference,
                code = e.code(),
                status = e.http_status(),
                error = %e,
                "P2P transaction rejected"
            ),
        }

        result
    }
}

// =============================================================================
// TESTS
// =============================================================================
