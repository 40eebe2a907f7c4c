//! # In-Memory Collaborators
//!
//! `PaymailDirectory` and `TransactionLedger` held in process memory.
//! Used by the CLI and by tests; a deployment plugs in its own storage.

use crate::domain::entities::{
    AddressInformation, ReceiptPayload, RequestMetadata, SubmittedTransaction,
};
use crate::ports::outbound::{DirectoryError, LedgerError, PaymailDirectory, TransactionLedger};
use parking_lot::RwLock;
use std::collections::HashMap;
use tracing::debug;

// =============================================================================
// DIRECTORY
// =============================================================================

/// Paymail records keyed by lowercase `(alias, domain)`.
#[derive(Default)]
pub struct InMemoryDirectory {
    records: RwLock<HashMap<(String, String), AddressInformation>>,
}

impl InMemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a record, replacing any previous one for the same address.
    pub fn insert(&self, record: AddressInformation) {
        let key = (record.alias.to_lowercase(), record.domain.to_lowercase());
        self.records.write().insert(key, record);
    }

    /// Builder form of [`InMemoryDirectory::insert`].
    pub fn with_record(self, record: AddressInformation) -> Self {
        self.insert(record);
        self
    }

    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }
}

#[async_trait::async_trait]
impl PaymailDirectory for InMemoryDirectory {
    async fn get_paymail_by_alias(
        &self,
        alias: &str,
        domain: &str,
        _metadata: &RequestMetadata,
    ) -> Result<Option<AddressInformation>, DirectoryError> {
        let key = (alias.to_lowercase(), domain.to_lowercase());
        Ok(self.records.read().get(&key).cloned())
    }
}

// =============================================================================
// LEDGER
// =============================================================================

/// A recorded incoming transaction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LedgerEntry {
    pub reference: String,
    pub txid: String,
    pub hex: String,
    pub alias: String,
    pub domain: String,
    pub sender: Option<String>,
    pub note: String,
}

/// Records transactions keyed by reference. A reference can be used once.
#[derive(Default)]
pub struct InMemoryLedger {
    entries: RwLock<HashMap<String, LedgerEntry>>,
}

impl InMemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, reference: &str) -> Option<LedgerEntry> {
        self.entries.read().get(reference).cloned()
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

#[async_trait::async_trait]
impl TransactionLedger for InMemoryLedger {
    async fn record_transaction(
        &self,
        submission: &SubmittedTransaction,
        receipt: ReceiptPayload,
        metadata: &RequestMetadata,
    ) -> Result<ReceiptPayload, LedgerError> {
        let mut entries = self.entries.write();
        if entries.contains_key(&submission.reference) {
            return Err(LedgerError::DuplicateReference(submission.reference.clone()));
        }

        entries.insert(
            submission.reference.clone(),
            LedgerEntry {
                reference: submission.reference.clone(),
                txid: receipt.txid.clone(),
                hex: submission.hex.clone(),
                alias: metadata.alias.clone(),
                domain: metadata.domain.clone(),
                sender: submission.metadata.sender.clone(),
                note: receipt.note.clone(),
            },
        );
        debug!(reference = %submission.reference, txid = %receipt.txid, "ledger entry stored");

        Ok(receipt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{PaymailAddress, RequestContext};

    fn metadata() -> RequestMetadata {
        let address = PaymailAddress {
            alias: "alice".into(),
            domain: "example.com".into(),
            address: "alice@example.com".into(),
        };
        RequestMetadata::new(&address, &RequestContext::default())
    }

    fn receipt() -> ReceiptPayload {
        ReceiptPayload {
            note: "thanks".into(),
            txid: "abcd".into(),
        }
    }

    #[tokio::test]
    async fn test_directory_lookup_is_case_insensitive() {
        let directory =
            InMemoryDirectory::new().with_record(AddressInformation::new("Alice", "Example.com"));

        let found = directory
            .get_paymail_by_alias("alice", "example.com", &metadata())
            .await
            .unwrap();

        assert_eq!(found.unwrap().alias, "Alice");
        assert_eq!(directory.len(), 1);
    }

    #[tokio::test]
    async fn test_directory_missing_record() {
        let directory = InMemoryDirectory::new();
        assert!(directory.is_empty());

        let found = directory
            .get_paymail_by_alias("bob", "example.com", &metadata())
            .await
            .unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_ledger_records_entry() {
        let ledger = InMemoryLedger::new();
        let tx = SubmittedTransaction::new("0100", "ref-1");

        let result = ledger
            .record_transaction(&tx, receipt(), &metadata())
            .await
            .unwrap();

        assert_eq!(result, receipt());
        let entry = ledger.get("ref-1").unwrap();
        assert_eq!(entry.txid, "abcd");
        assert_eq!(entry.alias, "alice");
        assert_eq!(entry.hex, "0100");
    }

    #[tokio::test]
    async fn test_ledger_rejects_reused_reference() {
        let ledger = InMemoryLedger::new();
        let tx = SubmittedTransaction::new("0100", "ref-1");

        ledger
            .record_transaction(&tx, receipt(), &metadata())
            .await
            .unwrap();
        let err = ledger
            .record_transaction(&tx, receipt(), &metadata())
            .await
            .unwrap_err();

        assert_eq!(err, LedgerError::DuplicateReference("ref-1".into()));
        assert_eq!(ledger.len(), 1);
    }
}
