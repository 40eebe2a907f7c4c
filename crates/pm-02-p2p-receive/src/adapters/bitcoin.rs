//! # Bitcoin Verifier
//!
//! `TransactionVerifier` over raw Bitcoin transactions and Bitcoin Signed
//! Message signatures.
//!
//! The sender "address" is the hex SEC1 compressed public key. Signature
//! verification recovers the signer from the compact signature and compares
//! keys, which for compressed keys is equivalent to comparing P2PKH addresses.

use crate::domain::entities::DecodedTransaction;
use crate::ports::outbound::{TransactionVerifier, VerifierError};
use shared_crypto::{RawTransaction, Secp256k1PublicKey};
use tracing::trace;

/// Production verifier.
#[derive(Debug, Clone, Copy, Default)]
pub struct BitcoinVerifier;

impl BitcoinVerifier {
    pub fn new() -> Self {
        Self
    }
}

impl TransactionVerifier for BitcoinVerifier {
    fn decode_transaction(&self, raw_hex: &str) -> Result<DecodedTransaction, VerifierError> {
        let tx = RawTransaction::from_hex(raw_hex.trim())
            .map_err(|e| VerifierError::Decode(e.to_string()))?;
        trace!(
            inputs = tx.inputs.len(),
            outputs = tx.outputs.len(),
            "decoded raw transaction"
        );
        Ok(DecodedTransaction { txid: tx.txid() })
    }

    fn recover_address(&self, pubkey: &str) -> Result<String, VerifierError> {
        Secp256k1PublicKey::from_hex(pubkey.trim())
            .map(|key| key.to_hex())
            .map_err(|e| VerifierError::PublicKey(e.to_string()))
    }

    fn verify_message(
        &self,
        address: &str,
        signature: &str,
        message: &str,
    ) -> Result<(), VerifierError> {
        let expected = Secp256k1PublicKey::from_hex(address)
            .map_err(|e| VerifierError::Signature(e.to_string()))?;
        shared_crypto::verify_message(&expected, signature, message)
            .map_err(|e| VerifierError::Signature(e.to_string()))
    }
}
