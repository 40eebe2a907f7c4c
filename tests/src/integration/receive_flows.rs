//! # Receipt Flows
//!
//! The receipt pipeline wired by `paymail-node` with the Bitcoin verifier
//! and in-memory collaborators, driven through the HTTP contract.

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use paymail_node::{NodeConfig, ServiceContainer};
    use pm_02_p2p_receive::adapters::{
        respond, BitcoinVerifier, InMemoryLedger, P2pTransactionRequest,
    };
    use pm_02_p2p_receive::{
        AddressInformation, DirectoryError, P2pReceiveApi, P2pReceiveService, PaymailDirectory,
        ReceiveError, ReceiverConfig, RequestContext, RequestMetadata, SubmittedTransaction,
    };
    use shared_crypto::Secp256k1KeyPair;
    use tokio::sync::Notify;

    use crate::fixtures::{
        signed_request, unsigned_request, EMPTY_TX_HEX, GENESIS_COINBASE_HEX,
        GENESIS_COINBASE_TXID,
    };

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    fn container(sender_validation: bool) -> ServiceContainer {
        let config = NodeConfig {
            receiver: ReceiverConfig::new(["example.com"]).with_sender_validation(sender_validation),
            ..NodeConfig::default()
        };
        let container = ServiceContainer::new(&config).unwrap();
        container.register_paymail("alice@example.com").unwrap();
        container
    }

    async fn submit(
        container: &ServiceContainer,
        address: &str,
        request: P2pTransactionRequest,
    ) -> pm_02_p2p_receive::adapters::ApiResponse {
        respond(
            container.receiver.as_ref(),
            address,
            request,
            &RequestContext::default(),
        )
        .await
    }

    // =============================================================================
    // ACCEPTED SUBMISSIONS
    // =============================================================================

    #[tokio::test]
    async fn test_signed_transaction_recorded() {
        let container = container(true);
        let sender = Secp256k1KeyPair::generate();

        let response = submit(
            &container,
            "alice@example.com",
            signed_request(&sender, "ref-1"),
        )
        .await;

        assert_eq!(response.status, 200, "{}", response.body);
        assert_eq!(response.body["txid"], GENESIS_COINBASE_TXID);
        assert_eq!(response.body["note"], "genesis, again");

        let entry = container.ledger.get("ref-1").unwrap();
        assert_eq!(entry.txid, GENESIS_COINBASE_TXID);
        assert_eq!(entry.alias, "alice");
        assert_eq!(entry.sender.as_deref(), Some("sender@other.org"));
    }

    #[tokio::test]
    async fn test_unsigned_transaction_accepted_when_policy_off() {
        let container = container(false);

        let response = submit(&container, "Alice@Example.com", unsigned_request("ref-1")).await;

        assert_eq!(response.status, 200);
        assert_eq!(response.body["note"], "");
        assert_eq!(container.ledger.len(), 1);
    }

    #[tokio::test]
    async fn test_mailto_address_normalized() {
        let container = container(false);

        let response = submit(
            &container,
            "mailto:ALICE@example.com",
            unsigned_request("ref-1"),
        )
        .await;

        assert_eq!(response.status, 200);
    }

    // =============================================================================
    // REJECTED SUBMISSIONS
    // =============================================================================

    #[tokio::test]
    async fn test_unsigned_transaction_rejected_when_policy_on() {
        let container = container(true);

        let response = submit(&container, "alice@example.com", unsigned_request("ref-1")).await;

        assert_eq!(response.status, 400);
        assert_eq!(response.body["code"], "invalid-signature");
        assert!(container.ledger.is_empty());
    }

    #[tokio::test]
    async fn test_volunteered_bad_signature_rejected_when_policy_off() {
        let container = container(false);
        let sender = Secp256k1KeyPair::from_bytes([9u8; 32]).unwrap();
        let impostor = Secp256k1KeyPair::from_bytes([10u8; 32]).unwrap();

        let mut request = signed_request(&impostor, "ref-1");
        if let Some(metadata) = request.metadata.as_mut() {
            metadata.pubkey = Some(sender.public_key().to_hex());
        }

        let response = submit(&container, "alice@example.com", request).await;

        assert_eq!(response.status, 400);
        assert_eq!(response.body["code"], "invalid-signature");
        assert!(container.ledger.is_empty());
    }

    #[tokio::test]
    async fn test_malformed_pubkey_rejected() {
        let container = container(true);
        let sender = Secp256k1KeyPair::generate();

        let mut request = signed_request(&sender, "ref-1");
        if let Some(metadata) = request.metadata.as_mut() {
            metadata.pubkey = Some("02abcdef".to_string());
        }

        let response = submit(&container, "alice@example.com", request).await;

        assert_eq!(response.status, 400);
        assert_eq!(response.body["code"], "invalid-pubkey");
    }

    #[tokio::test]
    async fn test_signature_over_other_txid_rejected() {
        let container = container(true);
        let sender = Secp256k1KeyPair::generate();

        let request = P2pTransactionRequest {
            hex: EMPTY_TX_HEX.to_string(),
            ..signed_request(&sender, "ref-1")
        };

        let response = submit(&container, "alice@example.com", request).await;

        assert_eq!(response.status, 400);
        assert_eq!(response.body["code"], "invalid-signature");
    }

    #[tokio::test]
    async fn test_unknown_domain_rejected() {
        let container = container(false);

        let response = submit(&container, "alice@elsewhere.com", unsigned_request("ref-1")).await;

        assert_eq!(response.status, 400);
        assert_eq!(response.body["code"], "unknown-domain");
    }

    #[tokio::test]
    async fn test_unregistered_paymail_not_found() {
        let container = container(false);

        let response = submit(&container, "bob@example.com", unsigned_request("ref-1")).await;

        assert_eq!(response.status, 404);
        assert_eq!(response.body["code"], "not-found");
        assert!(container.ledger.is_empty());
    }

    #[tokio::test]
    async fn test_truncated_transaction_rejected() {
        let container = container(false);
        let request = P2pTransactionRequest {
            hex: GENESIS_COINBASE_HEX[..120].to_string(),
            ..unsigned_request("ref-1")
        };

        let response = submit(&container, "alice@example.com", request).await;

        assert_eq!(response.status, 400);
        assert_eq!(response.body["code"], "invalid-parameter");
    }

    #[tokio::test]
    async fn test_reused_reference_fails_recording() {
        let container = container(false);

        let first = submit(&container, "alice@example.com", unsigned_request("ref-1")).await;
        let second = submit(&container, "alice@example.com", unsigned_request("ref-1")).await;

        assert_eq!(first.status, 200);
        assert_eq!(second.status, 417);
        assert_eq!(second.body["code"], "error-recording-tx");
        assert_eq!(container.ledger.len(), 1);
    }

    // =============================================================================
    // CONCURRENCY AND CANCELLATION
    // =============================================================================

    #[tokio::test]
    async fn test_concurrent_submissions_share_one_service() {
        let container = Arc::new(container(true));
        let sender = Arc::new(Secp256k1KeyPair::generate());

        let tasks: Vec<_> = (0..20)
            .map(|i| {
                let container = Arc::clone(&container);
                let sender = Arc::clone(&sender);
                tokio::spawn(async move {
                    let request = signed_request(&sender, &format!("ref-{i}"));
                    submit(&container, "alice@example.com", request).await.status
                })
            })
            .collect();

        for task in tasks {
            assert_eq!(task.await.unwrap(), 200);
        }
        assert_eq!(container.ledger.len(), 20);
    }

    /// Directory that never answers.
    struct StalledDirectory {
        release: Notify,
    }

    #[async_trait::async_trait]
    impl PaymailDirectory for StalledDirectory {
        async fn get_paymail_by_alias(
            &self,
            alias: &str,
            domain: &str,
            _metadata: &RequestMetadata,
        ) -> Result<Option<AddressInformation>, DirectoryError> {
            self.release.notified().await;
            Ok(Some(AddressInformation::new(alias, domain)))
        }
    }

    #[tokio::test]
    async fn test_dropped_request_never_reaches_ledger() {
        let ledger = Arc::new(InMemoryLedger::new());
        let service = P2pReceiveService::new(
            ReceiverConfig::new(["example.com"]),
            BitcoinVerifier::new(),
            StalledDirectory {
                release: Notify::new(),
            },
            Arc::clone(&ledger),
        );
        let submission = SubmittedTransaction::new(GENESIS_COINBASE_HEX, "ref-1");

        let outcome = tokio::time::timeout(
            Duration::from_millis(50),
            service.receive_transaction("alice@example.com", &submission, &RequestContext::default()),
        )
        .await;

        assert!(outcome.is_err(), "lookup should still be pending");
        assert!(ledger.is_empty());
    }

    #[tokio::test]
    async fn test_local_failure_short_circuits_stalled_directory() {
        let service = P2pReceiveService::new(
            ReceiverConfig::new(["example.com"]),
            BitcoinVerifier::new(),
            StalledDirectory {
                release: Notify::new(),
            },
            InMemoryLedger::new(),
        );
        let submission = SubmittedTransaction::new("not hex", "ref-1");

        let result = tokio::time::timeout(
            Duration::from_secs(1),
            service.receive_transaction("alice@example.com", &submission, &RequestContext::default()),
        )
        .await
        .expect("local validation must not wait on the directory");

        assert!(matches!(result, Err(ReceiveError::InvalidTransaction(_))));
    }
}
