//! # Service Container
//!
//! Builds the receipt pipeline with its production verifier and the
//! in-memory directory and ledger, and keeps shared handles to both so the
//! host can seed records and inspect what was recorded.

use std::sync::Arc;

use pm_02_p2p_receive::adapters::{BitcoinVerifier, InMemoryDirectory, InMemoryLedger};
use pm_02_p2p_receive::domain::sanitize::sanitize_paymail;
use pm_02_p2p_receive::{AddressInformation, P2pReceiveService};
use tracing::{debug, info};

use super::config::{ConfigError, NodeConfig};

/// The wired receipt service.
pub type ReceiveService =
    P2pReceiveService<BitcoinVerifier, Arc<InMemoryDirectory>, Arc<InMemoryLedger>>;

/// Shared handles to every wired component.
pub struct ServiceContainer {
    pub directory: Arc<InMemoryDirectory>,
    pub ledger: Arc<InMemoryLedger>,
    pub receiver: Arc<ReceiveService>,
}

impl ServiceContainer {
    /// Validate `config` and wire the services.
    pub fn new(config: &NodeConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let directory = Arc::new(InMemoryDirectory::new());
        let ledger = Arc::new(InMemoryLedger::new());
        let receiver = Arc::new(P2pReceiveService::new(
            config.receiver.clone(),
            BitcoinVerifier::new(),
            Arc::clone(&directory),
            Arc::clone(&ledger),
        ));

        info!(
            domains = ?config.receiver.paymail_domains,
            domain_validation = config.receiver.domain_validation_enabled,
            sender_validation = config.receiver.sender_validation_enabled,
            "receipt service wired"
        );

        Ok(Self {
            directory,
            ledger,
            receiver,
        })
    }

    /// Add a paymail to the directory.
    pub fn register_paymail(&self, paymail: &str) -> Result<(), ConfigError> {
        let address = sanitize_paymail(paymail);
        if address.alias.is_empty() || address.domain.is_empty() {
            return Err(ConfigError::InvalidPaymail(paymail.to_string()));
        }
        debug!(address = %address.address, "registering paymail");
        self.directory
            .insert(AddressInformation::new(address.alias, address.domain));
        Ok(())
    }
}
