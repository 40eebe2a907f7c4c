//! Receiver configuration with validation.
//!
//! Supplied once when the service is built and never mutated afterwards.

use super::sanitize::sanitize_domain;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Domain validation is on but nothing is allowed
    #[error("no paymail domains configured while domain validation is enabled")]
    EmptyAllowList,

    /// A configured domain sanitizes to nothing
    #[error("invalid paymail domain: {0:?}")]
    InvalidDomain(String),
}

/// Receipt pipeline configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReceiverConfig {
    /// Domains this service accepts transactions for
    pub paymail_domains: Vec<String>,
    /// When false every domain is accepted
    pub domain_validation_enabled: bool,
    /// Require every submission to carry a valid sender signature
    pub sender_validation_enabled: bool,
}

impl Default for ReceiverConfig {
    fn default() -> Self {
        Self {
            paymail_domains: Vec::new(),
            domain_validation_enabled: true,
            sender_validation_enabled: false,
        }
    }
}

impl ReceiverConfig {
    /// Allow the given domains. Each is sanitized on the way in.
    pub fn new<I, S>(domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            paymail_domains: domains
                .into_iter()
                .map(|d| sanitize_domain(d.as_ref()))
                .collect(),
            ..Self::default()
        }
    }

    pub fn with_sender_validation(mut self, enabled: bool) -> Self {
        self.sender_validation_enabled = enabled;
        self
    }

    pub fn with_domain_validation(mut self, enabled: bool) -> Self {
        self.domain_validation_enabled = enabled;
        self
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(bad) = self
            .paymail_domains
            .iter()
            .find(|d| sanitize_domain(d).is_empty())
        {
            return Err(ConfigError::InvalidDomain(bad.clone()));
        }
        if self.domain_validation_enabled && self.paymail_domains.is_empty() {
            return Err(ConfigError::EmptyAllowList);
        }
        Ok(())
    }

    /// Whether transactions for `domain` are accepted.
    pub fn is_allowed_domain(&self, domain: &str) -> bool {
        if !self.domain_validation_enabled {
            return true;
        }
        let domain = sanitize_domain(domain);
        if domain.is_empty() {
            return false;
        }
        self.paymail_domains
            .iter()
            .any(|allowed| sanitize_domain(allowed) == domain)
    }
}
