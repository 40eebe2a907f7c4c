//! # Node Configuration
//!
//! Receiver policy and telemetry settings read from the environment.
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `PM_DOMAINS` | empty | Comma separated paymail domains served |
//! | `PM_DOMAIN_VALIDATION` | `true` | Reject domains not in `PM_DOMAINS` |
//! | `PM_SENDER_VALIDATION` | `false` | Require a sender signature |
//!
//! Telemetry variables are documented in `paymail-telemetry`.

use paymail_telemetry::TelemetryConfig;
use pm_02_p2p_receive::ReceiverConfig;
use std::env;
use thiserror::Error;

/// Complete node configuration.
#[derive(Debug, Clone, Default)]
pub struct NodeConfig {
    /// Receipt pipeline policy.
    pub receiver: ReceiverConfig,
    /// Log output.
    pub telemetry: TelemetryConfig,
}

/// Configuration errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A boolean variable held something other than true/false/1/0.
    #[error("{name} must be true or false, got {value:?}")]
    InvalidFlag { name: &'static str, value: String },

    /// Receiver policy is inconsistent.
    #[error("invalid receiver configuration: {0}")]
    Receiver(#[from] pm_02_p2p_receive::ConfigError),

    /// A paymail to serve could not be parsed.
    #[error("invalid paymail address: {0:?}")]
    InvalidPaymail(String),
}

impl NodeConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read configuration through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let domains: Vec<String> = lookup("PM_DOMAINS")
            .map(|v| {
                v.split(',')
                    .map(str::trim)
                    .filter(|d| !d.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default();

        let mut receiver = ReceiverConfig::new(domains);
        if let Some(enabled) = parse_flag("PM_DOMAIN_VALIDATION", lookup("PM_DOMAIN_VALIDATION"))? {
            receiver = receiver.with_domain_validation(enabled);
        }
        if let Some(enabled) = parse_flag("PM_SENDER_VALIDATION", lookup("PM_SENDER_VALIDATION"))? {
            receiver = receiver.with_sender_validation(enabled);
        }

        Ok(Self {
            receiver,
            telemetry: TelemetryConfig::from_lookup(lookup),
        })
    }

    /// Check the configuration before wiring services.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.receiver.validate()?;
        Ok(())
    }
}

fn parse_flag(name: &'static str, value: Option<String>) -> Result<Option<bool>, ConfigError> {
    let Some(value) = value else {
        return Ok(None);
    };
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(Some(true)),
        "false" | "0" | "no" => Ok(Some(false)),
        _ => Err(ConfigError::InvalidFlag { name, value }),
    }
}
