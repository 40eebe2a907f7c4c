//! Run one P2P transaction submission through the full pipeline.

use anyhow::{Context, Result};
use pm_02_p2p_receive::adapters::{respond_json, ApiResponse};
use pm_02_p2p_receive::RequestContext;
use tracing::Instrument;

use crate::container::{NodeConfig, ServiceContainer};

/// Inputs for a single submission.
#[derive(Debug, Clone, Default)]
pub struct ReceiveOptions {
    /// Recipient paymail, as it would appear in the request path
    pub address: String,
    /// Raw JSON request body
    pub body: String,
    /// Paymails the directory should know about
    pub known: Vec<String>,
    /// Transport facts for the request metadata
    pub context: RequestContext,
}

/// Wire a fresh container from `config` and submit `options.body`.
pub async fn run(config: &NodeConfig, options: &ReceiveOptions) -> Result<ApiResponse> {
    let container = ServiceContainer::new(config).context("cannot start receipt service")?;
    for paymail in &options.known {
        container.register_paymail(paymail)?;
    }

    let span = paymail_telemetry::component_span!(
        "receive",
        component = "cli",
        address = %options.address
    );
    let response = respond_json(
        container.receiver.as_ref(),
        &options.address,
        &options.body,
        &options.context,
    )
    .instrument(span)
    .await;

    Ok(response)
}
