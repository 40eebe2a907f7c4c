//! # Inbound Ports (Driving Ports / API)
//!
//! Traits that define the public API of this subsystem.

use crate::domain::entities::{ReceiptPayload, RequestContext, SubmittedTransaction};
use crate::domain::errors::ReceiveError;

/// P2P transaction receipt API.
///
/// Implementations must be thread-safe (`Send + Sync`) so a single instance
/// can serve concurrent submissions.
#[async_trait::async_trait]
pub trait P2pReceiveApi: Send + Sync {
    /// Validate, look up and record one submitted transaction.
    ///
    /// `paymail_address` is the recipient as it appeared in the request path.
    /// Dropping the returned future cancels any in-flight collaborator call.
    ///
    /// # Errors
    /// Exactly one [`ReceiveError`] naming the first stage that failed.
    async fn receive_transaction(
        &self,
        paymail_address: &str,
        submission: &SubmittedTransaction,
        context: &RequestContext,
    ) -> Result<ReceiptPayload, ReceiveError>;
}
