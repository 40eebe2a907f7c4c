//! # HTTP Contract
//!
//! Maps the receipt endpoint's JSON body onto the inbound port and the
//! port's result onto a status code and JSON body. Transport-agnostic: the
//! embedding server supplies the path parameter and request context.
//!
//! | Outcome | Status | Body |
//! |---------|--------|------|
//! | accepted | 200 | `{"note": .., "txid": ..}` |
//! | rejected | 400 / 404 / 417 | `{"code": .., "message": ..}` |

use crate::domain::entities::{RequestContext, SenderMetadata, SubmittedTransaction};
use crate::domain::errors::{codes, status, ReceiveError};
use crate::ports::inbound::P2pReceiveApi;
use serde::{Deserialize, Serialize};
use serde_json::Value;

const OK: u16 = 200;

/// Request body of the receive-transaction endpoint.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct P2pTransactionRequest {
    #[serde(default)]
    pub hex: String,
    #[serde(default)]
    pub reference: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<SenderMetadata>,
}

impl From<P2pTransactionRequest> for SubmittedTransaction {
    fn from(request: P2pTransactionRequest) -> Self {
        SubmittedTransaction::new(request.hex, request.reference)
            .with_metadata(request.metadata.unwrap_or_default())
    }
}

/// Error body: `{"code": .., "message": ..}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

impl From<&ReceiveError> for ErrorBody {
    fn from(error: &ReceiveError) -> Self {
        Self {
            code: error.code().to_string(),
            message: error.to_string(),
        }
    }
}

/// Status code and JSON body ready for the transport.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Value,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        self.status == OK
    }

    fn error(status: u16, body: ErrorBody) -> Self {
        Self {
            status,
            body: serde_json::json!(body),
        }
    }
}

impl From<&ReceiveError> for ApiResponse {
    fn from(error: &ReceiveError) -> Self {
        Self::error(error.http_status(), ErrorBody::from(error))
    }
}

/// Run one request through `api`.
pub async fn respond<A>(
    api: &A,
    paymail_address: &str,
    request: P2pTransactionRequest,
    context: &RequestContext,
) -> ApiResponse
where
    A: P2pReceiveApi + ?Sized,
{
    let submission = SubmittedTransaction::from(request);
    match api
        .receive_transaction(paymail_address, &submission, context)
        .await
    {
        Ok(receipt) => ApiResponse {
            status: OK,
            body: serde_json::json!(receipt),
        },
        Err(error) => ApiResponse::from(&error),
    }
}

/// Parse a raw JSON body, then [`respond`]. A body that is not a JSON object
/// is answered with 400 `invalid-parameter`.
pub async fn respond_json<A>(
    api: &A,
    paymail_address: &str,
    body: &str,
    context: &RequestContext,
) -> ApiResponse
where
    A: P2pReceiveApi + ?Sized,
{
    match serde_json::from_str::<P2pTransactionRequest>(body) {
        Ok(request) => respond(api, paymail_address, request, context).await,
        Err(e) => ApiResponse::error(
            status::BAD_REQUEST,
            ErrorBody {
                code: codes::INVALID_PARAMETER.to_string(),
                message: format!("invalid request body: {e}"),
            },
        ),
    }
}
