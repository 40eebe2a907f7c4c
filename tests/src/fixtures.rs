//! Test fixtures shared by the flows and the benchmarks.

use pm_02_p2p_receive::adapters::P2pTransactionRequest;
use pm_02_p2p_receive::SenderMetadata;
use shared_crypto::{sign_message, Secp256k1KeyPair};

/// Bitcoin genesis block coinbase transaction.
pub const GENESIS_COINBASE_HEX: &str = "01000000010000000000000000000000000000000000000000000000000000000000000000ffffffff4d04ffff001d0104455468652054696d65732030332f4a616e2f32303039204368616e63656c6c6f72206f6e206272696e6b206f66207365636f6e64206261696c6f757420666f722062616e6b73ffffffff0100f2052a01000000434104678afdb0fe5548271967f1a67130b7105cd6a828e03909a67962e0ea1f61deb649f6bc3f4cef38c4f35504e51ec112de5c384df7ba0b8d578a4c702b6bf11d5fac00000000";

/// Txid of [`GENESIS_COINBASE_HEX`].
pub const GENESIS_COINBASE_TXID: &str =
    "4a5e1e4baab89f3a32518a88c31bc87f618f76673e2cc77ab2127b7afdeda33b";

/// Smallest well-formed transaction: version 1, no inputs, no outputs.
pub const EMPTY_TX_HEX: &str = "01000000000000000000";

/// Published BRFCs with their bsvalias ids.
pub const KNOWN_BRFCS_JSON: &str = r#"[
    {
        "title": "BRFC Specifications",
        "author": "andy (nChain)",
        "version": "1",
        "id": "57dd1f54fc67",
        "alias": "brfc-spec"
    },
    {
        "title": "bsvalias Payment Addressing (PayTo Protocol Prefix)",
        "author": "andy (nChain)",
        "version": "1",
        "id": "74524c4d6274"
    },
    {
        "title": "bsvalias Integration with Simplified Payment Protocol",
        "author": "andy (nChain)",
        "version": "1",
        "id": "0036f9b8860f"
    }
]"#;

/// Unsigned request for the genesis coinbase.
pub fn unsigned_request(reference: &str) -> P2pTransactionRequest {
    P2pTransactionRequest {
        hex: GENESIS_COINBASE_HEX.to_string(),
        reference: reference.to_string(),
        metadata: None,
    }
}

/// Request for the genesis coinbase signed by `keypair` over its txid.
pub fn signed_request(keypair: &Secp256k1KeyPair, reference: &str) -> P2pTransactionRequest {
    let signature = sign_message(keypair, GENESIS_COINBASE_TXID).expect("signing failed");
    P2pTransactionRequest {
        metadata: Some(SenderMetadata::new(
            Some("sender@other.org".to_string()),
            Some(keypair.public_key().to_hex()),
            Some(signature),
            Some("genesis, again".to_string()),
        )),
        ..unsigned_request(reference)
    }
}
