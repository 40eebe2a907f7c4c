//! # Paymail Benchmarks
//!
//! | Area | Operation |
//! |------|-----------|
//! | pm-01 BRFC | id generation, spec list loading |
//! | shared-crypto | transaction decode, signed message verify |
//! | pm-02 Receipt | full pipeline with in-memory collaborators |

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::time::Duration;

use paymail_node::{NodeConfig, ServiceContainer};
use pm_01_brfc::{generate_id, BrfcIdScheme, BrfcRegistry};
use pm_02_p2p_receive::adapters::respond;
use pm_02_p2p_receive::{ReceiverConfig, RequestContext};
use pm_tests::fixtures::{
    signed_request, unsigned_request, GENESIS_COINBASE_HEX, GENESIS_COINBASE_TXID,
    KNOWN_BRFCS_JSON,
};
use shared_crypto::{sign_message, verify_message, RawTransaction, Secp256k1KeyPair};

// ============================================================================
// PM-01: BRFC ids
// ============================================================================

fn bench_brfc(c: &mut Criterion) {
    let mut group = c.benchmark_group("pm-01-brfc");

    for scheme in [BrfcIdScheme::Bsvalias, BrfcIdScheme::Compact] {
        group.bench_with_input(
            BenchmarkId::new("generate_id", format!("{scheme:?}")),
            &scheme,
            |b, scheme| {
                b.iter(|| {
                    generate_id(
                        black_box("BRFC Specifications"),
                        black_box("andy (nChain)"),
                        black_box("1"),
                        *scheme,
                    )
                })
            },
        );
    }

    group.bench_function("registry_from_json", |b| {
        b.iter(|| BrfcRegistry::from_json(black_box(KNOWN_BRFCS_JSON)))
    });

    group.finish();
}

// ============================================================================
// shared-crypto: decode and verify
// ============================================================================

fn bench_crypto(c: &mut Criterion) {
    let mut group = c.benchmark_group("shared-crypto");

    group.bench_function("decode_genesis_coinbase", |b| {
        b.iter(|| RawTransaction::from_hex(black_box(GENESIS_COINBASE_HEX)).map(|tx| tx.txid()))
    });

    let keypair = Secp256k1KeyPair::from_bytes([0x11; 32]).expect("valid key");
    let public_key = keypair.public_key();
    let signature = sign_message(&keypair, GENESIS_COINBASE_TXID).expect("signing failed");

    group.bench_function("verify_signed_txid", |b| {
        b.iter(|| verify_message(&public_key, black_box(&signature), GENESIS_COINBASE_TXID))
    });

    group.finish();
}

// ============================================================================
// PM-02: receipt pipeline
// ============================================================================

fn container(sender_validation: bool) -> ServiceContainer {
    let config = NodeConfig {
        receiver: ReceiverConfig::new(["example.com"]).with_sender_validation(sender_validation),
        ..NodeConfig::default()
    };
    let container = ServiceContainer::new(&config).expect("valid config");
    container
        .register_paymail("alice@example.com")
        .expect("valid paymail");
    container
}

fn bench_receive(c: &mut Criterion) {
    let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
    let mut group = c.benchmark_group("pm-02-p2p-receive");
    group.measurement_time(Duration::from_secs(10));
    group.throughput(Throughput::Elements(1));

    let keypair = Secp256k1KeyPair::generate();
    for sender_validation in [false, true] {
        let container = container(sender_validation);
        let mut counter = 0u64;

        group.bench_with_input(
            BenchmarkId::new("receive", if sender_validation { "signed" } else { "unsigned" }),
            &sender_validation,
            |b, signed| {
                b.iter(|| {
                    counter += 1;
                    let reference = format!("ref-{counter}");
                    let request = if *signed {
                        signed_request(&keypair, &reference)
                    } else {
                        unsigned_request(&reference)
                    };
                    runtime.block_on(respond(
                        container.receiver.as_ref(),
                        "alice@example.com",
                        request,
                        &RequestContext::default(),
                    ))
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_brfc, bench_crypto, bench_receive);

criterion_main!(benches);
