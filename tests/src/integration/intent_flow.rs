//! # Intent Flow
//!
//! Builds, hashes and submits intents against the in-process relay, then
//! observes the externally-driven lifecycle through the gateway.

use std::sync::Arc;

use primitive_types::U256;
use xcid_coordinator::{
    AuthIntentParams, ChainDescriptor, ChainId, ChainRegistry, CoordinatorConfig,
    CoordinatorError, CrossChainCoordinator, FixedTimeSource, IdentityCoordinatorApi,
    InProcessRelay, Intent, IntentStatus, MockRelay, NoopSigner, StaticChainClient,
};

const HOME: ChainId = ChainId(1337);
const T0: u64 = 1_700_000_000;

fn descriptor(chain_id: u64) -> ChainDescriptor {
    ChainDescriptor {
        chain_id: ChainId::new(chain_id),
        name: format!("chain-{chain_id}"),
        rpc_url: format!("https://rpc.chain-{chain_id}.example"),
        identity_registry: [0x01u8; 20],
        account_factory: [chain_id as u8; 20],
        intent_router: [0x03u8; 20],
        entry_point: [0x04u8; 20],
    }
}

fn setup(relay: Arc<InProcessRelay>) -> CrossChainCoordinator {
    let registry = Arc::new(
        ChainRegistry::with_descriptors([descriptor(1337), descriptor(1), descriptor(8453)])
            .unwrap(),
    );
    let chain_client = Arc::new(StaticChainClient::with_chains(&[
        HOME,
        ChainId::new(1),
        ChainId::new(8453),
    ]));
    let coordinator = CrossChainCoordinator::new(
        CoordinatorConfig::new(HOME),
        registry,
        chain_client,
        relay,
        Arc::new(NoopSigner),
        Arc::new(FixedTimeSource::new(T0)),
    );
    coordinator
        .create_identity(
            [0xAAu8; 32],
            [0x11u8; 20],
            [0x22u8; 20],
            &[ChainId::new(1), ChainId::new(8453)],
        )
        .unwrap();
    coordinator
}

#[tokio::test]
async fn sync_intent_full_lifecycle() {
    let relay = Arc::new(InProcessRelay::new());
    let coordinator = setup(relay.clone());

    let intent = coordinator
        .build_identity_sync_intent(&[0xAAu8; 32], HOME, ChainId::new(8453))
        .unwrap();
    assert_eq!(intent.deadline, T0 + 3600);

    let intent = Intent::IdentitySync(intent);
    let receipt = coordinator.submit_intent(&intent).await.unwrap();
    assert_eq!(receipt.status, IntentStatus::Pending);
    assert_eq!(receipt.intent_id, coordinator.intent_hash(&intent).unwrap());

    // The solver network advances the lifecycle; the core only observes.
    relay.advance(receipt.intent_id);
    let record = coordinator.intent_status(receipt.intent_id).await.unwrap();
    assert_eq!(record.status, IntentStatus::Solving);
    assert!(record.execution_tx.is_none());

    relay.advance(receipt.intent_id);
    let record = coordinator.intent_status(receipt.intent_id).await.unwrap();
    assert_eq!(record.status, IntentStatus::Executed);
    assert!(record.status.is_terminal());
    assert!(record.solver_solution.is_some());
    assert!(record.execution_tx.is_some());
}

#[tokio::test]
async fn sync_intent_failed_lifecycle() {
    let relay = Arc::new(InProcessRelay::new());
    let coordinator = setup(relay.clone());

    let intent = Intent::IdentitySync(
        coordinator
            .build_identity_sync_intent(&[0xAAu8; 32], HOME, ChainId::new(1))
            .unwrap(),
    );
    let receipt = coordinator.submit_intent(&intent).await.unwrap();

    relay.fail(receipt.intent_id);
    let record = coordinator.intent_status(receipt.intent_id).await.unwrap();
    assert_eq!(record.status, IntentStatus::Failed);
    assert!(record.status.is_terminal());
}

#[tokio::test]
async fn sync_intent_requires_deployed_source() {
    let relay = Arc::new(InProcessRelay::new());
    let coordinator = setup(relay);

    let result =
        coordinator.build_identity_sync_intent(&[0xAAu8; 32], ChainId::new(1), ChainId::new(8453));
    assert!(matches!(
        result,
        Err(CoordinatorError::SourceChainNotDeployed(_))
    ));
}

#[tokio::test]
async fn identical_intents_share_an_id_distinct_intents_do_not() {
    let relay = Arc::new(InProcessRelay::new());
    let coordinator = setup(relay);

    // Fixed clock: rebuilding produces byte-identical content.
    let a = coordinator
        .build_identity_sync_intent(&[0xAAu8; 32], HOME, ChainId::new(1))
        .unwrap();
    let b = coordinator
        .build_identity_sync_intent(&[0xAAu8; 32], HOME, ChainId::new(1))
        .unwrap();
    let c = coordinator
        .build_identity_sync_intent(&[0xAAu8; 32], HOME, ChainId::new(8453))
        .unwrap();

    let id_a = coordinator.intent_hash(&Intent::IdentitySync(a)).unwrap();
    let id_b = coordinator.intent_hash(&Intent::IdentitySync(b)).unwrap();
    let id_c = coordinator.intent_hash(&Intent::IdentitySync(c)).unwrap();
    assert_eq!(id_a, id_b);
    assert_ne!(id_a, id_c);
}

#[tokio::test]
async fn canonical_payload_stringifies_integers() {
    let relay = Arc::new(InProcessRelay::new());
    let coordinator = setup(relay);

    let intent = Intent::IdentitySync(
        coordinator
            .build_identity_sync_intent(&[0xAAu8; 32], HOME, ChainId::new(8453))
            .unwrap(),
    );
    let payload = xcid_coordinator::canonical_bytes(&intent).unwrap();
    let value: serde_json::Value = serde_json::from_slice(&payload).unwrap();

    assert_eq!(value["kind"], "identity-sync");
    // Integer-typed fields travel as decimal strings, never JSON numbers.
    assert_eq!(value["source_chain"], "1337");
    assert_eq!(value["target_chain"], "8453");
    assert_eq!(value["deadline"], (T0 + 3600).to_string());
    assert_eq!(value["new_state"]["metadata"]["nonce"], "0");
}

#[tokio::test]
async fn auth_intent_built_and_submitted_unsigned() {
    let relay = Arc::new(InProcessRelay::new());
    let coordinator = setup(relay.clone());

    let auth = coordinator
        .build_cross_chain_auth_intent(AuthIntentParams {
            identity_id: [0xAAu8; 32],
            owner: [0x11u8; 20],
            target_chain: ChainId::new(8453),
            target_contract: [0x55u8; 20],
            target_function: [0xa9, 0x05, 0x9c, 0xbb],
            call_data: vec![0x00; 68],
            value: U256::from(1_000u64),
        })
        .await
        .unwrap();
    assert_eq!(auth.source_chain, HOME);
    assert!(auth.signature.is_empty());

    let receipt = coordinator
        .submit_intent(&Intent::CrossChainAuth(auth))
        .await
        .unwrap();
    assert_eq!(receipt.status, IntentStatus::Pending);
    assert_eq!(relay.len(), 1);
}

#[tokio::test]
async fn relay_failures_are_retryable_validation_failures_are_not() {
    let registry = Arc::new(ChainRegistry::with_descriptors([descriptor(1337)]).unwrap());
    let coordinator = CrossChainCoordinator::new(
        CoordinatorConfig::new(HOME),
        registry,
        Arc::new(StaticChainClient::with_chains(&[HOME])),
        Arc::new(MockRelay::failing()),
        Arc::new(NoopSigner),
        Arc::new(FixedTimeSource::new(T0)),
    );
    coordinator
        .create_identity([0xAAu8; 32], [0x11u8; 20], [0x22u8; 20], &[])
        .unwrap();

    let intent = Intent::IdentitySync(
        coordinator
            .build_identity_sync_intent(&[0xAAu8; 32], HOME, ChainId::new(1))
            .unwrap(),
    );
    let relay_err = coordinator.submit_intent(&intent).await.unwrap_err();
    assert!(relay_err.is_retryable());

    let validation_err = coordinator
        .build_identity_sync_intent(&[0xABu8; 32], HOME, ChainId::new(1))
        .unwrap_err();
    assert!(!validation_err.is_retryable());
}
