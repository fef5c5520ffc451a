//! # XCID Coordinator
//!
//! Cross-chain identity state coordination and content-addressed intents.
//!
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)
//!
//! ## Purpose
//!
//! One logical identity (a smart account controlled by one owner key)
//! exists in different deployment states on several chains that share no
//! consensus. This crate:
//!
//! - predicts the address the identity will occupy on any target chain
//!   before deployment (create2-style derivation),
//! - tracks per-chain replica state (deployed, nonce, last sync) in a
//!   locally-authoritative, eventually-stale store, and
//! - produces canonical, content-addressed intents that an external
//!   solver/relay network fills asynchronously.
//!
//! It does not achieve cross-chain consensus, does not make cross-chain
//! operations atomic, and does not verify derived addresses on chain.
//!
//! ## Module Structure
//!
//! ```text
//! xcid-coordinator/
//! ├── domain/      # Entities, value objects, errors, invariants
//! ├── algorithms/  # Address derivation, canonical hashing, encoding
//! ├── ports/       # Inbound API, outbound dependencies (+ mocks)
//! ├── adapters/    # Default outbound implementations
//! └── service/     # Registry, deriver, store, factory, gateway
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod algorithms;
pub mod domain;
pub mod ports;
pub mod service;

// Re-exports
pub use adapters::{InProcessRelay, NoopSigner, StaticChainClient, SystemTimeSource};
pub use algorithms::{
    canonical_bytes, compute_salt, compute_sync_proof, derive_create2_address,
    encode_call_instruction, encode_transfer_instruction, intent_hash, keccak256,
    placeholder_init_code_hash, CallInstruction, TransferInstruction,
};
pub use domain::{
    Address, AuthIntentParams, ChainDescriptor, ChainId, ChainIdentityState, CoordinatorConfig,
    CoordinatorError, CrossChainAuthIntent, CrossChainIdentityState, Hash, IdentityId,
    IdentitySyncIntent, Intent, IntentReceipt, IntentStatus, IntentStatusRecord, NewIdentityState,
    Selector,
};
pub use ports::{
    ChainClient, FixedTimeSource, IdentityCoordinatorApi, IntentRelay, IntentSigner,
    MockChainClient, MockRelay, TimeSource,
};
pub use service::{
    AddressDeriver, ChainRegistry, CrossChainCoordinator, IdentityStateStore, IntentFactory,
    IntentGateway,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
