//! # Domain Errors
//!
//! Error taxonomy for the cross-chain identity coordinator.

use super::value_objects::ChainId;
use thiserror::Error;

/// Hash type (32-byte Keccak-256).
pub type Hash = [u8; 32];

/// Address type (20-byte).
pub type Address = [u8; 20];

/// Identity identifier (32-byte).
pub type IdentityId = [u8; 32];

/// Function selector (4-byte).
pub type Selector = [u8; 4];

/// Coordinator error types.
///
/// Every variant is scoped to a single identity/intent operation; none is
/// fatal to the process. Relay- and chain-sourced variants are network
/// failures and may be retried; the rest are validation failures.
#[derive(Debug, Error)]
pub enum CoordinatorError {
    /// Unregistered chain referenced.
    #[error("Unsupported chain: {0}")]
    ChainNotSupported(ChainId),

    /// Chain id failed registration validation (zero).
    #[error("Invalid chain id: {0}")]
    InvalidChainId(ChainId),

    /// Identity not found in the local store.
    #[error("Identity not found: 0x{}", hex::encode(.0))]
    IdentityNotFound(IdentityId),

    /// Empty (all-zero) identity identifier.
    #[error("Missing identity id")]
    MissingIdentityId,

    /// The identity has no replica on the requested chain.
    #[error("Chain {chain} not registered for identity 0x{}", hex::encode(.identity_id))]
    ChainNotRegisteredForIdentity {
        /// Identity whose replica map was consulted.
        identity_id: IdentityId,
        /// Chain with no replica entry.
        chain: ChainId,
    },

    /// The sync source replica exists but is not deployed.
    #[error("Source chain {0} has no deployed account")]
    SourceChainNotDeployed(ChainId),

    /// Canonical serialization failed.
    #[error("Canonical serialization failed: {0}")]
    Serialization(String),

    /// The injected signer could not produce a signature.
    #[error("Intent signing failed: {0}")]
    SigningFailed(String),

    /// Chain RPC endpoint unreachable or errored.
    #[error("Chain client error: {0}")]
    ChainUnavailable(String),

    /// Relay endpoint unreachable or errored.
    #[error("Relay unavailable: {0}")]
    RelayUnavailable(String),

    /// Relay received the intent and refused it.
    #[error("Relay rejected intent: {0}")]
    RelayRejected(String),
}

impl CoordinatorError {
    /// Whether a caller may reasonably retry the failed operation.
    ///
    /// Transport failures (`ChainUnavailable`, `RelayUnavailable`) are
    /// retryable. `RelayRejected` is the relay's terminal verdict on the
    /// submitted intent; everything else is a local validation failure.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            CoordinatorError::ChainUnavailable(_) | CoordinatorError::RelayUnavailable(_)
        )
    }
}
