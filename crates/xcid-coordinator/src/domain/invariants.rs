//! # Domain Invariants
//!
//! Business rules for identity replica state.

use super::entities::CrossChainIdentityState;
use super::errors::{CoordinatorError, IdentityId};
use super::value_objects::ChainId;

/// Default intent validity window (1 hour).
pub const DEFAULT_INTENT_VALIDITY_SECS: u64 = 3600;

/// Invariant: identity identifiers must be non-empty.
///
/// An all-zero id is treated as missing.
pub fn invariant_identity_id_present(identity_id: &IdentityId) -> Result<(), CoordinatorError> {
    if identity_id.iter().all(|b| *b == 0) {
        return Err(CoordinatorError::MissingIdentityId);
    }
    Ok(())
}

/// Invariant: the home-chain replica exists, is deployed, and starts at
/// nonce zero.
pub fn invariant_home_replica(
    state: &CrossChainIdentityState,
    home_chain: ChainId,
) -> Result<(), CoordinatorError> {
    let replica = state.chain_states.get(&home_chain).ok_or(
        CoordinatorError::ChainNotRegisteredForIdentity {
            identity_id: state.identity_id,
            chain: home_chain,
        },
    )?;
    if !replica.deployed || !replica.nonce.is_zero() {
        return Err(CoordinatorError::SourceChainNotDeployed(home_chain));
    }
    Ok(())
}

/// Invariant: every chain referenced by the identity is registered.
pub fn invariant_chains_registered(
    state: &CrossChainIdentityState,
    registered: &[ChainId],
) -> Result<(), CoordinatorError> {
    for chain in state.chain_states.keys() {
        if !registered.contains(chain) {
            return Err(CoordinatorError::ChainNotSupported(*chain));
        }
    }
    Ok(())
}
