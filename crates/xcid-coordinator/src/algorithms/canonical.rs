//! # Canonical Serialization and Content Addressing
//!
//! An intent's id is the Keccak-256 of its canonical JSON bytes. Canonical
//! means: tagged variant with a leading `kind` discriminant, struct fields
//! in declaration order, integers as decimal strings, byte fields as
//! lowercase hex. Two structurally identical intents therefore always hash
//! to the same id. Embedding a volatile deadline deliberately makes ids
//! time-sensitive: IntentId is a content fingerprint, not an idempotency
//! key.

use super::derivation::keccak256;
use crate::domain::{Address, CoordinatorError, Hash, IdentityId, Intent};
use crate::domain::value_objects::ChainId;
use primitive_types::U256;

/// Versioned domain tag for the sync-proof layout.
pub const SYNC_PROOF_DOMAIN_V1: &[u8] = b"xcid/sync-proof/v1";

/// Canonical JSON bytes of an intent.
pub fn canonical_bytes(intent: &Intent) -> Result<Vec<u8>, CoordinatorError> {
    serde_json::to_vec(intent).map_err(|e| CoordinatorError::Serialization(e.to_string()))
}

/// Content hash (IntentId) of an intent: one Keccak-256 pass over the
/// canonical bytes. Pure and deterministic.
pub fn intent_hash(intent: &Intent) -> Result<Hash, CoordinatorError> {
    Ok(keccak256(&canonical_bytes(intent)?))
}

/// Digest binding a sync intent to the source replica's observed state.
///
/// Layout (versioned through the domain tag):
/// `tag || identity_id || source_chain_be8 || owner || nonce_be32`.
pub fn compute_sync_proof(
    identity_id: &IdentityId,
    source_chain: ChainId,
    owner: &Address,
    nonce: U256,
) -> Hash {
    let mut nonce_bytes = [0u8; 32];
    nonce.to_big_endian(&mut nonce_bytes);

    let mut buf = Vec::with_capacity(SYNC_PROOF_DOMAIN_V1.len() + 32 + 8 + 20 + 32);
    buf.extend_from_slice(SYNC_PROOF_DOMAIN_V1);
    buf.extend_from_slice(identity_id);
    buf.extend_from_slice(&source_chain.value().to_be_bytes());
    buf.extend_from_slice(owner);
    buf.extend_from_slice(&nonce_bytes);
    keccak256(&buf)
}
