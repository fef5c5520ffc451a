//! Identity State Store
//!
//! Authoritative-but-local map of identity -> per-chain replica state. The
//! view is eventually stale by design: it reconciles only through explicit
//! sync operations, never by assumption.
//!
//! ## Locking
//!
//! The outer map lock is held only for lookup/insert; each identity sits
//! behind its own `RwLock`, so concurrent mutations of different
//! identities never serialize against each other, while mutations of one
//! identity are serialized per entry.

use super::deriver::AddressDeriver;
use super::registry::ChainRegistry;
use crate::domain::{
    invariant_identity_id_present, Address, ChainIdentityState, CoordinatorConfig,
    CoordinatorError, CrossChainIdentityState, IdentityId,
};
use crate::domain::value_objects::ChainId;
use crate::ports::outbound::TimeSource;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, warn};

type SharedIdentity = Arc<RwLock<CrossChainIdentityState>>;

/// In-memory store of cross-chain identity state.
pub struct IdentityStateStore {
    registry: Arc<ChainRegistry>,
    deriver: Arc<AddressDeriver>,
    clock: Arc<dyn TimeSource>,
    config: CoordinatorConfig,
    identities: RwLock<HashMap<IdentityId, SharedIdentity>>,
}

impl IdentityStateStore {
    /// Store wired to a registry, deriver and clock.
    pub fn new(
        registry: Arc<ChainRegistry>,
        deriver: Arc<AddressDeriver>,
        clock: Arc<dyn TimeSource>,
        config: CoordinatorConfig,
    ) -> Self {
        Self {
            registry,
            deriver,
            clock,
            config,
            identities: RwLock::new(HashMap::new()),
        }
    }

    /// Configured home chain.
    pub fn home_chain(&self) -> ChainId {
        self.config.home_chain
    }

    /// Create an identity.
    ///
    /// Seeds the home-chain replica as deployed (nonce 0, synced now) and
    /// one predicted, undeployed replica per distinct target chain; a
    /// duplicate of the home chain in the target list is skipped. An
    /// existing identity with the same id is silently replaced (a warning
    /// is logged).
    pub fn create(
        &self,
        identity_id: IdentityId,
        owner: Address,
        home_account: Address,
        target_chains: &[ChainId],
    ) -> Result<CrossChainIdentityState, CoordinatorError> {
        invariant_identity_id_present(&identity_id)?;
        // Home chain must be registered even though its account address is
        // supplied by the caller.
        self.registry.get(self.config.home_chain)?;

        let now = self.clock.now();
        let mut chain_states = HashMap::new();
        chain_states.insert(
            self.config.home_chain,
            ChainIdentityState::home(self.config.home_chain, home_account, now),
        );

        for &chain in target_chains {
            if chain == self.config.home_chain || chain_states.contains_key(&chain) {
                continue;
            }
            let predicted = self.deriver.predict(&identity_id, &owner, chain)?;
            chain_states.insert(chain, ChainIdentityState::predicted(chain, predicted));
        }

        let state = CrossChainIdentityState {
            identity_id,
            owner,
            chain_states,
        };

        let previous = self
            .identities
            .write()
            .insert(identity_id, Arc::new(RwLock::new(state.clone())));
        if previous.is_some() {
            warn!(
                "[xcid] identity 0x{} re-created, previous replica state replaced",
                hex::encode(identity_id)
            );
        }
        debug!(
            "[xcid] created identity 0x{} with {} replica(s)",
            hex::encode(identity_id),
            state.chain_states.len()
        );
        Ok(state)
    }

    /// Snapshot of an identity's replica map.
    pub fn get(&self, identity_id: &IdentityId) -> Option<CrossChainIdentityState> {
        let entry = self.identities.read().get(identity_id).cloned()?;
        let state = entry.read().clone();
        Some(state)
    }

    /// Record that a sync was requested/observed for one replica.
    ///
    /// Timestamps `last_sync` only: no chain is contacted, no replica is
    /// created, and the `deployed` flag is untouched (deployment
    /// confirmation is an external responsibility).
    pub fn sync(
        &self,
        identity_id: &IdentityId,
        chain: ChainId,
    ) -> Result<ChainIdentityState, CoordinatorError> {
        let entry = self
            .identities
            .read()
            .get(identity_id)
            .cloned()
            .ok_or(CoordinatorError::IdentityNotFound(*identity_id))?;

        let mut state = entry.write();
        let replica = state.chain_states.get_mut(&chain).ok_or(
            CoordinatorError::ChainNotRegisteredForIdentity {
                identity_id: *identity_id,
                chain,
            },
        )?;
        replica.last_sync = self.clock.now();
        debug!(
            "[xcid] synced identity 0x{} on chain {} at {}",
            hex::encode(identity_id),
            chain,
            replica.last_sync
        );
        Ok(replica.clone())
    }

    /// Number of identities tracked.
    pub fn len(&self) -> usize {
        self.identities.read().len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.identities.read().is_empty()
    }
}
