//! Intent Factory
//!
//! Builds the intent shapes and their canonical content hash from the
//! store's current view of identity state.

use super::store::IdentityStateStore;
use crate::algorithms::{compute_sync_proof, intent_hash};
use crate::domain::{
    AuthIntentParams, CoordinatorConfig, CoordinatorError, CrossChainAuthIntent, Hash, IdentityId,
    IdentitySyncIntent, Intent, NewIdentityState,
};
use crate::domain::value_objects::ChainId;
use crate::ports::outbound::{IntentSigner, TimeSource};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::debug;

/// Factory for identity-sync and cross-chain-auth intents.
pub struct IntentFactory {
    store: Arc<IdentityStateStore>,
    signer: Arc<dyn IntentSigner>,
    clock: Arc<dyn TimeSource>,
    config: CoordinatorConfig,
}

impl IntentFactory {
    /// Factory wired to the store, a signer and a clock.
    pub fn new(
        store: Arc<IdentityStateStore>,
        signer: Arc<dyn IntentSigner>,
        clock: Arc<dyn TimeSource>,
        config: CoordinatorConfig,
    ) -> Self {
        Self {
            store,
            signer,
            clock,
            config,
        }
    }

    /// Build an identity-sync intent.
    ///
    /// The source chain must hold a deployed replica: the proof digest
    /// attests to the source replica's observed (owner, nonce) state, which
    /// an undeployed account cannot provide. The deadline embeds the
    /// current time, so rebuilding the same sync later yields a different
    /// intent id on purpose.
    pub fn build_identity_sync_intent(
        &self,
        identity_id: &IdentityId,
        source_chain: ChainId,
        target_chain: ChainId,
    ) -> Result<IdentitySyncIntent, CoordinatorError> {
        let state = self
            .store
            .get(identity_id)
            .ok_or(CoordinatorError::IdentityNotFound(*identity_id))?;
        let replica = state.chain_states.get(&source_chain).ok_or(
            CoordinatorError::ChainNotRegisteredForIdentity {
                identity_id: *identity_id,
                chain: source_chain,
            },
        )?;
        if !replica.deployed {
            return Err(CoordinatorError::SourceChainNotDeployed(source_chain));
        }

        let proof = compute_sync_proof(identity_id, source_chain, &state.owner, replica.nonce);

        // The state a target chain mirrors: the source replica's account
        // coordinates. Providers and credentials are not tracked here.
        let mut metadata = BTreeMap::new();
        metadata.insert(
            "owner".to_string(),
            format!("0x{}", hex::encode(state.owner)),
        );
        metadata.insert(
            "smartAccount".to_string(),
            format!("0x{}", hex::encode(replica.smart_account)),
        );
        metadata.insert("nonce".to_string(), replica.nonce.to_string());

        debug!(
            "[xcid] built sync intent for 0x{}: {} -> {}",
            hex::encode(identity_id),
            source_chain,
            target_chain
        );
        Ok(IdentitySyncIntent {
            source_chain,
            target_chain,
            identity_id: *identity_id,
            new_state: NewIdentityState {
                linked_providers: None,
                metadata: Some(metadata),
                credentials: None,
            },
            proof,
            deadline: self.clock.now() + self.config.intent_validity_secs,
        })
    }

    /// Build a cross-chain auth intent.
    ///
    /// The source chain is always the configured home chain. The signature
    /// is produced by the injected signer over the unsigned intent's
    /// content hash; the no-op signer leaves it empty.
    pub async fn build_cross_chain_auth_intent(
        &self,
        params: AuthIntentParams,
    ) -> Result<CrossChainAuthIntent, CoordinatorError> {
        let mut intent = CrossChainAuthIntent {
            identity_id: params.identity_id,
            source_chain: self.config.home_chain,
            target_chain: params.target_chain,
            target_contract: params.target_contract,
            target_function: params.target_function,
            call_data: params.call_data,
            value: params.value,
            deadline: self.clock.now() + self.config.intent_validity_secs,
            signature: Vec::new(),
        };

        let digest = intent_hash(&Intent::CrossChainAuth(intent.clone()))?;
        intent.signature = self.signer.sign_intent(digest).await?;

        debug!(
            "[xcid] built auth intent for 0x{}: {} -> {}",
            hex::encode(params.identity_id),
            intent.source_chain,
            intent.target_chain
        );
        Ok(intent)
    }

    /// Content hash (IntentId) of an intent.
    pub fn hash(&self, intent: &Intent) -> Result<Hash, CoordinatorError> {
        intent_hash(intent)
    }
}
