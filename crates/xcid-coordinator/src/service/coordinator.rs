//! Cross-Chain Coordinator
//!
//! Composition root: wires registry, deriver, store, factory and gateway
//! behind the inbound API. Everything is injected; there is no ambient
//! singleton state.

use super::deriver::AddressDeriver;
use super::factory::IntentFactory;
use super::gateway::IntentGateway;
use super::registry::ChainRegistry;
use super::store::IdentityStateStore;
use crate::domain::{
    Address, AuthIntentParams, ChainIdentityState, CoordinatorConfig, CoordinatorError,
    CrossChainAuthIntent, CrossChainIdentityState, Hash, IdentityId, IdentitySyncIntent, Intent,
    IntentReceipt, IntentStatusRecord,
};
use crate::domain::value_objects::ChainId;
use crate::ports::inbound::IdentityCoordinatorApi;
use crate::ports::outbound::{ChainClient, IntentRelay, IntentSigner, TimeSource};
use async_trait::async_trait;
use primitive_types::U256;
use std::sync::Arc;

/// The coordinator service.
pub struct CrossChainCoordinator {
    store: Arc<IdentityStateStore>,
    factory: IntentFactory,
    gateway: IntentGateway,
    chain_client: Arc<dyn ChainClient>,
}

impl CrossChainCoordinator {
    /// Compose a coordinator from its injected dependencies.
    pub fn new(
        config: CoordinatorConfig,
        registry: Arc<ChainRegistry>,
        chain_client: Arc<dyn ChainClient>,
        relay: Arc<dyn IntentRelay>,
        signer: Arc<dyn IntentSigner>,
        clock: Arc<dyn TimeSource>,
    ) -> Self {
        let deriver = Arc::new(AddressDeriver::new(registry.clone()));
        let store = Arc::new(IdentityStateStore::new(
            registry,
            deriver,
            clock.clone(),
            config.clone(),
        ));
        let factory = IntentFactory::new(store.clone(), signer, clock, config);
        let gateway = IntentGateway::new(relay);
        Self {
            store,
            factory,
            gateway,
            chain_client,
        }
    }

    /// The underlying state store.
    pub fn store(&self) -> &Arc<IdentityStateStore> {
        &self.store
    }

    fn replica(
        &self,
        identity_id: &IdentityId,
        chain: ChainId,
    ) -> Result<ChainIdentityState, CoordinatorError> {
        let state = self
            .store
            .get(identity_id)
            .ok_or(CoordinatorError::IdentityNotFound(*identity_id))?;
        state
            .chain_states
            .get(&chain)
            .cloned()
            .ok_or(CoordinatorError::ChainNotRegisteredForIdentity {
                identity_id: *identity_id,
                chain,
            })
    }
}

#[async_trait]
impl IdentityCoordinatorApi for CrossChainCoordinator {
    fn create_identity(
        &self,
        identity_id: IdentityId,
        owner: Address,
        home_account: Address,
        target_chains: &[ChainId],
    ) -> Result<CrossChainIdentityState, CoordinatorError> {
        self.store
            .create(identity_id, owner, home_account, target_chains)
    }

    fn identity(&self, identity_id: &IdentityId) -> Option<CrossChainIdentityState> {
        self.store.get(identity_id)
    }

    fn sync_identity(
        &self,
        identity_id: &IdentityId,
        chain: ChainId,
    ) -> Result<ChainIdentityState, CoordinatorError> {
        self.store.sync(identity_id, chain)
    }

    fn build_identity_sync_intent(
        &self,
        identity_id: &IdentityId,
        source_chain: ChainId,
        target_chain: ChainId,
    ) -> Result<IdentitySyncIntent, CoordinatorError> {
        self.factory
            .build_identity_sync_intent(identity_id, source_chain, target_chain)
    }

    async fn build_cross_chain_auth_intent(
        &self,
        params: AuthIntentParams,
    ) -> Result<CrossChainAuthIntent, CoordinatorError> {
        self.factory.build_cross_chain_auth_intent(params).await
    }

    fn intent_hash(&self, intent: &Intent) -> Result<Hash, CoordinatorError> {
        self.factory.hash(intent)
    }

    async fn submit_intent(&self, intent: &Intent) -> Result<IntentReceipt, CoordinatorError> {
        self.gateway.submit(intent).await
    }

    async fn intent_status(
        &self,
        intent_id: Hash,
    ) -> Result<IntentStatusRecord, CoordinatorError> {
        self.gateway.status(intent_id).await
    }

    async fn probe_deployment(
        &self,
        identity_id: &IdentityId,
        chain: ChainId,
    ) -> Result<bool, CoordinatorError> {
        let replica = self.replica(identity_id, chain)?;
        let code = self
            .chain_client
            .get_code(chain, replica.smart_account)
            .await?;
        Ok(!code.is_empty())
    }

    async fn account_balance(
        &self,
        identity_id: &IdentityId,
        chain: ChainId,
    ) -> Result<U256, CoordinatorError> {
        let replica = self.replica(identity_id, chain)?;
        self.chain_client
            .get_balance(chain, replica.smart_account)
            .await
    }
}
