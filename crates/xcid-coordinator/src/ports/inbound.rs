//! # Inbound Ports
//!
//! API trait defining what the coordinator subsystem can do.

use crate::domain::{
    Address, AuthIntentParams, ChainIdentityState, CoordinatorError, CrossChainAuthIntent,
    CrossChainIdentityState, Hash, IdentityId, IdentitySyncIntent, Intent, IntentReceipt,
    IntentStatusRecord,
};
use crate::domain::value_objects::ChainId;
use async_trait::async_trait;
use primitive_types::U256;

/// Coordinator API - inbound port.
///
/// State operations are synchronous (local, in-memory); everything that
/// crosses a network boundary is async and driven by the caller's runtime.
/// Cancellation propagates by dropping the future.
#[async_trait]
pub trait IdentityCoordinatorApi: Send + Sync {
    /// Create an identity: home replica deployed, remote replicas predicted.
    fn create_identity(
        &self,
        identity_id: IdentityId,
        owner: Address,
        home_account: Address,
        target_chains: &[ChainId],
    ) -> Result<CrossChainIdentityState, CoordinatorError>;

    /// Get an identity's replica map.
    fn identity(&self, identity_id: &IdentityId) -> Option<CrossChainIdentityState>;

    /// Record a sync request for one replica, timestamping `last_sync`.
    fn sync_identity(
        &self,
        identity_id: &IdentityId,
        chain: ChainId,
    ) -> Result<ChainIdentityState, CoordinatorError>;

    /// Build an identity-sync intent from a deployed source replica.
    fn build_identity_sync_intent(
        &self,
        identity_id: &IdentityId,
        source_chain: ChainId,
        target_chain: ChainId,
    ) -> Result<IdentitySyncIntent, CoordinatorError>;

    /// Build a cross-chain auth intent originated from the home chain.
    async fn build_cross_chain_auth_intent(
        &self,
        params: AuthIntentParams,
    ) -> Result<CrossChainAuthIntent, CoordinatorError>;

    /// Content hash (IntentId) of an intent.
    fn intent_hash(&self, intent: &Intent) -> Result<Hash, CoordinatorError>;

    /// Submit an intent to the relay.
    async fn submit_intent(&self, intent: &Intent) -> Result<IntentReceipt, CoordinatorError>;

    /// Poll the relay for an intent's lifecycle record.
    async fn intent_status(
        &self,
        intent_id: Hash,
    ) -> Result<IntentStatusRecord, CoordinatorError>;

    /// Read-only: whether code exists at the replica's account address.
    /// Never mutates the stored `deployed` flag.
    async fn probe_deployment(
        &self,
        identity_id: &IdentityId,
        chain: ChainId,
    ) -> Result<bool, CoordinatorError>;

    /// Read-only: native balance of the replica's account address.
    async fn account_balance(
        &self,
        identity_id: &IdentityId,
        chain: ChainId,
    ) -> Result<U256, CoordinatorError>;
}
