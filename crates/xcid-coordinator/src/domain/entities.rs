//! # Domain Entities
//!
//! Core entities for cross-chain identity state and intents.
//!
//! The intent structs double as the canonical wire layout: struct field
//! order is part of the content-addressing scheme, so reordering fields is
//! a breaking change to intent ids.

use super::errors::{Address, Hash, IdentityId, Selector};
use super::value_objects::{ChainId, IntentStatus};
use primitive_types::U256;
use serde::{Deserialize, Serialize};
use serde_with::{hex::Hex, serde_as, DisplayFromStr};
use std::collections::{BTreeMap, HashMap};

/// Decimal-string serialization for U256.
///
/// Canonical intent JSON carries big integers as decimal strings, never as
/// native JSON numbers, so no consumer can lose precision.
mod u256_dec {
    use primitive_types::U256;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &U256, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<U256, D::Error> {
        let s = String::deserialize(deserializer)?;
        U256::from_dec_str(&s).map_err(|_| de::Error::custom("invalid decimal string"))
    }
}

/// Per-chain configuration entry.
///
/// Immutable once registered; replaced wholesale on re-registration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainDescriptor {
    /// Numeric chain identifier (registry key).
    pub chain_id: ChainId,
    /// Human-readable chain name.
    pub name: String,
    /// RPC endpoint URL.
    pub rpc_url: String,
    /// Identity registry contract.
    pub identity_registry: Address,
    /// Smart-account factory contract (create2 deployer).
    pub account_factory: Address,
    /// Intent router contract.
    pub intent_router: Address,
    /// ERC-4337 entry point contract.
    pub entry_point: Address,
}

/// Per-chain replica record for one identity.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainIdentityState {
    /// Chain this replica lives on.
    pub chain_id: ChainId,
    /// Smart account address (actual on the home chain, predicted elsewhere).
    pub smart_account: Address,
    /// Account nonce as last observed locally.
    pub nonce: U256,
    /// Whether the account contract is deployed on this chain.
    pub deployed: bool,
    /// Unix seconds of the last sync request; 0 = never synced.
    pub last_sync: u64,
}

impl ChainIdentityState {
    /// Home-chain record: deployed, nonce zero, synced at creation.
    pub fn home(chain_id: ChainId, smart_account: Address, now: u64) -> Self {
        Self {
            chain_id,
            smart_account,
            nonce: U256::zero(),
            deployed: true,
            last_sync: now,
        }
    }

    /// Remote predicted record: undeployed, never synced.
    pub fn predicted(chain_id: ChainId, smart_account: Address) -> Self {
        Self {
            chain_id,
            smart_account,
            nonce: U256::zero(),
            deployed: false,
            last_sync: 0,
        }
    }
}

/// One logical identity and its replicas across chains.
///
/// Owned exclusively by the coordinator process; mutated only through
/// `IdentityStateStore` methods. The local view is authoritative but
/// eventually stale: it reconciles only through explicit sync operations.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrossChainIdentityState {
    /// Identity identifier.
    pub identity_id: IdentityId,
    /// Owner key address.
    pub owner: Address,
    /// Replica state per chain.
    pub chain_states: HashMap<ChainId, ChainIdentityState>,
}

/// Desired identity state carried by a sync intent.
///
/// All fields optional; a `BTreeMap` keeps metadata key order canonical.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewIdentityState {
    /// Linked authentication providers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linked_providers: Option<Vec<String>>,
    /// Free-form metadata entries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<BTreeMap<String, String>>,
    /// Credential references.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credentials: Option<Vec<String>>,
}

/// Declaration that a target chain should mirror identity state from a
/// source chain. Ephemeral: hashed, submitted, then discarded locally.
#[serde_as]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentitySyncIntent {
    /// Chain whose state is authoritative for this sync.
    #[serde_as(as = "DisplayFromStr")]
    pub source_chain: ChainId,
    /// Chain that should converge to the new state.
    #[serde_as(as = "DisplayFromStr")]
    pub target_chain: ChainId,
    /// Identity being synchronized.
    #[serde_as(as = "Hex")]
    pub identity_id: IdentityId,
    /// Desired state on the target chain.
    pub new_state: NewIdentityState,
    /// Digest binding the intent to the source replica's observed state.
    #[serde_as(as = "Hex")]
    pub proof: Hash,
    /// Unix seconds after which solvers must not fill the intent.
    #[serde_as(as = "DisplayFromStr")]
    pub deadline: u64,
}

/// Declaration that the identity authorizes a contract call on a target
/// chain, originated from its home chain. Same ephemeral lifecycle.
#[serde_as]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrossChainAuthIntent {
    /// Identity granting the authorization.
    #[serde_as(as = "Hex")]
    pub identity_id: IdentityId,
    /// Always the coordinator's configured home chain.
    #[serde_as(as = "DisplayFromStr")]
    pub source_chain: ChainId,
    /// Chain on which the call executes.
    #[serde_as(as = "DisplayFromStr")]
    pub target_chain: ChainId,
    /// Contract to call.
    #[serde_as(as = "Hex")]
    pub target_contract: Address,
    /// 4-byte function selector.
    #[serde_as(as = "Hex")]
    pub target_function: Selector,
    /// ABI-encoded call arguments.
    #[serde_as(as = "Hex")]
    pub call_data: Vec<u8>,
    /// Native value forwarded with the call.
    #[serde(with = "u256_dec")]
    pub value: U256,
    /// Unix seconds after which solvers must not fill the intent.
    #[serde_as(as = "DisplayFromStr")]
    pub deadline: u64,
    /// Owner signature over the unsigned intent's content hash; empty when
    /// produced by the no-op signer.
    #[serde_as(as = "Hex")]
    pub signature: Vec<u8>,
}

/// Tagged union over the intent shapes.
///
/// The `kind` discriminant is part of the canonical serialization, so the
/// two variants can never hash to the same id even with coinciding fields.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Intent {
    /// Identity state synchronization.
    #[serde(rename = "identity-sync")]
    IdentitySync(IdentitySyncIntent),
    /// Cross-chain call authorization.
    #[serde(rename = "cross-chain-auth")]
    CrossChainAuth(CrossChainAuthIntent),
}

impl Intent {
    /// Identity the intent concerns.
    pub fn identity_id(&self) -> &IdentityId {
        match self {
            Intent::IdentitySync(i) => &i.identity_id,
            Intent::CrossChainAuth(i) => &i.identity_id,
        }
    }

    /// Deadline in unix seconds.
    pub fn deadline(&self) -> u64 {
        match self {
            Intent::IdentitySync(i) => i.deadline,
            Intent::CrossChainAuth(i) => i.deadline,
        }
    }
}

/// Result of submitting an intent to the relay.
#[serde_as]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntentReceipt {
    /// Locally computed content hash of the intent.
    #[serde_as(as = "Hex")]
    pub intent_id: Hash,
    /// Lifecycle state at submission time (always pending).
    pub status: IntentStatus,
}

/// Lifecycle record returned by the relay for a submitted intent.
#[serde_as]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntentStatusRecord {
    /// Current lifecycle state.
    pub status: IntentStatus,
    /// Solver solution payload, once a solver has committed.
    #[serde_as(as = "Option<Hex>")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solver_solution: Option<Vec<u8>>,
    /// Execution transaction hash, once executed.
    #[serde_as(as = "Option<Hex>")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub execution_tx: Option<Hash>,
}

/// Parameters for building a cross-chain auth intent.
/// Avoids too many arguments in the factory method.
#[derive(Clone, Debug)]
pub struct AuthIntentParams {
    /// Identity granting the authorization.
    pub identity_id: IdentityId,
    /// Owner key address.
    pub owner: Address,
    /// Chain on which the call executes.
    pub target_chain: ChainId,
    /// Contract to call.
    pub target_contract: Address,
    /// 4-byte function selector.
    pub target_function: Selector,
    /// ABI-encoded call arguments.
    pub call_data: Vec<u8>,
    /// Native value forwarded with the call.
    pub value: U256,
}

/// Coordinator configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoordinatorConfig {
    /// Chain on which identities are first deployed and authoritative.
    pub home_chain: ChainId,
    /// Intent validity window in seconds.
    pub intent_validity_secs: u64,
}

impl CoordinatorConfig {
    /// Config with the default 1-hour intent validity window.
    pub fn new(home_chain: ChainId) -> Self {
        Self {
            home_chain,
            intent_validity_secs: super::invariants::DEFAULT_INTENT_VALIDITY_SECS,
        }
    }

    /// Override the intent validity window.
    pub fn with_intent_validity(mut self, secs: u64) -> Self {
        self.intent_validity_secs = secs;
        self
    }
}
