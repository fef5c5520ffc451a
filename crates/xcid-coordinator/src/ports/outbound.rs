//! # Outbound Ports
//!
//! Traits for external dependencies (chain RPC, relay network, signer,
//! clock), plus mock implementations for tests.

use crate::domain::{Address, CoordinatorError, Hash, IntentStatusRecord};
use crate::domain::value_objects::ChainId;
use async_trait::async_trait;
use primitive_types::U256;

/// Chain RPC client - outbound port.
///
/// Read-only access per injected endpoint; the coordinator never sends
/// funded transactions.
#[async_trait]
pub trait ChainClient: Send + Sync {
    /// Execute a read-only contract call.
    async fn read_only_call(
        &self,
        chain: ChainId,
        to: Address,
        data: &[u8],
    ) -> Result<Vec<u8>, CoordinatorError>;

    /// Estimate gas for a call.
    async fn estimate_gas(
        &self,
        chain: ChainId,
        to: Address,
        data: &[u8],
        value: U256,
    ) -> Result<U256, CoordinatorError>;

    /// Native balance of an address.
    async fn get_balance(&self, chain: ChainId, address: Address)
        -> Result<U256, CoordinatorError>;

    /// Deployed code at an address (empty = no contract).
    async fn get_code(&self, chain: ChainId, address: Address)
        -> Result<Vec<u8>, CoordinatorError>;
}

/// Relay/solver endpoint - outbound port.
///
/// Transport and auth are the relay's concern; only request/response
/// semantics matter here.
#[async_trait]
pub trait IntentRelay: Send + Sync {
    /// Submit a canonical intent payload; returns the relay's intent id.
    async fn submit_intent(&self, payload: &[u8]) -> Result<Hash, CoordinatorError>;

    /// Lifecycle record for a submitted intent.
    async fn intent_status(&self, intent_id: Hash)
        -> Result<IntentStatusRecord, CoordinatorError>;
}

/// Intent signer - outbound port.
///
/// Signs the unsigned intent's content hash. Production wires a wallet or
/// remote signing cluster; `NoopSigner` keeps intents unsigned.
#[async_trait]
pub trait IntentSigner: Send + Sync {
    /// Produce a signature over a 32-byte digest.
    async fn sign_intent(&self, digest: Hash) -> Result<Vec<u8>, CoordinatorError>;
}

/// Clock - outbound port. Injected so tests pin timestamps.
pub trait TimeSource: Send + Sync {
    /// Current unix time in seconds.
    fn now(&self) -> u64;
}

// =============================================================================
// Mock Implementations for Testing
// =============================================================================

/// Mock chain client for testing.
#[derive(Clone, Default)]
pub struct MockChainClient {
    /// Balance per (chain, address).
    pub balances: std::collections::HashMap<(ChainId, Address), U256>,
    /// Code per (chain, address).
    pub code: std::collections::HashMap<(ChainId, Address), Vec<u8>>,
    /// Result returned by every read-only call.
    pub call_result: Vec<u8>,
    /// Gas returned by every estimate.
    pub gas_estimate: u64,
    /// Should fail?
    pub should_fail: bool,
}

impl MockChainClient {
    fn check(&self) -> Result<(), CoordinatorError> {
        if self.should_fail {
            return Err(CoordinatorError::ChainUnavailable("mock failure".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl ChainClient for MockChainClient {
    async fn read_only_call(
        &self,
        _chain: ChainId,
        _to: Address,
        _data: &[u8],
    ) -> Result<Vec<u8>, CoordinatorError> {
        self.check()?;
        Ok(self.call_result.clone())
    }

    async fn estimate_gas(
        &self,
        _chain: ChainId,
        _to: Address,
        _data: &[u8],
        _value: U256,
    ) -> Result<U256, CoordinatorError> {
        self.check()?;
        Ok(U256::from(self.gas_estimate))
    }

    async fn get_balance(
        &self,
        chain: ChainId,
        address: Address,
    ) -> Result<U256, CoordinatorError> {
        self.check()?;
        Ok(self
            .balances
            .get(&(chain, address))
            .copied()
            .unwrap_or_default())
    }

    async fn get_code(&self, chain: ChainId, address: Address) -> Result<Vec<u8>, CoordinatorError> {
        self.check()?;
        Ok(self.code.get(&(chain, address)).cloned().unwrap_or_default())
    }
}

/// Mock relay for testing.
///
/// Echoes the Keccak-256 of the submitted payload as the relay-side id and
/// lets tests script lifecycle records per intent.
#[derive(Default)]
pub struct MockRelay {
    records: parking_lot::RwLock<std::collections::HashMap<Hash, IntentStatusRecord>>,
    /// Fail submissions/polls with `RelayUnavailable`?
    pub should_fail: bool,
    /// Refuse submissions with `RelayRejected`?
    pub reject: bool,
}

impl MockRelay {
    /// Relay that fails every request with `RelayUnavailable`.
    pub fn failing() -> Self {
        Self {
            should_fail: true,
            ..Default::default()
        }
    }

    /// Relay that refuses every submission with `RelayRejected`.
    pub fn rejecting() -> Self {
        Self {
            reject: true,
            ..Default::default()
        }
    }

    /// Script the record returned for an intent id.
    pub fn set_status(&self, intent_id: Hash, record: IntentStatusRecord) {
        self.records.write().insert(intent_id, record);
    }
}

#[async_trait]
impl IntentRelay for MockRelay {
    async fn submit_intent(&self, payload: &[u8]) -> Result<Hash, CoordinatorError> {
        if self.should_fail {
            return Err(CoordinatorError::RelayUnavailable("mock failure".to_string()));
        }
        if self.reject {
            return Err(CoordinatorError::RelayRejected("mock rejection".to_string()));
        }
        let id = crate::algorithms::keccak256(payload);
        self.records.write().entry(id).or_default();
        Ok(id)
    }

    async fn intent_status(
        &self,
        intent_id: Hash,
    ) -> Result<IntentStatusRecord, CoordinatorError> {
        if self.should_fail {
            return Err(CoordinatorError::RelayUnavailable("mock failure".to_string()));
        }
        self.records
            .read()
            .get(&intent_id)
            .cloned()
            .ok_or_else(|| CoordinatorError::RelayRejected("unknown intent id".to_string()))
    }
}

/// Fixed clock for testing.
pub struct FixedTimeSource(std::sync::atomic::AtomicU64);

impl FixedTimeSource {
    /// Clock pinned at `now`.
    pub fn new(now: u64) -> Self {
        Self(std::sync::atomic::AtomicU64::new(now))
    }

    /// Advance the clock.
    pub fn advance(&self, secs: u64) {
        self.0.fetch_add(secs, std::sync::atomic::Ordering::SeqCst);
    }
}

impl TimeSource for FixedTimeSource {
    fn now(&self) -> u64 {
        self.0.load(std::sync::atomic::Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::IntentStatus;

    #[tokio::test]
    async fn test_mock_chain_client_defaults() {
        let client = MockChainClient::default();
        let balance = client
            .get_balance(ChainId::new(1), [0x11u8; 20])
            .await
            .unwrap();
        assert!(balance.is_zero());
        let code = client.get_code(ChainId::new(1), [0x11u8; 20]).await.unwrap();
        assert!(code.is_empty());
    }

    #[tokio::test]
    async fn test_mock_chain_client_failure() {
        let client = MockChainClient {
            should_fail: true,
            ..Default::default()
        };
        let err = client
            .get_balance(ChainId::new(1), [0x11u8; 20])
            .await
            .unwrap_err();
        assert!(err.is_retryable());
    }

    #[tokio::test]
    async fn test_mock_relay_echoes_payload_hash() {
        let relay = MockRelay::default();
        let id = relay.submit_intent(b"payload").await.unwrap();
        assert_eq!(id, crate::algorithms::keccak256(b"payload"));

        let record = relay.intent_status(id).await.unwrap();
        assert_eq!(record.status, IntentStatus::Pending);
    }

    #[tokio::test]
    async fn test_mock_relay_unknown_id_rejected() {
        let relay = MockRelay::default();
        let err = relay.intent_status([0u8; 32]).await.unwrap_err();
        assert!(matches!(err, CoordinatorError::RelayRejected(_)));
    }

    #[test]
    fn test_fixed_time_source() {
        let clock = FixedTimeSource::new(1_700_000_000);
        assert_eq!(clock.now(), 1_700_000_000);
        clock.advance(60);
        assert_eq!(clock.now(), 1_700_000_060);
    }
}
