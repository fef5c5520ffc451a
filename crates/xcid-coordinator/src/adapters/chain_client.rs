//! Chain Client Adapter
//!
//! Implements the `ChainClient` port against pre-configured chain state.
//!
//! In production, this would make JSON-RPC calls to per-chain endpoints.

use crate::domain::{Address, CoordinatorError};
use crate::domain::value_objects::ChainId;
use crate::ports::outbound::ChainClient;
use async_trait::async_trait;
use parking_lot::RwLock;
use primitive_types::U256;
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// In-memory chain client serving configured balances, code and call
/// results. Operations against a chain it was not configured with fail
/// with `ChainNotSupported`.
pub struct StaticChainClient {
    chains: HashSet<ChainId>,
    balances: RwLock<HashMap<(ChainId, Address), U256>>,
    code: RwLock<HashMap<(ChainId, Address), Vec<u8>>>,
    call_results: RwLock<HashMap<(ChainId, Address), Vec<u8>>>,
    gas_estimate: RwLock<U256>,
}

impl StaticChainClient {
    /// Client serving the given chains.
    pub fn with_chains(chains: &[ChainId]) -> Self {
        Self {
            chains: chains.iter().copied().collect(),
            balances: RwLock::new(HashMap::new()),
            code: RwLock::new(HashMap::new()),
            call_results: RwLock::new(HashMap::new()),
            gas_estimate: RwLock::new(U256::from(21_000u64)),
        }
    }

    /// Set the balance served for an address.
    pub fn set_balance(&self, chain: ChainId, address: Address, balance: U256) {
        self.balances.write().insert((chain, address), balance);
    }

    /// Set the code served for an address.
    pub fn set_code(&self, chain: ChainId, address: Address, code: Vec<u8>) {
        self.code.write().insert((chain, address), code);
    }

    /// Set the result served for read-only calls to a contract.
    pub fn set_call_result(&self, chain: ChainId, to: Address, result: Vec<u8>) {
        self.call_results.write().insert((chain, to), result);
    }

    /// Set the gas estimate served for every call.
    pub fn set_gas_estimate(&self, gas: U256) {
        *self.gas_estimate.write() = gas;
    }

    fn require_chain(&self, chain: ChainId) -> Result<(), CoordinatorError> {
        if !self.chains.contains(&chain) {
            return Err(CoordinatorError::ChainNotSupported(chain));
        }
        Ok(())
    }
}

#[async_trait]
impl ChainClient for StaticChainClient {
    async fn read_only_call(
        &self,
        chain: ChainId,
        to: Address,
        _data: &[u8],
    ) -> Result<Vec<u8>, CoordinatorError> {
        self.require_chain(chain)?;
        debug!("[xcid] read-only call on chain {} to 0x{}", chain, hex::encode(to));
        Ok(self
            .call_results
            .read()
            .get(&(chain, to))
            .cloned()
            .unwrap_or_default())
    }

    async fn estimate_gas(
        &self,
        chain: ChainId,
        _to: Address,
        _data: &[u8],
        _value: U256,
    ) -> Result<U256, CoordinatorError> {
        self.require_chain(chain)?;
        Ok(*self.gas_estimate.read())
    }

    async fn get_balance(
        &self,
        chain: ChainId,
        address: Address,
    ) -> Result<U256, CoordinatorError> {
        self.require_chain(chain)?;
        Ok(self
            .balances
            .read()
            .get(&(chain, address))
            .copied()
            .unwrap_or_default())
    }

    async fn get_code(&self, chain: ChainId, address: Address) -> Result<Vec<u8>, CoordinatorError> {
        self.require_chain(chain)?;
        Ok(self.code.read().get(&(chain, address)).cloned().unwrap_or_default())
    }
}
