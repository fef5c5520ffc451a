//! Chain Registry
//!
//! Shared table of per-chain configuration. Descriptors are immutable once
//! registered; re-registering a chain id replaces the descriptor wholesale.

use crate::domain::{ChainDescriptor, CoordinatorError};
use crate::domain::value_objects::ChainId;
use parking_lot::RwLock;
use std::collections::HashMap;
use tracing::debug;

/// Registry of supported chains, keyed by chain id.
///
/// Interior mutability so it can be shared as `Arc<ChainRegistry>` across
/// the coordinator's components.
#[derive(Default)]
pub struct ChainRegistry {
    chains: RwLock<HashMap<ChainId, ChainDescriptor>>,
}

impl ChainRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry pre-populated with descriptors.
    pub fn with_descriptors(
        descriptors: impl IntoIterator<Item = ChainDescriptor>,
    ) -> Result<Self, CoordinatorError> {
        let registry = Self::new();
        for descriptor in descriptors {
            registry.register(descriptor)?;
        }
        Ok(registry)
    }

    /// Insert or overwrite a descriptor. Chain id 0 is rejected; nothing
    /// else is validated.
    pub fn register(&self, descriptor: ChainDescriptor) -> Result<(), CoordinatorError> {
        if !descriptor.chain_id.is_valid() {
            return Err(CoordinatorError::InvalidChainId(descriptor.chain_id));
        }
        debug!(
            "[xcid] registering chain {} ({})",
            descriptor.chain_id, descriptor.name
        );
        self.chains.write().insert(descriptor.chain_id, descriptor);
        Ok(())
    }

    /// Descriptor for a chain.
    pub fn get(&self, chain_id: ChainId) -> Result<ChainDescriptor, CoordinatorError> {
        self.chains
            .read()
            .get(&chain_id)
            .cloned()
            .ok_or(CoordinatorError::ChainNotSupported(chain_id))
    }

    /// All registered descriptors. Iteration order is undefined; callers
    /// must not depend on it.
    pub fn list(&self) -> Vec<ChainDescriptor> {
        self.chains.read().values().cloned().collect()
    }

    /// Whether a chain is registered.
    pub fn contains(&self, chain_id: ChainId) -> bool {
        self.chains.read().contains_key(&chain_id)
    }

    /// Number of registered chains.
    pub fn len(&self) -> usize {
        self.chains.read().len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.chains.read().is_empty()
    }
}
