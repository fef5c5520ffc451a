//! Address Deriver
//!
//! Registry-backed wrapper over the pure create2 derivation: the only
//! non-pure step is looking up the target chain's factory address.

use super::registry::ChainRegistry;
use crate::algorithms::{compute_salt, derive_create2_address, placeholder_init_code_hash};
use crate::domain::{Address, CoordinatorError, IdentityId};
use crate::domain::value_objects::ChainId;
use std::sync::Arc;

/// Predicts the smart-account address an identity will occupy on a chain.
pub struct AddressDeriver {
    registry: Arc<ChainRegistry>,
}

impl AddressDeriver {
    /// Deriver backed by a chain registry.
    pub fn new(registry: Arc<ChainRegistry>) -> Self {
        Self { registry }
    }

    /// Predict the account address for an identity on a target chain.
    ///
    /// Deterministic for fixed registry contents: same inputs always yield
    /// the same address, no network access, no side effects.
    pub fn predict(
        &self,
        identity_id: &IdentityId,
        owner: &Address,
        chain_id: ChainId,
    ) -> Result<Address, CoordinatorError> {
        let descriptor = self.registry.get(chain_id)?;
        let salt = compute_salt(identity_id, owner, chain_id);
        let init_code_hash = placeholder_init_code_hash();
        Ok(derive_create2_address(
            &descriptor.account_factory,
            &salt,
            &init_code_hash,
        ))
    }
}
