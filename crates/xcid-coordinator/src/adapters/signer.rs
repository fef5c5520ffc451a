//! Signer Adapter
//!
//! Default `IntentSigner` implementation that leaves intents unsigned.

use crate::domain::{CoordinatorError, Hash};
use crate::ports::outbound::IntentSigner;
use async_trait::async_trait;

/// Signer that returns an empty signature for every digest.
///
/// Auth intents built with this signer go out unsigned; solvers that
/// require owner signatures will not fill them. Wire a real signer before
/// relying on auth intents for anything fund-bearing.
#[derive(Default)]
pub struct NoopSigner;

#[async_trait]
impl IntentSigner for NoopSigner {
    async fn sign_intent(&self, _digest: Hash) -> Result<Vec<u8>, CoordinatorError> {
        Ok(Vec::new())
    }
}
