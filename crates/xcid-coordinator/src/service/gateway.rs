//! Intent Gateway
//!
//! Submits intents to the external relay and polls their lifecycle. The
//! gateway is a passive observer: it never transitions lifecycle states.

use crate::algorithms::{canonical_bytes, keccak256};
use crate::domain::{CoordinatorError, Hash, Intent, IntentReceipt, IntentStatusRecord};
use crate::domain::value_objects::IntentStatus;
use crate::ports::outbound::IntentRelay;
use std::sync::Arc;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Gateway between the coordinator and the relay/solver network.
pub struct IntentGateway {
    relay: Arc<dyn IntentRelay>,
}

impl IntentGateway {
    /// Gateway over an injected relay endpoint.
    pub fn new(relay: Arc<dyn IntentRelay>) -> Self {
        Self { relay }
    }

    /// Submit an intent.
    ///
    /// The intent id is computed locally over the canonical payload before
    /// the relay sees it, so the caller can track the intent even if the
    /// relay response is lost. Relay failures surface unmodified.
    pub async fn submit(&self, intent: &Intent) -> Result<IntentReceipt, CoordinatorError> {
        let payload = canonical_bytes(intent)?;
        let intent_id = keccak256(&payload);
        let correlation = Uuid::new_v4();

        info!(
            "[xcid] submitting intent 0x{} (correlation {})",
            hex::encode(intent_id),
            correlation
        );
        let relay_id = self.relay.submit_intent(&payload).await?;
        if relay_id != intent_id {
            warn!(
                "[xcid] relay echoed id 0x{} for intent 0x{} (correlation {})",
                hex::encode(relay_id),
                hex::encode(intent_id),
                correlation
            );
        }

        Ok(IntentReceipt {
            intent_id,
            status: IntentStatus::Pending,
        })
    }

    /// Poll the relay for an intent's lifecycle record.
    pub async fn status(&self, intent_id: Hash) -> Result<IntentStatusRecord, CoordinatorError> {
        let record = self.relay.intent_status(intent_id).await?;
        debug!(
            "[xcid] intent 0x{} status {:?}",
            hex::encode(intent_id),
            record.status
        );
        Ok(record)
    }
}
