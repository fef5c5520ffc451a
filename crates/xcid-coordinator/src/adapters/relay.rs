//! Relay Adapter
//!
//! Implements the `IntentRelay` port with an in-process lifecycle table.
//!
//! In production, this would be an HTTP client against the solver
//! network's submission endpoint. The in-process variant lets callers (and
//! tests) drive the externally-owned lifecycle explicitly.

use crate::algorithms::keccak256;
use crate::domain::{CoordinatorError, Hash, IntentStatusRecord};
use crate::domain::value_objects::IntentStatus;
use crate::ports::outbound::IntentRelay;
use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;
use tracing::{debug, info};

/// In-process relay standing in for the external solver network.
#[derive(Default)]
pub struct InProcessRelay {
    records: RwLock<HashMap<Hash, IntentStatusRecord>>,
}

impl InProcessRelay {
    /// Create an empty relay.
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance an intent one lifecycle step
    /// (pending -> solving -> executed), filling the solver solution and
    /// execution transaction on the final step. Returns the new status.
    pub fn advance(&self, intent_id: Hash) -> Option<IntentStatus> {
        let mut records = self.records.write();
        let record = records.get_mut(&intent_id)?;
        match record.status {
            IntentStatus::Pending => {
                record.status = IntentStatus::Solving;
            }
            IntentStatus::Solving => {
                record.status = IntentStatus::Executed;
                record.solver_solution = Some(intent_id.to_vec());
                let mut tx_preimage = intent_id.to_vec();
                tx_preimage.extend_from_slice(b"/execution-tx");
                record.execution_tx = Some(keccak256(&tx_preimage));
            }
            _ => {}
        }
        debug!(
            "[xcid] relay advanced intent 0x{} to {:?}",
            hex::encode(intent_id),
            record.status
        );
        Some(record.status)
    }

    /// Mark an intent terminally failed.
    pub fn fail(&self, intent_id: Hash) -> Option<IntentStatus> {
        let mut records = self.records.write();
        let record = records.get_mut(&intent_id)?;
        if !record.status.is_terminal() {
            record.status = IntentStatus::Failed;
        }
        Some(record.status)
    }

    /// Number of intents the relay has accepted.
    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    /// Whether the relay has accepted any intents.
    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }
}

#[async_trait]
impl IntentRelay for InProcessRelay {
    async fn submit_intent(&self, payload: &[u8]) -> Result<Hash, CoordinatorError> {
        if payload.is_empty() {
            return Err(CoordinatorError::RelayRejected("empty payload".to_string()));
        }
        let intent_id = keccak256(payload);
        self.records.write().entry(intent_id).or_default();
        info!("[xcid] relay accepted intent 0x{}", hex::encode(intent_id));
        Ok(intent_id)
    }

    async fn intent_status(
        &self,
        intent_id: Hash,
    ) -> Result<IntentStatusRecord, CoordinatorError> {
        self.records
            .read()
            .get(&intent_id)
            .cloned()
            .ok_or_else(|| CoordinatorError::RelayRejected("unknown intent id".to_string()))
    }
}
