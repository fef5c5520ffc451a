//! # Domain Value Objects
//!
//! Immutable value types for cross-chain identity coordination.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Numeric chain identifier (EVM-style, e.g. 1 for mainnet, 8453 for Base).
///
/// Chain id 0 is reserved as invalid and rejected at registration.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ChainId(
    /// Raw numeric chain id.
    pub u64,
);

impl ChainId {
    /// Create a chain id.
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Raw numeric value.
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Chain id 0 is never a valid registered chain.
    pub const fn is_valid(self) -> bool {
        self.0 != 0
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ChainId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u64>().map(ChainId)
    }
}

impl From<u64> for ChainId {
    fn from(id: u64) -> Self {
        ChainId(id)
    }
}

/// Intent lifecycle state machine.
///
/// Managed by the external solver network, observed locally. The coordinator
/// never transitions these states itself.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntentStatus {
    /// Submitted, no solver has picked it up.
    #[default]
    Pending,
    /// A solver is working the intent.
    Solving,
    /// Filled on the target chain.
    Executed,
    /// Terminally failed (expired, rejected, or unfillable).
    Failed,
}

impl IntentStatus {
    /// Check if transition is valid.
    pub fn can_transition_to(&self, next: IntentStatus) -> bool {
        match (self, next) {
            (Self::Pending, Self::Solving) => true,
            (Self::Pending, Self::Failed) => true,
            (Self::Solving, Self::Executed) => true,
            (Self::Solving, Self::Failed) => true,
            _ => false,
        }
    }

    /// Check if terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Executed | Self::Failed)
    }
}
