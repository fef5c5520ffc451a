//! # Adapters Layer (Hexagonal Architecture)
//!
//! Default implementations of the outbound ports.

mod chain_client;
mod relay;
mod signer;
mod time;

pub use chain_client::StaticChainClient;
pub use relay::InProcessRelay;
pub use signer::NoopSigner;
pub use time::SystemTimeSource;
