//! # Service Module
//!
//! The coordinator's components: chain registry, address deriver, identity
//! state store, intent factory, intent gateway, and the composed
//! coordinator implementing the inbound API.

pub mod coordinator;
pub mod deriver;
pub mod factory;
pub mod gateway;
pub mod registry;
pub mod store;

pub use coordinator::CrossChainCoordinator;
pub use deriver::AddressDeriver;
pub use factory::IntentFactory;
pub use gateway::IntentGateway;
pub use registry::ChainRegistry;
pub use store::IdentityStateStore;
