//! # Algorithms Module
//!
//! Pure computation: address derivation, canonical hashing, calldata
//! encoding. Safe for unlimited concurrent use.

pub mod canonical;
pub mod derivation;
pub mod encoding;

pub use canonical::{canonical_bytes, compute_sync_proof, intent_hash, SYNC_PROOF_DOMAIN_V1};
pub use derivation::{
    compute_salt, derive_create2_address, keccak256, placeholder_init_code_hash, SALT_DOMAIN_V1,
};
pub use encoding::{
    encode_call_instruction, encode_transfer_instruction, CallInstruction, TransferInstruction,
};
