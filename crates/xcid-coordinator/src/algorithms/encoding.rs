//! # Settlement Calldata Encoding
//!
//! ABI-style fixed-order tuple encodings for the two instruction shapes an
//! on-chain settlement contract consumes. Independent of the intent
//! structures: these build calldata, not content-addressed declarations.
//!
//! Encoding rules follow the Solidity ABI: every static field is one
//! big-endian 32-byte word (addresses left-padded to 32 bytes); dynamic
//! `bytes` contribute an offset word in the head and a length-prefixed,
//! right-padded tail.

use crate::domain::Address;
use crate::domain::value_objects::ChainId;
use primitive_types::U256;

/// Word size of the ABI encoding.
const WORD: usize = 32;

/// Token-transfer instruction tuple
/// `(from, to, amount, token, source_chain, target_chain)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransferInstruction {
    /// Sending account.
    pub from: Address,
    /// Receiving account.
    pub to: Address,
    /// Token amount.
    pub amount: U256,
    /// Token contract.
    pub token: Address,
    /// Chain the funds leave.
    pub source_chain: ChainId,
    /// Chain the funds arrive on.
    pub target_chain: ChainId,
}

/// Contract-call instruction tuple
/// `(caller, target, value, data, target_chain)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CallInstruction {
    /// Account the call executes as.
    pub caller: Address,
    /// Contract to call.
    pub target: Address,
    /// Native value forwarded with the call.
    pub value: U256,
    /// Calldata bytes.
    pub data: Vec<u8>,
    /// Chain the call executes on.
    pub target_chain: ChainId,
}

fn address_word(address: &Address) -> [u8; WORD] {
    let mut word = [0u8; WORD];
    word[12..].copy_from_slice(address);
    word
}

fn u256_word(value: U256) -> [u8; WORD] {
    let mut word = [0u8; WORD];
    value.to_big_endian(&mut word);
    word
}

fn u64_word(value: u64) -> [u8; WORD] {
    let mut word = [0u8; WORD];
    word[24..].copy_from_slice(&value.to_be_bytes());
    word
}

/// Encode a transfer instruction: six static words, 192 bytes total.
pub fn encode_transfer_instruction(instruction: &TransferInstruction) -> Vec<u8> {
    let mut out = Vec::with_capacity(6 * WORD);
    out.extend_from_slice(&address_word(&instruction.from));
    out.extend_from_slice(&address_word(&instruction.to));
    out.extend_from_slice(&u256_word(instruction.amount));
    out.extend_from_slice(&address_word(&instruction.token));
    out.extend_from_slice(&u64_word(instruction.source_chain.value()));
    out.extend_from_slice(&u64_word(instruction.target_chain.value()));
    out
}

/// Encode a call instruction: five-word head (the fourth word is the
/// offset to the dynamic `data` tail), then length word and right-padded
/// data.
pub fn encode_call_instruction(instruction: &CallInstruction) -> Vec<u8> {
    let head_len = 5 * WORD;
    let padded_data_len = instruction.data.len().div_ceil(WORD) * WORD;
    let mut out = Vec::with_capacity(head_len + WORD + padded_data_len);

    out.extend_from_slice(&address_word(&instruction.caller));
    out.extend_from_slice(&address_word(&instruction.target));
    out.extend_from_slice(&u256_word(instruction.value));
    out.extend_from_slice(&u64_word(head_len as u64));
    out.extend_from_slice(&u64_word(instruction.target_chain.value()));

    out.extend_from_slice(&u64_word(instruction.data.len() as u64));
    out.extend_from_slice(&instruction.data);
    out.resize(head_len + WORD + padded_data_len, 0);
    out
}
