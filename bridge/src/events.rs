//! Typed events emitted by the ledger.
//!
//! Relayers key off `deposit_id`, always the first attribute. On chain the
//! event types are prefixed with `wasm-` (e.g. `wasm-deposit`).

use common::{Asset, AssetInfo};
use cosmwasm_std::{Addr, Event};

use crate::hash::bytes32_to_hex;
use crate::state::Deposit;

pub const DEPOSIT_EVENT: &str = "deposit";
pub const WITHDRAW_EVENT: &str = "withdraw";
pub const ROUTING_INTENT_UPDATED_EVENT: &str = "routing_intent_updated";

pub fn deposit_event(deposit: &Deposit, asset: &AssetInfo) -> Event {
    Event::new(DEPOSIT_EVENT)
        .add_attribute("deposit_id", bytes32_to_hex(&deposit.id))
        .add_attribute("depositor", deposit.depositor.as_str())
        .add_attribute("asset", asset.to_string())
        .add_attribute("amount", deposit.amount.to_string())
        .add_attribute("source_chain", deposit.source_chain.to_string())
        .add_attribute("target_chain", deposit.target_chain.to_string())
        .add_attribute(
            "encrypted_routing_intent",
            deposit.encrypted_routing_intent.to_base64(),
        )
        .add_attribute("nonce", deposit.nonce.to_string())
}

pub fn withdraw_event(
    deposit_id: &[u8; 32],
    executor: &Addr,
    recipient: &Addr,
    payout: &Asset,
    source_chain: u64,
) -> Event {
    Event::new(WITHDRAW_EVENT)
        .add_attribute("deposit_id", bytes32_to_hex(deposit_id))
        .add_attribute("executor", executor.as_str())
        .add_attribute("recipient", recipient.as_str())
        .add_attribute("asset", payout.info.to_string())
        .add_attribute("amount", payout.amount.to_string())
        .add_attribute("source_chain", source_chain.to_string())
}

pub fn routing_intent_updated_event(deposit: &Deposit) -> Event {
    Event::new(ROUTING_INTENT_UPDATED_EVENT)
        .add_attribute("deposit_id", bytes32_to_hex(&deposit.id))
        .add_attribute("depositor", deposit.depositor.as_str())
        .add_attribute(
            "encrypted_routing_intent",
            deposit.encrypted_routing_intent.to_base64(),
        )
}
