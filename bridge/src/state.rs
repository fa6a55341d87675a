//! State definitions for the Silent Bridge contract
//!
//! All ledger state lives in the storage items and maps below. Handlers in
//! `execute/` are the only writers.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Binary, Timestamp, Uint128};
use cw_storage_plus::{Item, Map};

// ============================================================================
// Core Configuration
// ============================================================================

/// Contract configuration
#[cw_serde]
pub struct Config {
    /// Single owner; manages executors, pause and the deposit minimum
    pub owner: Addr,
    /// Whether new deposits are currently halted
    pub paused: bool,
    /// Minimum deposit amount (in smallest unit)
    pub min_deposit_amount: Uint128,
    /// Chain ID of the chain this ledger lives on (fixed at instantiation)
    pub chain_id: u64,
    /// Bank denom treated as the native coin (fixed at instantiation)
    pub native_denom: String,
}

/// A locked deposit awaiting release on its target chain.
///
/// Everything except `encrypted_routing_intent` and `consumed` is fixed at
/// creation. Records are never removed.
#[cw_serde]
pub struct Deposit {
    /// keccak256 deposit id (see `hash::compute_deposit_id`)
    pub id: [u8; 32],
    pub depositor: Addr,
    /// `None` = native coin, otherwise the CW20 contract
    pub asset: Option<Addr>,
    pub amount: Uint128,
    pub source_chain: u64,
    pub target_chain: u64,
    /// Opaque blob, stored and returned verbatim
    pub encrypted_routing_intent: Binary,
    /// Set exactly once by a successful withdrawal
    pub consumed: bool,
    pub created_at: Timestamp,
    /// Deposit counter value the id was derived from
    pub nonce: u64,
}

/// Bridge statistics
#[cw_serde]
#[derive(Default)]
pub struct Stats {
    pub total_deposits: u64,
    pub total_withdrawals: u64,
}

// ============================================================================
// Constants
// ============================================================================

/// Contract name for cw2 migration info
pub const CONTRACT_NAME: &str = "crates.io:silent-bridge";

/// Contract version for cw2 migration info
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Maximum size of an encrypted routing intent blob
pub const MAX_ROUTING_INTENT_LEN: usize = 2048;

/// Default and maximum page sizes for list queries
pub const DEFAULT_LIMIT: u32 = 10;
pub const MAX_LIMIT: u32 = 50;

// ============================================================================
// Storage
// ============================================================================

pub const CONFIG: Item<Config> = Item::new("config");

pub const STATS: Item<Stats> = Item::new("stats");

/// Next deposit nonce; doubles as the freshness input of deposit ids
pub const DEPOSIT_NONCE: Item<u64> = Item::new("deposit_nonce");

/// Deposit records
/// Key: 32-byte deposit id, Value: Deposit
pub const DEPOSITS: Map<&[u8], Deposit> = Map::new("deposits");

/// Key: nonce, Value: deposit id
pub const DEPOSIT_BY_NONCE: Map<u64, [u8; 32]> = Map::new("deposit_by_nonce");

/// Key: (depositor, nonce), Value: deposit id
pub const DEPOSITS_BY_DEPOSITOR: Map<(&Addr, u64), [u8; 32]> = Map::new("deposits_by_depositor");

/// Authorized executors
/// Key: executor address, Value: always true (absent = not an executor)
pub const EXECUTORS: Map<&Addr, bool> = Map::new("executors");

/// Amount of each asset held on behalf of deposits
/// Key: asset key (native denom or CW20 address), Value: amount
pub const CUSTODY: Map<&str, Uint128> = Map::new("custody");
