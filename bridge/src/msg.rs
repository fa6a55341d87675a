//! Message types for the Silent Bridge contract
//!
//! This module defines all messages for instantiation, execution, and queries.

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, Timestamp, Uint128};

// ============================================================================
// Instantiate & Migrate
// ============================================================================

/// Migrate message
#[cw_serde]
pub struct MigrateMsg {}

/// Instantiate message
#[cw_serde]
pub struct InstantiateMsg {
    /// Owner address for contract management
    pub owner: String,
    /// Minimum deposit amount (in smallest unit)
    pub min_deposit_amount: Uint128,
    /// Chain ID of this chain; deposits may not target it
    pub chain_id: u64,
    /// Bank denom accepted as the native coin (e.g. "uluna")
    pub native_denom: String,
    /// Initial executor addresses
    #[serde(default)]
    pub executors: Vec<String>,
}

// ============================================================================
// Execute Messages
// ============================================================================

#[cw_serde]
pub enum ExecuteMsg {
    // ========================================================================
    // Deposit Registry
    // ========================================================================
    /// Lock funds for release on `target_chain`.
    ///
    /// `asset = None` locks the native coin, which must be attached as exactly
    /// `amount` of the native denom. `asset = Some(cw20)` pulls `amount` from
    /// the caller through a CW20 allowance granted to this contract; no funds
    /// may be attached.
    Deposit {
        asset: Option<String>,
        amount: Uint128,
        target_chain: u64,
        encrypted_routing_intent: Binary,
    },

    /// Replace the routing intent of a deposit
    ///
    /// Authorization: original depositor only
    UpdateRoutingIntent {
        deposit_id: Binary,
        encrypted_routing_intent: Binary,
    },

    // ========================================================================
    // Withdrawal Authorizer
    // ========================================================================
    /// Pay out against a deposit and mark it consumed.
    ///
    /// Authorization: executor only
    ///
    /// `proof` is stored nowhere and not verified.
    Withdraw {
        deposit_id: Binary,
        recipient: String,
        asset: Option<String>,
        amount: Uint128,
        source_chain: u64,
        proof: Binary,
    },

    // ========================================================================
    // Access & Safety Controller (owner only)
    // ========================================================================
    AddExecutor { address: String },

    RemoveExecutor { address: String },

    /// Halt new deposits
    Pause {},

    /// Resume deposits
    Unpause {},

    TransferOwnership { new_owner: String },

    SetMinDepositAmount { amount: Uint128 },
}

// ============================================================================
// Query Messages
// ============================================================================

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},

    #[returns(StatsResponse)]
    Stats {},

    /// Deposit by id; `None` if unknown
    #[returns(Option<DepositResponse>)]
    Deposit { deposit_id: Binary },

    #[returns(Option<DepositResponse>)]
    DepositByNonce { nonce: u64 },

    /// Deposits ordered by id
    #[returns(DepositsResponse)]
    Deposits {
        start_after: Option<Binary>,
        limit: Option<u32>,
    },

    /// Deposits of one depositor ordered by nonce
    #[returns(DepositsResponse)]
    DepositsByDepositor {
        depositor: String,
        start_after: Option<u64>,
        limit: Option<u32>,
    },

    /// Nonce the next deposit will use
    #[returns(NonceResponse)]
    CurrentNonce {},

    /// Derive the deposit id for the given inputs
    #[returns(ComputeDepositIdResponse)]
    ComputeDepositId {
        depositor: String,
        asset: Option<String>,
        amount: Uint128,
        target_chain: u64,
        nonce: u64,
    },

    #[returns(IsExecutorResponse)]
    IsExecutor { address: String },

    #[returns(ExecutorsResponse)]
    Executors {
        start_after: Option<String>,
        limit: Option<u32>,
    },

    /// Tracked custody and actual holdings of an asset (`None` = native)
    #[returns(CustodyBalanceResponse)]
    CustodyBalance { asset: Option<String> },
}

// ============================================================================
// Query Responses
// ============================================================================

#[cw_serde]
pub struct ConfigResponse {
    pub owner: Addr,
    pub paused: bool,
    pub min_deposit_amount: Uint128,
    pub chain_id: u64,
    pub native_denom: String,
}

#[cw_serde]
pub struct StatsResponse {
    pub total_deposits: u64,
    pub total_withdrawals: u64,
}

#[cw_serde]
pub struct DepositResponse {
    pub deposit_id: Binary,
    pub depositor: Addr,
    pub asset: Option<Addr>,
    pub amount: Uint128,
    pub source_chain: u64,
    pub target_chain: u64,
    pub encrypted_routing_intent: Binary,
    pub consumed: bool,
    pub created_at: Timestamp,
    pub nonce: u64,
}

#[cw_serde]
pub struct DepositsResponse {
    pub deposits: Vec<DepositResponse>,
}

#[cw_serde]
pub struct NonceResponse {
    pub nonce: u64,
}

#[cw_serde]
pub struct ComputeDepositIdResponse {
    pub deposit_id: Binary,
}

#[cw_serde]
pub struct IsExecutorResponse {
    pub is_executor: bool,
}

#[cw_serde]
pub struct ExecutorsResponse {
    pub executors: Vec<Addr>,
}

#[cw_serde]
pub struct CustodyBalanceResponse {
    /// Asset key (native denom or CW20 address)
    pub asset: String,
    /// Amount backing deposits according to the ledger
    pub tracked: Uint128,
    /// Amount the contract actually holds
    pub held: Uint128,
}
