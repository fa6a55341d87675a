//! Error types for the Silent Bridge contract
//!
//! Every rejection aborts the whole transaction. Variants are grouped by
//! [`ErrorCategory`] so callers can tell validation problems from
//! authorization, state and transfer failures.

use cosmwasm_std::{StdError, Uint128};
use thiserror::Error;

/// Coarse classification of a [`ContractError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Authorization,
    State,
    Transfer,
    Internal,
}

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    // ========================================================================
    // Authorization Errors
    // ========================================================================
    #[error("Unauthorized: only owner can perform this action")]
    Unauthorized,

    #[error("Unauthorized: not an executor")]
    NotExecutor,

    #[error("Unauthorized: not deposit owner")]
    NotDepositOwner,

    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Amount too small: minimum deposit is {min_amount}")]
    BelowMinimumAmount { min_amount: Uint128 },

    #[error("Invalid target chain: {chain_id} is this chain")]
    InvalidTargetChain { chain_id: u64 },

    #[error("Invalid chain ID: {chain_id}")]
    InvalidChainId { chain_id: u64 },

    #[error("Zero address not allowed: {field}")]
    ZeroAddress { field: String },

    #[error("Invalid amount: {reason}")]
    InvalidAmount { reason: String },

    #[error("Routing intent too large: {size} bytes exceeds {max} byte limit")]
    RoutingIntentTooLarge { size: usize, max: usize },

    #[error("Invalid deposit id length: expected 32 bytes, got {got}")]
    InvalidDepositId { got: usize },

    #[error("Invalid native denom: {denom:?}")]
    InvalidDenom { denom: String },

    // ========================================================================
    // State Errors
    // ========================================================================
    #[error("Bridge is paused")]
    BridgePaused,

    #[error("Deposit not found: {deposit_id}")]
    DepositNotFound { deposit_id: String },

    #[error("Deposit already used: {deposit_id}")]
    DepositAlreadyUsed { deposit_id: String },

    #[error("Deposit id collision: {deposit_id}")]
    DepositIdCollision { deposit_id: String },

    // ========================================================================
    // Transfer Errors
    // ========================================================================
    #[error("Funds mismatch: expected {expected}, got {got}")]
    FundsMismatch { expected: String, got: String },

    #[error("Insufficient custody of {asset}: held {held}, requested {requested}")]
    InsufficientCustody {
        asset: String,
        held: Uint128,
        requested: Uint128,
    },
}

impl ContractError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ContractError::Unauthorized
            | ContractError::NotExecutor
            | ContractError::NotDepositOwner => ErrorCategory::Authorization,

            ContractError::BelowMinimumAmount { .. }
            | ContractError::InvalidTargetChain { .. }
            | ContractError::InvalidChainId { .. }
            | ContractError::ZeroAddress { .. }
            | ContractError::InvalidAmount { .. }
            | ContractError::RoutingIntentTooLarge { .. }
            | ContractError::InvalidDepositId { .. }
            | ContractError::InvalidDenom { .. } => ErrorCategory::Validation,

            ContractError::BridgePaused
            | ContractError::DepositNotFound { .. }
            | ContractError::DepositAlreadyUsed { .. }
            | ContractError::DepositIdCollision { .. } => ErrorCategory::State,

            ContractError::FundsMismatch { .. } | ContractError::InsufficientCustody { .. } => {
                ErrorCategory::Transfer
            }

            ContractError::Std(_) => ErrorCategory::Internal,
        }
    }
}
