//! Access & Safety Controller handlers (owner only).
//!
//! This module handles:
//! - Executor set management
//! - Pause/unpause of new deposits
//! - Ownership transfer
//! - Minimum deposit amount

use cosmwasm_std::{DepsMut, MessageInfo, Response, Uint128};

use crate::auth::{ensure_no_funds, ensure_owner, validate_address};
use crate::error::ContractError;
use crate::state::{CONFIG, EXECUTORS};

// ============================================================================
// Executor Management
// ============================================================================

/// Grant the executor role. Adding an existing executor is a no-op.
pub fn execute_add_executor(
    deps: DepsMut,
    info: MessageInfo,
    address: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure_owner(&config, &info.sender)?;
    ensure_no_funds(&info)?;

    let executor = validate_address(deps.api, &address, "executor")?;
    let changed = !EXECUTORS.has(deps.storage, &executor);
    if changed {
        EXECUTORS.save(deps.storage, &executor, &true)?;
    }

    Ok(Response::new()
        .add_attribute("method", "add_executor")
        .add_attribute("executor", executor)
        .add_attribute("changed", changed.to_string()))
}

/// Revoke the executor role. Removing an absent executor is a no-op.
pub fn execute_remove_executor(
    deps: DepsMut,
    info: MessageInfo,
    address: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure_owner(&config, &info.sender)?;
    ensure_no_funds(&info)?;

    let executor = validate_address(deps.api, &address, "executor")?;
    let changed = EXECUTORS.has(deps.storage, &executor);
    if changed {
        EXECUTORS.remove(deps.storage, &executor);
    }

    Ok(Response::new()
        .add_attribute("method", "remove_executor")
        .add_attribute("executor", executor)
        .add_attribute("changed", changed.to_string()))
}

// ============================================================================
// Pause/Unpause
// ============================================================================

/// Pause the contract (stops new deposits).
pub fn execute_pause(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    set_paused(deps, info, true)
}

/// Unpause the contract (resumes deposits).
pub fn execute_unpause(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    set_paused(deps, info, false)
}

fn set_paused(deps: DepsMut, info: MessageInfo, paused: bool) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    ensure_owner(&config, &info.sender)?;
    ensure_no_funds(&info)?;

    config.paused = paused;
    CONFIG.save(deps.storage, &config)?;

    let method = if paused { "pause" } else { "unpause" };
    Ok(Response::new().add_attribute("method", method))
}

// ============================================================================
// Ownership & Limits
// ============================================================================

/// Hand the owner role to `new_owner` immediately.
pub fn execute_transfer_ownership(
    deps: DepsMut,
    info: MessageInfo,
    new_owner: String,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    ensure_owner(&config, &info.sender)?;
    ensure_no_funds(&info)?;

    let new_owner = validate_address(deps.api, &new_owner, "new_owner")?;
    let previous_owner = std::mem::replace(&mut config.owner, new_owner.clone());
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "transfer_ownership")
        .add_attribute("previous_owner", previous_owner)
        .add_attribute("new_owner", new_owner))
}

pub fn execute_set_min_deposit_amount(
    deps: DepsMut,
    info: MessageInfo,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    ensure_owner(&config, &info.sender)?;
    ensure_no_funds(&info)?;

    if amount.is_zero() {
        return Err(ContractError::InvalidAmount {
            reason: "Minimum deposit must be greater than zero".to_string(),
        });
    }

    config.min_deposit_amount = amount;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "set_min_deposit_amount")
        .add_attribute("min_deposit_amount", amount.to_string()))
}
