//! Silent Bridge Contract - Entry Points
//!
//! The implementation is modularized into:
//! - `execute/` - Execute message handlers
//! - `query` - Query message handlers

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
};
use cw2::set_contract_version;

use crate::auth::validate_address;
use crate::error::ContractError;
use crate::execute::{
    execute_add_executor, execute_deposit, execute_pause, execute_remove_executor,
    execute_set_min_deposit_amount, execute_transfer_ownership, execute_unpause,
    execute_update_routing_intent, execute_withdraw,
};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{
    query_compute_deposit_id, query_config, query_current_nonce, query_custody_balance,
    query_deposit, query_deposit_by_nonce, query_deposits, query_deposits_by_depositor,
    query_executors, query_is_executor, query_stats,
};
use crate::state::{
    Config, Stats, CONFIG, CONTRACT_NAME, CONTRACT_VERSION, DEPOSIT_NONCE, EXECUTORS, STATS,
};

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let owner = validate_address(deps.api, &msg.owner, "owner")?;

    if msg.chain_id == 0 {
        return Err(ContractError::InvalidChainId {
            chain_id: msg.chain_id,
        });
    }
    if msg.native_denom.trim().is_empty() {
        return Err(ContractError::InvalidDenom {
            denom: msg.native_denom,
        });
    }
    if msg.min_deposit_amount.is_zero() {
        return Err(ContractError::InvalidAmount {
            reason: "Minimum deposit must be greater than zero".to_string(),
        });
    }

    let config = Config {
        owner,
        paused: false,
        min_deposit_amount: msg.min_deposit_amount,
        chain_id: msg.chain_id,
        native_denom: msg.native_denom,
    };
    CONFIG.save(deps.storage, &config)?;
    STATS.save(deps.storage, &Stats::default())?;
    DEPOSIT_NONCE.save(deps.storage, &0u64)?;

    for executor in &msg.executors {
        let executor = validate_address(deps.api, executor, "executor")?;
        EXECUTORS.save(deps.storage, &executor, &true)?;
    }

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("owner", config.owner)
        .add_attribute("chain_id", config.chain_id.to_string())
        .add_attribute("native_denom", config.native_denom)
        .add_attribute("min_deposit_amount", config.min_deposit_amount.to_string())
        .add_attribute("executor_count", msg.executors.len().to_string()))
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        // Deposit registry
        ExecuteMsg::Deposit {
            asset,
            amount,
            target_chain,
            encrypted_routing_intent,
        } => execute_deposit(
            deps,
            env,
            info,
            asset,
            amount,
            target_chain,
            encrypted_routing_intent,
        ),
        ExecuteMsg::UpdateRoutingIntent {
            deposit_id,
            encrypted_routing_intent,
        } => execute_update_routing_intent(deps, info, deposit_id, encrypted_routing_intent),

        // Withdrawal
        ExecuteMsg::Withdraw {
            deposit_id,
            recipient,
            asset,
            amount,
            source_chain,
            proof,
        } => execute_withdraw(
            deps,
            info,
            deposit_id,
            recipient,
            asset,
            amount,
            source_chain,
            proof,
        ),

        // Access & safety
        ExecuteMsg::AddExecutor { address } => execute_add_executor(deps, info, address),
        ExecuteMsg::RemoveExecutor { address } => execute_remove_executor(deps, info, address),
        ExecuteMsg::Pause {} => execute_pause(deps, info),
        ExecuteMsg::Unpause {} => execute_unpause(deps, info),
        ExecuteMsg::TransferOwnership { new_owner } => {
            execute_transfer_ownership(deps, info, new_owner)
        }
        ExecuteMsg::SetMinDepositAmount { amount } => {
            execute_set_min_deposit_amount(deps, info, amount)
        }
    }
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::Stats {} => to_json_binary(&query_stats(deps)?),

        // Deposit queries
        QueryMsg::Deposit { deposit_id } => to_json_binary(&query_deposit(deps, deposit_id)?),
        QueryMsg::DepositByNonce { nonce } => to_json_binary(&query_deposit_by_nonce(deps, nonce)?),
        QueryMsg::Deposits { start_after, limit } => {
            to_json_binary(&query_deposits(deps, start_after, limit)?)
        }
        QueryMsg::DepositsByDepositor {
            depositor,
            start_after,
            limit,
        } => to_json_binary(&query_deposits_by_depositor(
            deps,
            depositor,
            start_after,
            limit,
        )?),
        QueryMsg::CurrentNonce {} => to_json_binary(&query_current_nonce(deps)?),
        QueryMsg::ComputeDepositId {
            depositor,
            asset,
            amount,
            target_chain,
            nonce,
        } => to_json_binary(&query_compute_deposit_id(
            deps,
            depositor,
            asset,
            amount,
            target_chain,
            nonce,
        )?),

        // Access queries
        QueryMsg::IsExecutor { address } => to_json_binary(&query_is_executor(deps, address)?),
        QueryMsg::Executors { start_after, limit } => {
            to_json_binary(&query_executors(deps, start_after, limit)?)
        }

        QueryMsg::CustodyBalance { asset } => {
            to_json_binary(&query_custody_balance(deps, env, asset)?)
        }
    }
}

// ============================================================================
// Migrate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("method", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
