//! Query handlers for the Silent Bridge contract.

use common::AssetInfo;
use cosmwasm_std::{Binary, Deps, Env, Order, StdError, StdResult, Uint128};
use cw_storage_plus::Bound;

use crate::hash::deposit_id_for;
use crate::msg::{
    ComputeDepositIdResponse, ConfigResponse, CustodyBalanceResponse, DepositResponse,
    DepositsResponse, ExecutorsResponse, IsExecutorResponse, NonceResponse, StatsResponse,
};
use crate::state::{
    Deposit, CONFIG, CUSTODY, DEFAULT_LIMIT, DEPOSITS, DEPOSITS_BY_DEPOSITOR, DEPOSIT_BY_NONCE,
    DEPOSIT_NONCE, EXECUTORS, MAX_LIMIT, STATS,
};

// ============================================================================
// Core Queries
// ============================================================================

pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        owner: config.owner,
        paused: config.paused,
        min_deposit_amount: config.min_deposit_amount,
        chain_id: config.chain_id,
        native_denom: config.native_denom,
    })
}

pub fn query_stats(deps: Deps) -> StdResult<StatsResponse> {
    let stats = STATS.load(deps.storage)?;
    Ok(StatsResponse {
        total_deposits: stats.total_deposits,
        total_withdrawals: stats.total_withdrawals,
    })
}

// ============================================================================
// Deposit Queries
// ============================================================================

/// Query a deposit by id. Unknown ids yield `None`.
pub fn query_deposit(deps: Deps, deposit_id: Binary) -> StdResult<Option<DepositResponse>> {
    if deposit_id.len() != 32 {
        return Err(StdError::generic_err("deposit_id must be 32 bytes"));
    }
    let deposit = DEPOSITS.may_load(deps.storage, deposit_id.as_slice())?;
    Ok(deposit.map(to_deposit_response))
}

pub fn query_deposit_by_nonce(deps: Deps, nonce: u64) -> StdResult<Option<DepositResponse>> {
    match DEPOSIT_BY_NONCE.may_load(deps.storage, nonce)? {
        Some(id) => {
            let deposit = DEPOSITS.may_load(deps.storage, &id)?;
            Ok(deposit.map(to_deposit_response))
        }
        None => Ok(None),
    }
}

/// Query paginated deposits, ordered by id.
pub fn query_deposits(
    deps: Deps,
    start_after: Option<Binary>,
    limit: Option<u32>,
) -> StdResult<DepositsResponse> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start: Option<Bound<&[u8]>> = start_after
        .as_ref()
        .map(|id| Bound::exclusive(id.as_slice()));

    let deposits = DEPOSITS
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| item.map(|(_, deposit)| to_deposit_response(deposit)))
        .collect::<StdResult<Vec<_>>>()?;

    Ok(DepositsResponse { deposits })
}

/// Query paginated deposits of one depositor, ordered by nonce.
pub fn query_deposits_by_depositor(
    deps: Deps,
    depositor: String,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> StdResult<DepositsResponse> {
    let depositor = deps.api.addr_validate(&depositor)?;
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start = start_after.map(Bound::exclusive);

    let deposits = DEPOSITS_BY_DEPOSITOR
        .prefix(&depositor)
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| {
            let (_, id) = item?;
            let deposit = DEPOSITS.load(deps.storage, &id)?;
            Ok(to_deposit_response(deposit))
        })
        .collect::<StdResult<Vec<_>>>()?;

    Ok(DepositsResponse { deposits })
}

/// Nonce the next deposit will use.
pub fn query_current_nonce(deps: Deps) -> StdResult<NonceResponse> {
    let nonce = DEPOSIT_NONCE.load(deps.storage)?;
    Ok(NonceResponse { nonce })
}

/// Derive a deposit id with this chain as the source.
pub fn query_compute_deposit_id(
    deps: Deps,
    depositor: String,
    asset: Option<String>,
    amount: Uint128,
    target_chain: u64,
    nonce: u64,
) -> StdResult<ComputeDepositIdResponse> {
    let config = CONFIG.load(deps.storage)?;
    let depositor = deps.api.addr_validate(&depositor)?;
    let token = asset.map(|a| deps.api.addr_validate(&a)).transpose()?;

    let id = deposit_id_for(
        &depositor,
        token.as_ref(),
        amount.u128(),
        config.chain_id,
        target_chain,
        nonce,
    );

    Ok(ComputeDepositIdResponse {
        deposit_id: Binary::from(id.to_vec()),
    })
}

// ============================================================================
// Access Queries
// ============================================================================

pub fn query_is_executor(deps: Deps, address: String) -> StdResult<IsExecutorResponse> {
    let addr = deps.api.addr_validate(&address)?;
    Ok(IsExecutorResponse {
        is_executor: EXECUTORS.has(deps.storage, &addr),
    })
}

/// Query paginated executors, ordered by address.
pub fn query_executors(
    deps: Deps,
    start_after: Option<String>,
    limit: Option<u32>,
) -> StdResult<ExecutorsResponse> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start_addr = start_after
        .map(|a| deps.api.addr_validate(&a))
        .transpose()?;
    let start = start_addr.as_ref().map(Bound::exclusive);

    let executors = EXECUTORS
        .keys(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .collect::<StdResult<Vec<_>>>()?;

    Ok(ExecutorsResponse { executors })
}

// ============================================================================
// Custody Queries
// ============================================================================

/// Tracked custody of an asset next to what the contract actually holds.
pub fn query_custody_balance(
    deps: Deps,
    env: Env,
    asset: Option<String>,
) -> StdResult<CustodyBalanceResponse> {
    let config = CONFIG.load(deps.storage)?;
    let token = asset.map(|a| deps.api.addr_validate(&a)).transpose()?;
    let asset_info = AssetInfo::from_token(token.as_ref(), &config.native_denom);

    let tracked = CUSTODY
        .may_load(deps.storage, asset_info.key())?
        .unwrap_or_default();
    let held = asset_info.query_balance(&deps.querier, &env.contract.address)?;

    Ok(CustodyBalanceResponse {
        asset: asset_info.key().to_string(),
        tracked,
        held,
    })
}

fn to_deposit_response(deposit: Deposit) -> DepositResponse {
    DepositResponse {
        deposit_id: Binary::from(deposit.id.to_vec()),
        depositor: deposit.depositor,
        asset: deposit.asset,
        amount: deposit.amount,
        source_chain: deposit.source_chain,
        target_chain: deposit.target_chain,
        encrypted_routing_intent: deposit.encrypted_routing_intent,
        consumed: deposit.consumed,
        created_at: deposit.created_at,
        nonce: deposit.nonce,
    }
}
