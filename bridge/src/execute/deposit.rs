//! Deposit Registry handlers.
//!
//! A deposit moves funds into the ledger and creates its record in the same
//! transaction: if the CW20 pull fails, the record write is reverted with it.
//! The depositor is always the caller; CW20 deposits go through an allowance.

use common::AssetInfo;
use cosmwasm_std::{
    Addr, Binary, Coin, CosmosMsg, DepsMut, Env, MessageInfo, Response, StdError, Storage,
    Uint128,
};

use crate::auth::{ensure_depositor, ensure_no_funds, ensure_not_paused, format_funds};
use crate::error::ContractError;
use crate::events::{deposit_event, routing_intent_updated_event};
use crate::hash::{bytes32_to_hex, deposit_id_for, parse_deposit_id};
use crate::state::{
    Config, Deposit, CONFIG, CUSTODY, DEPOSITS, DEPOSITS_BY_DEPOSITOR, DEPOSIT_BY_NONCE,
    DEPOSIT_NONCE, MAX_ROUTING_INTENT_LEN, STATS,
};

// ============================================================================
// Deposit (native or CW20 allowance pull)
// ============================================================================

/// Lock the native coin (attached) or pull a CW20 token (allowance) and
/// record the deposit.
pub fn execute_deposit(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    asset: Option<String>,
    amount: Uint128,
    target_chain: u64,
    encrypted_routing_intent: Binary,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure_not_paused(&config)?;
    validate_deposit(&config, amount, target_chain, &encrypted_routing_intent)?;

    let token = asset.map(|a| deps.api.addr_validate(&a)).transpose()?;
    let asset_info = AssetInfo::from_token(token.as_ref(), &config.native_denom);

    let mut messages: Vec<CosmosMsg> = vec![];
    if asset_info.is_native() {
        check_native_funds(&info.funds, &config.native_denom, amount)?;
    } else {
        // Native funds would be stranded on a token deposit
        ensure_no_funds(&info)?;
        messages.push(asset_info.transfer_from_msg(
            &info.sender,
            &env.contract.address,
            amount,
        )?);
    }

    let deposit = record_deposit(
        deps.storage,
        &env,
        &config,
        info.sender,
        token,
        amount,
        target_chain,
        encrypted_routing_intent,
    )?;

    Ok(deposit_response(&deposit, &config)
        .add_messages(messages)
        .add_attribute("method", "deposit"))
}

// ============================================================================
// Routing Intent
// ============================================================================

/// Replace the encrypted routing intent of a deposit (depositor only).
///
/// Consumed deposits are not excluded, and the pause switch does not apply.
pub fn execute_update_routing_intent(
    deps: DepsMut,
    info: MessageInfo,
    deposit_id: Binary,
    encrypted_routing_intent: Binary,
) -> Result<Response, ContractError> {
    ensure_no_funds(&info)?;
    let id = parse_deposit_id(&deposit_id)?;

    let mut deposit =
        DEPOSITS
            .may_load(deps.storage, &id)?
            .ok_or_else(|| ContractError::DepositNotFound {
                deposit_id: bytes32_to_hex(&id),
            })?;

    ensure_depositor(&deposit, &info.sender)?;
    check_intent_size(&encrypted_routing_intent)?;

    deposit.encrypted_routing_intent = encrypted_routing_intent;
    DEPOSITS.save(deps.storage, &id, &deposit)?;

    Ok(Response::new()
        .add_event(routing_intent_updated_event(&deposit))
        .add_attribute("method", "update_routing_intent")
        .add_attribute("deposit_id", bytes32_to_hex(&id)))
}

// ============================================================================
// Internal Helpers
// ============================================================================

fn validate_deposit(
    config: &Config,
    amount: Uint128,
    target_chain: u64,
    encrypted_routing_intent: &Binary,
) -> Result<(), ContractError> {
    if amount.is_zero() || amount < config.min_deposit_amount {
        return Err(ContractError::BelowMinimumAmount {
            min_amount: config.min_deposit_amount,
        });
    }

    if target_chain == config.chain_id {
        return Err(ContractError::InvalidTargetChain {
            chain_id: target_chain,
        });
    }

    check_intent_size(encrypted_routing_intent)
}

fn check_intent_size(encrypted_routing_intent: &Binary) -> Result<(), ContractError> {
    if encrypted_routing_intent.len() > MAX_ROUTING_INTENT_LEN {
        return Err(ContractError::RoutingIntentTooLarge {
            size: encrypted_routing_intent.len(),
            max: MAX_ROUTING_INTENT_LEN,
        });
    }
    Ok(())
}

/// Exactly one coin of the native denom, matching `amount`.
fn check_native_funds(funds: &[Coin], denom: &str, amount: Uint128) -> Result<(), ContractError> {
    match funds {
        [coin] if coin.denom == denom && coin.amount == amount => Ok(()),
        _ => Err(ContractError::FundsMismatch {
            expected: format!("{}{}", amount, denom),
            got: format_funds(funds),
        }),
    }
}

/// Derive the id, store the record and its indexes, and credit custody.
#[allow(clippy::too_many_arguments)]
fn record_deposit(
    storage: &mut dyn Storage,
    env: &Env,
    config: &Config,
    depositor: Addr,
    asset: Option<Addr>,
    amount: Uint128,
    target_chain: u64,
    encrypted_routing_intent: Binary,
) -> Result<Deposit, ContractError> {
    let nonce = DEPOSIT_NONCE.load(storage)?;
    let id = deposit_id_for(
        &depositor,
        asset.as_ref(),
        amount.u128(),
        config.chain_id,
        target_chain,
        nonce,
    );

    if DEPOSITS.has(storage, &id) {
        return Err(ContractError::DepositIdCollision {
            deposit_id: bytes32_to_hex(&id),
        });
    }

    let deposit = Deposit {
        id,
        depositor,
        asset,
        amount,
        source_chain: config.chain_id,
        target_chain,
        encrypted_routing_intent,
        consumed: false,
        created_at: env.block.time,
        nonce,
    };

    DEPOSITS.save(storage, &id, &deposit)?;
    DEPOSIT_BY_NONCE.save(storage, nonce, &id)?;
    DEPOSITS_BY_DEPOSITOR.save(storage, (&deposit.depositor, nonce), &id)?;
    DEPOSIT_NONCE.save(storage, &(nonce + 1))?;

    let asset_info = AssetInfo::from_token(deposit.asset.as_ref(), &config.native_denom);
    let held = CUSTODY
        .may_load(storage, asset_info.key())?
        .unwrap_or_default();
    let new_held = held.checked_add(amount).map_err(StdError::from)?;
    CUSTODY.save(storage, asset_info.key(), &new_held)?;

    let mut stats = STATS.load(storage)?;
    stats.total_deposits += 1;
    STATS.save(storage, &stats)?;

    Ok(deposit)
}

fn deposit_response(deposit: &Deposit, config: &Config) -> Response {
    let asset_info = AssetInfo::from_token(deposit.asset.as_ref(), &config.native_denom);
    Response::new()
        .add_event(deposit_event(deposit, &asset_info))
        .add_attribute("deposit_id", bytes32_to_hex(&deposit.id))
        .add_attribute("depositor", deposit.depositor.as_str())
        .add_attribute("amount", deposit.amount.to_string())
        .add_attribute("target_chain", deposit.target_chain.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::coin;

    #[test]
    fn native_funds_must_match_exactly() {
        let amount = Uint128::new(1_000);
        assert!(check_native_funds(&[coin(1_000, "uluna")], "uluna", amount).is_ok());

        for funds in [
            vec![],
            vec![coin(999, "uluna")],
            vec![coin(1_000, "uusd")],
            vec![coin(1_000, "uluna"), coin(1, "uusd")],
        ] {
            let err = check_native_funds(&funds, "uluna", amount).unwrap_err();
            assert!(matches!(err, ContractError::FundsMismatch { .. }));
        }
    }

    #[test]
    fn intent_size_limit_is_inclusive() {
        let at_limit = Binary::from(vec![0u8; MAX_ROUTING_INTENT_LEN]);
        assert!(check_intent_size(&at_limit).is_ok());

        let over = Binary::from(vec![0u8; MAX_ROUTING_INTENT_LEN + 1]);
        assert_eq!(
            check_intent_size(&over).unwrap_err(),
            ContractError::RoutingIntentTooLarge {
                size: MAX_ROUTING_INTENT_LEN + 1,
                max: MAX_ROUTING_INTENT_LEN,
            }
        );
    }
}
