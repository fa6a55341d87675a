//! Withdrawal Authorizer.
//!
//! An executor releases funds against a deposit exactly once. The record is
//! marked consumed and custody is debited before the transfer message is
//! appended, so the payout only ever runs against already-committed state.
//!
//! The `proof` argument is accepted and ignored; no attestation is checked.

use common::{Asset, AssetInfo};
use cosmwasm_std::{Binary, DepsMut, MessageInfo, Response, Storage, Uint128};

use crate::auth::{ensure_executor, ensure_no_funds, validate_address};
use crate::error::ContractError;
use crate::events::withdraw_event;
use crate::hash::{bytes32_to_hex, parse_deposit_id};
use crate::state::{CONFIG, CUSTODY, DEPOSITS, STATS};

/// Pay `amount` of `asset` to `recipient` and consume the deposit.
///
/// Not gated by the pause switch: escrowed funds stay releasable.
#[allow(clippy::too_many_arguments)]
pub fn execute_withdraw(
    deps: DepsMut,
    info: MessageInfo,
    deposit_id: Binary,
    recipient: String,
    asset: Option<String>,
    amount: Uint128,
    source_chain: u64,
    _proof: Binary,
) -> Result<Response, ContractError> {
    ensure_executor(deps.storage, &info.sender)?;
    ensure_no_funds(&info)?;

    let id = parse_deposit_id(&deposit_id)?;
    let id_hex = bytes32_to_hex(&id);

    // Single-spend guard
    let mut deposit = DEPOSITS
        .may_load(deps.storage, &id)?
        .ok_or_else(|| ContractError::DepositNotFound {
            deposit_id: id_hex.clone(),
        })?;
    if deposit.consumed {
        return Err(ContractError::DepositAlreadyUsed { deposit_id: id_hex });
    }

    if amount.is_zero() {
        return Err(ContractError::InvalidAmount {
            reason: "Amount must be greater than zero".to_string(),
        });
    }
    let recipient = validate_address(deps.api, &recipient, "recipient")?;

    let config = CONFIG.load(deps.storage)?;
    let token = asset.map(|a| deps.api.addr_validate(&a)).transpose()?;
    let payout = Asset::new(
        AssetInfo::from_token(token.as_ref(), &config.native_denom),
        amount,
    );

    deposit.consumed = true;
    DEPOSITS.save(deps.storage, &id, &deposit)?;
    debit_custody(deps.storage, &payout.info, amount)?;

    let mut stats = STATS.load(deps.storage)?;
    stats.total_withdrawals += 1;
    STATS.save(deps.storage, &stats)?;

    let transfer = payout.transfer_msg(&recipient)?;

    Ok(Response::new()
        .add_message(transfer)
        .add_event(withdraw_event(
            &id,
            &info.sender,
            &recipient,
            &payout,
            source_chain,
        ))
        .add_attribute("method", "withdraw")
        .add_attribute("deposit_id", id_hex)
        .add_attribute("recipient", recipient.as_str())
        .add_attribute("amount", amount.to_string()))
}

/// Reduce tracked custody of `asset` by exactly `amount`.
fn debit_custody(
    storage: &mut dyn Storage,
    asset: &AssetInfo,
    amount: Uint128,
) -> Result<(), ContractError> {
    let held = CUSTODY.may_load(storage, asset.key())?.unwrap_or_default();
    if held < amount {
        return Err(ContractError::InsufficientCustody {
            asset: asset.to_string(),
            held,
            requested: amount,
        });
    }
    CUSTODY.save(storage, asset.key(), &(held - amount))?;
    Ok(())
}
