//! Authorization and safety guards.
//!
//! Each execute handler calls the relevant guard before touching state, so a
//! rejected caller never causes a partial write.

use cosmwasm_std::{Addr, Api, Coin, MessageInfo, Storage};

use crate::error::ContractError;
use crate::state::{Config, Deposit, EXECUTORS};

/// Only the configured owner may proceed.
pub fn ensure_owner(config: &Config, sender: &Addr) -> Result<(), ContractError> {
    if *sender != config.owner {
        return Err(ContractError::Unauthorized);
    }
    Ok(())
}

/// Only a registered executor may proceed.
pub fn ensure_executor(storage: &dyn Storage, sender: &Addr) -> Result<(), ContractError> {
    if !is_executor(storage, sender) {
        return Err(ContractError::NotExecutor);
    }
    Ok(())
}

/// Only the account that created `deposit` may proceed.
pub fn ensure_depositor(deposit: &Deposit, sender: &Addr) -> Result<(), ContractError> {
    if *sender != deposit.depositor {
        return Err(ContractError::NotDepositOwner);
    }
    Ok(())
}

/// Deposits are halted while paused.
pub fn ensure_not_paused(config: &Config) -> Result<(), ContractError> {
    if config.paused {
        return Err(ContractError::BridgePaused);
    }
    Ok(())
}

/// Reject coins attached to a message that does not take custody of them.
pub fn ensure_no_funds(info: &MessageInfo) -> Result<(), ContractError> {
    if !info.funds.is_empty() {
        return Err(ContractError::FundsMismatch {
            expected: "no funds".to_string(),
            got: format_funds(&info.funds),
        });
    }
    Ok(())
}

pub fn format_funds(funds: &[Coin]) -> String {
    if funds.is_empty() {
        return "none".to_string();
    }
    funds
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

pub fn is_executor(storage: &dyn Storage, addr: &Addr) -> bool {
    EXECUTORS.has(storage, addr)
}

/// Validate an address supplied in a message, rejecting blank input as the
/// zero address before the chain's own validation runs.
pub fn validate_address(api: &dyn Api, addr: &str, field: &str) -> Result<Addr, ContractError> {
    if addr.trim().is_empty() {
        return Err(ContractError::ZeroAddress {
            field: field.to_string(),
        });
    }
    Ok(api.addr_validate(addr)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::testing::{mock_dependencies, mock_env, mock_info};
    use cosmwasm_std::{coin, Binary, Uint128};

    fn config(paused: bool) -> Config {
        Config {
            owner: Addr::unchecked("owner"),
            paused,
            min_deposit_amount: Uint128::new(1_000),
            chain_id: 1,
            native_denom: "uluna".to_string(),
        }
    }

    #[test]
    fn owner_guard() {
        let cfg = config(false);
        assert!(ensure_owner(&cfg, &Addr::unchecked("owner")).is_ok());
        assert_eq!(
            ensure_owner(&cfg, &Addr::unchecked("mallory")).unwrap_err(),
            ContractError::Unauthorized
        );
    }

    #[test]
    fn executor_guard_reads_storage() {
        let mut deps = mock_dependencies();
        let executor = Addr::unchecked("executor");

        assert_eq!(
            ensure_executor(&deps.storage, &executor).unwrap_err(),
            ContractError::NotExecutor
        );

        EXECUTORS.save(&mut deps.storage, &executor, &true).unwrap();
        assert!(ensure_executor(&deps.storage, &executor).is_ok());
    }

    #[test]
    fn depositor_guard() {
        let deposit = Deposit {
            id: [1u8; 32],
            depositor: Addr::unchecked("alice"),
            asset: None,
            amount: Uint128::new(5_000),
            source_chain: 1,
            target_chain: 56,
            encrypted_routing_intent: Binary::from(b"blob".to_vec()),
            consumed: false,
            created_at: mock_env().block.time,
            nonce: 0,
        };

        assert!(ensure_depositor(&deposit, &Addr::unchecked("alice")).is_ok());
        assert_eq!(
            ensure_depositor(&deposit, &Addr::unchecked("bob")).unwrap_err(),
            ContractError::NotDepositOwner
        );
    }

    #[test]
    fn pause_guard() {
        assert!(ensure_not_paused(&config(false)).is_ok());
        assert_eq!(
            ensure_not_paused(&config(true)).unwrap_err(),
            ContractError::BridgePaused
        );
    }

    #[test]
    fn blank_address_is_zero_address() {
        let deps = mock_dependencies();
        let err = validate_address(&deps.api, "  ", "new_owner").unwrap_err();
        assert_eq!(
            err,
            ContractError::ZeroAddress {
                field: "new_owner".to_string()
            }
        );

        let addr = validate_address(&deps.api, "newowner", "new_owner").unwrap();
        assert_eq!(addr, Addr::unchecked("newowner"));
    }

    #[test]
    fn attached_funds_are_rejected() {
        assert!(ensure_no_funds(&mock_info("alice", &[])).is_ok());

        let err = ensure_no_funds(&mock_info("alice", &[coin(5, "uluna"), coin(7, "uusd")]))
            .unwrap_err();
        assert_eq!(
            err,
            ContractError::FundsMismatch {
                expected: "no funds".to_string(),
                got: "5uluna,7uusd".to_string(),
            }
        );
    }
}
