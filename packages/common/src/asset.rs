//! Asset types for the Silent Bridge.
//!
//! An asset is either the chain's native bank coin or a CW20 token. The ledger
//! stores the asset of a deposit as `Option<Addr>` (`None` = native coin); this
//! module turns that into something that can build transfer messages and
//! query balances.

use std::fmt;

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{
    to_json_binary, Addr, BankMsg, Coin, CosmosMsg, QuerierWrapper, StdError, StdResult, Uint128,
    WasmMsg,
};
use cw20::{BalanceResponse, Cw20ExecuteMsg, Cw20QueryMsg};

/// Identifies which asset is being moved.
#[cw_serde]
pub enum AssetInfo {
    /// Native bank coin, e.g. `uluna`
    Native { denom: String },
    /// CW20 token contract
    Cw20 { contract_addr: Addr },
}

impl AssetInfo {
    pub fn native(denom: impl Into<String>) -> Self {
        AssetInfo::Native {
            denom: denom.into(),
        }
    }

    pub fn cw20(contract_addr: Addr) -> Self {
        AssetInfo::Cw20 { contract_addr }
    }

    /// Build from the ledger's `Option<Addr>` representation.
    pub fn from_token(token: Option<&Addr>, native_denom: &str) -> Self {
        match token {
            Some(addr) => AssetInfo::cw20(addr.clone()),
            None => AssetInfo::native(native_denom),
        }
    }

    pub fn is_native(&self) -> bool {
        matches!(self, AssetInfo::Native { .. })
    }

    /// Storage key: the denom for native coins, the contract address for CW20.
    pub fn key(&self) -> &str {
        match self {
            AssetInfo::Native { denom } => denom,
            AssetInfo::Cw20 { contract_addr } => contract_addr.as_str(),
        }
    }

    /// Message paying `amount` of this asset from the calling contract to `recipient`.
    pub fn transfer_msg(&self, recipient: &Addr, amount: Uint128) -> StdResult<CosmosMsg> {
        let msg = match self {
            AssetInfo::Native { denom } => CosmosMsg::Bank(BankMsg::Send {
                to_address: recipient.to_string(),
                amount: vec![Coin {
                    denom: denom.clone(),
                    amount,
                }],
            }),
            AssetInfo::Cw20 { contract_addr } => CosmosMsg::Wasm(WasmMsg::Execute {
                contract_addr: contract_addr.to_string(),
                msg: to_json_binary(&Cw20ExecuteMsg::Transfer {
                    recipient: recipient.to_string(),
                    amount,
                })?,
                funds: vec![],
            }),
        };
        Ok(msg)
    }

    /// Message pulling `amount` from `owner` into `recipient` using the CW20
    /// allowance the owner granted to the calling contract.
    ///
    /// Native coins cannot be pulled; they must be attached to the call.
    pub fn transfer_from_msg(
        &self,
        owner: &Addr,
        recipient: &Addr,
        amount: Uint128,
    ) -> StdResult<CosmosMsg> {
        match self {
            AssetInfo::Native { denom } => Err(StdError::generic_err(format!(
                "native denom {} cannot be pulled with an allowance",
                denom
            ))),
            AssetInfo::Cw20 { contract_addr } => Ok(CosmosMsg::Wasm(WasmMsg::Execute {
                contract_addr: contract_addr.to_string(),
                msg: to_json_binary(&Cw20ExecuteMsg::TransferFrom {
                    owner: owner.to_string(),
                    recipient: recipient.to_string(),
                    amount,
                })?,
                funds: vec![],
            })),
        }
    }

    /// On-chain balance of `account` in this asset.
    pub fn query_balance(&self, querier: &QuerierWrapper, account: &Addr) -> StdResult<Uint128> {
        match self {
            AssetInfo::Native { denom } => Ok(querier.query_balance(account, denom)?.amount),
            AssetInfo::Cw20 { contract_addr } => {
                let res: BalanceResponse = querier.query_wasm_smart(
                    contract_addr,
                    &Cw20QueryMsg::Balance {
                        address: account.to_string(),
                    },
                )?;
                Ok(res.balance)
            }
        }
    }
}

impl fmt::Display for AssetInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetInfo::Native { denom } => write!(f, "native:{}", denom),
            AssetInfo::Cw20 { contract_addr } => write!(f, "cw20:{}", contract_addr),
        }
    }
}

/// An amount of a specific asset.
#[cw_serde]
pub struct Asset {
    pub info: AssetInfo,
    pub amount: Uint128,
}

impl Asset {
    pub fn new(info: AssetInfo, amount: impl Into<Uint128>) -> Self {
        Asset {
            info,
            amount: amount.into(),
        }
    }

    pub fn transfer_msg(&self, recipient: &Addr) -> StdResult<CosmosMsg> {
        self.info.transfer_msg(recipient, self.amount)
    }
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::from_json;

    #[test]
    fn from_token_maps_none_to_native() {
        let info = AssetInfo::from_token(None, "uluna");
        assert_eq!(info, AssetInfo::native("uluna"));
        assert!(info.is_native());
        assert_eq!(info.key(), "uluna");

        let token = Addr::unchecked("terra1token");
        let info = AssetInfo::from_token(Some(&token), "uluna");
        assert_eq!(info, AssetInfo::cw20(token));
        assert!(!info.is_native());
        assert_eq!(info.key(), "terra1token");
    }

    #[test]
    fn native_transfer_is_bank_send() {
        let recipient = Addr::unchecked("terra1recipient");
        let msg = Asset::new(AssetInfo::native("uluna"), 500u128)
            .transfer_msg(&recipient)
            .unwrap();

        assert_eq!(
            msg,
            CosmosMsg::Bank(BankMsg::Send {
                to_address: "terra1recipient".to_string(),
                amount: vec![Coin::new(500, "uluna")],
            })
        );
    }

    #[test]
    fn cw20_transfer_is_wasm_execute() {
        let recipient = Addr::unchecked("terra1recipient");
        let info = AssetInfo::cw20(Addr::unchecked("terra1token"));
        let msg = info.transfer_msg(&recipient, Uint128::new(42)).unwrap();

        let CosmosMsg::Wasm(WasmMsg::Execute {
            contract_addr,
            msg,
            funds,
        }) = msg
        else {
            panic!("expected wasm execute");
        };
        assert_eq!(contract_addr, "terra1token");
        assert!(funds.is_empty());
        assert_eq!(
            from_json::<Cw20ExecuteMsg>(&msg).unwrap(),
            Cw20ExecuteMsg::Transfer {
                recipient: "terra1recipient".to_string(),
                amount: Uint128::new(42),
            }
        );
    }

    #[test]
    fn cw20_transfer_from_pulls_to_recipient() {
        let owner = Addr::unchecked("terra1owner");
        let bridge = Addr::unchecked("terra1bridge");
        let info = AssetInfo::cw20(Addr::unchecked("terra1token"));
        let msg = info
            .transfer_from_msg(&owner, &bridge, Uint128::new(1_000))
            .unwrap();

        let CosmosMsg::Wasm(WasmMsg::Execute { msg, .. }) = msg else {
            panic!("expected wasm execute");
        };
        assert_eq!(
            from_json::<Cw20ExecuteMsg>(&msg).unwrap(),
            Cw20ExecuteMsg::TransferFrom {
                owner: "terra1owner".to_string(),
                recipient: "terra1bridge".to_string(),
                amount: Uint128::new(1_000),
            }
        );
    }

    #[test]
    fn native_transfer_from_is_rejected() {
        let owner = Addr::unchecked("terra1owner");
        let err = AssetInfo::native("uluna")
            .transfer_from_msg(&owner, &owner, Uint128::new(1))
            .unwrap_err();
        assert!(err.to_string().contains("cannot be pulled"));
    }

    #[test]
    fn display_includes_kind() {
        assert_eq!(AssetInfo::native("uluna").to_string(), "native:uluna");
        let asset = Asset::new(AssetInfo::cw20(Addr::unchecked("terra1token")), 7u128);
        assert_eq!(asset.to_string(), "7 cw20:terra1token");
    }
}
