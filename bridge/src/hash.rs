//! Deposit id derivation
//!
//! Deposit ids are part of the observable interface: relayers read them from
//! deposit events and executors pass them back to `Withdraw`. The derivation
//! is pinned here so off-chain tooling can reproduce it.
//!
//! ```text
//! depositor_key = keccak256(utf8(depositor))
//! asset_key     = 0x00..00 (native) | keccak256(utf8(cw20 address))
//! id = keccak256(abi.encode(
//!     bytes32 depositor_key,
//!     bytes32 asset_key,
//!     uint256 amount,
//!     uint256 source_chain,
//!     uint256 target_chain,
//!     uint256 nonce,
//! ))
//! ```
//!
//! # Byte Layout (192 bytes total)
//! - Bytes 0-31:    depositor_key
//! - Bytes 32-63:   asset_key
//! - Bytes 64-95:   amount (uint256, big-endian, left-padded)
//! - Bytes 96-127:  source_chain (uint256, big-endian, left-padded)
//! - Bytes 128-159: target_chain (uint256, big-endian, left-padded)
//! - Bytes 160-191: nonce (uint256, big-endian, left-padded)

use cosmwasm_std::{Addr, Binary, StdError};
use tiny_keccak::{Hasher, Keccak};

use crate::error::ContractError;

/// Compute keccak256 hash of arbitrary data
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak::v256();
    hasher.update(data);
    let mut output = [0u8; 32];
    hasher.finalize(&mut output);
    output
}

/// 32-byte key for an account address.
pub fn address_key(addr: &Addr) -> [u8; 32] {
    keccak256(addr.as_bytes())
}

/// 32-byte key for a deposit asset; the native coin is all zeros.
pub fn asset_key(asset: Option<&Addr>) -> [u8; 32] {
    match asset {
        Some(token) => keccak256(token.as_bytes()),
        None => [0u8; 32],
    }
}

/// Compute the raw deposit id from pre-encoded keys.
pub fn compute_deposit_id(
    depositor_key: &[u8; 32],
    asset_key: &[u8; 32],
    amount: u128,
    source_chain: u64,
    target_chain: u64,
    nonce: u64,
) -> [u8; 32] {
    let mut data = [0u8; 192];

    data[0..32].copy_from_slice(depositor_key);
    data[32..64].copy_from_slice(asset_key);

    // u128 occupies the low 16 bytes of its word
    data[64 + 16..96].copy_from_slice(&amount.to_be_bytes());

    // u64 values occupy the low 8 bytes of their words
    data[96 + 24..128].copy_from_slice(&source_chain.to_be_bytes());
    data[128 + 24..160].copy_from_slice(&target_chain.to_be_bytes());
    data[160 + 24..192].copy_from_slice(&nonce.to_be_bytes());

    keccak256(&data)
}

/// Deposit id for a depositor/asset pair as stored by the ledger.
pub fn deposit_id_for(
    depositor: &Addr,
    asset: Option<&Addr>,
    amount: u128,
    source_chain: u64,
    target_chain: u64,
    nonce: u64,
) -> [u8; 32] {
    compute_deposit_id(
        &address_key(depositor),
        &asset_key(asset),
        amount,
        source_chain,
        target_chain,
        nonce,
    )
}

/// Parse a 32-byte deposit id from Binary input.
pub fn parse_deposit_id(deposit_id: &Binary) -> Result<[u8; 32], ContractError> {
    deposit_id
        .as_slice()
        .try_into()
        .map_err(|_| ContractError::InvalidDepositId {
            got: deposit_id.len(),
        })
}

/// Convert 32-byte hash to 0x-prefixed hex (for attributes and errors)
pub fn bytes32_to_hex(bytes: &[u8; 32]) -> String {
    format!("0x{}", hex::encode(bytes))
}

/// Parse hex string (with or without 0x prefix) to 32-byte array.
///
/// Malformed hex is a parse error; well-formed hex of the wrong size reports
/// its decoded length.
pub fn hex_to_bytes32(s: &str) -> Result<[u8; 32], ContractError> {
    let s = s.strip_prefix("0x").unwrap_or(s);
    let bytes = hex::decode(s).map_err(|e| StdError::parse_err("deposit id", e))?;
    let len = bytes.len();
    bytes
        .try_into()
        .map_err(|_| ContractError::InvalidDepositId { got: len })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keccak256_basic() {
        let result = keccak256(b"hello");
        assert_eq!(
            bytes32_to_hex(&result),
            "0x1c8aff950685c2ed4bc3174f3472287b56d9517b9c948127319a09a7a36deac8"
        );
    }

    #[test]
    fn test_vector_all_zeros() {
        let result = compute_deposit_id(&[0u8; 32], &[0u8; 32], 0, 0, 0, 0);
        assert_eq!(
            bytes32_to_hex(&result),
            "0x1e990e27f0d7976bf2adbd60e20384da0125b76e2885a96aa707bcb054108b0d"
        );
    }

    #[test]
    fn test_vector_native_deposit() {
        let depositor = Addr::unchecked("terra1user");
        assert_eq!(
            bytes32_to_hex(&address_key(&depositor)),
            "0x7858098a9e21e357381c393d433223c50ce18e35e233fbeedd00c02e9ac3d12b"
        );

        let id = deposit_id_for(&depositor, None, 1_000_000, 1, 421614, 0);
        assert_eq!(
            bytes32_to_hex(&id),
            "0xe05b7f2b335d4e93b531e4449574d41b3bfc066252325efae9c4958afdccb792"
        );
    }

    #[test]
    fn test_vector_token_deposit() {
        let depositor = Addr::unchecked("terra1user");
        let token = Addr::unchecked("terra1token");
        assert_eq!(
            bytes32_to_hex(&asset_key(Some(&token))),
            "0xe93b010a1c890b0fc2f9a66585d130239a93fa512d5a1ec6ad5b1ed47e50ac67"
        );

        let id = deposit_id_for(&depositor, Some(&token), 1_000_000_000, 1, 11155111, 7);
        assert_eq!(
            bytes32_to_hex(&id),
            "0xce38be59cc9bf8103b56d84650e0196c4c300412248be1d780058567b139fe42"
        );
    }

    #[test]
    fn test_vector_max_values() {
        let result = compute_deposit_id(
            &[0xff; 32],
            &[0xff; 32],
            u128::MAX,
            u64::MAX,
            u64::MAX,
            u64::MAX,
        );
        assert_eq!(
            bytes32_to_hex(&result),
            "0x0651897fcb129c7477ae60d9dbe64041c464fd5ed0771d6abb97abf42ab90d2a"
        );
    }

    #[test]
    fn nonce_changes_id() {
        let depositor = Addr::unchecked("terra1user");
        let a = deposit_id_for(&depositor, None, 1_000, 1, 56, 0);
        let b = deposit_id_for(&depositor, None, 1_000, 1, 56, 1);
        assert_ne!(a, b);
    }

    #[test]
    fn native_asset_key_is_zero() {
        assert_eq!(asset_key(None), [0u8; 32]);
    }

    #[test]
    fn parse_deposit_id_checks_length() {
        let ok = parse_deposit_id(&Binary::from(vec![7u8; 32])).unwrap();
        assert_eq!(ok, [7u8; 32]);

        let err = parse_deposit_id(&Binary::from(vec![7u8; 31])).unwrap_err();
        assert_eq!(err, ContractError::InvalidDepositId { got: 31 });
    }

    #[test]
    fn hex_roundtrip_with_and_without_prefix() {
        let id = [0xabu8; 32];
        let hex = bytes32_to_hex(&id);
        assert_eq!(hex_to_bytes32(&hex).unwrap(), id);
        assert_eq!(hex_to_bytes32(&hex[2..]).unwrap(), id);
    }

    #[test]
    fn hex_to_bytes32_reports_decoded_length() {
        assert_eq!(
            hex_to_bytes32("0x1234").unwrap_err(),
            ContractError::InvalidDepositId { got: 2 }
        );
        assert_eq!(
            hex_to_bytes32(&"ab".repeat(33)).unwrap_err(),
            ContractError::InvalidDepositId { got: 33 }
        );
    }

    #[test]
    fn hex_to_bytes32_rejects_malformed_hex() {
        for bad in ["0xzz", "abc"] {
            let err = hex_to_bytes32(bad).unwrap_err();
            assert!(
                matches!(err, ContractError::Std(StdError::ParseErr { .. })),
                "got: {:?}",
                err
            );
        }
    }
}
