//! Common - Shared Types and Utilities for Silent Bridge Contracts
//!
//! This package provides the asset model shared by the ledger contract and
//! its off-chain tooling: a native bank coin or a CW20 token, plus the
//! messages that move them.

pub mod asset;

pub use asset::{Asset, AssetInfo};
