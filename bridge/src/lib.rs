//! Silent Bridge Contract - Deposit Ledger with Opaque Routing Intents
//!
//! Users lock native coin or CW20 tokens for release on another chain. Each
//! deposit carries an encrypted routing intent the contract never reads; the
//! depositor may replace it until (and after) release.
//!
//! # Deposit Flow
//! 1. User calls `Deposit` (native coin attached, or CW20 pulled through an
//!    allowance)
//! 2. The contract derives a keccak256 deposit id and emits `wasm-deposit`
//! 3. Off-chain executors observe the event and act on the target chain
//!
//! # Withdraw Flow
//! 1. An executor calls `Withdraw` with the deposit id
//! 2. The deposit is marked consumed and custody debited
//! 3. Funds are paid to the recipient; a second withdrawal always fails
//!
//! # Security
//! - Owner-managed executor set
//! - Single-spend guard per deposit id
//! - Emergency pause of new deposits
//! - Withdrawals bounded by tracked custody

pub mod auth;
pub mod contract;
pub mod error;
pub mod events;
mod execute;
pub mod hash;
pub mod msg;
mod query;
pub mod state;

pub use crate::error::{ContractError, ErrorCategory};
pub use crate::hash::{deposit_id_for, keccak256};
