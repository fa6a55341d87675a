//! Execute handlers for the Silent Bridge contract.
//!
//! - `deposit` - Deposit (native / CW20 allowance pull) and routing intent updates
//! - `withdraw` - Executor-gated payout against a deposit
//! - `admin` - Executor set, pause, ownership and deposit minimum

mod admin;
mod deposit;
mod withdraw;

pub use admin::*;
pub use deposit::*;
pub use withdraw::*;
