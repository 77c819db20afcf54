#![no_std]

//! Constant product (x * y = k) pool engine.
//!
//! The engine is pure bookkeeping: it validates and applies `provide`, `withdraw` and `swap`
//! against a [`Pool`] value and a [`ShareLedger`] of holder balances, and never moves tokens
//! itself. The caller persists the updated pool and balance and settles transfers afterwards.

pub mod constants;
pub mod liquidity_accountant;
pub mod pool;
pub mod share_ledger;
pub mod swap_calculator;

pub use liquidity_pool_validation_errors::LiquidityPoolValidationError;
pub use pool::{Pool, SwapDirection};
pub use share_ledger::ShareLedger;
