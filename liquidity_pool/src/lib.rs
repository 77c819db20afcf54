#![no_std]

mod contract;
pub mod errors;
mod guard;
mod pool_interface;
mod storage;
mod testutils;
pub mod token;

pub use contract::{LiquidityPool, LiquidityPoolClient};
