#![no_std]

use soroban_sdk::contracterror;

// Rejections raised by the pool engine. Every one of them is raised before any state is
// written, so a failed call leaves the pool exactly as it was.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum LiquidityPoolValidationError {
    // zero or otherwise unusable quantity supplied by the caller
    InvalidAmount = 2001,
    // withdrawal exceeds the caller's share balance
    InsufficientShares = 2002,
    // deposit is too small to be worth a single share
    InsufficientLiquidityMinted = 2003,
    // redemption would return nothing for one of the assets
    InsufficientReturnAmount = 2004,
    // swap output rounds down to zero
    InsufficientOutput = 2005,
    // swap would drain the output reserve
    InsufficientLiquidity = 2006,
    // pool has no liquidity on at least one side
    EmptyReserves = 2007,
    ArithmeticOverflow = 2008,
    InvariantDoesNotHold = 2009,
    CannotSwapSameToken = 2010,
    InTokenOutOfBounds = 2011,
    OutTokenOutOfBounds = 2012,
}
