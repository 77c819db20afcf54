// 0.3% fee taken from the input: 997 of every 1000 units reach the curve.
pub const FEE_MULTIPLIER: u128 = 1000;
pub const FEE_RESIDUE: u128 = 997;

// Fixed point unit for spot prices.
pub const PRICE_PRECISION: u128 = 1_000_000_000_000_000_000;
