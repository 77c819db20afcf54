use crate::constants::{FEE_MULTIPLIER, FEE_RESIDUE};
use liquidity_pool_validation_errors::LiquidityPoolValidationError;
use soroban_fixed_point_math::SorobanFixedPoint;
use soroban_sdk::Env;

// Output of selling `amount_in` into the pool:
//   effective_in = amount_in * 997
//   amount_out   = floor(effective_in * reserve_out / (reserve_in * 1000 + effective_in))
//
// The result is always below `reserve_out`, but the caller is responsible for rejecting
// trades that would leave the output reserve empty.
pub fn compute_output(
    e: &Env,
    amount_in: u128,
    reserve_in: u128,
    reserve_out: u128,
) -> Result<u128, LiquidityPoolValidationError> {
    if amount_in == 0 {
        return Err(LiquidityPoolValidationError::InvalidAmount);
    }
    if reserve_in == 0 || reserve_out == 0 {
        return Err(LiquidityPoolValidationError::EmptyReserves);
    }

    let effective_in = amount_in
        .checked_mul(FEE_RESIDUE)
        .ok_or(LiquidityPoolValidationError::ArithmeticOverflow)?;
    let denominator = reserve_in
        .checked_mul(FEE_MULTIPLIER)
        .and_then(|scaled_reserve| scaled_reserve.checked_add(effective_in))
        .ok_or(LiquidityPoolValidationError::ArithmeticOverflow)?;

    // quotient is bounded by reserve_out, so the 256-bit fallback never overflows u128
    Ok(effective_in.fixed_mul_floor(e, &reserve_out, &denominator))
}
