use liquidity_pool_validation_errors::LiquidityPoolValidationError;
use soroban_fixed_point_math::SorobanFixedPoint;
use soroban_sdk::{Env, U256};
use utils::u256_math::{mul_div_floor, ExtraMath};

// Shares minted for depositing `amount_a` and `amount_b`.
//
// An empty pool is seeded with the geometric mean of the deposit. Otherwise the deposit is
// credited for the smaller of its two proportional contributions; whatever is deposited
// beyond that ratio stays in the pool for the existing holders.
pub fn mint_amount(
    e: &Env,
    amount_a: u128,
    amount_b: u128,
    reserve_a: u128,
    reserve_b: u128,
    total_shares: u128,
) -> Result<u128, LiquidityPoolValidationError> {
    if total_shares == 0 {
        // sqrt of a product of two u128 always fits back into u128
        return U256::from_u128(e, amount_a)
            .mul(&U256::from_u128(e, amount_b))
            .sqrt()
            .to_u128()
            .ok_or(LiquidityPoolValidationError::ArithmeticOverflow);
    }

    if reserve_a == 0 || reserve_b == 0 {
        return Err(LiquidityPoolValidationError::EmptyReserves);
    }

    let shares_a = mul_div_floor(e, amount_a, total_shares, reserve_a)
        .ok_or(LiquidityPoolValidationError::ArithmeticOverflow)?;
    let shares_b = mul_div_floor(e, amount_b, total_shares, reserve_b)
        .ok_or(LiquidityPoolValidationError::ArithmeticOverflow)?;
    Ok(shares_a.min(shares_b))
}

// Amounts of both assets redeemed by burning `shares`.
// Rounds down; the remainder stays with the holders that remain in the pool.
pub fn burn_amounts(
    e: &Env,
    shares: u128,
    reserve_a: u128,
    reserve_b: u128,
    total_shares: u128,
) -> Result<(u128, u128), LiquidityPoolValidationError> {
    if total_shares == 0 {
        return Err(LiquidityPoolValidationError::EmptyReserves);
    }
    if shares > total_shares {
        return Err(LiquidityPoolValidationError::InsufficientShares);
    }

    // shares <= total_shares keeps both quotients within the reserves
    let amount_a = shares.fixed_mul_floor(e, &reserve_a, &total_shares);
    let amount_b = shares.fixed_mul_floor(e, &reserve_b, &total_shares);
    Ok((amount_a, amount_b))
}
