use liquidity_pool_validation_errors::LiquidityPoolValidationError;
use soroban_sdk::token::TokenClient as SorobanTokenClient;
use soroban_sdk::{Address, Env};

// Token contracts account in i128. Amounts are converted before any state is written,
// so a transfer itself never has to fail on the conversion.
pub fn to_token_amount(amount: u128) -> Result<i128, LiquidityPoolValidationError> {
    i128::try_from(amount).map_err(|_| LiquidityPoolValidationError::ArithmeticOverflow)
}

// Moves `amount` of `token` from `from` into the pool.
pub fn pull_from(e: &Env, token: &Address, from: &Address, amount: i128) {
    SorobanTokenClient::new(e, token).transfer(from, &e.current_contract_address(), &amount);
}

// Pays `amount` of `token` out of the pool to `to`.
pub fn push_to(e: &Env, token: &Address, to: &Address, amount: i128) {
    SorobanTokenClient::new(e, token).transfer(&e.current_contract_address(), to, &amount);
}
