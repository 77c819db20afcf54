use crate::errors::LiquidityPoolError;
use crate::storage::{get_is_locked, set_is_locked};
use liquidity_pool_validation_errors::LiquidityPoolValidationError;
use soroban_sdk::{panic_with_error, Env};

// Aborts the invocation with the engine error, if any.
pub fn unwrap_or_panic<T>(e: &Env, result: Result<T, LiquidityPoolValidationError>) -> T {
    match result {
        Ok(value) => value,
        Err(error) => panic_with_error!(e, error),
    }
}

// Runs a state-changing operation with the pool locked.
//
// A call that reaches the pool while another one is still in progress is rejected with
// `ReentrantCall` before it reads anything. The lock is released on both outcomes, then a
// failed operation aborts the invocation with its error.
pub fn non_reentrant<T, F>(e: &Env, operation: F) -> T
where
    F: FnOnce() -> Result<T, LiquidityPoolValidationError>,
{
    if get_is_locked(e) {
        panic_with_error!(e, LiquidityPoolError::ReentrantCall);
    }
    set_is_locked(e, &true);

    let result = operation();

    set_is_locked(e, &false);
    unwrap_or_panic(e, result)
}
