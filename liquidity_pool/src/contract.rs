use crate::errors::LiquidityPoolError;
use crate::guard::{non_reentrant, unwrap_or_panic};
use crate::pool_interface::LiquidityPoolTrait;
use crate::storage::{get_pool, set_pool, ShareStorage};
use crate::token::{pull_from, push_to, to_token_amount};
use liquidity_pool_engine::{Pool, ShareLedger, SwapDirection};
use liquidity_pool_events::Events as PoolEvents;
use liquidity_pool_events::LiquidityPoolEvents;
use soroban_sdk::{contract, contractimpl, contractmeta, log, panic_with_error, Address, Env, Vec};

// Metadata that is added on to the WASM custom section
contractmeta!(
    key = "Description",
    val = "Constant product AMM with 0.3% swap fee"
);

#[contract]
pub struct LiquidityPool;

#[contractimpl]
impl LiquidityPool {
    // __constructor
    // Creates an empty pool for a pair of assets. The pair is fixed for the pool lifetime.
    //
    // Arguments:
    //   - e: The Soroban environment.
    //   - token_a: The address of the first asset.
    //   - token_b: The address of the second asset, must differ from token_a.
    pub fn __constructor(e: Env, token_a: Address, token_b: Address) {
        if token_a == token_b {
            panic_with_error!(&e, LiquidityPoolError::IdenticalAssets);
        }
        set_pool(&e, &Pool::new(token_a, token_b));
    }
}

#[contractimpl]
impl LiquidityPoolTrait for LiquidityPool {
    // Returns the pool's tokens.
    //
    // # Returns
    //
    // A vector of token addresses.
    fn get_tokens(e: Env) -> Vec<Address> {
        let pool = get_pool(&e);
        Vec::from_array(&e, [pool.token_a(), pool.token_b()])
    }

    // Returns the pool's reserves.
    //
    // # Returns
    //
    // A vector of u128 representing the reserves of each token.
    fn get_reserves(e: Env) -> Vec<u128> {
        let (reserve_a, reserve_b) = get_pool(&e).reserves();
        Vec::from_array(&e, [reserve_a, reserve_b])
    }

    // Returns the total shares of the pool.
    //
    // # Returns
    //
    // The total shares of the pool as a u128.
    fn get_total_shares(e: Env) -> u128 {
        get_pool(&e).total_shares()
    }

    // Returns the shares held by a user, zero for unknown users.
    fn get_user_shares(e: Env, user: Address) -> u128 {
        ShareStorage::new(&e).share_balance(&user)
    }

    // Returns the marginal price of in_idx token in units of out_idx token.
    //
    // # Arguments
    //
    // * `in_idx` - The index of the token being priced.
    // * `out_idx` - The index of the token the price is quoted in.
    //
    // # Returns
    //
    // reserve_out * 1e18 / reserve_in
    fn get_spot_price(e: Env, in_idx: u32, out_idx: u32) -> u128 {
        let direction = unwrap_or_panic(&e, SwapDirection::from_indices(in_idx, out_idx));
        unwrap_or_panic(&e, get_pool(&e).spot_price(&e, direction))
    }

    // Estimates the result of a swap operation.
    //
    // # Arguments
    //
    // * `in_idx` - The index of the input token to be swapped.
    // * `out_idx` - The index of the output token to be received.
    // * `in_amount` - The amount of the input token to be swapped.
    //
    // # Returns
    //
    // The estimated amount of the output token that would be received.
    fn estimate_swap(e: Env, in_idx: u32, out_idx: u32, in_amount: u128) -> u128 {
        let direction = unwrap_or_panic(&e, SwapDirection::from_indices(in_idx, out_idx));
        unwrap_or_panic(&e, get_pool(&e).estimate_swap(&e, direction, in_amount))
    }

    // Deposits tokens into the pool.
    //
    // # Arguments
    //
    // * `user` - The address of the user depositing the tokens.
    // * `amount_a` - The amount of token_a to deposit.
    // * `amount_b` - The amount of token_b to deposit.
    //
    // # Returns
    //
    // The amount of pool shares minted.
    fn provide(e: Env, user: Address, amount_a: u128, amount_b: u128) -> u128 {
        // Depositor needs to authorize the deposit
        user.require_auth();

        let (pool, shares) = non_reentrant(&e, || {
            let transfer_a = to_token_amount(amount_a)?;
            let transfer_b = to_token_amount(amount_b)?;

            let mut pool = get_pool(&e);
            let shares =
                pool.provide(&e, &mut ShareStorage::new(&e), &user, amount_a, amount_b)?;
            set_pool(&e, &pool);

            pull_from(&e, &pool.token_a(), &user, transfer_a);
            pull_from(&e, &pool.token_b(), &user, transfer_b);
            Ok((pool, shares))
        });

        let (reserve_a, reserve_b) = pool.reserves();
        log!(&e, "provide: shares {}, reserves {} {}", shares, reserve_a, reserve_b);
        PoolEvents::new(&e).liquidity_added(user, amount_a, amount_b, shares);
        shares
    }

    // Withdraws tokens from the pool.
    //
    // # Arguments
    //
    // * `user` - The address of the user withdrawing the tokens.
    // * `share_amount` - The amount of pool shares to burn.
    //
    // # Returns
    //
    // A vector of actual amounts of each token withdrawn.
    fn withdraw(e: Env, user: Address, share_amount: u128) -> Vec<u128> {
        user.require_auth();

        let (pool, amount_a, amount_b) = non_reentrant(&e, || {
            let mut pool = get_pool(&e);
            let (amount_a, amount_b) =
                pool.withdraw(&e, &mut ShareStorage::new(&e), &user, share_amount)?;
            // both amounts are bounded by reserves that were deposited as i128
            let transfer_a = to_token_amount(amount_a)?;
            let transfer_b = to_token_amount(amount_b)?;
            set_pool(&e, &pool);

            push_to(&e, &pool.token_a(), &user, transfer_a);
            push_to(&e, &pool.token_b(), &user, transfer_b);
            Ok((pool, amount_a, amount_b))
        });

        let (reserve_a, reserve_b) = pool.reserves();
        log!(&e, "withdraw: shares {}, reserves {} {}", share_amount, reserve_a, reserve_b);
        PoolEvents::new(&e).liquidity_removed(user, amount_a, amount_b, share_amount);
        Vec::from_array(&e, [amount_a, amount_b])
    }

    // Swaps tokens in the pool.
    //
    // # Arguments
    //
    // * `user` - The address of the user swapping the tokens.
    // * `in_idx` - The index of the input token to be swapped.
    // * `out_idx` - The index of the output token to be received.
    // * `in_amount` - The amount of the input token to be swapped.
    //
    // # Returns
    //
    // The amount of the output token received.
    fn swap(e: Env, user: Address, in_idx: u32, out_idx: u32, in_amount: u128) -> u128 {
        user.require_auth();

        let (pool, direction, out) = non_reentrant(&e, || {
            let direction = SwapDirection::from_indices(in_idx, out_idx)?;
            let transfer_in = to_token_amount(in_amount)?;

            let mut pool = get_pool(&e);
            let out = pool.swap(&e, direction, in_amount)?;
            let transfer_out = to_token_amount(out)?;
            set_pool(&e, &pool);

            let (asset_in, asset_out) = pool.assets(direction);
            pull_from(&e, &asset_in, &user, transfer_in);
            push_to(&e, &asset_out, &user, transfer_out);
            Ok((pool, direction, out))
        });

        let (reserve_a, reserve_b) = pool.reserves();
        log!(&e, "swap: in {}, out {}, reserves {} {}", in_amount, out, reserve_a, reserve_b);
        let (asset_in, asset_out) = pool.assets(direction);
        PoolEvents::new(&e).swap(user, asset_in, asset_out, in_amount, out);
        out
    }
}
