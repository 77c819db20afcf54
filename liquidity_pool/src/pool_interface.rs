use soroban_sdk::{Address, Env, Vec};

pub trait LiquidityPoolTrait {
    // Returns the pool assets, [token_a, token_b]
    fn get_tokens(e: Env) -> Vec<Address>;

    // Returns the pool reserves, [reserve_a, reserve_b]
    fn get_reserves(e: Env) -> Vec<u128>;

    // Returns the total amount of shares
    fn get_total_shares(e: Env) -> u128;

    // Returns the share balance of a single holder
    fn get_user_shares(e: Env, user: Address) -> u128;

    // Price of in_idx token in units of out_idx token, scaled by 1e18
    fn get_spot_price(e: Env, in_idx: u32, out_idx: u32) -> u128;

    // Amount of out_idx token a swap of in_amount would pay at the current reserves
    fn estimate_swap(e: Env, in_idx: u32, out_idx: u32, in_amount: u128) -> u128;

    // Deposits amount_a of token_a and amount_b of token_b.
    // Returns the amount of shares minted for the user
    fn provide(e: Env, user: Address, amount_a: u128, amount_b: u128) -> u128;

    // Burns share_amount of user shares.
    // Returns the amounts of each token paid out
    fn withdraw(e: Env, user: Address, share_amount: u128) -> Vec<u128>;

    // Perform an exchange between two coins.
    // in_idx: index of token to send
    // out_idx: index of token to receive
    // in_amount: Amount of token in being exchanged
    // Returns the actual amount of coin out received
    fn swap(e: Env, user: Address, in_idx: u32, out_idx: u32, in_amount: u128) -> u128;
}
