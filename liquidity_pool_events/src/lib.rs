#![no_std]

use soroban_sdk::{Address, Env, Symbol};

#[derive(Clone)]
pub struct Events(Env);

impl Events {
    #[inline(always)]
    pub fn env(&self) -> &Env {
        &self.0
    }

    #[inline(always)]
    pub fn new(env: &Env) -> Events {
        Events(env.clone())
    }
}

// Notifications published by the pool once an operation has been committed.
// Exactly one event per successful operation; nothing is published on failure.
// Events structured to ease integration with indexers.
pub trait LiquidityPoolEvents {
    fn liquidity_added(&self, provider: Address, amount_a: u128, amount_b: u128, shares: u128);

    fn liquidity_removed(&self, provider: Address, amount_a: u128, amount_b: u128, shares: u128);

    fn swap(
        &self,
        trader: Address,
        asset_in: Address,
        asset_out: Address,
        amount_in: u128,
        amount_out: u128,
    );
}

impl LiquidityPoolEvents for Events {
    fn liquidity_added(&self, provider: Address, amount_a: u128, amount_b: u128, shares: u128) {
        // topics
        // [
        //   "liquidity_added": Symbol, // event identifier
        //   provider: Address,         // account that supplied the liquidity
        // ]
        //
        // body
        // [
        //   amount_a: u128,      // amount of asset A added to the reserves
        //   amount_b: u128,      // amount of asset B added to the reserves
        //   shares_minted: u128  // pool shares credited to the provider
        // ]
        let e = self.env();
        e.events().publish(
            (Symbol::new(e, "liquidity_added"), provider),
            (amount_a, amount_b, shares),
        );
    }

    fn liquidity_removed(&self, provider: Address, amount_a: u128, amount_b: u128, shares: u128) {
        // topics
        // [
        //   "liquidity_removed": Symbol, // event identifier
        //   provider: Address,           // account that redeemed the shares
        // ]
        //
        // body
        // [
        //   amount_a: u128,      // amount of asset A returned to the provider
        //   amount_b: u128,      // amount of asset B returned to the provider
        //   shares_burned: u128  // pool shares burned
        // ]
        let e = self.env();
        e.events().publish(
            (Symbol::new(e, "liquidity_removed"), provider),
            (amount_a, amount_b, shares),
        );
    }

    fn swap(
        &self,
        trader: Address,
        asset_in: Address,
        asset_out: Address,
        amount_in: u128,
        amount_out: u128,
    ) {
        // topics
        // [
        //   "swap": Symbol,      // event identifier
        //   asset_in: Address,   // asset sent to the pool
        //   asset_out: Address,  // asset received from the pool
        //   trader: Address      // account that initiated the swap
        // ]
        //
        // body
        // [
        //   amount_in: u128,  // amount of tokens sent to the pool, fee included
        //   amount_out: u128  // amount of tokens received from the pool
        // ]
        let e = self.env();
        e.events().publish(
            (Symbol::new(e, "swap"), asset_in, asset_out, trader),
            (amount_in, amount_out),
        );
    }
}
