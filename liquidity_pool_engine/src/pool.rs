use crate::constants::PRICE_PRECISION;
use crate::liquidity_accountant::{burn_amounts, mint_amount};
use crate::share_ledger::ShareLedger;
use crate::swap_calculator::compute_output;
use liquidity_pool_validation_errors::LiquidityPoolValidationError;
use soroban_sdk::{contracttype, Address, Env, U256};
use utils::u256_math::mul_div_floor;

// Which reserve a swap is paid into and which one it draws from.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum SwapDirection {
    // sell asset A, receive asset B
    AToB,
    // sell asset B, receive asset A
    BToA,
}

impl SwapDirection {
    // Resolves the (in_idx, out_idx) pair used by the contract interface.
    // Index 0 is asset A, index 1 is asset B.
    pub fn from_indices(in_idx: u32, out_idx: u32) -> Result<Self, LiquidityPoolValidationError> {
        if in_idx == out_idx {
            return Err(LiquidityPoolValidationError::CannotSwapSameToken);
        }
        if in_idx > 1 {
            return Err(LiquidityPoolValidationError::InTokenOutOfBounds);
        }
        if out_idx > 1 {
            return Err(LiquidityPoolValidationError::OutTokenOutOfBounds);
        }

        match in_idx {
            0 => Ok(SwapDirection::AToB),
            _ => Ok(SwapDirection::BToA),
        }
    }
}

// Reserve ledger of a two-asset constant product pool.
//
// The record is fixed size: both assets, both reserves and the outstanding share supply.
// Holder balances live in a `ShareLedger` passed into `provide` and `withdraw`. Every
// mutation validates and computes its outcome first and only then writes reserves, supply
// and the caller's balance together, so a rejected call leaves both untouched.
//
// Invariants:
// - reserve_a > 0 && reserve_b > 0 whenever total_shares > 0
// - total_shares equals the sum of all ledger balances
// - reserve_a * reserve_b never decreases across a swap
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Pool {
    token_a: Address,
    token_b: Address,
    reserve_a: u128,
    reserve_b: u128,
    total_shares: u128,
}

impl Pool {
    // Empty pool bound to the two assets for its whole lifetime.
    pub fn new(token_a: Address, token_b: Address) -> Self {
        Pool {
            token_a,
            token_b,
            reserve_a: 0,
            reserve_b: 0,
            total_shares: 0,
        }
    }

    pub fn token_a(&self) -> Address {
        self.token_a.clone()
    }

    pub fn token_b(&self) -> Address {
        self.token_b.clone()
    }

    pub fn reserves(&self) -> (u128, u128) {
        (self.reserve_a, self.reserve_b)
    }

    pub fn total_shares(&self) -> u128 {
        self.total_shares
    }

    // (asset_in, asset_out) for a swap in the given direction.
    pub fn assets(&self, direction: SwapDirection) -> (Address, Address) {
        match direction {
            SwapDirection::AToB => (self.token_a.clone(), self.token_b.clone()),
            SwapDirection::BToA => (self.token_b.clone(), self.token_a.clone()),
        }
    }

    fn directed_reserves(&self, direction: SwapDirection) -> (u128, u128) {
        match direction {
            SwapDirection::AToB => (self.reserve_a, self.reserve_b),
            SwapDirection::BToA => (self.reserve_b, self.reserve_a),
        }
    }

    // Adds amount_a and amount_b to the reserves and credits provider with freshly minted
    // shares. The deposit ratio is not enforced: an off-ratio deposit is credited only for
    // its limiting side and the surplus is absorbed by the pool.
    //
    // Errors:
    //   - InvalidAmount if either amount is zero
    //   - InsufficientLiquidityMinted if the deposit is worth less than one share
    //   - ArithmeticOverflow if reserves or supply would exceed u128
    pub fn provide<L: ShareLedger>(
        &mut self,
        e: &Env,
        ledger: &mut L,
        provider: &Address,
        amount_a: u128,
        amount_b: u128,
    ) -> Result<u128, LiquidityPoolValidationError> {
        if amount_a == 0 || amount_b == 0 {
            return Err(LiquidityPoolValidationError::InvalidAmount);
        }

        let minted = mint_amount(
            e,
            amount_a,
            amount_b,
            self.reserve_a,
            self.reserve_b,
            self.total_shares,
        )?;
        if minted == 0 {
            return Err(LiquidityPoolValidationError::InsufficientLiquidityMinted);
        }

        let reserve_a = checked_add(self.reserve_a, amount_a)?;
        let reserve_b = checked_add(self.reserve_b, amount_b)?;
        let total_shares = checked_add(self.total_shares, minted)?;
        let balance = checked_add(ledger.share_balance(provider), minted)?;

        self.reserve_a = reserve_a;
        self.reserve_b = reserve_b;
        self.total_shares = total_shares;
        ledger.set_share_balance(provider, balance);

        Ok(minted)
    }

    // Burns shares owned by provider and removes the proportional part of both reserves.
    // Returns the amounts released, (amount_a, amount_b).
    //
    // Errors:
    //   - InvalidAmount if shares is zero
    //   - InsufficientShares if provider holds fewer shares
    //   - InsufficientReturnAmount if either amount rounds down to zero
    pub fn withdraw<L: ShareLedger>(
        &mut self,
        e: &Env,
        ledger: &mut L,
        provider: &Address,
        shares: u128,
    ) -> Result<(u128, u128), LiquidityPoolValidationError> {
        if shares == 0 {
            return Err(LiquidityPoolValidationError::InvalidAmount);
        }

        let balance = ledger.share_balance(provider);
        if balance < shares {
            return Err(LiquidityPoolValidationError::InsufficientShares);
        }

        let (amount_a, amount_b) = burn_amounts(
            e,
            shares,
            self.reserve_a,
            self.reserve_b,
            self.total_shares,
        )?;
        if amount_a == 0 || amount_b == 0 {
            return Err(LiquidityPoolValidationError::InsufficientReturnAmount);
        }

        // burn_amounts checked shares <= total and never returns more than the reserves
        let reserve_a = self.reserve_a - amount_a;
        let reserve_b = self.reserve_b - amount_b;
        let total_shares = self.total_shares - shares;
        if total_shares > 0 && (reserve_a == 0 || reserve_b == 0) {
            return Err(LiquidityPoolValidationError::InvariantDoesNotHold);
        }

        self.reserve_a = reserve_a;
        self.reserve_b = reserve_b;
        self.total_shares = total_shares;
        ledger.set_share_balance(provider, balance - shares);

        Ok((amount_a, amount_b))
    }

    // Sells amount_in of the input asset into the pool.
    // Returns the amount of the output asset paid out.
    //
    // Errors:
    //   - InvalidAmount if amount_in is zero
    //   - EmptyReserves if the pool holds nothing on either side
    //   - InsufficientOutput if the output rounds down to zero
    //   - InsufficientLiquidity if the output would drain the opposite reserve
    pub fn swap(
        &mut self,
        e: &Env,
        direction: SwapDirection,
        amount_in: u128,
    ) -> Result<u128, LiquidityPoolValidationError> {
        if amount_in == 0 {
            return Err(LiquidityPoolValidationError::InvalidAmount);
        }

        let (reserve_in, reserve_out) = self.directed_reserves(direction);
        let amount_out = compute_output(e, amount_in, reserve_in, reserve_out)?;
        if amount_out == 0 {
            return Err(LiquidityPoolValidationError::InsufficientOutput);
        }
        if amount_out >= reserve_out {
            return Err(LiquidityPoolValidationError::InsufficientLiquidity);
        }

        let new_reserve_in = checked_add(reserve_in, amount_in)?;
        let new_reserve_out = reserve_out - amount_out;

        let old_invariant = U256::from_u128(e, reserve_in).mul(&U256::from_u128(e, reserve_out));
        let new_invariant =
            U256::from_u128(e, new_reserve_in).mul(&U256::from_u128(e, new_reserve_out));
        if new_invariant < old_invariant {
            return Err(LiquidityPoolValidationError::InvariantDoesNotHold);
        }

        match direction {
            SwapDirection::AToB => {
                self.reserve_a = new_reserve_in;
                self.reserve_b = new_reserve_out;
            }
            SwapDirection::BToA => {
                self.reserve_b = new_reserve_in;
                self.reserve_a = new_reserve_out;
            }
        }

        Ok(amount_out)
    }

    // Output a swap of amount_in would pay at the current reserves. Read-only.
    pub fn estimate_swap(
        &self,
        e: &Env,
        direction: SwapDirection,
        amount_in: u128,
    ) -> Result<u128, LiquidityPoolValidationError> {
        let (reserve_in, reserve_out) = self.directed_reserves(direction);
        compute_output(e, amount_in, reserve_in, reserve_out)
    }

    // Marginal price of the input asset in units of the output asset:
    // reserve_out * PRICE_PRECISION / reserve_in
    pub fn spot_price(
        &self,
        e: &Env,
        direction: SwapDirection,
    ) -> Result<u128, LiquidityPoolValidationError> {
        let (reserve_in, reserve_out) = self.directed_reserves(direction);
        if reserve_in == 0 || reserve_out == 0 {
            return Err(LiquidityPoolValidationError::EmptyReserves);
        }
        mul_div_floor(e, reserve_out, PRICE_PRECISION, reserve_in)
            .ok_or(LiquidityPoolValidationError::ArithmeticOverflow)
    }
}

fn checked_add(a: u128, b: u128) -> Result<u128, LiquidityPoolValidationError> {
    a.checked_add(b)
        .ok_or(LiquidityPoolValidationError::ArithmeticOverflow)
}
