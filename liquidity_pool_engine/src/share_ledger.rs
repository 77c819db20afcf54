use soroban_sdk::{Address, Map};

// Per-holder share balances.
//
// Kept apart from the `Pool` record so that an operation only touches the balance of the
// holder it acts for. A zero balance is the same as no entry.
pub trait ShareLedger {
    fn share_balance(&self, holder: &Address) -> u128;

    fn set_share_balance(&mut self, holder: &Address, balance: u128);
}

// In-memory ledger, zero balances are removed.
impl ShareLedger for Map<Address, u128> {
    fn share_balance(&self, holder: &Address) -> u128 {
        self.get(holder.clone()).unwrap_or(0)
    }

    fn set_share_balance(&mut self, holder: &Address, balance: u128) {
        if balance == 0 {
            self.remove(holder.clone());
        } else {
            self.set(holder.clone(), balance);
        }
    }
}
