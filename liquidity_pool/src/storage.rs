use liquidity_pool_engine::{Pool, ShareLedger};
use soroban_sdk::{contracttype, Address, Env};
use utils::bump::bump_persistent;
use utils::{
    generate_instance_storage_getter_and_setter,
    generate_instance_storage_getter_and_setter_with_default,
};

#[derive(Clone)]
#[contracttype]
enum DataKey {
    Pool,
    Locked,
    Shares(Address),
}

generate_instance_storage_getter_and_setter!(pool, DataKey::Pool, Pool);
generate_instance_storage_getter_and_setter_with_default!(
    is_locked,
    DataKey::Locked,
    bool,
    false
);

// Holder balances, one persistent entry per holder.
// An operation reads and writes only the entry of the holder it acts for.
pub struct ShareStorage(Env);

impl ShareStorage {
    pub fn new(e: &Env) -> Self {
        ShareStorage(e.clone())
    }
}

impl ShareLedger for ShareStorage {
    fn share_balance(&self, holder: &Address) -> u128 {
        let key = DataKey::Shares(holder.clone());
        match self.0.storage().persistent().get::<DataKey, u128>(&key) {
            Some(balance) => {
                bump_persistent(&self.0, &key);
                balance
            }
            None => 0,
        }
    }

    fn set_share_balance(&mut self, holder: &Address, balance: u128) {
        let key = DataKey::Shares(holder.clone());
        if balance == 0 {
            self.0.storage().persistent().remove(&key);
        } else {
            self.0.storage().persistent().set(&key, &balance);
            bump_persistent(&self.0, &key);
        }
    }
}
