#![cfg(test)]
extern crate std;
use crate::{LiquidityPool, LiquidityPoolClient};
use soroban_sdk::testutils::Address as _;
use soroban_sdk::token::{
    StellarAssetClient as SorobanTokenAdminClient, TokenClient as SorobanTokenClient,
};
use soroban_sdk::{Address, Env};
use std::vec;

pub(crate) struct TestConfig {
    pub(crate) users_count: u32,
    pub(crate) mint_to_user: i128,
}

impl Default for TestConfig {
    fn default() -> Self {
        TestConfig {
            users_count: 2,
            mint_to_user: 1000,
        }
    }
}

pub(crate) struct Setup<'a> {
    pub(crate) env: Env,
    pub(crate) users: vec::Vec<Address>,
    pub(crate) token_a: SorobanTokenClient<'a>,
    pub(crate) token_b: SorobanTokenClient<'a>,
    pub(crate) liq_pool: LiquidityPoolClient<'a>,
}

impl Default for Setup<'_> {
    // Create setup from default config and mint tokens for all users
    fn default() -> Self {
        let default_config = TestConfig::default();
        Self::new_with_config(&default_config)
    }
}

impl Setup<'_> {
    pub(crate) fn new_with_config(config: &TestConfig) -> Self {
        let e: Env = Env::default();
        e.mock_all_auths();
        e.cost_estimate().budget().reset_unlimited();

        let admin = Address::generate(&e);
        let users = Self::generate_random_users(&e, config.users_count);

        let token_a = create_token_contract(&e, &admin);
        let token_b = create_token_contract(&e, &admin);
        let liq_pool = create_liqpool_contract(&e, &token_a.address, &token_b.address);

        let setup = Self {
            env: e,
            users,
            token_a,
            token_b,
            liq_pool,
        };
        setup.mint_tokens_for_users(config.mint_to_user);
        setup
    }

    pub(crate) fn generate_random_users(e: &Env, users_count: u32) -> vec::Vec<Address> {
        let mut users = vec![];
        for _c in 0..users_count {
            users.push(Address::generate(e));
        }
        users
    }

    pub(crate) fn mint_tokens_for_users(&self, amount: i128) {
        for user in self.users.iter() {
            get_token_admin_client(&self.env, &self.token_a.address).mint(user, &amount);
            assert_eq!(self.token_a.balance(user), amount);

            get_token_admin_client(&self.env, &self.token_b.address).mint(user, &amount);
            assert_eq!(self.token_b.balance(user), amount);
        }
    }
}

pub(crate) fn create_token_contract<'a>(e: &Env, admin: &Address) -> SorobanTokenClient<'a> {
    SorobanTokenClient::new(
        e,
        &e.register_stellar_asset_contract_v2(admin.clone())
            .address(),
    )
}

pub(crate) fn get_token_admin_client<'a>(
    e: &Env,
    address: &Address,
) -> SorobanTokenAdminClient<'a> {
    SorobanTokenAdminClient::new(e, address)
}

pub(crate) fn create_liqpool_contract<'a>(
    e: &Env,
    token_a: &Address,
    token_b: &Address,
) -> LiquidityPoolClient<'a> {
    LiquidityPoolClient::new(
        e,
        &e.register(LiquidityPool, (token_a.clone(), token_b.clone())),
    )
}
