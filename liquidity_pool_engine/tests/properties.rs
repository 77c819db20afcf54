use liquidity_pool_engine::{Pool, ShareLedger, SwapDirection};
use proptest::prelude::*;
use soroban_sdk::{testutils::Address as _, Address, Env, Map};

const MAX_AMOUNT: u128 = 1_000_000_000_0000000;

#[derive(Clone, Debug)]
enum Action {
    Provide { provider: usize, amount_a: u128, amount_b: u128 },
    Withdraw { provider: usize, percent: u128 },
    Swap { a_to_b: bool, amount_in: u128 },
}

fn action() -> impl Strategy<Value = Action> {
    prop_oneof![
        (0..3usize, 1..MAX_AMOUNT, 1..MAX_AMOUNT).prop_map(|(provider, amount_a, amount_b)| {
            Action::Provide {
                provider,
                amount_a,
                amount_b,
            }
        }),
        (0..3usize, 1..=100u128)
            .prop_map(|(provider, percent)| Action::Withdraw { provider, percent }),
        (any::<bool>(), 1..MAX_AMOUNT)
            .prop_map(|(a_to_b, amount_in)| Action::Swap { a_to_b, amount_in }),
    ]
}

fn share_sum(shares: &Map<Address, u128>) -> u128 {
    let mut sum = 0;
    for (_, balance) in shares.iter() {
        sum += balance;
    }
    sum
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn swaps_never_shrink_product(
        reserve_a in 1_000..MAX_AMOUNT,
        reserve_b in 1_000..MAX_AMOUNT,
        swaps in prop::collection::vec((any::<bool>(), 1..MAX_AMOUNT), 1..10),
    ) {
        let e = Env::default();
        e.cost_estimate().budget().reset_unlimited();
        let mut pool = Pool::new(Address::generate(&e), Address::generate(&e));
        let mut shares: Map<Address, u128> = Map::new(&e);
        pool.provide(&e, &mut shares, &Address::generate(&e), reserve_a, reserve_b).unwrap();

        for (a_to_b, amount_in) in swaps {
            let direction = if a_to_b { SwapDirection::AToB } else { SwapDirection::BToA };
            let (a, b) = pool.reserves();
            let snapshot = pool.clone();
            match pool.swap(&e, direction, amount_in) {
                Ok(amount_out) => {
                    let (new_a, new_b) = pool.reserves();
                    prop_assert!(amount_out > 0);
                    prop_assert!(new_a > 0 && new_b > 0);
                    // reserves stay below 2^64, products fit into u128
                    prop_assert!(new_a * new_b >= a * b);
                }
                Err(_) => prop_assert_eq!(&pool, &snapshot),
            }
        }
    }

    #[test]
    fn shares_always_add_up(actions in prop::collection::vec(action(), 1..20)) {
        let e = Env::default();
        e.cost_estimate().budget().reset_unlimited();
        let mut pool = Pool::new(Address::generate(&e), Address::generate(&e));
        let mut shares: Map<Address, u128> = Map::new(&e);
        let providers = [
            Address::generate(&e),
            Address::generate(&e),
            Address::generate(&e),
        ];

        for action in actions {
            let snapshot = (pool.clone(), shares.clone());
            let result = match action {
                Action::Provide { provider, amount_a, amount_b } => pool
                    .provide(&e, &mut shares, &providers[provider], amount_a, amount_b)
                    .map(|_| ()),
                Action::Withdraw { provider, percent } => {
                    let burn = shares.share_balance(&providers[provider]) * percent / 100;
                    pool.withdraw(&e, &mut shares, &providers[provider], burn).map(|_| ())
                }
                Action::Swap { a_to_b, amount_in } => {
                    let direction = if a_to_b { SwapDirection::AToB } else { SwapDirection::BToA };
                    pool.swap(&e, direction, amount_in).map(|_| ())
                }
            };
            if result.is_err() {
                prop_assert_eq!(&pool, &snapshot.0);
                prop_assert_eq!(&shares, &snapshot.1);
            }

            prop_assert_eq!(share_sum(&shares), pool.total_shares());
            let (reserve_a, reserve_b) = pool.reserves();
            if pool.total_shares() > 0 {
                prop_assert!(reserve_a > 0 && reserve_b > 0);
            }
        }
    }

    #[test]
    fn provide_then_withdraw_never_profits(
        reserve_a in 1_000..MAX_AMOUNT,
        reserve_b in 1_000..MAX_AMOUNT,
        amount_a in 1..MAX_AMOUNT,
        amount_b in 1..MAX_AMOUNT,
    ) {
        let e = Env::default();
        e.cost_estimate().budget().reset_unlimited();
        let mut pool = Pool::new(Address::generate(&e), Address::generate(&e));
        let mut shares: Map<Address, u128> = Map::new(&e);
        pool.provide(&e, &mut shares, &Address::generate(&e), reserve_a, reserve_b).unwrap();

        let provider = Address::generate(&e);
        if let Ok(minted) = pool.provide(&e, &mut shares, &provider, amount_a, amount_b) {
            if let Ok((out_a, out_b)) = pool.withdraw(&e, &mut shares, &provider, minted) {
                prop_assert!(out_a <= amount_a);
                prop_assert!(out_b <= amount_b);
            }
        }
    }
}
