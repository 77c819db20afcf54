use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum LiquidityPoolError {
    ReentrantCall = 201,
    IdenticalAssets = 202,
    // pool specific validation errors
}
