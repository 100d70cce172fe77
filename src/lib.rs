pub mod config;
pub mod contract;
pub mod domain;
pub mod errors;
pub mod events;
pub mod hash;
pub mod interface;
pub mod ledger;
pub mod near;
pub mod pool;
pub mod query;
pub mod token;

#[cfg(test)]
pub mod test_utils;

use crate::{config::GasConfig, domain::AccountLock, hash::Hash, pool::StakingPool};
use near_sdk::{
    borsh::{self, BorshDeserialize, BorshSerialize},
    collections::LookupMap,
    near_bindgen, setup_alloc, AccountId, PanicOnDefault,
};

setup_alloc!();

#[near_bindgen]
#[derive(BorshDeserialize, BorshSerialize, PanicOnDefault)]
pub struct StakingPoolContract {
    /// the owner is allowed to tune the gas config
    owner_id: AccountId,
    gas_config: GasConfig,

    pool: StakingPool,
    /// accounts that have a token call in flight
    locks: LookupMap<Hash, AccountLock>,
}
