//required in order for near_bindgen macro to work outside of lib.rs
use crate::*;
use crate::interface::{PendingOperation, PoolStats, PoolView, StakeAccount};
use near_sdk::json_types::{ValidAccountId, U128};

#[near_bindgen]
impl PoolView for StakingPoolContract {
    fn token_id(&self) -> AccountId {
        self.pool.token_id().to_string()
    }

    fn stake_of(&self, account_id: ValidAccountId) -> U128 {
        self.pool.stake_of(account_id.as_ref()).value().into()
    }

    fn total_staked(&self) -> U128 {
        self.pool.total_staked().value().into()
    }

    fn stake_account(&self, account_id: ValidAccountId) -> Option<StakeAccount> {
        self.pool
            .stake_position(account_id.as_ref())
            .map(|position| StakeAccount::new(account_id.as_ref(), position))
    }

    /// the pool's token balance is not known to the contract - it is held by the token contract
    fn pool_stats(&self) -> PoolStats {
        PoolStats::new(&self.pool, None)
    }

    fn pending_operation(&self, account_id: ValidAccountId) -> Option<PendingOperation> {
        self.account_lock(account_id.as_ref()).map(Into::into)
    }
}
