use crate::interface::{PendingOperation, PoolStats, StakeAccount};
use near_sdk::{
    json_types::{ValidAccountId, U128},
    AccountId,
};

pub trait PoolView {
    /// the token that the pool stakes
    fn token_id(&self) -> AccountId;

    /// returns 0 for unknown accounts
    fn stake_of(&self, account_id: ValidAccountId) -> U128;

    fn total_staked(&self) -> U128;

    fn stake_account(&self, account_id: ValidAccountId) -> Option<StakeAccount>;

    fn pool_stats(&self) -> PoolStats;

    fn pending_operation(&self, account_id: ValidAccountId) -> Option<PendingOperation>;
}
