use crate::domain::{self, AccountLock, TimestampedBalance};
use crate::pool::StakingPool;
use near_sdk::{
    json_types::{U128, U64},
    serde::{Deserialize, Serialize},
    AccountId,
};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(crate = "near_sdk::serde")]
pub struct StakeAccount {
    pub account_id: AccountId,
    pub stake: U128,
    /// block height at which the stake last changed
    pub block_height: U64,
    /// block timestamp at which the stake last changed
    pub block_timestamp: U64,
}

impl StakeAccount {
    pub fn new(account_id: &str, position: TimestampedBalance) -> Self {
        Self {
            account_id: account_id.to_string(),
            stake: position.amount().value().into(),
            block_height: position.block_height().into(),
            block_timestamp: position.block_timestamp().into(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(crate = "near_sdk::serde")]
pub struct PoolStats {
    pub pool_id: AccountId,
    pub token_id: AccountId,
    pub total_staked: U128,
    /// number of accounts with a non-zero stake
    pub stake_accounts: U64,
    /// token balance held by the pool - only known when the token is hosted in-process
    pub held_balance: Option<U128>,
}

impl PoolStats {
    pub fn new(pool: &StakingPool, held_balance: Option<domain::TokenAmount>) -> Self {
        Self {
            pool_id: pool.pool_id().to_string(),
            token_id: pool.token_id().to_string(),
            total_staked: pool.total_staked().value().into(),
            stake_accounts: pool.stake_accounts().into(),
            held_balance: held_balance.map(|balance| balance.value().into()),
        }
    }
}

/// token call that is in flight for an account
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(crate = "near_sdk::serde")]
pub enum PendingOperation {
    Deposit(U128),
    Withdrawal(U128),
}

impl From<AccountLock> for PendingOperation {
    fn from(lock: AccountLock) -> Self {
        match lock {
            AccountLock::Depositing(amount) => PendingOperation::Deposit(amount.value().into()),
            AccountLock::Withdrawing(amount) => {
                PendingOperation::Withdrawal(amount.value().into())
            }
        }
    }
}
