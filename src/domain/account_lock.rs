use crate::domain::TokenAmount;
use near_sdk::borsh::{self, BorshDeserialize, BorshSerialize};

/// Marks an account as having a cross-contract token call in flight.
///
/// While the lock is held, the account cannot start another deposit or withdrawal. The lock is
/// released by the callback that resolves the token call.
#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, Copy, Eq, PartialEq)]
pub enum AccountLock {
    Depositing(TokenAmount),
    Withdrawing(TokenAmount),
}
