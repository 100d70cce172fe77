use crate::domain::TokenAmount;
use crate::errors::LedgerError;
use near_sdk::{
    borsh::{self, BorshDeserialize, BorshSerialize},
    env, BlockHeight,
};

/// Balance that records the block at which it was last changed
#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, Copy, Default)]
pub struct TimestampedBalance {
    amount: TokenAmount,
    block_height: BlockHeight,
    block_timestamp: u64,
}

impl PartialEq for TimestampedBalance {
    fn eq(&self, other: &Self) -> bool {
        self.amount == other.amount
    }
}

impl PartialEq<u128> for TimestampedBalance {
    fn eq(&self, other: &u128) -> bool {
        self.amount.0 == *other
    }
}

impl TimestampedBalance {
    /// [block_height] and [block_timestamp] are initialized from the NEAR runtime environment
    ///
    /// ## Panics
    /// if NEAR runtime context is not available
    pub fn new(amount: TokenAmount) -> Self {
        Self {
            amount,
            block_height: env::block_index(),
            block_timestamp: env::block_timestamp(),
        }
    }

    pub fn amount(&self) -> TokenAmount {
        self.amount
    }

    pub fn block_height(&self) -> BlockHeight {
        self.block_height
    }

    pub fn block_timestamp(&self) -> u64 {
        self.block_timestamp
    }

    pub fn credit(&mut self, amount: TokenAmount) -> Result<(), LedgerError> {
        if amount.is_zero() {
            return Ok(());
        }
        self.amount = self
            .amount
            .checked_add(amount)
            .ok_or(LedgerError::BalanceOverflow)?;
        self.update_timestamp();
        Ok(())
    }

    pub fn debit(&mut self, amount: TokenAmount) -> Result<(), LedgerError> {
        if amount.is_zero() {
            return Ok(());
        }
        self.amount = self
            .amount
            .checked_sub(amount)
            .ok_or(LedgerError::InsufficientBalance)?;
        self.update_timestamp();
        Ok(())
    }

    fn update_timestamp(&mut self) {
        self.block_timestamp = env::block_timestamp();
        self.block_height = env::block_index();
    }
}
