use crate::{
    domain::{TimestampedBalance, TokenAmount},
    errors::LedgerError,
    hash::Hash,
};
use near_sdk::{
    borsh::{self, BorshDeserialize, BorshSerialize},
    collections::LookupMap,
};

/// Account balances plus their running total.
///
/// Invariants:
/// - the sum of all balances equals [total](BalanceBook::total)
/// - only non-zero balances are stored - a balance that is debited to zero is pruned
#[derive(BorshSerialize, BorshDeserialize)]
pub struct BalanceBook {
    /// the account ID hash is used as the key to ensure the TRIE is balanced
    balances: LookupMap<Hash, TimestampedBalance>,
    total: TokenAmount,
    /// number of accounts with a non-zero balance
    count: u64,
}

impl BalanceBook {
    pub fn new(prefix: Vec<u8>) -> Self {
        Self {
            balances: LookupMap::new(prefix),
            total: TokenAmount::ZERO,
            count: 0,
        }
    }

    /// the null account never holds a balance
    pub fn get(&self, account_id: &str) -> Option<TimestampedBalance> {
        if account_id.is_empty() {
            return None;
        }
        self.balances.get(&Hash::from(account_id))
    }

    /// absent accounts read as zero
    pub fn balance(&self, account_id: &str) -> TokenAmount {
        self.get(account_id)
            .map_or(TokenAmount::ZERO, |balance| balance.amount())
    }

    pub fn total(&self) -> TokenAmount {
        self.total
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    /// Returns the new balance.
    ///
    /// Fails with [LedgerError::BalanceOverflow] if the total would overflow, in which case nothing
    /// is changed. Because every balance is bounded by the total, the account balance itself can
    /// never overflow.
    pub fn credit(
        &mut self,
        account_id: &str,
        amount: TokenAmount,
    ) -> Result<TokenAmount, LedgerError> {
        if amount.is_zero() {
            return Ok(self.balance(account_id));
        }
        let total = self
            .total
            .checked_add(amount)
            .ok_or(LedgerError::BalanceOverflow)?;

        let hash = Hash::from(account_id);
        let (mut balance, is_new) = match self.balances.get(&hash) {
            Some(balance) => (balance, false),
            None => (TimestampedBalance::new(TokenAmount::ZERO), true),
        };
        balance.credit(amount)?;

        self.balances.insert(&hash, &balance);
        self.total = total;
        if is_new {
            self.count += 1;
        }
        Ok(balance.amount())
    }

    /// Returns the new balance.
    ///
    /// Fails with [LedgerError::InsufficientBalance] if the account balance is less than the
    /// amount, in which case nothing is changed.
    pub fn debit(
        &mut self,
        account_id: &str,
        amount: TokenAmount,
    ) -> Result<TokenAmount, LedgerError> {
        if amount.is_zero() {
            return Ok(self.balance(account_id));
        }
        let hash = Hash::from(account_id);
        let mut balance = self
            .balances
            .get(&hash)
            .ok_or(LedgerError::InsufficientBalance)?;
        balance.debit(amount)?;
        let total = self
            .total
            .checked_sub(amount)
            .ok_or(LedgerError::InsufficientBalance)?;

        if balance.amount().is_zero() {
            self.balances.remove(&hash);
            self.count -= 1;
        } else {
            self.balances.insert(&hash, &balance);
        }
        self.total = total;
        Ok(balance.amount())
    }
}
