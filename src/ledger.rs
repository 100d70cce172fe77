//! value ledger: fungible balances plus per-spender allowances

mod allowances;
mod balances;

pub use allowances::AllowanceBook;
pub use balances::BalanceBook;

use crate::{
    domain::{validate_account_id, TokenAmount},
    errors::LedgerError,
    events::{Approval, Minted, Transfer},
    near::log,
};
use near_sdk::borsh::{self, BorshDeserialize, BorshSerialize};

/// Balances and allowances for a fungible token.
///
/// Every operation validates all of its preconditions before it mutates any state, i.e., an
/// operation either applies in full or fails without side effects.
#[derive(BorshSerialize, BorshDeserialize)]
pub struct ValueLedger {
    balances: BalanceBook,
    allowances: AllowanceBook,
}

impl ValueLedger {
    const BALANCES_KEY_SUFFIX: u8 = b'b';
    const ALLOWANCES_KEY_SUFFIX: u8 = b'a';

    /// `prefix` must be unique per ledger - see [storage_keys](crate::near::storage_keys)
    pub fn new(prefix: &[u8]) -> Self {
        let key = |suffix: u8| {
            let mut key = prefix.to_vec();
            key.push(suffix);
            key
        };
        Self {
            balances: BalanceBook::new(key(Self::BALANCES_KEY_SUFFIX)),
            allowances: AllowanceBook::new(key(Self::ALLOWANCES_KEY_SUFFIX)),
        }
    }

    pub fn balance_of(&self, account_id: &str) -> TokenAmount {
        self.balances.balance(account_id)
    }

    pub fn allowance_of(&self, owner_id: &str, spender_id: &str) -> TokenAmount {
        self.allowances.get(owner_id, spender_id)
    }

    pub fn total_supply(&self) -> TokenAmount {
        self.balances.total()
    }

    /// Sets the allowance - any prior allowance for the pair is replaced.
    pub fn approve(
        &mut self,
        owner_id: &str,
        spender_id: &str,
        amount: TokenAmount,
    ) -> Result<(), LedgerError> {
        validate_account_id(owner_id)?;
        validate_account_id(spender_id)?;
        self.allowances.set(owner_id, spender_id, amount);
        log(Approval {
            owner_id,
            spender_id,
            amount: amount.value(),
        });
        Ok(())
    }

    /// Creates new supply - the total supply is bounded by `u128::MAX`, which guarantees that no
    /// balance can overflow when value is moved between accounts.
    pub fn mint(&mut self, account_id: &str, amount: TokenAmount) -> Result<(), LedgerError> {
        validate_account_id(account_id)?;
        self.balances.credit(account_id, amount)?;
        log(Minted {
            account_id,
            amount: amount.value(),
            total_supply: self.total_supply().value(),
        });
        Ok(())
    }

    pub fn transfer(
        &mut self,
        sender_id: &str,
        receiver_id: &str,
        amount: TokenAmount,
    ) -> Result<(), LedgerError> {
        validate_account_id(sender_id)?;
        validate_account_id(receiver_id)?;
        self.move_balance(sender_id, receiver_id, amount)
    }

    /// Moves `amount` from `owner_id` to `spender_id`, spending the owner's allowance for the
    /// spender.
    ///
    /// The allowance decrement, the owner debit, and the spender credit are applied as a unit.
    pub fn transfer_from(
        &mut self,
        owner_id: &str,
        spender_id: &str,
        amount: TokenAmount,
    ) -> Result<(), LedgerError> {
        validate_account_id(owner_id)?;
        validate_account_id(spender_id)?;
        if self.allowance_of(owner_id, spender_id) < amount {
            return Err(LedgerError::InsufficientAllowance);
        }
        if self.balance_of(owner_id) < amount {
            return Err(LedgerError::InsufficientBalance);
        }
        self.move_balance(owner_id, spender_id, amount)?;
        self.allowances.spend(owner_id, spender_id, amount)?;
        Ok(())
    }

    fn move_balance(
        &mut self,
        from: &str,
        to: &str,
        amount: TokenAmount,
    ) -> Result<(), LedgerError> {
        if amount.is_zero() {
            return Ok(());
        }
        self.balances.debit(from, amount)?;
        // cannot fail: the debit lowered the total by `amount`
        self.balances.credit(to, amount)?;
        log(Transfer {
            from,
            to,
            amount: amount.value(),
        });
        Ok(())
    }
}
