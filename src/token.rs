//! the fungible token boundary that the staking pool consumes

use crate::{domain::TokenAmount, errors::LedgerError, ledger::ValueLedger};
use near_sdk::{
    borsh::{self, BorshDeserialize, BorshSerialize},
    AccountId,
};

/// Allowance based fungible token interface, as seen by the staking pool.
///
/// The pool is always the caller: it pulls deposits via [transfer_from](ExternalToken::transfer_from)
/// as the spender, and pays out withdrawals via [transfer](ExternalToken::transfer) as the sender.
/// Each call either fully succeeds or fully fails.
pub trait ExternalToken {
    /// the token's account ID
    fn account_id(&self) -> &str;

    fn allowance(&self, owner_id: &str, spender_id: &str) -> TokenAmount;

    fn balance_of(&self, account_id: &str) -> TokenAmount;

    /// ## Errors
    /// - [LedgerError::InsufficientAllowance]
    /// - [LedgerError::InsufficientBalance]
    /// - [LedgerError::InvalidAccount]
    fn transfer_from(
        &mut self,
        owner_id: &str,
        spender_id: &str,
        amount: TokenAmount,
    ) -> Result<(), LedgerError>;

    /// ## Errors
    /// - [LedgerError::InsufficientBalance]
    /// - [LedgerError::InvalidAccount]
    fn transfer(
        &mut self,
        sender_id: &str,
        receiver_id: &str,
        amount: TokenAmount,
    ) -> Result<(), LedgerError>;
}

/// Fungible token backed by a [ValueLedger], hosted in-process.
#[derive(BorshSerialize, BorshDeserialize)]
pub struct LedgerToken {
    account_id: AccountId,
    ledger: ValueLedger,
}

impl LedgerToken {
    /// `key_prefix` must be unique per token - see [storage_keys](crate::near::storage_keys)
    pub fn new(account_id: AccountId, key_prefix: &[u8]) -> Self {
        Self {
            account_id,
            ledger: ValueLedger::new(key_prefix),
        }
    }

    /// token holders authorize spenders, e.g., the staking pool
    pub fn approve(
        &mut self,
        owner_id: &str,
        spender_id: &str,
        amount: TokenAmount,
    ) -> Result<(), LedgerError> {
        self.ledger.approve(owner_id, spender_id, amount)
    }

    pub fn mint(&mut self, account_id: &str, amount: TokenAmount) -> Result<(), LedgerError> {
        self.ledger.mint(account_id, amount)
    }

    pub fn total_supply(&self) -> TokenAmount {
        self.ledger.total_supply()
    }
}

impl ExternalToken for LedgerToken {
    fn account_id(&self) -> &str {
        &self.account_id
    }

    fn allowance(&self, owner_id: &str, spender_id: &str) -> TokenAmount {
        self.ledger.allowance_of(owner_id, spender_id)
    }

    fn balance_of(&self, account_id: &str) -> TokenAmount {
        self.ledger.balance_of(account_id)
    }

    fn transfer_from(
        &mut self,
        owner_id: &str,
        spender_id: &str,
        amount: TokenAmount,
    ) -> Result<(), LedgerError> {
        self.ledger.transfer_from(owner_id, spender_id, amount)
    }

    fn transfer(
        &mut self,
        sender_id: &str,
        receiver_id: &str,
        amount: TokenAmount,
    ) -> Result<(), LedgerError> {
        self.ledger.transfer(sender_id, receiver_id, amount)
    }
}
