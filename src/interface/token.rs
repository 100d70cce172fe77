use near_sdk::{ext_contract, json_types::U128, AccountId};

/// Allowance based fungible token contract interface that the pool calls into.
///
/// `approve` is invoked by token holders directly on the token contract, granting the pool an
/// allowance - the pool only pulls and pushes tokens.
#[ext_contract(ext_token)]
pub trait ExtAllowanceToken {
    fn approve(&mut self, spender_id: AccountId, amount: U128);

    fn allowance(&self, owner_id: AccountId, spender_id: AccountId) -> U128;

    fn balance_of(&self, account_id: AccountId) -> U128;

    /// transfers from the owner to the receiver, where the predecessor must hold sufficient
    /// allowance
    fn transfer_from(&mut self, owner_id: AccountId, receiver_id: AccountId, amount: U128);

    fn transfer(&mut self, receiver_id: AccountId, amount: U128);
}
