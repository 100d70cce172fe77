use near_sdk::{ext_contract, json_types::U128, AccountId, Promise};

pub trait StakingService {
    /// Stakes `amount` tokens on behalf of the predecessor account.
    ///
    /// The account must first approve the pool as spender on the token contract. The tokens are
    /// pulled from the account via the token's `transfer_from`, and the stake is credited once the
    /// transfer has succeeded.
    ///
    /// Returns a promise that resolves to true if the deposit was staked.
    ///
    /// A failed cross-contract call carries no error payload. If the token rejects the pull, the
    /// promise resolves to false and a `DepositFailed` event is logged, but the specific cause
    /// (insufficient allowance or insufficient balance) is not known to the pool.
    ///
    /// ## Panics
    /// - if amount is zero
    /// - if the account is invalid or is the pool's own account
    /// - if the account has an operation in flight
    fn deposit(&mut self, amount: U128) -> Promise;

    /// Withdraws `amount` of the predecessor account's stake.
    ///
    /// The stake is debited immediately and the tokens are transferred back to the account. If the
    /// token transfer fails, then the stake debit is rolled back.
    ///
    /// Returns a promise that resolves to true if the tokens were paid out.
    ///
    /// ## Panics
    /// - if amount is zero
    /// - if the account stake is insufficient
    /// - if the account has an operation in flight
    fn withdraw(&mut self, amount: U128) -> Promise;
}

/// callbacks that resolve the token calls made by [StakingService]
///
/// #[private]
#[ext_contract(ext_staking_service_callbacks)]
pub trait ExtStakingServiceCallbacks {
    fn on_deposit(&mut self, account_id: AccountId, amount: U128) -> bool;

    fn on_withdraw(&mut self, account_id: AccountId, amount: U128) -> bool;
}
