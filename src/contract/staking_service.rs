//required in order for near_bindgen macro to work outside of lib.rs
use crate::*;
use crate::{
    domain::TokenAmount,
    errors::LedgerError,
    interface::{ext_staking_service_callbacks, ext_token, StakingService},
    near::{OrPanic, NO_DEPOSIT},
};
use near_sdk::{env, json_types::U128, Promise};

#[near_bindgen]
impl StakingService for StakingPoolContract {
    fn deposit(&mut self, amount: U128) -> Promise {
        let account_id = env::predecessor_account_id();
        let amount: TokenAmount = amount.0.into();
        self.pool.check_deposit(&account_id, amount).or_panic();
        self.lock_account(&account_id, AccountLock::Depositing(amount))
            .or_panic();

        // the token enforces the allowance - the stake is credited by the callback once the
        // tokens have been pulled
        ext_token::transfer_from(
            account_id.clone(),
            env::current_account_id(),
            amount.value().into(),
            &self.pool.token_id().to_string(),
            NO_DEPOSIT,
            self.gas_config.token_transfer_from().value(),
        )
        .then(ext_staking_service_callbacks::on_deposit(
            account_id,
            amount.value().into(),
            &env::current_account_id(),
            NO_DEPOSIT,
            self.gas_config.callback().value(),
        ))
    }

    fn withdraw(&mut self, amount: U128) -> Promise {
        let account_id = env::predecessor_account_id();
        let amount: TokenAmount = amount.0.into();
        if self.account_lock(&account_id).is_some() {
            env::panic(LedgerError::OperationPending.message().as_bytes());
        }
        let withdrawal = self.pool.begin_withdrawal(&account_id, amount).or_panic();
        self.lock_account(&account_id, AccountLock::Withdrawing(withdrawal.amount()))
            .or_panic();

        ext_token::transfer(
            account_id.clone(),
            amount.value().into(),
            &self.pool.token_id().to_string(),
            NO_DEPOSIT,
            self.gas_config.token_transfer().value(),
        )
        .then(ext_staking_service_callbacks::on_withdraw(
            account_id,
            amount.value().into(),
            &env::current_account_id(),
            NO_DEPOSIT,
            self.gas_config.callback().value(),
        ))
    }
}
