//required in order for near_bindgen macro to work outside of lib.rs
use crate::*;
use crate::{
    domain::{PendingWithdrawal, TokenAmount},
    errors::staking::DEPOSIT_PULL_REJECTED,
    events::DepositFailed,
    near::{is_promise_success, log},
};
use near_sdk::json_types::U128;

/// The callbacks never panic once the promise result has been read. Panicking would revert the
/// lock release, leaving the account locked for good.
#[near_bindgen]
impl StakingPoolContract {
    /// Credits the stake if the tokens were pulled into the pool.
    ///
    /// Returns true if the deposit was staked.
    ///
    /// ## Panics
    /// - if not called by self
    /// - if not invoked as a callback on exactly 1 promise
    #[private]
    pub fn on_deposit(&mut self, account_id: AccountId, amount: U128) -> bool {
        self.resolve_deposit(&account_id, amount.0.into(), is_promise_success())
    }

    /// Commits the withdrawal if the tokens were paid out, otherwise the stake debit is rolled
    /// back.
    ///
    /// Returns true if the tokens were paid out.
    ///
    /// ## Panics
    /// - if not called by self
    /// - if not invoked as a callback on exactly 1 promise
    #[private]
    pub fn on_withdraw(&mut self, account_id: AccountId, amount: U128) -> bool {
        self.resolve_withdrawal(&account_id, amount.0.into(), is_promise_success())
    }
}

impl StakingPoolContract {
    fn resolve_deposit(&mut self, account_id: &str, amount: TokenAmount, pulled: bool) -> bool {
        self.unlock_account(account_id);
        if !pulled {
            log(DepositFailed {
                account_id,
                amount: amount.value(),
                reason: DEPOSIT_PULL_REJECTED,
            });
            return false;
        }
        match self.pool.credit_stake(account_id, amount) {
            Ok(_) => true,
            Err(err) => {
                // the tokens are held by the pool but are not staked
                near_sdk::log!(
                    "ERROR: failed to credit stake for {} after pulling {}: {}",
                    account_id,
                    amount,
                    err
                );
                false
            }
        }
    }

    fn resolve_withdrawal(
        &mut self,
        account_id: &str,
        amount: TokenAmount,
        transferred: bool,
    ) -> bool {
        self.unlock_account(account_id);
        let withdrawal = PendingWithdrawal::new(account_id.to_string(), amount);
        if transferred {
            self.pool.commit_withdrawal(withdrawal);
            return true;
        }
        if let Err(err) = self.pool.rollback_withdrawal(withdrawal) {
            near_sdk::log!(
                "ERROR: failed to roll back withdrawal of {} for {}: {}",
                amount,
                account_id,
                err
            );
        }
        false
    }
}
