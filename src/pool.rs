//! staking pool accounting core

use crate::{
    domain::{validate_account_id, PendingWithdrawal, TimestampedBalance, TokenAmount},
    errors::LedgerError,
    events::{Staked, WithdrawalRolledBack, Withdrawn},
    ledger::BalanceBook,
    near::log,
    token::ExternalToken,
};
use near_sdk::{
    borsh::{self, BorshDeserialize, BorshSerialize},
    AccountId,
};

/// Tracks the stake that each account has deposited into the pool.
///
/// Invariants:
/// - the sum of all stakes equals [total_staked](StakingPool::total_staked)
/// - [total_staked](StakingPool::total_staked) never exceeds the pool's token balance, i.e., stake
///   is only credited after the tokens have been pulled, and stake is debited before tokens are
///   paid out
#[derive(BorshSerialize, BorshDeserialize)]
pub struct StakingPool {
    /// the pool's own account, which holds the staked tokens
    pool_id: AccountId,
    /// the token that is staked
    token_id: AccountId,
    stakes: BalanceBook,
}

impl StakingPool {
    pub fn new(
        pool_id: AccountId,
        token_id: AccountId,
        key_prefix: &[u8],
    ) -> Result<Self, LedgerError> {
        validate_account_id(&pool_id)?;
        validate_account_id(&token_id)?;
        Ok(Self {
            pool_id,
            token_id,
            stakes: BalanceBook::new(key_prefix.to_vec()),
        })
    }

    pub fn pool_id(&self) -> &str {
        &self.pool_id
    }

    pub fn token_id(&self) -> &str {
        &self.token_id
    }

    pub fn stake_of(&self, account_id: &str) -> TokenAmount {
        self.stakes.balance(account_id)
    }

    pub fn stake_position(&self, account_id: &str) -> Option<TimestampedBalance> {
        self.stakes.get(account_id)
    }

    pub fn total_staked(&self) -> TokenAmount {
        self.stakes.total()
    }

    /// number of accounts with a non-zero stake
    pub fn stake_accounts(&self) -> u64 {
        self.stakes.count()
    }

    /// Pulls `amount` tokens from the account into the pool, using the allowance the account
    /// granted the pool, and credits the account's stake.
    ///
    /// Returns the account's updated stake.
    ///
    /// If the token pull fails, the error is returned as is and the stake is left untouched.
    pub fn deposit<T: ExternalToken>(
        &mut self,
        token: &mut T,
        account_id: &str,
        amount: TokenAmount,
    ) -> Result<TokenAmount, LedgerError> {
        self.check_deposit(account_id, amount)?;
        self.check_token(token)?;
        if token.allowance(account_id, &self.pool_id) < amount {
            return Err(LedgerError::InsufficientAllowance);
        }
        token.transfer_from(account_id, &self.pool_id, amount)?;
        self.credit_stake(account_id, amount)
    }

    /// Pays out `amount` of the account's stake.
    ///
    /// The stake is debited before the token transfer is made. If the transfer fails, then the
    /// debit is rolled back and [LedgerError::TransferFailed] is returned.
    ///
    /// Returns the account's updated stake.
    pub fn withdraw<T: ExternalToken>(
        &mut self,
        token: &mut T,
        account_id: &str,
        amount: TokenAmount,
    ) -> Result<TokenAmount, LedgerError> {
        self.check_token(token)?;
        let withdrawal = self.begin_withdrawal(account_id, amount)?;
        match token.transfer(&self.pool_id, account_id, amount) {
            Ok(()) => Ok(self.commit_withdrawal(withdrawal)),
            Err(_) => {
                self.rollback_withdrawal(withdrawal)?;
                Err(LedgerError::TransferFailed)
            }
        }
    }

    /// validates a deposit request before any tokens are pulled
    pub fn check_deposit(&self, account_id: &str, amount: TokenAmount) -> Result<(), LedgerError> {
        if amount.is_zero() {
            return Err(LedgerError::ZeroAmount);
        }
        self.check_staker(account_id)?;
        self.total_staked()
            .checked_add(amount)
            .map(|_| ())
            .ok_or(LedgerError::BalanceOverflow)
    }

    /// Credits stake for tokens that have already been pulled into the pool.
    pub fn credit_stake(
        &mut self,
        account_id: &str,
        amount: TokenAmount,
    ) -> Result<TokenAmount, LedgerError> {
        let stake = self.stakes.credit(account_id, amount)?;
        log(Staked {
            account_id,
            amount: amount.value(),
            stake: stake.value(),
            total_staked: self.total_staked().value(),
        });
        Ok(stake)
    }

    /// Phase 1 of a withdrawal: the stake is debited up front.
    ///
    /// The returned [PendingWithdrawal] must be committed or rolled back once the token transfer
    /// has resolved.
    pub fn begin_withdrawal(
        &mut self,
        account_id: &str,
        amount: TokenAmount,
    ) -> Result<PendingWithdrawal, LedgerError> {
        if amount.is_zero() {
            return Err(LedgerError::ZeroAmount);
        }
        self.check_staker(account_id)?;
        self.stakes
            .debit(account_id, amount)
            .map_err(|_| LedgerError::InsufficientStake)?;
        Ok(PendingWithdrawal::new(account_id.to_string(), amount))
    }

    /// Phase 2 on success: the tokens were paid out. Returns the account's stake.
    pub fn commit_withdrawal(&self, withdrawal: PendingWithdrawal) -> TokenAmount {
        let stake = self.stake_of(withdrawal.account_id());
        log(Withdrawn {
            account_id: withdrawal.account_id(),
            amount: withdrawal.amount().value(),
            stake: stake.value(),
            total_staked: self.total_staked().value(),
        });
        stake
    }

    /// Phase 2 on failure: the debited stake is credited back. Returns the account's stake.
    pub fn rollback_withdrawal(
        &mut self,
        withdrawal: PendingWithdrawal,
    ) -> Result<TokenAmount, LedgerError> {
        let stake = self
            .stakes
            .credit(withdrawal.account_id(), withdrawal.amount())?;
        log(WithdrawalRolledBack {
            account_id: withdrawal.account_id(),
            amount: withdrawal.amount().value(),
            stake: stake.value(),
        });
        Ok(stake)
    }

    /// the pool's own account cannot stake - a pull from itself would credit stake without moving
    /// any tokens into the pool
    fn check_staker(&self, account_id: &str) -> Result<(), LedgerError> {
        validate_account_id(account_id)?;
        if account_id == self.pool_id {
            return Err(LedgerError::InvalidAccount);
        }
        Ok(())
    }

    fn check_token<T: ExternalToken>(&self, token: &T) -> Result<(), LedgerError> {
        if token.account_id() != self.token_id {
            return Err(LedgerError::TokenMismatch);
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test_utils::{
        near::{new_context, pool_account_id, token_account_id},
        new_pool, new_token, FailingTransferToken,
    };
    use crate::{query::PoolQuery, token::LedgerToken};
    use near_sdk::{testing_env, MockedBlockchain};
    use quickcheck_macros::quickcheck;

    const ALICE: &str = "alice.near";
    const BOB: &str = "bob.near";

    fn funded_token() -> LedgerToken {
        let mut token = new_token();
        token.mint(ALICE, 1_000.into()).unwrap();
        token.mint(BOB, 1_000.into()).unwrap();
        token
    }

    #[test]
    fn new_rejects_invalid_ids() {
        testing_env!(new_context(ALICE));
        assert_eq!(
            StakingPool::new("".to_string(), token_account_id(), b"p").err(),
            Some(LedgerError::InvalidAccount)
        );
        assert_eq!(
            StakingPool::new(pool_account_id(), "".to_string(), b"p").err(),
            Some(LedgerError::InvalidAccount)
        );
    }

    #[test]
    fn deposit_pulls_tokens_and_credits_stake() {
        testing_env!(new_context(ALICE));
        let mut token = funded_token();
        let mut pool = new_pool();
        token.approve(ALICE, pool.pool_id(), 300.into()).unwrap();

        assert_eq!(pool.deposit(&mut token, ALICE, 100.into()), Ok(100.into()));
        assert_eq!(pool.deposit(&mut token, ALICE, 50.into()), Ok(150.into()));

        assert_eq!(pool.stake_of(ALICE), 150.into());
        assert_eq!(pool.total_staked(), 150.into());
        assert_eq!(pool.stake_accounts(), 1);
        assert_eq!(token.allowance(ALICE, pool.pool_id()), 150.into());
        assert_eq!(token.balance_of(ALICE), 850.into());
        assert_eq!(token.balance_of(pool.pool_id()), 150.into());
    }

    #[test]
    fn deposit_logs_staked_event() {
        testing_env!(new_context(ALICE));
        let mut token = funded_token();
        let mut pool = new_pool();
        token.approve(ALICE, pool.pool_id(), 300.into()).unwrap();

        pool.deposit(&mut token, ALICE, 100.into()).unwrap();
        let logs = near_sdk::test_utils::get_logs();
        assert!(logs.last().unwrap().starts_with("Staked"));
    }

    #[test]
    fn deposit_zero_amount() {
        testing_env!(new_context(ALICE));
        let mut token = funded_token();
        let mut pool = new_pool();
        assert_eq!(
            pool.deposit(&mut token, ALICE, 0.into()),
            Err(LedgerError::ZeroAmount)
        );
    }

    #[test]
    fn deposit_invalid_account() {
        testing_env!(new_context(ALICE));
        let mut token = funded_token();
        let mut pool = new_pool();
        assert_eq!(
            pool.deposit(&mut token, "", 1.into()),
            Err(LedgerError::InvalidAccount)
        );
    }

    #[test]
    fn deposit_without_allowance_changes_nothing() {
        testing_env!(new_context(ALICE));
        let mut token = funded_token();
        let mut pool = new_pool();
        token.approve(ALICE, pool.pool_id(), 10.into()).unwrap();

        assert_eq!(
            pool.deposit(&mut token, ALICE, 11.into()),
            Err(LedgerError::InsufficientAllowance)
        );
        assert_eq!(pool.stake_of(ALICE), TokenAmount::ZERO);
        assert_eq!(pool.total_staked(), TokenAmount::ZERO);
        assert_eq!(token.allowance(ALICE, pool.pool_id()), 10.into());
        assert_eq!(token.balance_of(ALICE), 1_000.into());
    }

    #[test]
    fn deposit_insufficient_balance_propagates_token_error() {
        testing_env!(new_context(ALICE));
        let mut token = funded_token();
        let mut pool = new_pool();
        token.approve(ALICE, pool.pool_id(), 5_000.into()).unwrap();

        assert_eq!(
            pool.deposit(&mut token, ALICE, 1_001.into()),
            Err(LedgerError::InsufficientBalance)
        );
        assert_eq!(pool.stake_of(ALICE), TokenAmount::ZERO);
        assert_eq!(token.allowance(ALICE, pool.pool_id()), 5_000.into());
    }

    #[test]
    fn deposit_with_wrong_token() {
        testing_env!(new_context(ALICE));
        let mut other_token = LedgerToken::new("other-token.near".to_string(), b"other");
        other_token.mint(ALICE, 100.into()).unwrap();
        let mut pool = new_pool();
        other_token.approve(ALICE, pool.pool_id(), 100.into()).unwrap();

        assert_eq!(
            pool.deposit(&mut other_token, ALICE, 10.into()),
            Err(LedgerError::TokenMismatch)
        );
        assert_eq!(other_token.balance_of(ALICE), 100.into());
    }

    #[test]
    fn pool_account_cannot_stake_its_own_tokens() {
        testing_env!(new_context(ALICE));
        let mut token = funded_token();
        let mut pool = new_pool();
        let pool_id = pool.pool_id().to_string();
        token.approve(ALICE, &pool_id, 100.into()).unwrap();
        pool.deposit(&mut token, ALICE, 100.into()).unwrap();
        token.approve(&pool_id, &pool_id, 100.into()).unwrap();

        assert_eq!(
            pool.deposit(&mut token, &pool_id, 100.into()),
            Err(LedgerError::InvalidAccount)
        );
        assert_eq!(
            pool.withdraw(&mut token, &pool_id, 100.into()),
            Err(LedgerError::InvalidAccount)
        );
        assert_eq!(pool.stake_of(&pool_id), TokenAmount::ZERO);
        assert_eq!(pool.total_staked(), 100.into());
        assert!(PoolQuery::new(&pool, &token).is_solvent());
    }

    #[test]
    fn null_account_reads_as_zero() {
        testing_env!(new_context(ALICE));
        let token = funded_token();
        let pool = new_pool();
        assert_eq!(pool.stake_of(""), TokenAmount::ZERO);
        assert!(pool.stake_position("").is_none());
        assert_eq!(token.balance_of(""), TokenAmount::ZERO);

        let query = PoolQuery::new(&pool, &token);
        assert_eq!(query.stake_of(""), TokenAmount::ZERO);
        assert_eq!(query.allowance_of(""), TokenAmount::ZERO);
    }

    #[test]
    fn withdraw_pays_out_and_debits_stake() {
        testing_env!(new_context(ALICE));
        let mut token = funded_token();
        let mut pool = new_pool();
        token.approve(ALICE, pool.pool_id(), 100.into()).unwrap();
        pool.deposit(&mut token, ALICE, 100.into()).unwrap();

        assert_eq!(pool.withdraw(&mut token, ALICE, 40.into()), Ok(60.into()));
        assert_eq!(token.balance_of(ALICE), 940.into());
        assert_eq!(token.balance_of(pool.pool_id()), 60.into());

        // back to unstaked
        assert_eq!(
            pool.withdraw(&mut token, ALICE, 60.into()),
            Ok(TokenAmount::ZERO)
        );
        assert!(pool.stake_position(ALICE).is_none());
        assert_eq!(pool.stake_accounts(), 0);
        assert_eq!(pool.total_staked(), TokenAmount::ZERO);
        assert_eq!(token.balance_of(ALICE), 1_000.into());
    }

    #[test]
    fn withdraw_more_than_stake() {
        testing_env!(new_context(ALICE));
        let mut token = funded_token();
        let mut pool = new_pool();
        token.approve(ALICE, pool.pool_id(), 100.into()).unwrap();
        pool.deposit(&mut token, ALICE, 100.into()).unwrap();

        assert_eq!(
            pool.withdraw(&mut token, ALICE, 101.into()),
            Err(LedgerError::InsufficientStake)
        );
        assert_eq!(
            pool.withdraw(&mut token, BOB, 1.into()),
            Err(LedgerError::InsufficientStake)
        );
        assert_eq!(pool.stake_of(ALICE), 100.into());
    }

    #[test]
    fn withdraw_zero_amount() {
        testing_env!(new_context(ALICE));
        let mut token = funded_token();
        let mut pool = new_pool();
        assert_eq!(
            pool.withdraw(&mut token, ALICE, 0.into()),
            Err(LedgerError::ZeroAmount)
        );
    }

    #[test]
    fn failed_payout_rolls_back_withdrawal() {
        testing_env!(new_context(ALICE));
        let mut token = FailingTransferToken(funded_token());
        let mut pool = new_pool();
        token.0.approve(ALICE, pool.pool_id(), 100.into()).unwrap();
        pool.deposit(&mut token, ALICE, 100.into()).unwrap();

        assert_eq!(
            pool.withdraw(&mut token, ALICE, 40.into()),
            Err(LedgerError::TransferFailed)
        );
        assert_eq!(pool.stake_of(ALICE), 100.into());
        assert_eq!(pool.total_staked(), 100.into());
        assert_eq!(token.balance_of(pool.pool_id()), 100.into());
        let logs = near_sdk::test_utils::get_logs();
        assert!(logs.last().unwrap().starts_with("WithdrawalRolledBack"));
    }

    #[test]
    fn stakes_sum_to_total_and_stay_backed() {
        testing_env!(new_context(ALICE));
        let mut token = funded_token();
        let mut pool = new_pool();
        token.approve(ALICE, pool.pool_id(), 1_000.into()).unwrap();
        token.approve(BOB, pool.pool_id(), 1_000.into()).unwrap();

        pool.deposit(&mut token, ALICE, 300.into()).unwrap();
        pool.deposit(&mut token, BOB, 200.into()).unwrap();
        pool.withdraw(&mut token, ALICE, 100.into()).unwrap();
        pool.deposit(&mut token, BOB, 50.into()).unwrap();
        pool.withdraw(&mut token, BOB, 250.into()).unwrap();

        assert_eq!(pool.stake_of(ALICE), 200.into());
        assert_eq!(pool.stake_of(BOB), TokenAmount::ZERO);
        assert_eq!(
            pool.total_staked(),
            pool.stake_of(ALICE).checked_add(pool.stake_of(BOB)).unwrap()
        );
        assert!(pool.total_staked() <= token.balance_of(pool.pool_id()));
    }

    #[test]
    fn two_phase_withdrawal() {
        testing_env!(new_context(ALICE));
        let mut token = funded_token();
        let mut pool = new_pool();
        token.approve(ALICE, pool.pool_id(), 100.into()).unwrap();
        pool.deposit(&mut token, ALICE, 100.into()).unwrap();

        let withdrawal = pool.begin_withdrawal(ALICE, 70.into()).unwrap();
        assert_eq!(withdrawal.account_id(), ALICE);
        assert_eq!(withdrawal.amount(), 70.into());
        // the debited stake cannot be withdrawn twice while the transfer is in flight
        assert_eq!(
            pool.begin_withdrawal(ALICE, 70.into()),
            Err(LedgerError::InsufficientStake)
        );
        assert_eq!(pool.rollback_withdrawal(withdrawal), Ok(100.into()));

        let withdrawal = pool.begin_withdrawal(ALICE, 70.into()).unwrap();
        assert_eq!(pool.commit_withdrawal(withdrawal), 30.into());
        assert_eq!(pool.total_staked(), 30.into());
    }

    #[quickcheck]
    fn deposit_conserves_value(allowance: u64, amount: u64) -> bool {
        testing_env!(new_context(ALICE));
        let mut token = new_token();
        let mut pool = new_pool();
        token.mint(ALICE, (amount as u128).into()).unwrap();
        token
            .approve(ALICE, pool.pool_id(), (allowance as u128).into())
            .unwrap();

        let stake_before = pool.stake_of(ALICE);
        let total_before = pool.total_staked();
        let allowance_before = token.allowance(ALICE, pool.pool_id());
        let amount = TokenAmount::from(amount as u128);

        match pool.deposit(&mut token, ALICE, amount) {
            Ok(stake) => {
                stake == stake_before.checked_add(amount).unwrap()
                    && pool.total_staked() == total_before.checked_add(amount).unwrap()
                    && token.allowance(ALICE, pool.pool_id())
                        == allowance_before.checked_sub(amount).unwrap()
            }
            Err(LedgerError::ZeroAmount) => amount.is_zero(),
            Err(LedgerError::InsufficientAllowance) => {
                amount > allowance_before
                    && pool.stake_of(ALICE) == stake_before
                    && token.allowance(ALICE, pool.pool_id()) == allowance_before
            }
            Err(_) => false,
        }
    }

    #[quickcheck]
    fn no_over_withdrawal(deposit: u64) -> bool {
        testing_env!(new_context(ALICE));
        let mut token = new_token();
        let mut pool = new_pool();
        let deposit = TokenAmount::from(deposit as u128 + 1);
        token.mint(ALICE, deposit).unwrap();
        token.approve(ALICE, pool.pool_id(), deposit).unwrap();
        pool.deposit(&mut token, ALICE, deposit).unwrap();

        let stake = pool.stake_of(ALICE);
        let over = stake.checked_add(1.into()).unwrap();
        pool.withdraw(&mut token, ALICE, over) == Err(LedgerError::InsufficientStake)
            && pool.stake_of(ALICE) == stake
            && pool.total_staked() <= token.balance_of(pool.pool_id())
    }

    /// Each op is (account index, deposit or withdraw, amount). The pool's own account is one of
    /// the candidate stakers.
    #[quickcheck]
    fn solvency_holds_for_any_operation_sequence(ops: Vec<(u8, bool, u16)>) -> bool {
        // start every case from empty storage
        near_sdk::env::take_blockchain_interface();
        testing_env!(new_context(ALICE));
        let mut token = new_token();
        let mut pool = new_pool();
        let pool_id = pool.pool_id().to_string();
        let accounts = [ALICE, BOB, pool_id.as_str()];
        for account_id in accounts.iter() {
            token.mint(account_id, 100_000.into()).unwrap();
            token.approve(account_id, &pool_id, u128::MAX.into()).unwrap();
        }

        ops.into_iter().all(|(account, is_deposit, amount)| {
            let account_id = accounts[account as usize % accounts.len()];
            let amount = TokenAmount::from(amount as u128);
            let result = if is_deposit {
                pool.deposit(&mut token, account_id, amount)
            } else {
                pool.withdraw(&mut token, account_id, amount)
            };
            let staked = accounts
                .iter()
                .map(|account_id| pool.stake_of(account_id).value())
                .sum::<u128>();

            (account_id != pool_id || result.is_err())
                && staked == pool.total_staked().value()
                && PoolQuery::new(&pool, &token).is_solvent()
        })
    }
}
