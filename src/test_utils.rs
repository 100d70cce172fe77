use crate::{
    domain::TokenAmount,
    errors::LedgerError,
    near::storage_keys::{POOL_STAKES_KEY_PREFIX, TOKEN_LEDGER_KEY_PREFIX},
    pool::StakingPool,
    token::{ExternalToken, LedgerToken},
};

pub mod near {
    use near_sdk::{AccountId, VMContext};

    pub fn to_account_id(id: &str) -> AccountId {
        id.to_string()
    }

    pub fn pool_account_id() -> AccountId {
        to_account_id("pool.stake.near")
    }

    pub fn token_account_id() -> AccountId {
        to_account_id("token.stake.near")
    }

    pub fn new_context(predecessor_account_id: &str) -> VMContext {
        VMContext {
            current_account_id: pool_account_id(),
            signer_account_id: predecessor_account_id.to_string(),
            signer_account_pk: vec![0, 1, 2],
            predecessor_account_id: predecessor_account_id.to_string(),
            input: vec![],
            epoch_height: 0,
            block_index: 0,
            block_timestamp: 0,
            account_balance: 0,
            account_locked_balance: 0,
            storage_usage: 10u64.pow(6),
            attached_deposit: 0,
            prepaid_gas: 10u64.pow(18),
            random_seed: vec![0, 1, 2],
            is_view: false,
            output_data_receivers: vec![],
        }
    }
}

pub fn new_token() -> LedgerToken {
    LedgerToken::new(near::token_account_id(), &TOKEN_LEDGER_KEY_PREFIX)
}

pub fn new_pool() -> StakingPool {
    StakingPool::new(
        near::pool_account_id(),
        near::token_account_id(),
        &POOL_STAKES_KEY_PREFIX,
    )
    .unwrap()
}

/// token whose transfers always fail - used to exercise withdrawal rollback
pub struct FailingTransferToken(pub LedgerToken);

impl ExternalToken for FailingTransferToken {
    fn account_id(&self) -> &str {
        self.0.account_id()
    }

    fn allowance(&self, owner_id: &str, spender_id: &str) -> TokenAmount {
        self.0.allowance(owner_id, spender_id)
    }

    fn balance_of(&self, account_id: &str) -> TokenAmount {
        self.0.balance_of(account_id)
    }

    fn transfer_from(
        &mut self,
        owner_id: &str,
        spender_id: &str,
        amount: TokenAmount,
    ) -> Result<(), LedgerError> {
        self.0.transfer_from(owner_id, spender_id, amount)
    }

    fn transfer(
        &mut self,
        _sender_id: &str,
        _receiver_id: &str,
        _amount: TokenAmount,
    ) -> Result<(), LedgerError> {
        Err(LedgerError::InsufficientBalance)
    }
}
