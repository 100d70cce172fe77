pub mod contract_owner;
pub mod pool_view;
pub mod staking_service;
pub mod staking_service_callbacks;

//required in order for near_bindgen macro to work outside of lib.rs
use crate::*;
use crate::{
    errors::{asserts::*, LedgerError},
    near::{storage_keys::*, OrPanic},
};
use near_sdk::{env, json_types::ValidAccountId};

#[near_bindgen]
impl StakingPoolContract {
    /// The pool holds its stake on its own account, i.e., the contract account.
    ///
    /// The predecessor account becomes the contract owner.
    ///
    /// ## Panics
    /// - if the contract is already initialized
    /// - if the gas config is invalid
    #[init]
    pub fn new(token_id: ValidAccountId, gas_config: Option<GasConfig>) -> Self {
        assert!(!env::state_exists(), CONTRACT_ALREADY_INITIALIZED);
        let gas_config = gas_config.unwrap_or_default();
        assert!(gas_config.is_valid(), INVALID_GAS_CONFIG);

        let pool = StakingPool::new(
            env::current_account_id(),
            token_id.into(),
            &POOL_STAKES_KEY_PREFIX,
        )
        .or_panic();

        Self {
            owner_id: env::predecessor_account_id(),
            gas_config,
            pool,
            locks: LookupMap::new(ACCOUNT_LOCKS_KEY_PREFIX.to_vec()),
        }
    }
}

impl StakingPoolContract {
    fn assert_predecessor_is_owner(&self) {
        assert_eq!(
            env::predecessor_account_id(),
            self.owner_id,
            "{}",
            PREDECESSOR_MUST_BE_OWNER
        );
    }

    fn account_lock(&self, account_id: &str) -> Option<AccountLock> {
        self.locks.get(&Hash::from(account_id))
    }

    /// fails if the account already has a token call in flight
    fn lock_account(&mut self, account_id: &str, lock: AccountLock) -> Result<(), LedgerError> {
        let key = Hash::from(account_id);
        if self.locks.get(&key).is_some() {
            return Err(LedgerError::OperationPending);
        }
        self.locks.insert(&key, &lock);
        Ok(())
    }

    fn unlock_account(&mut self, account_id: &str) -> Option<AccountLock> {
        self.locks.remove(&Hash::from(account_id))
    }
}
