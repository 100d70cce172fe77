use crate::{domain::TokenAmount, errors::LedgerError, hash::Hash};
use near_sdk::{
    borsh::{self, BorshDeserialize, BorshSerialize},
    collections::LookupMap,
};

/// Allowance per (owner, spender) pair.
///
/// Each pair is independent - allowances are never aggregated across spenders. Zero allowances
/// are not stored.
#[derive(BorshSerialize, BorshDeserialize)]
pub struct AllowanceBook {
    allowances: LookupMap<Hash, TokenAmount>,
}

impl AllowanceBook {
    pub fn new(prefix: Vec<u8>) -> Self {
        Self {
            allowances: LookupMap::new(prefix),
        }
    }

    pub fn get(&self, owner_id: &str, spender_id: &str) -> TokenAmount {
        self.allowances
            .get(&Hash::pair(owner_id, spender_id))
            .unwrap_or_default()
    }

    /// absolute set - replaces any prior allowance
    pub fn set(&mut self, owner_id: &str, spender_id: &str, amount: TokenAmount) {
        let key = Hash::pair(owner_id, spender_id);
        if amount.is_zero() {
            self.allowances.remove(&key);
        } else {
            self.allowances.insert(&key, &amount);
        }
    }

    /// Fails with [LedgerError::InsufficientAllowance] if the allowance is less than the amount,
    /// in which case the allowance is left unchanged.
    pub fn spend(
        &mut self,
        owner_id: &str,
        spender_id: &str,
        amount: TokenAmount,
    ) -> Result<TokenAmount, LedgerError> {
        let remaining = self
            .get(owner_id, spender_id)
            .checked_sub(amount)
            .ok_or(LedgerError::InsufficientAllowance)?;
        self.set(owner_id, spender_id, remaining);
        Ok(remaining)
    }
}
