use crate::domain::TokenAmount;
use near_sdk::AccountId;

/// Stake that has been tentatively debited, pending the token transfer back to the account.
///
/// Must be resolved by either [commit_withdrawal](crate::pool::StakingPool::commit_withdrawal)
/// or [rollback_withdrawal](crate::pool::StakingPool::rollback_withdrawal).
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingWithdrawal {
    account_id: AccountId,
    amount: TokenAmount,
}

impl PendingWithdrawal {
    pub(crate) fn new(account_id: AccountId, amount: TokenAmount) -> Self {
        Self { account_id, amount }
    }

    pub fn account_id(&self) -> &str {
        &self.account_id
    }

    pub fn amount(&self) -> TokenAmount {
        self.amount
    }
}
