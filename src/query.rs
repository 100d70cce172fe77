use crate::{
    domain::TokenAmount, interface::PoolStats, pool::StakingPool, token::ExternalToken,
};

/// Read-only view over a staking pool and the token it stakes.
pub struct PoolQuery<'a, T: ExternalToken> {
    pool: &'a StakingPool,
    token: &'a T,
}

impl<'a, T: ExternalToken> PoolQuery<'a, T> {
    pub fn new(pool: &'a StakingPool, token: &'a T) -> Self {
        Self { pool, token }
    }

    pub fn stake_of(&self, account_id: &str) -> TokenAmount {
        self.pool.stake_of(account_id)
    }

    /// the allowance the owner has granted the pool
    pub fn allowance_of(&self, owner_id: &str) -> TokenAmount {
        self.token.allowance(owner_id, self.pool.pool_id())
    }

    pub fn total_staked(&self) -> TokenAmount {
        self.pool.total_staked()
    }

    /// token balance held by the pool
    pub fn held_balance(&self) -> TokenAmount {
        self.token.balance_of(self.pool.pool_id())
    }

    /// true if every stake is backed by tokens the pool holds
    pub fn is_solvent(&self) -> bool {
        self.total_staked() <= self.held_balance()
    }

    pub fn stats(&self) -> PoolStats {
        PoolStats::new(self.pool, Some(self.held_balance()))
    }
}
