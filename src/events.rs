//! ledger and staking events, which are logged via [log](crate::near::log)

#[derive(Debug)]
pub struct Approval<'a> {
    pub owner_id: &'a str,
    pub spender_id: &'a str,
    pub amount: u128,
}

#[derive(Debug)]
pub struct Transfer<'a> {
    pub from: &'a str,
    pub to: &'a str,
    pub amount: u128,
}

#[derive(Debug)]
pub struct Minted<'a> {
    pub account_id: &'a str,
    pub amount: u128,
    pub total_supply: u128,
}

#[derive(Debug)]
pub struct Staked<'a> {
    pub account_id: &'a str,
    pub amount: u128,
    pub stake: u128,
    pub total_staked: u128,
}

#[derive(Debug)]
pub struct Withdrawn<'a> {
    pub account_id: &'a str,
    pub amount: u128,
    pub stake: u128,
    pub total_staked: u128,
}

/// the token transfer for a withdrawal failed and the stake debit was reverted
#[derive(Debug)]
pub struct WithdrawalRolledBack<'a> {
    pub account_id: &'a str,
    pub amount: u128,
    pub stake: u128,
}

/// the token pull for a deposit failed - the stake was never credited
#[derive(Debug)]
pub struct DepositFailed<'a> {
    pub account_id: &'a str,
    pub amount: u128,
    pub reason: &'a str,
}
