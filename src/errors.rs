//! centralizes all error messages

use std::fmt::{self, Display, Formatter};

pub mod asserts {
    pub const PREDECESSOR_MUST_BE_OWNER: &str =
        "contract call is only allowed by the contract owner";

    pub const CONTRACT_ALREADY_INITIALIZED: &str = "contract is already initialized";

    pub const PROMISE_RESULT_COUNT: &str = "callback expects exactly 1 promise result";

    pub const INVALID_GAS_CONFIG: &str = "all gas config settings must be greater than zero";
}

pub mod accounts {
    pub const INVALID_ACCOUNT: &str = "account ID is null or invalid";

    pub const OPERATION_PENDING: &str =
        "account has an operation in flight - retry once it has resolved";
}

pub mod ledger {
    pub const ZERO_AMOUNT: &str = "amount must not be zero";

    pub const INSUFFICIENT_ALLOWANCE: &str =
        "spender allowance is insufficient to fulfill request";

    pub const INSUFFICIENT_BALANCE: &str = "account balance is insufficient to fulfill request";

    pub const BALANCE_OVERFLOW: &str = "credit would cause the balance to overflow";
}

pub mod staking {
    pub const INSUFFICIENT_STAKE: &str = "account stake is insufficient to fulfill request";

    pub const TRANSFER_FAILED: &str =
        "token transfer failed - the withdrawal was rolled back";

    pub const TOKEN_MISMATCH: &str = "token is not the token the pool was configured with";

    pub const DEPOSIT_PULL_REJECTED: &str =
        "token rejected transfer_from - the allowance or the balance is insufficient";
}

/// Every failure aborts the whole operation - no partial ledger mutation survives.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum LedgerError {
    InvalidAccount,
    ZeroAmount,
    InsufficientAllowance,
    InsufficientBalance,
    InsufficientStake,
    TransferFailed,
    BalanceOverflow,
    TokenMismatch,
    OperationPending,
}

impl LedgerError {
    pub fn message(&self) -> &'static str {
        match self {
            LedgerError::InvalidAccount => accounts::INVALID_ACCOUNT,
            LedgerError::ZeroAmount => ledger::ZERO_AMOUNT,
            LedgerError::InsufficientAllowance => ledger::INSUFFICIENT_ALLOWANCE,
            LedgerError::InsufficientBalance => ledger::INSUFFICIENT_BALANCE,
            LedgerError::InsufficientStake => staking::INSUFFICIENT_STAKE,
            LedgerError::TransferFailed => staking::TRANSFER_FAILED,
            LedgerError::BalanceOverflow => ledger::BALANCE_OVERFLOW,
            LedgerError::TokenMismatch => staking::TOKEN_MISMATCH,
            LedgerError::OperationPending => accounts::OPERATION_PENDING,
        }
    }
}

impl Display for LedgerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for LedgerError {}
