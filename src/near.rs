pub mod storage_keys;

use crate::errors::{asserts, LedgerError};
use near_sdk::{env, PromiseResult};
use std::fmt::Debug;

/// 1 token = 10^18 of its smallest unit, i.e., the token has 18 decimals
pub const TOKEN_DECIMALS: u8 = 18;

/// 10^[TOKEN_DECIMALS]
pub const ONE_TOKEN: u128 = 10u128.pow(TOKEN_DECIMALS as u32);

/// Used to indicate that no deposit is being attached to a cross contract func call
pub const NO_DEPOSIT: u128 = 0;

/// wrapper around `near_sdk::env::log()` which supports structured logging
pub fn log<T: Debug>(event: T) {
    env::log(format!("{:#?}", event).as_bytes());
}

/// returns true if the single upstream promise completed successfully
///
/// ## Panics
/// if not invoked as a callback on exactly 1 promise
pub fn is_promise_success() -> bool {
    assert_eq!(
        env::promise_results_count(),
        1,
        "{}",
        asserts::PROMISE_RESULT_COUNT
    );
    matches!(env::promise_result(0), PromiseResult::Successful(_))
}

/// Converts a ledger failure into a contract panic, which reverts all state changes made within
/// the current receipt.
pub trait OrPanic<T> {
    fn or_panic(self) -> T;
}

impl<T> OrPanic<T> for Result<T, LedgerError> {
    fn or_panic(self) -> T {
        match self {
            Ok(value) => value,
            Err(err) => env::panic(err.message().as_bytes()),
        }
    }
}
