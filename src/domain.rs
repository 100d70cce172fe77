//! defines the internal domain model used to implement the business logic
//!
//! NOTE: the domain model is separate from the interface model. That being said, the interface model
//! closely mirrors the domain model.

mod account;
mod account_lock;
mod gas;
mod pending_withdrawal;
mod timestamped_balance;
mod token_amount;

pub use account::validate_account_id;
pub use account_lock::AccountLock;
pub use gas::{Gas, TGAS};
pub use pending_withdrawal::PendingWithdrawal;
pub use timestamped_balance::TimestampedBalance;
pub use token_amount::TokenAmount;
