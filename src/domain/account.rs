use crate::errors::LedgerError;
use near_sdk::env;

/// The empty account ID plays the role of the null account - it and any other malformed NEAR
/// account ID are rejected.
pub fn validate_account_id(account_id: &str) -> Result<(), LedgerError> {
    if account_id.is_empty() || !env::is_valid_account_id(account_id.as_bytes()) {
        return Err(LedgerError::InvalidAccount);
    }
    Ok(())
}
