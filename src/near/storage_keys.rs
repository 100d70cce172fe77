//! This module is used to centralize NEAR SDK Collection IDs to ensure duplicates are not defined
//!
//! Each NEAR SDK persistent collection must be defined with a unique ID, which is used to store the
//! collection in the TRIE. Each of the IDs defined below should only be referenced once within the
//! project.
//!
//! Ledgers derive their sub-collection prefixes from the IDs below, see [ValueLedger](crate::ledger::ValueLedger)

pub const POOL_STAKES_KEY_PREFIX: [u8; 1] = [0];
pub const ACCOUNT_LOCKS_KEY_PREFIX: [u8; 1] = [1];
pub const TOKEN_LEDGER_KEY_PREFIX: [u8; 1] = [2];
