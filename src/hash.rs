use near_sdk::{
    borsh::{self, BorshDeserialize, BorshSerialize},
    env,
};

/// SHA-256 hash of an account ID, used as the ledger key to keep the TRIE balanced
#[derive(
    BorshDeserialize,
    BorshSerialize,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Debug,
    Ord,
    PartialOrd,
    Default,
)]
pub struct Hash([u8; 32]);

impl Hash {
    const LENGTH: usize = 32;

    /// NEAR account IDs cannot contain ':' - thus the separator cannot collide with either ID
    const PAIR_SEPARATOR: u8 = b':';

    /// hashes an ordered (owner, spender) pair
    pub fn pair(owner_id: &str, spender_id: &str) -> Self {
        let mut data = Vec::with_capacity(owner_id.len() + spender_id.len() + 1);
        data.extend_from_slice(owner_id.as_bytes());
        data.push(Self::PAIR_SEPARATOR);
        data.extend_from_slice(spender_id.as_bytes());
        Self::from(data.as_slice())
    }
}

impl From<&[u8]> for Hash {
    fn from(value: &[u8]) -> Self {
        assert!(!value.is_empty(), "value cannot be empty");
        let mut buf = [0u8; Hash::LENGTH];
        let hash = env::sha256(value);
        buf.copy_from_slice(&hash.as_slice()[..Hash::LENGTH]);
        Self(buf)
    }
}

impl From<&str> for Hash {
    fn from(value: &str) -> Self {
        value.as_bytes().into()
    }
}
