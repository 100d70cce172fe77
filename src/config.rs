use crate::domain::{Gas, TGAS};
use near_sdk::{
    borsh::{self, BorshDeserialize, BorshSerialize},
    serde::{Deserialize, Serialize},
};

/// Gas attached to the cross-contract calls the pool makes.
#[derive(BorshSerialize, BorshDeserialize, Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(crate = "near_sdk::serde")]
pub struct GasConfig {
    /// token `transfer`, used to pay out withdrawals
    token_transfer: Gas,
    /// token `transfer_from`, used to pull deposits
    token_transfer_from: Gas,
    /// pool callbacks that resolve the token calls
    callback: Gas,
}

impl Default for GasConfig {
    fn default() -> Self {
        Self {
            token_transfer: TGAS * 10,
            token_transfer_from: TGAS * 10,
            callback: TGAS * 10,
        }
    }
}

impl GasConfig {
    pub fn new(token_transfer: Gas, token_transfer_from: Gas, callback: Gas) -> Self {
        Self {
            token_transfer,
            token_transfer_from,
            callback,
        }
    }

    pub fn token_transfer(&self) -> Gas {
        self.token_transfer
    }

    pub fn token_transfer_from(&self) -> Gas {
        self.token_transfer_from
    }

    pub fn callback(&self) -> Gas {
        self.callback
    }

    /// all gas settings must be non-zero
    pub fn is_valid(&self) -> bool {
        self.token_transfer.value() > 0
            && self.token_transfer_from.value() > 0
            && self.callback.value() > 0
    }

    /// applies the fields that are set on the update
    pub fn update(&mut self, update: &GasConfigUpdate) {
        if let Some(gas) = update.token_transfer {
            self.token_transfer = gas;
        }
        if let Some(gas) = update.token_transfer_from {
            self.token_transfer_from = gas;
        }
        if let Some(gas) = update.callback {
            self.callback = gas;
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq)]
#[serde(crate = "near_sdk::serde")]
pub struct GasConfigUpdate {
    pub token_transfer: Option<Gas>,
    pub token_transfer_from: Option<Gas>,
    pub callback: Option<Gas>,
}
