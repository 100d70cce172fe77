use crate::config::{GasConfig, GasConfigUpdate};
use near_sdk::AccountId;

pub trait ContractOwner {
    fn owner_id(&self) -> AccountId;

    fn gas_config(&self) -> GasConfig;

    /// Only the fields that are set are updated.
    ///
    /// ## Panics
    /// - if not called by the owner
    /// - if the resulting config is invalid
    fn update_gas_config(&mut self, update: GasConfigUpdate) -> GasConfig;
}
