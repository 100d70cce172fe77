//required in order for near_bindgen macro to work outside of lib.rs
use crate::*;
use crate::{
    config::GasConfigUpdate,
    errors::asserts::INVALID_GAS_CONFIG,
    interface::ContractOwner,
    near::log,
};

#[near_bindgen]
impl ContractOwner for StakingPoolContract {
    fn owner_id(&self) -> AccountId {
        self.owner_id.clone()
    }

    fn gas_config(&self) -> GasConfig {
        self.gas_config
    }

    fn update_gas_config(&mut self, update: GasConfigUpdate) -> GasConfig {
        self.assert_predecessor_is_owner();
        let mut gas_config = self.gas_config;
        gas_config.update(&update);
        assert!(gas_config.is_valid(), INVALID_GAS_CONFIG);
        self.gas_config = gas_config;
        log(&self.gas_config);
        self.gas_config
    }
}
