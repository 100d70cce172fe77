//! defines the interfaces that the contract exposes externally

mod contract_owner;
mod model;
mod pool_view;
mod staking_service;
mod token;

pub use contract_owner::*;
pub use model::*;
pub use pool_view::*;
pub use staking_service::*;
pub use token::*;
