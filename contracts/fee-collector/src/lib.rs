#![no_std]

mod contract;
mod errors;
mod storage;
mod tests;
mod utils;

pub use crate::contract::{FeeCollectorContract, FeeCollectorContractClient};
pub use crate::errors::ContractErrors;
pub use crate::storage::core::FeeSplit;
