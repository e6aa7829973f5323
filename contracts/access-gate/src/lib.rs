#![no_std]

mod contract;
mod errors;
mod storage;
mod utils;

pub use crate::contract::{AccessGateContract, AccessGateContractClient};
pub use crate::errors::ContractErrors;
pub use crate::storage::core::{Thresholds, Tier};
