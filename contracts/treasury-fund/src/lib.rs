#![no_std]

mod contract;
mod errors;
mod storage;
mod utils;

pub use crate::contract::{TreasuryFundContract, TreasuryFundContractClient};
pub use crate::errors::ContractErrors;
pub use crate::storage::core::{Disbursement, FundParams};
