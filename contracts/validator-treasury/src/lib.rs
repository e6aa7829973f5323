#![no_std]

mod contract;
mod errors;
mod storage;
mod tests;
mod utils;

pub use crate::contract::{ValidatorTreasuryContract, ValidatorTreasuryContractClient};
pub use crate::errors::ContractErrors;
pub use crate::storage::core::ValidatorParams;
pub use crate::storage::proposals::{PayoutProposal, StakeVote};
