#![no_std]

mod venue {
    use soroban_sdk::{contractclient, Address, Env, Vec};

    #[allow(dead_code)]
    #[contractclient(name = "Client")]
    pub trait SwapVenue {
        /// Swaps `amount_in` of `path[0]`, already sent to the venue, and pays the last token of
        /// `path` to `to`
        fn swap_exact_tokens_for_tokens(
            e: Env,
            amount_in: u128,
            amount_out_min: u128,
            path: Vec<Address>,
            to: Address,
            deadline: u64,
        ) -> u128;
    }
}

mod collector {
    use soroban_sdk::{contractclient, Address, Env};

    #[allow(dead_code)]
    #[contractclient(name = "Client")]
    pub trait FeeCollector {
        fn distribute(e: Env, token: Address, amount: u128) -> (u128, u128);
    }
}

mod contract;
mod errors;
mod storage;
mod utils;

pub use crate::contract::{SwapFeeRouterContract, SwapFeeRouterContractClient};
pub use crate::errors::ContractErrors;
pub use crate::storage::core::RouterParams;
