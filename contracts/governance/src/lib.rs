#![no_std]

mod gate {
    use soroban_sdk::{contractclient, contracttype, Address, Env};

    #[contracttype]
    #[derive(Clone, Copy, Debug, Eq, PartialEq, PartialOrd, Ord)]
    #[repr(u32)]
    pub enum Tier {
        None = 0,
        Speak = 1,
        Vote = 2,
        Propose = 3,
    }

    #[allow(dead_code)]
    #[contractclient(name = "Client")]
    pub trait AccessGate {
        fn tier(e: Env, party: Address) -> Tier;
    }
}

mod fund {
    use soroban_sdk::{contractclient, contracttype, Address, Env, Vec};

    #[contracttype]
    #[derive(Clone, Debug, Eq, PartialEq)]
    pub struct Disbursement {
        pub beneficiary_amount: u128,
        pub verifier_reward: u128,
        pub managers_reward: u128,
        pub ops_remainder: u128,
        pub managers: u32,
    }

    #[allow(dead_code)]
    #[contractclient(name = "Client")]
    pub trait TreasuryFund {
        fn add_managers(e: Env, managers: Vec<Address>);
        fn remove_managers(e: Env, managers: Vec<Address>);
        fn max_managers(e: Env) -> u32;
        fn disburse(e: Env, beneficiary: Address, amount: u128, verifier: Address)
            -> Disbursement;
    }
}

mod contract;
mod errors;
mod storage;
mod tests;
mod utils;

pub use crate::contract::{GovernanceContract, GovernanceContractClient};
pub use crate::errors::ContractErrors;
pub use crate::storage::core::{CoreState, GovernParams};
pub use crate::storage::managers::Manager;
pub use crate::storage::proposals::{OptionalAddress, Proposal, ProposalStatus, Vote};
