use crate::errors::ContractErrors;
use crate::storage::core::{CoreDataKeys, CoreStorageFunc, Thresholds, Tier};
use soroban_sdk::{panic_with_error, Env};

pub fn validate_admin(e: &Env) {
    match e._core().address(&CoreDataKeys::Admin) {
        None => panic_with_error!(&e, &ContractErrors::NotStarted),
        Some(v) => v.require_auth(),
    }
}

/// Highest tier the balance qualifies for. Checked from the top so a
/// misordered set of thresholds still yields the strongest tier reached.
pub fn tier_for_balance(balance: u128, thresholds: &Thresholds) -> Tier {
    if balance >= thresholds.propose {
        Tier::Propose
    } else if balance >= thresholds.vote {
        Tier::Vote
    } else if balance >= thresholds.speak {
        Tier::Speak
    } else {
        Tier::None
    }
}
