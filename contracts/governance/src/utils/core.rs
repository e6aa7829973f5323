use crate::errors::ContractErrors;
use crate::storage::core::{CoreDataKeys, CoreState, CoreStorageFunc, GovernParams};
use log::error;
use soroban_sdk::{panic_with_error, token, Address, Env};

/// Token contracts take `i128` amounts
pub const MAX_TOKEN_AMOUNT: u128 = i128::MAX as u128;

pub fn validate(e: &Env, typ: CoreDataKeys) {
    match match typ {
        CoreDataKeys::Admin => e._core().address(&CoreDataKeys::Admin),
        CoreDataKeys::Verifier => e._core().address(&CoreDataKeys::Verifier),
        _ => None,
    } {
        None => panic_with_error!(&e, &ContractErrors::NotStarted),
        Some(v) => v.require_auth(),
    }
}

pub fn is_capability_holder(e: &Env, typ: CoreDataKeys, address: &Address) -> bool {
    e._core().address(&typ).map_or(false, |holder| &holder == address)
}

pub fn get_core_state(e: &Env) -> CoreState {
    e._core().state().unwrap_or_else(|| {
        panic_with_error!(&e, &ContractErrors::NotStarted);
    })
}

pub fn get_params(e: &Env) -> GovernParams {
    e._core().params().unwrap_or_else(|| {
        panic_with_error!(&e, &ContractErrors::NotStarted);
    })
}

pub fn validate_params(e: &Env, params: &GovernParams) {
    if params.pass_ratio_bps > 10_000
        || params.voting_period == 0
        || params.proposal_stake > MAX_TOKEN_AMOUNT
        || params.vote_stake > MAX_TOKEN_AMOUNT
        || params.manager_stake > MAX_TOKEN_AMOUNT
    {
        panic_with_error!(&e, &ContractErrors::InvalidParameter);
    }
}

/// Pulls `amount` of the governance token from `from` into the contract
pub fn charge_stake(e: &Env, core_state: &CoreState, from: &Address, amount: &u128) {
    if *amount == 0 {
        return;
    }

    let result = token::Client::new(&e, &core_state.governance_token).try_transfer(
        from,
        &e.current_contract_address(),
        &(*amount as i128),
    );

    if result.is_err() {
        error!("Stake transfer failed");
        panic_with_error!(&e, &ContractErrors::InsufficientStake);
    }
}

/// Sends `amount` of the governance token held by the contract back to `to`
pub fn release_stake(e: &Env, core_state: &CoreState, to: &Address, amount: &u128) {
    if *amount == 0 {
        return;
    }

    token::Client::new(&e, &core_state.governance_token).transfer(
        &e.current_contract_address(),
        to,
        &(*amount as i128),
    );
}
