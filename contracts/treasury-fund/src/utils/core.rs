use crate::errors::ContractErrors;
use crate::storage::core::{CoreStorageFunc, CoreDataKeys, FundParams};
use crate::utils::splits::{BPS_DENOMINATOR, PPM_DENOMINATOR};
use soroban_sdk::{panic_with_error, Env};

/// Token contracts take `i128` amounts
pub const MAX_TOKEN_AMOUNT: u128 = i128::MAX as u128;

pub fn validate_admin(e: &Env) {
    match e._core().address(&CoreDataKeys::Admin) {
        None => panic_with_error!(&e, &ContractErrors::NotStarted),
        Some(v) => v.require_auth(),
    }
}

pub fn validate_dao(e: &Env) -> FundParams {
    match e._core().params() {
        None => panic_with_error!(&e, &ContractErrors::NotStarted),
        Some(params) => {
            params.dao.require_auth();
            params
        }
    }
}

/// The verifier reward and the managers pool must always fit inside the ops keep
pub fn are_params_valid(params: &FundParams, roster_size: u32) -> bool {
    if params.ops_keep_bps as u128 > BPS_DENOMINATOR {
        return false;
    }

    if 2 * (params.reward_ppm as u128) * BPS_DENOMINATOR
        > (params.ops_keep_bps as u128) * PPM_DENOMINATOR
    {
        return false;
    }

    params.max_managers > 0 && params.max_managers >= roster_size
}

pub fn validate_params(e: &Env, params: &FundParams, roster_size: u32) {
    if !are_params_valid(params, roster_size) {
        panic_with_error!(&e, &ContractErrors::InvalidParameter);
    }
}
