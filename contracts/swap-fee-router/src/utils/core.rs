use crate::errors::ContractErrors;
use crate::storage::core::{CoreStorageFunc, RouterParams};
use num_integer::div_floor;
use soroban_sdk::{panic_with_error, Env};

/// Token contracts take `i128` amounts
pub const MAX_TOKEN_AMOUNT: u128 = i128::MAX as u128;

pub fn validate_admin(e: &Env) {
    match e._core().admin() {
        None => panic_with_error!(&e, &ContractErrors::NotStarted),
        Some(v) => v.require_auth(),
    }
}

pub fn validate_params(e: &Env, params: &RouterParams) {
    if params.fee_bps > 10_000 {
        panic_with_error!(&e, &ContractErrors::InvalidParameter);
    }
}

/// Returns `(fee, net)` where `fee` is rounded down
pub fn calculate_fee(amount_in: u128, fee_bps: u32) -> (u128, u128) {
    let fee: u128 = div_floor(amount_in, 10_000) * fee_bps as u128
        + div_floor((amount_in % 10_000) * fee_bps as u128, 10_000);

    (fee, amount_in - fee)
}
