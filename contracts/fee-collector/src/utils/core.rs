use crate::errors::ContractErrors;
use crate::storage::core::{CoreStorageFunc, FeeSplit};
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

pub fn validate_split(e: &Env, split: &FeeSplit) {
    if split.dao_share_bps as u64 + split.founder_share_bps as u64 != 10_000 {
        panic_with_error!(&e, &ContractErrors::InvalidParameter);
    }
}

/// Returns `(dao_share, founder_share)`, the founder takes the rounding dust
pub fn split_amount(amount: u128, dao_share_bps: u32) -> (u128, u128) {
    let dao_share: u128 = div_floor(amount, 10_000) * dao_share_bps as u128
        + div_floor((amount % 10_000) * dao_share_bps as u128, 10_000);

    (dao_share, amount - dao_share)
}
