use crate::errors::ContractErrors;
use crate::storage::core::{CoreDataKeys, CoreStorageFunc, ValidatorParams};
use crate::storage::proposals::{PayoutProposal, ProposalsStorageFunc};
use num_integer::{div_ceil, div_rem};
use soroban_sdk::{panic_with_error, Env};

pub const BPS_DENOMINATOR: u128 = 10_000;

/// Token contracts take `i128` amounts
pub const MAX_TOKEN_AMOUNT: u128 = i128::MAX as u128;

pub fn validate_admin(e: &Env) {
    match e._core().address(&CoreDataKeys::Admin) {
        None => panic_with_error!(&e, &ContractErrors::NotStarted),
        Some(v) => v.require_auth(),
    }
}

pub fn validate_params(e: &Env, params: &ValidatorParams) {
    if params.pass_ratio_bps > 10_000
        || params.voting_period == 0
        || params.min_validator_likes == 0
    {
        panic_with_error!(&e, &ContractErrors::InvalidParameter);
    }
}

pub fn get_params(e: &Env) -> ValidatorParams {
    e._core().params().unwrap_or_else(|| {
        panic_with_error!(&e, &ContractErrors::NotStarted);
    })
}

pub fn get_proposal(e: &Env, id: &u64) -> PayoutProposal {
    e._proposals().proposal(id).unwrap_or_else(|| {
        panic_with_error!(&e, &ContractErrors::ProposalDoesntExist);
    })
}

/// ceil(amount * bps / 10_000), `bps` is at most 10_000 so nothing overflows
pub fn bps_share_ceil(amount: u128, bps: u32) -> u128 {
    let (quotient, remainder) = div_rem(amount, BPS_DENOMINATOR);
    quotient * (bps as u128) + div_ceil(remainder * (bps as u128), BPS_DENOMINATOR)
}

pub fn has_passed(proposal: &PayoutProposal, params: &ValidatorParams) -> bool {
    let total: u128 = proposal.votes_for.saturating_add(proposal.votes_against);

    if total == 0 || total < params.quorum {
        return false;
    }

    proposal.votes_for >= bps_share_ceil(total, params.pass_ratio_bps)
}

pub fn is_payout_executable(proposal: &PayoutProposal, params: &ValidatorParams) -> bool {
    proposal.finalized
        && proposal.passed
        && proposal.validator_likes >= params.min_validator_likes
        && !proposal.executed
}
