use crate::errors::ContractErrors;
use crate::storage::core::GovernParams;
use crate::storage::proposals::{Proposal, ProposalStatus, ProposalsStorageFunc};
use num_integer::{div_ceil, div_rem};
use soroban_sdk::{panic_with_error, Env};

pub const BPS_DENOMINATOR: u128 = 10_000;

pub fn get_proposal(e: &Env, id: &u64) -> Proposal {
    e._proposals().proposal(id).unwrap_or_else(|| {
        panic_with_error!(&e, &ContractErrors::ProposalDoesntExist);
    })
}

pub fn is_voting_open(now: u64, proposal: &Proposal) -> bool {
    now <= proposal.ends_at && !proposal.executed
}

pub fn has_voting_ended(now: u64, proposal: &Proposal) -> bool {
    now > proposal.ends_at
}

/// Quorum counts both sides, an empty proposal never passes even with a zero quorum
pub fn has_passed(proposal: &Proposal, params: &GovernParams) -> bool {
    let total: u128 = proposal.votes_for.saturating_add(proposal.votes_against);

    if proposal.voters == 0 || total < params.quorum {
        return false;
    }

    proposal.votes_for >= pass_threshold(total, params.pass_ratio_bps)
}

/// Smallest `votes_for` reaching `pass_ratio_bps` of `total`, i.e.
/// ceil(total * pass_ratio_bps / 10_000) computed without the full product
pub fn pass_threshold(total: u128, pass_ratio_bps: u32) -> u128 {
    let (quotient, remainder) = div_rem(total, BPS_DENOMINATOR);
    quotient * (pass_ratio_bps as u128)
        + div_ceil(remainder * (pass_ratio_bps as u128), BPS_DENOMINATOR)
}

pub fn is_proposal_executable(now: u64, proposal: &Proposal, params: &GovernParams) -> bool {
    has_voting_ended(now, proposal)
        && has_passed(proposal, params)
        && proposal.verified
        && !proposal.executed
}

pub fn proposal_status(now: u64, proposal: &Proposal) -> ProposalStatus {
    if proposal.executed {
        ProposalStatus::Executed
    } else if !has_voting_ended(now, proposal) {
        ProposalStatus::Voting
    } else if proposal.verified {
        ProposalStatus::Verified
    } else {
        ProposalStatus::Unverified
    }
}
