use crate::storage::core::DAY_IN_LEDGERS;
use soroban_sdk::{contracttype, Address, Env, String};

pub const PERSISTENT_BUMP_CONSTANT: u32 = DAY_IN_LEDGERS * 60;
pub const PERSISTENT_BUMP_CONSTANT_THRESHOLD: u32 = DAY_IN_LEDGERS * 30;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum OptionalAddress {
    None,
    Some(Address),
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Proposal {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub beneficiary: Address,
    pub amount: u128,
    pub proposer: Address,
    pub stake_amount: u128,
    pub created_at: u64,
    pub ends_at: u64,
    pub votes_for: u128,
    pub votes_against: u128,
    pub voters: u32,
    pub verified: bool,
    /// Receives the verifier reward when the proposal is executed
    pub verifier: OptionalAddress,
    pub executed: bool,
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ProposalStatus {
    Voting,
    Verified,
    Unverified,
    Executed,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Vote {
    pub support: bool,
    /// Governance token balance of the voter when the vote was cast
    pub weight: u128,
    pub stake: u128,
    pub claimed: bool,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VoteIndex {
    pub proposal_id: u64,
    pub voter: Address,
}

#[contracttype]
pub enum ProposalsDataKeys {
    Proposal(u64),
    Vote(VoteIndex),
}

pub struct Proposals {
    pub env: Env,
}

impl Proposals {
    #[inline(always)]
    fn new(e: &Env) -> Proposals {
        Proposals { env: e.clone() }
    }

    pub fn proposal(&self, id: &u64) -> Option<Proposal> {
        self.env
            .storage()
            .persistent()
            .get(&ProposalsDataKeys::Proposal(*id))
    }

    pub fn set_proposal(&self, proposal: &Proposal) {
        self.env
            .storage()
            .persistent()
            .set(&ProposalsDataKeys::Proposal(proposal.id), proposal);
    }

    pub fn bump_proposal(&self, id: &u64) {
        self.env.storage().persistent().extend_ttl(
            &ProposalsDataKeys::Proposal(*id),
            PERSISTENT_BUMP_CONSTANT_THRESHOLD,
            PERSISTENT_BUMP_CONSTANT,
        );
    }

    pub fn vote(&self, id: &u64, voter: &Address) -> Option<Vote> {
        self.env
            .storage()
            .persistent()
            .get(&ProposalsDataKeys::Vote(VoteIndex {
                proposal_id: *id,
                voter: voter.clone(),
            }))
    }

    pub fn set_vote(&self, id: &u64, voter: &Address, vote: &Vote) {
        self.env.storage().persistent().set(
            &ProposalsDataKeys::Vote(VoteIndex {
                proposal_id: *id,
                voter: voter.clone(),
            }),
            vote,
        );
    }

    pub fn bump_vote(&self, id: &u64, voter: &Address) {
        self.env.storage().persistent().extend_ttl(
            &ProposalsDataKeys::Vote(VoteIndex {
                proposal_id: *id,
                voter: voter.clone(),
            }),
            PERSISTENT_BUMP_CONSTANT_THRESHOLD,
            PERSISTENT_BUMP_CONSTANT,
        );
    }
}

pub trait ProposalsStorageFunc {
    fn _proposals(&self) -> Proposals;
}

impl ProposalsStorageFunc for Env {
    #[inline(always)]
    fn _proposals(&self) -> Proposals {
        Proposals::new(self)
    }
}
