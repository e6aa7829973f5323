use crate::storage::core::DAY_IN_LEDGERS;
use soroban_sdk::{contracttype, Address, Env};

pub const PERSISTENT_BUMP_CONSTANT: u32 = DAY_IN_LEDGERS * 60;
pub const PERSISTENT_BUMP_CONSTANT_THRESHOLD: u32 = DAY_IN_LEDGERS * 30;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PayoutProposal {
    pub id: u64,
    pub proposer: Address,
    /// Asset paid out of the treasury
    pub token: Address,
    pub recipient: Address,
    pub amount: u128,
    pub created_at: u64,
    pub ends_at: u64,
    pub votes_for: u128,
    pub votes_against: u128,
    pub validator_likes: u32,
    pub validator_dislikes: u32,
    pub finalized: bool,
    /// Frozen by `finalize`, validator decisions don't change it
    pub passed: bool,
    pub executed: bool,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakeVote {
    pub support: bool,
    pub stake: u128,
    pub claimed: bool,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParticipantIndex {
    pub proposal_id: u64,
    pub participant: Address,
}

#[contracttype]
pub enum ProposalsDataKeys {
    Proposal(u64),
    Vote(ParticipantIndex),
    /// The decision a validator took on a proposal
    Validation(ParticipantIndex),
}

pub struct Proposals {
    pub env: Env,
}

impl Proposals {
    #[inline(always)]
    fn new(e: &Env) -> Proposals {
        Proposals { env: e.clone() }
    }

    fn bump_key(&self, key: &ProposalsDataKeys) {
        self.env.storage().persistent().extend_ttl(
            key,
            PERSISTENT_BUMP_CONSTANT_THRESHOLD,
            PERSISTENT_BUMP_CONSTANT,
        );
    }

    pub fn proposal(&self, id: &u64) -> Option<PayoutProposal> {
        self.env
            .storage()
            .persistent()
            .get(&ProposalsDataKeys::Proposal(*id))
    }

    pub fn set_proposal(&self, proposal: &PayoutProposal) {
        let key: ProposalsDataKeys = ProposalsDataKeys::Proposal(proposal.id);
        self.env.storage().persistent().set(&key, proposal);
        self.bump_key(&key);
    }

    pub fn vote(&self, id: &u64, voter: &Address) -> Option<StakeVote> {
        self.env
            .storage()
            .persistent()
            .get(&ProposalsDataKeys::Vote(ParticipantIndex {
                proposal_id: *id,
                participant: voter.clone(),
            }))
    }

    pub fn set_vote(&self, id: &u64, voter: &Address, vote: &StakeVote) {
        let key: ProposalsDataKeys = ProposalsDataKeys::Vote(ParticipantIndex {
            proposal_id: *id,
            participant: voter.clone(),
        });
        self.env.storage().persistent().set(&key, vote);
        self.bump_key(&key);
    }

    pub fn validation(&self, id: &u64, validator: &Address) -> Option<bool> {
        self.env
            .storage()
            .persistent()
            .get(&ProposalsDataKeys::Validation(ParticipantIndex {
                proposal_id: *id,
                participant: validator.clone(),
            }))
    }

    pub fn set_validation(&self, id: &u64, validator: &Address, approve: &bool) {
        let key: ProposalsDataKeys = ProposalsDataKeys::Validation(ParticipantIndex {
            proposal_id: *id,
            participant: validator.clone(),
        });
        self.env.storage().persistent().set(&key, approve);
        self.bump_key(&key);
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
