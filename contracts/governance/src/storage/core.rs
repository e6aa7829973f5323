use soroban_sdk::{contracttype, Address, Env};

pub const DAY_IN_LEDGERS: u32 = 17280;
pub const INSTANCE_BUMP_CONSTANT: u32 = DAY_IN_LEDGERS * 28;
pub const INSTANCE_BUMP_CONSTANT_THRESHOLD: u32 = DAY_IN_LEDGERS * 14;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CoreState {
    pub governance_token: Address,
    pub gate: Address,
    pub fund: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GovernParams {
    /// Escrowed from the proposer, returned on execution. When the vote fails the proposer can
    /// take it back with `claim_proposal_stake`.
    pub proposal_stake: u128,
    /// Escrowed from every voter, claimable after the voting window
    pub vote_stake: u128,
    /// In seconds
    pub voting_period: u64,
    pub quorum: u128,
    pub pass_ratio_bps: u32,
    pub manager_stake: u128,
}

#[contracttype]
pub enum CoreDataKeys {
    Admin,
    Verifier,
    CoreState,
    Params,
    ProposalsCount,
}

pub struct Core {
    pub env: Env,
}

impl Core {
    #[inline(always)]
    pub fn new(e: &Env) -> Core {
        Core { env: e.clone() }
    }

    pub fn address(&self, key: &CoreDataKeys) -> Option<Address> {
        self.env.storage().instance().get(key)
    }

    pub fn set_address(&self, key: &CoreDataKeys, address: &Address) {
        self.env.storage().instance().set(key, address);
    }

    pub fn state(&self) -> Option<CoreState> {
        self.env.storage().instance().get(&CoreDataKeys::CoreState)
    }

    pub fn set_state(&self, state: &CoreState) {
        self.env
            .storage()
            .instance()
            .set(&CoreDataKeys::CoreState, state);
    }

    pub fn params(&self) -> Option<GovernParams> {
        self.env.storage().instance().get(&CoreDataKeys::Params)
    }

    pub fn set_params(&self, params: &GovernParams) {
        self.env
            .storage()
            .instance()
            .set(&CoreDataKeys::Params, params);
    }

    pub fn proposals_count(&self) -> u64 {
        self.env
            .storage()
            .instance()
            .get(&CoreDataKeys::ProposalsCount)
            .unwrap_or(0)
    }

    pub fn set_proposals_count(&self, count: &u64) {
        self.env
            .storage()
            .instance()
            .set(&CoreDataKeys::ProposalsCount, count);
    }

    pub fn bump(&self) {
        self.env
            .storage()
            .instance()
            .extend_ttl(INSTANCE_BUMP_CONSTANT_THRESHOLD, INSTANCE_BUMP_CONSTANT);
    }
}

pub trait CoreStorageFunc {
    fn _core(&self) -> Core;
}

impl CoreStorageFunc for Env {
    #[inline(always)]
    fn _core(&self) -> Core {
        Core::new(self)
    }
}
