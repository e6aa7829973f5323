use soroban_sdk::{contracttype, Address, Env, Vec};

pub const DAY_IN_LEDGERS: u32 = 17280;
pub const INSTANCE_BUMP_CONSTANT: u32 = DAY_IN_LEDGERS * 28;
pub const INSTANCE_BUMP_CONSTANT_THRESHOLD: u32 = DAY_IN_LEDGERS * 14;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ValidatorParams {
    /// Total stake (for and against) a proposal needs before its result counts
    pub quorum: u128,
    pub pass_ratio_bps: u32,
    pub min_validator_likes: u32,
    /// In seconds
    pub voting_period: u64,
}

#[contracttype]
pub enum CoreDataKeys {
    Admin,
    StakeToken,
    Params,
    Validators,
    ProposalsCount,
    /// Stake token amount escrowed by voters, it can never be paid out
    LockedStake,
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

    pub fn params(&self) -> Option<ValidatorParams> {
        self.env.storage().instance().get(&CoreDataKeys::Params)
    }

    pub fn set_params(&self, params: &ValidatorParams) {
        self.env
            .storage()
            .instance()
            .set(&CoreDataKeys::Params, params);
    }

    pub fn validators(&self) -> Vec<Address> {
        self.env
            .storage()
            .instance()
            .get(&CoreDataKeys::Validators)
            .unwrap_or(Vec::new(&self.env))
    }

    pub fn set_validators(&self, validators: &Vec<Address>) {
        self.env
            .storage()
            .instance()
            .set(&CoreDataKeys::Validators, validators);
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

    pub fn locked_stake(&self) -> u128 {
        self.env
            .storage()
            .instance()
            .get(&CoreDataKeys::LockedStake)
            .unwrap_or(0)
    }

    pub fn set_locked_stake(&self, amount: &u128) {
        self.env
            .storage()
            .instance()
            .set(&CoreDataKeys::LockedStake, amount);
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
