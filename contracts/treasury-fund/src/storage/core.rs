use soroban_sdk::{contracttype, Address, Env};

pub const DAY_IN_LEDGERS: u32 = 17280;
pub const INSTANCE_BUMP_CONSTANT: u32 = DAY_IN_LEDGERS * 28;
pub const INSTANCE_BUMP_CONSTANT_THRESHOLD: u32 = DAY_IN_LEDGERS * 14;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FundParams {
    /// The governance contract, the only caller allowed to move funds or touch the roster
    pub dao: Address,
    /// Receives whatever is left of the ops keep after the rewards
    pub founder: Address,
    /// Share of every disbursement kept for operations, 1000 = 10%
    pub ops_keep_bps: u32,
    /// Verifier reward and manager pool, each one computed as amount * reward_ppm / 1_000_000
    pub reward_ppm: u32,
    pub max_managers: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Disbursement {
    pub beneficiary_amount: u128,
    pub verifier_reward: u128,
    pub managers_reward: u128,
    pub ops_remainder: u128,
    pub managers: u32,
}

#[contracttype]
pub enum CoreDataKeys {
    Admin,
    NativeAsset,
    Params,
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

    pub fn params(&self) -> Option<FundParams> {
        self.env.storage().instance().get(&CoreDataKeys::Params)
    }

    pub fn set_params(&self, params: &FundParams) {
        self.env
            .storage()
            .instance()
            .set(&CoreDataKeys::Params, params);
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
