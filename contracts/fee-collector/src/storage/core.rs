use soroban_sdk::{contracttype, Address, Env};

pub const DAY_IN_LEDGERS: u32 = 17280;
pub const INSTANCE_BUMP_CONSTANT: u32 = DAY_IN_LEDGERS * 28;
pub const INSTANCE_BUMP_CONSTANT_THRESHOLD: u32 = DAY_IN_LEDGERS * 14;

/// Both shares are in bps and must add up to 10_000
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FeeSplit {
    pub dao: Address,
    pub founder: Address,
    pub dao_share_bps: u32,
    pub founder_share_bps: u32,
}

#[contracttype]
pub enum CoreDataKeys {
    Admin,
    FeeSplit,
}

pub struct Core {
    pub env: Env,
}

impl Core {
    #[inline(always)]
    pub fn new(e: &Env) -> Core {
        Core { env: e.clone() }
    }

    pub fn admin(&self) -> Option<Address> {
        self.env.storage().instance().get(&CoreDataKeys::Admin)
    }

    pub fn set_admin(&self, address: &Address) {
        self.env
            .storage()
            .instance()
            .set(&CoreDataKeys::Admin, address);
    }

    pub fn fee_split(&self) -> Option<FeeSplit> {
        self.env.storage().instance().get(&CoreDataKeys::FeeSplit)
    }

    pub fn set_fee_split(&self, split: &FeeSplit) {
        self.env
            .storage()
            .instance()
            .set(&CoreDataKeys::FeeSplit, split);
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
