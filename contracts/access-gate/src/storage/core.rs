use soroban_sdk::{contracttype, Address, Env};

pub const DAY_IN_LEDGERS: u32 = 17280;
pub const INSTANCE_BUMP_CONSTANT: u32 = DAY_IN_LEDGERS * 28;
pub const INSTANCE_BUMP_CONSTANT_THRESHOLD: u32 = DAY_IN_LEDGERS * 14;

/// Capability tiers, ordered from the weakest to the strongest.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Tier {
    None = 0,
    Speak = 1,
    Vote = 2,
    Propose = 3,
}

/// Token balances a party needs to hold for each tier.
/// Expected to satisfy `speak <= vote <= propose` but that is up to whoever sets them.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Thresholds {
    pub speak: u128,
    pub vote: u128,
    pub propose: u128,
}

#[contracttype]
pub enum CoreDataKeys {
    Admin,
    Token,
    Thresholds,
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

    pub fn thresholds(&self) -> Option<Thresholds> {
        self.env
            .storage()
            .instance()
            .get(&CoreDataKeys::Thresholds)
    }

    pub fn set_thresholds(&self, thresholds: &Thresholds) {
        self.env
            .storage()
            .instance()
            .set(&CoreDataKeys::Thresholds, thresholds);
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
