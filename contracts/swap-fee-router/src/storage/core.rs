use soroban_sdk::{contracttype, Address, Env};

pub const DAY_IN_LEDGERS: u32 = 17280;
pub const INSTANCE_BUMP_CONSTANT: u32 = DAY_IN_LEDGERS * 28;
pub const INSTANCE_BUMP_CONSTANT_THRESHOLD: u32 = DAY_IN_LEDGERS * 14;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RouterParams {
    pub venue: Address,
    pub collector: Address,
    pub fee_bps: u32,
}

#[contracttype]
pub enum CoreDataKeys {
    Admin,
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

    pub fn admin(&self) -> Option<Address> {
        self.env.storage().instance().get(&CoreDataKeys::Admin)
    }

    pub fn set_admin(&self, address: &Address) {
        self.env
            .storage()
            .instance()
            .set(&CoreDataKeys::Admin, address);
    }

    pub fn params(&self) -> Option<RouterParams> {
        self.env.storage().instance().get(&CoreDataKeys::Params)
    }

    pub fn set_params(&self, params: &RouterParams) {
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
