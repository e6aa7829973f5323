use crate::storage::core::DAY_IN_LEDGERS;
use soroban_sdk::{contracttype, Address, Env, Vec};

pub const PERSISTENT_BUMP_CONSTANT: u32 = DAY_IN_LEDGERS * 60;
pub const PERSISTENT_BUMP_CONSTANT_THRESHOLD: u32 = DAY_IN_LEDGERS * 30;

#[contracttype]
pub enum ManagersDataKeys {
    /// Active managers in the order they were appointed, it decides who gets the remainder units
    Roster,
}

pub struct Managers {
    pub env: Env,
}

impl Managers {
    #[inline(always)]
    fn new(e: &Env) -> Managers {
        Managers { env: e.clone() }
    }

    pub fn roster(&self) -> Vec<Address> {
        self.env
            .storage()
            .persistent()
            .get(&ManagersDataKeys::Roster)
            .unwrap_or(Vec::new(&self.env))
    }

    pub fn set_roster(&self, roster: &Vec<Address>) {
        self.env
            .storage()
            .persistent()
            .set(&ManagersDataKeys::Roster, roster);
    }

    pub fn bump(&self) {
        if self
            .env
            .storage()
            .persistent()
            .has(&ManagersDataKeys::Roster)
        {
            self.env.storage().persistent().extend_ttl(
                &ManagersDataKeys::Roster,
                PERSISTENT_BUMP_CONSTANT_THRESHOLD,
                PERSISTENT_BUMP_CONSTANT,
            );
        }
    }
}

pub trait ManagersStorageFunc {
    fn _managers(&self) -> Managers;
}

impl ManagersStorageFunc for Env {
    #[inline(always)]
    fn _managers(&self) -> Managers {
        Managers::new(self)
    }
}
