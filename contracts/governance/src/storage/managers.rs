use crate::storage::core::DAY_IN_LEDGERS;
use soroban_sdk::{contracttype, Address, Env, Vec};

pub const PERSISTENT_BUMP_CONSTANT: u32 = DAY_IN_LEDGERS * 60;
pub const PERSISTENT_BUMP_CONSTANT_THRESHOLD: u32 = DAY_IN_LEDGERS * 30;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Manager {
    pub address: Address,
    pub term_end: u64,
    pub stake_locked: u128,
    pub active: bool,
}

#[contracttype]
pub enum ManagersDataKeys {
    Manager(Address),
    /// Active managers in appointment order, mirrored into the fund
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

    pub fn manager(&self, address: &Address) -> Option<Manager> {
        self.env
            .storage()
            .persistent()
            .get(&ManagersDataKeys::Manager(address.clone()))
    }

    pub fn set_manager(&self, manager: &Manager) {
        self.env.storage().persistent().set(
            &ManagersDataKeys::Manager(manager.address.clone()),
            manager,
        );
    }

    pub fn remove_manager(&self, address: &Address) {
        self.env
            .storage()
            .persistent()
            .remove(&ManagersDataKeys::Manager(address.clone()));
    }

    pub fn bump_manager(&self, address: &Address) {
        self.env.storage().persistent().extend_ttl(
            &ManagersDataKeys::Manager(address.clone()),
            PERSISTENT_BUMP_CONSTANT_THRESHOLD,
            PERSISTENT_BUMP_CONSTANT,
        );
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
        self.env.storage().persistent().extend_ttl(
            &ManagersDataKeys::Roster,
            PERSISTENT_BUMP_CONSTANT_THRESHOLD,
            PERSISTENT_BUMP_CONSTANT,
        );
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
