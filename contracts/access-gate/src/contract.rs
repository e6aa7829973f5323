use crate::errors::ContractErrors;
use crate::storage::core::{CoreDataKeys, CoreStorageFunc, Thresholds, Tier};
use crate::utils::core::{tier_for_balance, validate_admin};
use soroban_sdk::{contract, contractimpl, panic_with_error, symbol_short, token, Address, Env};

pub trait AccessGateContractTrait {
    fn init(e: Env, admin: Address, token: Address, thresholds: Thresholds);
    fn set_admin(e: Env, address: Address);
    fn set_thresholds(e: Env, speak: u128, vote: u128, propose: u128);
    fn thresholds(e: Env) -> Thresholds;
    fn token(e: Env) -> Address;
    fn tier(e: Env, party: Address) -> Tier;
}

#[contract]
pub struct AccessGateContract;

#[contractimpl]
impl AccessGateContractTrait for AccessGateContract {
    fn init(e: Env, admin: Address, token: Address, thresholds: Thresholds) {
        if e._core().address(&CoreDataKeys::Admin).is_some() {
            panic_with_error!(&e, &ContractErrors::AlreadyInitialized);
        }

        e._core().set_address(&CoreDataKeys::Admin, &admin);
        e._core().set_address(&CoreDataKeys::Token, &token);
        e._core().set_thresholds(&thresholds);
        e._core().bump();
    }

    fn set_admin(e: Env, address: Address) {
        validate_admin(&e);
        e._core().set_address(&CoreDataKeys::Admin, &address);
        e._core().bump();
    }

    fn set_thresholds(e: Env, speak: u128, vote: u128, propose: u128) {
        validate_admin(&e);

        let thresholds: Thresholds = Thresholds {
            speak,
            vote,
            propose,
        };
        e._core().set_thresholds(&thresholds);
        e._core().bump();

        e.events().publish(
            (symbol_short!("gate"), symbol_short!("thresh")),
            (speak, vote, propose),
        );
    }

    fn thresholds(e: Env) -> Thresholds {
        e._core().bump();
        e._core().thresholds().unwrap_or_else(|| {
            panic_with_error!(&e, &ContractErrors::NotStarted);
        })
    }

    fn token(e: Env) -> Address {
        e._core().bump();
        e._core()
            .address(&CoreDataKeys::Token)
            .unwrap_or_else(|| {
                panic_with_error!(&e, &ContractErrors::NotStarted);
            })
    }

    fn tier(e: Env, party: Address) -> Tier {
        let thresholds: Thresholds = Self::thresholds(e.clone());
        let balance: i128 = token::Client::new(&e, &Self::token(e.clone())).balance(&party);

        // Token balances are never negative, a negative value would be a broken token.
        if balance < 0 {
            return Tier::None;
        }

        tier_for_balance(balance as u128, &thresholds)
    }
}
