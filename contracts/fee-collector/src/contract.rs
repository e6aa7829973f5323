use crate::errors::ContractErrors;
use crate::storage::core::{CoreStorageFunc, FeeSplit};
use crate::utils::core::{split_amount, validate_admin, validate_split, MAX_TOKEN_AMOUNT};
use soroban_sdk::{contract, contractimpl, panic_with_error, symbol_short, token, Address, Env};

pub trait FeeCollectorContractTrait {
    fn init(e: Env, admin: Address, split: FeeSplit);
    fn set_admin(e: Env, address: Address);
    fn set_fee_split(e: Env, split: FeeSplit);
    fn get_fee_split(e: Env) -> FeeSplit;

    /// Pays `amount` of `token` held by the collector to the dao and the founder
    fn distribute(e: Env, token: Address, amount: u128) -> (u128, u128);
}

#[contract]
pub struct FeeCollectorContract;

#[contractimpl]
impl FeeCollectorContractTrait for FeeCollectorContract {
    fn init(e: Env, admin: Address, split: FeeSplit) {
        if e._core().admin().is_some() {
            panic_with_error!(&e, &ContractErrors::AlreadyInitialized);
        }

        validate_split(&e, &split);

        e._core().set_admin(&admin);
        e._core().set_fee_split(&split);
        e._core().bump();
    }

    fn set_admin(e: Env, address: Address) {
        validate_admin(&e);
        e._core().set_admin(&address);
        e._core().bump();
    }

    fn set_fee_split(e: Env, split: FeeSplit) {
        validate_admin(&e);
        validate_split(&e, &split);
        e._core().set_fee_split(&split);
        e._core().bump();

        e.events()
            .publish((symbol_short!("fee"), symbol_short!("config")), split);
    }

    fn get_fee_split(e: Env) -> FeeSplit {
        e._core().bump();
        e._core().fee_split().unwrap_or_else(|| {
            panic_with_error!(&e, &ContractErrors::NotStarted);
        })
    }

    fn distribute(e: Env, token: Address, amount: u128) -> (u128, u128) {
        if amount == 0 || amount > MAX_TOKEN_AMOUNT {
            panic_with_error!(&e, &ContractErrors::InvalidParameter);
        }

        let split: FeeSplit = Self::get_fee_split(e.clone());
        let (dao_share, founder_share) = split_amount(amount, split.dao_share_bps);

        let token_client = token::Client::new(&e, &token);
        if dao_share > 0 {
            token_client.transfer(
                &e.current_contract_address(),
                &split.dao,
                &(dao_share as i128),
            );
        }
        if founder_share > 0 {
            token_client.transfer(
                &e.current_contract_address(),
                &split.founder,
                &(founder_share as i128),
            );
        }

        e.events().publish(
            (symbol_short!("fee"), symbol_short!("split")),
            (token, dao_share, founder_share),
        );

        (dao_share, founder_share)
    }
}
