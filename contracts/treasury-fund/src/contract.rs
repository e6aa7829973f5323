use crate::errors::ContractErrors;
use crate::storage::core::{CoreDataKeys, CoreStorageFunc, Disbursement, FundParams};
use crate::storage::managers::ManagersStorageFunc;
use crate::utils::core::{validate_admin, validate_dao, validate_params, MAX_TOKEN_AMOUNT};
use crate::utils::splits::{calculate_split, manager_share, Split};
use log::error;
use soroban_sdk::{
    contract, contractimpl, panic_with_error, symbol_short, token, Address, Env, Vec,
};

pub trait TreasuryFundContractTrait {
    fn init(e: Env, admin: Address, native_asset: Address, params: FundParams);
    fn set_admin(e: Env, address: Address);
    fn set_fund_params(e: Env, params: FundParams);
    fn get_params(e: Env) -> FundParams;
    fn native_asset(e: Env) -> Address;

    fn donate(e: Env, donor: Address, amount: u128);
    fn balance(e: Env) -> u128;

    fn add_managers(e: Env, managers: Vec<Address>);
    fn remove_managers(e: Env, managers: Vec<Address>);
    fn get_active_managers(e: Env) -> Vec<Address>;
    fn max_managers(e: Env) -> u32;

    fn disburse(e: Env, beneficiary: Address, amount: u128, verifier: Address) -> Disbursement;
}

#[contract]
pub struct TreasuryFundContract;

#[contractimpl]
impl TreasuryFundContractTrait for TreasuryFundContract {
    fn init(e: Env, admin: Address, native_asset: Address, params: FundParams) {
        if e._core().address(&CoreDataKeys::Admin).is_some() {
            panic_with_error!(&e, &ContractErrors::AlreadyInitialized);
        }

        validate_params(&e, &params, 0);

        e._core().set_address(&CoreDataKeys::Admin, &admin);
        e._core()
            .set_address(&CoreDataKeys::NativeAsset, &native_asset);
        e._core().set_params(&params);
        e._core().bump();
    }

    fn set_admin(e: Env, address: Address) {
        validate_admin(&e);
        e._core().set_address(&CoreDataKeys::Admin, &address);
        e._core().bump();
    }

    fn set_fund_params(e: Env, params: FundParams) {
        validate_admin(&e);
        validate_params(&e, &params, e._managers().roster().len());

        e._core().set_params(&params);
        e._core().bump();

        e.events().publish(
            (symbol_short!("fund"), symbol_short!("params")),
            params,
        );
    }

    fn get_params(e: Env) -> FundParams {
        e._core().bump();
        e._core().params().unwrap_or_else(|| {
            panic_with_error!(&e, &ContractErrors::NotStarted);
        })
    }

    fn native_asset(e: Env) -> Address {
        e._core().bump();
        e._core()
            .address(&CoreDataKeys::NativeAsset)
            .unwrap_or_else(|| {
                panic_with_error!(&e, &ContractErrors::NotStarted);
            })
    }

    fn donate(e: Env, donor: Address, amount: u128) {
        donor.require_auth();

        if amount == 0 || amount > MAX_TOKEN_AMOUNT {
            panic_with_error!(&e, &ContractErrors::InvalidParameter);
        }

        let result = token::Client::new(&e, &Self::native_asset(e.clone())).try_transfer(
            &donor,
            &e.current_contract_address(),
            &(amount as i128),
        );

        if result.is_err() {
            error!("Donation transfer failed");
            panic_with_error!(&e, &ContractErrors::InsufficientFunds);
        }

        e.events().publish(
            (symbol_short!("fund"), symbol_short!("donate")),
            (donor, amount),
        );
    }

    fn balance(e: Env) -> u128 {
        let balance: i128 = token::Client::new(&e, &Self::native_asset(e.clone()))
            .balance(&e.current_contract_address());

        balance as u128
    }

    fn add_managers(e: Env, managers: Vec<Address>) {
        let params: FundParams = validate_dao(&e);

        let mut roster: Vec<Address> = e._managers().roster();
        for manager in managers.iter() {
            if roster.contains(&manager) {
                panic_with_error!(&e, &ContractErrors::DuplicateManager);
            }
            roster.push_back(manager);
        }

        if roster.len() > params.max_managers {
            panic_with_error!(&e, &ContractErrors::MaxManagersExceeded);
        }

        e._managers().set_roster(&roster);
        e._managers().bump();
        e._core().bump();

        e.events().publish(
            (symbol_short!("fund"), symbol_short!("mgr_add")),
            managers,
        );
    }

    fn remove_managers(e: Env, managers: Vec<Address>) {
        validate_dao(&e);

        let mut roster: Vec<Address> = Vec::new(&e);
        for manager in e._managers().roster().iter() {
            if !managers.contains(&manager) {
                roster.push_back(manager);
            }
        }

        e._managers().set_roster(&roster);
        e._managers().bump();
        e._core().bump();

        e.events().publish(
            (symbol_short!("fund"), symbol_short!("mgr_rm")),
            managers,
        );
    }

    fn get_active_managers(e: Env) -> Vec<Address> {
        e._managers().bump();
        e._managers().roster()
    }

    fn max_managers(e: Env) -> u32 {
        Self::get_params(e).max_managers
    }

    fn disburse(e: Env, beneficiary: Address, amount: u128, verifier: Address) -> Disbursement {
        let params: FundParams = validate_dao(&e);

        if amount == 0 || amount > MAX_TOKEN_AMOUNT {
            panic_with_error!(&e, &ContractErrors::InvalidParameter);
        }

        if Self::balance(e.clone()) < amount {
            panic_with_error!(&e, &ContractErrors::InsufficientFunds);
        }

        let roster: Vec<Address> = e._managers().roster();
        let split: Split = calculate_split(
            amount,
            params.ops_keep_bps,
            params.reward_ppm,
            roster.len(),
        );

        let native_asset_address: Address = Self::native_asset(e.clone());
        let native_asset: token::Client = token::Client::new(&e, &native_asset_address);
        let pay = |to: &Address, value: u128| {
            if value > 0 {
                native_asset.transfer(&e.current_contract_address(), to, &(value as i128));
            }
        };

        pay(&beneficiary, split.beneficiary_amount);
        pay(&verifier, split.verifier_reward);
        for (index, manager) in roster.iter().enumerate() {
            pay(
                &manager,
                manager_share(split.managers_reward, roster.len(), index as u32),
            );
        }
        pay(&params.founder, split.ops_remainder);

        let disbursement: Disbursement = Disbursement {
            beneficiary_amount: split.beneficiary_amount,
            verifier_reward: split.verifier_reward,
            managers_reward: split.managers_reward,
            ops_remainder: split.ops_remainder,
            managers: roster.len(),
        };

        e._managers().bump();
        e._core().bump();

        e.events().publish(
            (symbol_short!("fund"), symbol_short!("disburse")),
            (beneficiary, amount, disbursement.clone()),
        );

        disbursement
    }
}
