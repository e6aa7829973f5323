use crate::errors::ContractErrors;
use crate::storage::core::{CoreStorageFunc, RouterParams};
use crate::utils::core::{calculate_fee, validate_admin, validate_params, MAX_TOKEN_AMOUNT};
use crate::{collector, venue};
use log::error;
use soroban_sdk::{
    contract, contractimpl, panic_with_error, symbol_short, token, Address, Env, Vec,
};

pub trait SwapFeeRouterContractTrait {
    fn init(e: Env, admin: Address, params: RouterParams);
    fn set_admin(e: Env, address: Address);
    fn set_router_params(e: Env, params: RouterParams);
    fn get_router_params(e: Env) -> RouterParams;

    fn swap_with_fee(
        e: Env,
        caller: Address,
        amount_in: u128,
        amount_out_min: u128,
        path: Vec<Address>,
        to: Address,
        deadline: u64,
    ) -> u128;
}

#[contract]
pub struct SwapFeeRouterContract;

#[contractimpl]
impl SwapFeeRouterContractTrait for SwapFeeRouterContract {
    fn init(e: Env, admin: Address, params: RouterParams) {
        if e._core().admin().is_some() {
            panic_with_error!(&e, &ContractErrors::AlreadyInitialized);
        }

        validate_params(&e, &params);

        e._core().set_admin(&admin);
        e._core().set_params(&params);
        e._core().bump();
    }

    fn set_admin(e: Env, address: Address) {
        validate_admin(&e);
        e._core().set_admin(&address);
        e._core().bump();
    }

    fn set_router_params(e: Env, params: RouterParams) {
        validate_admin(&e);
        validate_params(&e, &params);
        e._core().set_params(&params);
        e._core().bump();

        e.events()
            .publish((symbol_short!("swap"), symbol_short!("config")), params);
    }

    fn get_router_params(e: Env) -> RouterParams {
        e._core().bump();
        e._core().params().unwrap_or_else(|| {
            panic_with_error!(&e, &ContractErrors::NotStarted);
        })
    }

    fn swap_with_fee(
        e: Env,
        caller: Address,
        amount_in: u128,
        amount_out_min: u128,
        path: Vec<Address>,
        to: Address,
        deadline: u64,
    ) -> u128 {
        caller.require_auth();

        if e.ledger().timestamp() > deadline {
            panic_with_error!(&e, &ContractErrors::DeadlineExpired);
        }

        if amount_in == 0 || amount_in > MAX_TOKEN_AMOUNT || path.len() < 2 {
            panic_with_error!(&e, &ContractErrors::InvalidParameter);
        }

        let params: RouterParams = Self::get_router_params(e.clone());
        let token_in: Address = path.first().unwrap_or_else(|| {
            panic_with_error!(&e, &ContractErrors::InvalidParameter);
        });
        let token_out: Address = path.last().unwrap_or_else(|| {
            panic_with_error!(&e, &ContractErrors::InvalidParameter);
        });

        let token_in_client = token::Client::new(&e, &token_in);
        token_in_client.transfer(&caller, &e.current_contract_address(), &(amount_in as i128));

        let (fee, net) = calculate_fee(amount_in, params.fee_bps);

        if fee > 0 {
            token_in_client.transfer(
                &e.current_contract_address(),
                &params.collector,
                &(fee as i128),
            );
            collector::Client::new(&e, &params.collector).distribute(&token_in, &fee);
        }

        if net > 0 {
            token_in_client.transfer(
                &e.current_contract_address(),
                &params.venue,
                &(net as i128),
            );
        }

        let amount_out: u128 = match venue::Client::new(&e, &params.venue)
            .try_swap_exact_tokens_for_tokens(&net, &amount_out_min, &path, &to, &deadline)
        {
            Ok(Ok(amount_out)) => amount_out,
            _ => {
                error!("Venue swap failed");
                panic_with_error!(&e, &ContractErrors::SlippageExceeded);
            }
        };

        if amount_out < amount_out_min {
            panic_with_error!(&e, &ContractErrors::SlippageExceeded);
        }

        e._core().bump();

        e.events().publish(
            (symbol_short!("swap"), symbol_short!("fee"), caller),
            (token_in, token_out, amount_in, fee, net),
        );

        amount_out
    }
}
