#![cfg(test)]

use crate::contract::{GovernanceContract, GovernanceContractClient};
use crate::storage::core::GovernParams;
use access_gate::{AccessGateContract, AccessGateContractClient, Thresholds};
use soroban_sdk::testutils::{Address as _, Ledger, LedgerInfo};
use soroban_sdk::{token, Address, Env, String};
use treasury_fund::{FundParams, TreasuryFundContract, TreasuryFundContractClient};

pub const PROPOSAL_STAKE: u128 = 1_000;
pub const VOTE_STAKE: u128 = 10;
pub const VOTING_PERIOD: u64 = 3600 * 24;
pub const QUORUM: u128 = 200_000;
pub const PASS_RATIO_BPS: u32 = 6_000;
pub const MANAGER_STAKE: u128 = 5_000;

pub const PROPOSE_THRESHOLD: u128 = 100_000;
pub const VOTE_THRESHOLD: u128 = 10_000;

fn create_token_contract<'a>(
    e: &Env,
    admin: &Address,
) -> (token::Client<'a>, token::StellarAssetClient<'a>) {
    let contract_address = e.register_stellar_asset_contract(admin.clone());
    (
        token::Client::new(e, &contract_address),
        token::StellarAssetClient::new(e, &contract_address),
    )
}

pub struct TestData<'a> {
    pub admin: Address,
    pub founder: Address,
    pub params: GovernParams,
    pub contract_client: GovernanceContractClient<'a>,
    pub gate_client: AccessGateContractClient<'a>,
    pub fund_client: TreasuryFundContractClient<'a>,

    pub governance_token_admin: Address,
    pub governance_token_client: token::Client<'a>,
    pub governance_token_stellar: token::StellarAssetClient<'a>,

    pub native_admin: Address,
    pub native_client: token::Client<'a>,
    pub native_stellar: token::StellarAssetClient<'a>,
}

pub fn create_test_data<'a>(e: &Env) -> TestData<'a> {
    let admin: Address = Address::generate(&e);
    let founder: Address = Address::generate(&e);

    let contract_client: GovernanceContractClient<'a> =
        GovernanceContractClient::new(&e, &e.register_contract(None, GovernanceContract));
    let gate_client: AccessGateContractClient<'a> =
        AccessGateContractClient::new(&e, &e.register_contract(None, AccessGateContract));
    let fund_client: TreasuryFundContractClient<'a> =
        TreasuryFundContractClient::new(&e, &e.register_contract(None, TreasuryFundContract));

    let governance_token_admin: Address = Address::generate(&e);
    let (governance_token_client, governance_token_stellar) =
        create_token_contract(&e, &governance_token_admin);

    let native_admin: Address = Address::generate(&e);
    let (native_client, native_stellar) = create_token_contract(&e, &native_admin);

    TestData {
        admin,
        founder,
        params: GovernParams {
            proposal_stake: PROPOSAL_STAKE,
            vote_stake: VOTE_STAKE,
            voting_period: VOTING_PERIOD,
            quorum: QUORUM,
            pass_ratio_bps: PASS_RATIO_BPS,
            manager_stake: MANAGER_STAKE,
        },
        contract_client,
        gate_client,
        fund_client,
        governance_token_admin,
        governance_token_client,
        governance_token_stellar,
        native_admin,
        native_client,
        native_stellar,
    }
}

pub fn init_contracts(test_data: &TestData) {
    test_data.gate_client.init(
        &test_data.admin,
        &test_data.governance_token_client.address,
        &Thresholds {
            speak: 1_000,
            vote: VOTE_THRESHOLD,
            propose: PROPOSE_THRESHOLD,
        },
    );

    test_data.fund_client.init(
        &test_data.admin,
        &test_data.native_client.address,
        &FundParams {
            dao: test_data.contract_client.address.clone(),
            founder: test_data.founder.clone(),
            ops_keep_bps: 1_000,
            reward_ppm: 50,
            max_managers: 3,
        },
    );

    test_data.contract_client.init(
        &test_data.admin,
        &test_data.governance_token_client.address,
        &test_data.gate_client.address,
        &test_data.fund_client.address,
        &test_data.params,
    );
}

pub fn mint_governance_token(test_data: &TestData, to: &Address, amount: u128) {
    test_data
        .governance_token_stellar
        .mock_all_auths()
        .mint(to, &(amount as i128));
}

pub fn fund_treasury(e: &Env, test_data: &TestData, amount: u128) {
    let donor: Address = Address::generate(&e);
    test_data
        .native_stellar
        .mock_all_auths()
        .mint(&donor, &(amount as i128));
    test_data
        .fund_client
        .mock_all_auths()
        .donate(&donor, &amount);
}

pub struct TestProposal {
    pub id: u64,
    pub proposer: Address,
    pub beneficiary: Address,
    pub amount: u128,
}

/// Creates a proposal from a fresh proposer holding exactly the propose threshold plus the stake
pub fn create_proposal(e: &Env, test_data: &TestData, amount: u128) -> TestProposal {
    let proposer: Address = Address::generate(&e);
    let beneficiary: Address = Address::generate(&e);
    mint_governance_token(&test_data, &proposer, PROPOSE_THRESHOLD + PROPOSAL_STAKE);

    let id: u64 = test_data.contract_client.mock_all_auths().propose(
        &proposer,
        &String::from_str(&e, "Clinic supplies"),
        &String::from_str(&e, "Medical supplies for the eastern clinic"),
        &beneficiary,
        &amount,
    );

    TestProposal {
        id,
        proposer,
        beneficiary,
        amount,
    }
}

/// Creates a voter holding `balance` governance tokens and casts its vote
pub fn vote_with_balance(
    e: &Env,
    test_data: &TestData,
    id: u64,
    balance: u128,
    support: bool,
) -> Address {
    let voter: Address = Address::generate(&e);
    mint_governance_token(&test_data, &voter, balance);
    test_data
        .contract_client
        .mock_all_auths()
        .cast_vote(&voter, &id, &support);
    voter
}

pub fn set_timestamp(e: &Env, timestamp: u64) {
    let info: LedgerInfo = e.ledger().get();
    e.ledger().set(LedgerInfo {
        timestamp,
        ..info
    });
}
