#![cfg(test)]

use crate::errors::ContractErrors;
use crate::storage::proposals::{PayoutProposal, StakeVote};
use crate::tests::test_utils::{
    create_payout, create_test_data, end_voting, init_contract, stake_vote, TestData,
};
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{Address, Env};

#[test]
fn test_vote_top_up() {
    let e: Env = Env::default();
    let test_data: TestData = create_test_data(&e);
    init_contract(&e, &test_data);

    let (id, _) = create_payout(&e, &test_data, 1_000);
    let voter: Address = stake_vote(&e, &test_data, id, 100_000, true);

    test_data
        .stake_token_stellar
        .mock_all_auths()
        .mint(&voter, &50_000);
    test_data
        .contract_client
        .mock_all_auths()
        .vote(&voter, &id, &true, &50_000);

    assert_eq!(
        test_data.contract_client.get_vote(&id, &voter),
        Some(StakeVote {
            support: true,
            stake: 150_000,
            claimed: false,
        })
    );
    assert_eq!(
        test_data.contract_client.get_proposal(&id).votes_for,
        150_000
    );

    // Switching sides is not a top up
    test_data
        .stake_token_stellar
        .mock_all_auths()
        .mint(&voter, &10);
    let switch_error = test_data
        .contract_client
        .mock_all_auths()
        .try_vote(&voter, &id, &false, &10)
        .unwrap_err()
        .unwrap();
    assert_eq!(switch_error, ContractErrors::AlreadyVoted.into());

    let zero_error = test_data
        .contract_client
        .mock_all_auths()
        .try_vote(&voter, &id, &true, &0)
        .unwrap_err()
        .unwrap();
    assert_eq!(zero_error, ContractErrors::InvalidParameter.into());

    let stake_error = test_data
        .contract_client
        .mock_all_auths()
        .try_vote(&voter, &id, &true, &11)
        .unwrap_err()
        .unwrap();
    assert_eq!(stake_error, ContractErrors::InsufficientStake.into());

    end_voting(&e);
    let closed_error = test_data
        .contract_client
        .mock_all_auths()
        .try_vote(&voter, &id, &true, &10)
        .unwrap_err()
        .unwrap();
    assert_eq!(closed_error, ContractErrors::VotingClosed.into());

    let proposal: PayoutProposal = test_data.contract_client.get_proposal(&id);
    assert_eq!(proposal.votes_for, 150_000);
    assert_eq!(proposal.votes_against, 0);
}

#[test]
fn test_claim_stake() {
    let e: Env = Env::default();
    let test_data: TestData = create_test_data(&e);
    init_contract(&e, &test_data);

    let (id, _) = create_payout(&e, &test_data, 1_000);
    let voter: Address = stake_vote(&e, &test_data, id, 250_000, true);

    let not_ended_error = test_data
        .contract_client
        .mock_all_auths()
        .try_claim_stake(&voter, &id)
        .unwrap_err()
        .unwrap();
    assert_eq!(not_ended_error, ContractErrors::VotingNotEnded.into());

    end_voting(&e);

    let stranger: Address = Address::generate(&e);
    let no_stake_error = test_data
        .contract_client
        .mock_all_auths()
        .try_claim_stake(&stranger, &id)
        .unwrap_err()
        .unwrap();
    assert_eq!(no_stake_error, ContractErrors::NoStake.into());

    // Claiming doesn't depend on finalize or on the result
    assert_eq!(
        test_data
            .contract_client
            .mock_all_auths()
            .claim_stake(&voter, &id),
        250_000
    );
    assert_eq!(test_data.stake_token_client.balance(&voter), 250_000);
    assert_eq!(test_data.contract_client.stake_of(&id, &voter), 0);

    let claimed_error = test_data
        .contract_client
        .mock_all_auths()
        .try_claim_stake(&voter, &id)
        .unwrap_err()
        .unwrap();
    assert_eq!(claimed_error, ContractErrors::AlreadyClaimed.into());
}

#[test]
fn test_locked_stake_is_not_spendable() {
    let e: Env = Env::default();
    let test_data: TestData = create_test_data(&e);
    init_contract(&e, &test_data);

    // A payout in the stake token itself
    let proposer: Address = Address::generate(&e);
    let recipient: Address = Address::generate(&e);
    let id: u64 = test_data.contract_client.mock_all_auths().propose_payout(
        &proposer,
        &test_data.stake_token_client.address,
        &recipient,
        &100_000,
    );

    let voter: Address = stake_vote(&e, &test_data, id, 300_000, true);
    test_data
        .contract_client
        .mock_all_auths()
        .validate(&test_data.validator, &id, &true);

    assert_eq!(
        test_data
            .contract_client
            .balance(&test_data.stake_token_client.address),
        0
    );

    end_voting(&e);
    test_data.contract_client.finalize(&id);

    let funds_error = test_data
        .contract_client
        .try_execute_payout(&id)
        .unwrap_err()
        .unwrap();
    assert_eq!(funds_error, ContractErrors::InsufficientFunds.into());

    let donor: Address = Address::generate(&e);
    test_data
        .stake_token_stellar
        .mock_all_auths()
        .mint(&donor, &100_000);
    test_data.contract_client.mock_all_auths().donate(
        &test_data.stake_token_client.address,
        &donor,
        &100_000,
    );
    assert_eq!(
        test_data
            .contract_client
            .balance(&test_data.stake_token_client.address),
        100_000
    );

    test_data.contract_client.execute_payout(&id);
    assert_eq!(test_data.stake_token_client.balance(&recipient), 100_000);

    // The voter still gets the whole stake back
    test_data
        .contract_client
        .mock_all_auths()
        .claim_stake(&voter, &id);
    assert_eq!(test_data.stake_token_client.balance(&voter), 300_000);
}
