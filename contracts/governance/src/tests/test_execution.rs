#![cfg(test)]

use crate::errors::ContractErrors;
use crate::storage::proposals::{Proposal, ProposalStatus};
use crate::tests::test_utils::{
    create_proposal, create_test_data, fund_treasury, init_contracts, mint_governance_token,
    set_timestamp, vote_with_balance, TestData, TestProposal, MANAGER_STAKE, PROPOSAL_STAKE,
    PROPOSE_THRESHOLD, VOTE_STAKE, VOTING_PERIOD,
};
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{vec, Address, Env, Vec};

fn verify(test_data: &TestData, id: u64, verifier: &Address) {
    test_data
        .contract_client
        .mock_all_auths()
        .submit_verification(&test_data.admin, &id, verifier);
}

#[test]
fn test_execute_passing_proposal() {
    let e: Env = Env::default();
    let test_data: TestData = create_test_data(&e);
    init_contracts(&test_data);
    fund_treasury(&e, &test_data, 20_000_000);

    let proposal: TestProposal = create_proposal(&e, &test_data, 10_000_000);
    let voter: Address = vote_with_balance(&e, &test_data, proposal.id, 300_000, true);
    let verifier: Address = Address::generate(&e);
    verify(&test_data, proposal.id, &verifier);

    // Quorum and ratio are met but the window is still open
    assert!(!test_data.contract_client.is_executable(&proposal.id));
    let early_error = test_data
        .contract_client
        .try_execute(&proposal.id)
        .unwrap_err()
        .unwrap();
    assert_eq!(early_error, ContractErrors::NotExecutable.into());

    set_timestamp(&e, VOTING_PERIOD + 1);
    assert!(test_data.contract_client.is_executable(&proposal.id));
    assert_eq!(
        test_data.contract_client.get_proposal_status(&proposal.id),
        ProposalStatus::Verified
    );

    test_data.contract_client.execute(&proposal.id);

    // 10% stays as ops keep, the verifier gets 50 ppm and the founder the rest
    assert_eq!(
        test_data.native_client.balance(&proposal.beneficiary),
        9_000_000
    );
    assert_eq!(test_data.native_client.balance(&verifier), 500);
    assert_eq!(
        test_data.native_client.balance(&test_data.founder),
        1_000_000 - 500
    );
    assert_eq!(
        test_data
            .native_client
            .balance(&test_data.fund_client.address),
        10_000_000
    );

    assert_eq!(
        test_data
            .governance_token_client
            .balance(&proposal.proposer),
        (PROPOSE_THRESHOLD + PROPOSAL_STAKE) as i128
    );

    let executed: Proposal = test_data.contract_client.get_proposal(&proposal.id);
    assert!(executed.executed);
    assert_eq!(
        test_data.contract_client.get_proposal_status(&proposal.id),
        ProposalStatus::Executed
    );
    assert!(!test_data.contract_client.is_executable(&proposal.id));

    let already_executed_error = test_data
        .contract_client
        .try_execute(&proposal.id)
        .unwrap_err()
        .unwrap();
    assert_eq!(
        already_executed_error,
        ContractErrors::AlreadyExecuted.into()
    );
    assert_eq!(
        test_data.native_client.balance(&proposal.beneficiary),
        9_000_000
    );

    let verification_error = test_data
        .contract_client
        .mock_all_auths()
        .try_submit_verification(&test_data.admin, &proposal.id, &verifier)
        .unwrap_err()
        .unwrap();
    assert_eq!(
        verification_error,
        ContractErrors::AlreadyExecuted.into()
    );

    // Voting stakes are independent from the execution
    test_data
        .contract_client
        .mock_all_auths()
        .claim_stake(&voter, &proposal.id);
    assert_eq!(
        test_data.governance_token_client.balance(&voter),
        300_000
    );
}

#[test]
fn test_execute_below_quorum() {
    let e: Env = Env::default();
    let test_data: TestData = create_test_data(&e);
    init_contracts(&test_data);
    fund_treasury(&e, &test_data, 20_000_000);

    let proposal: TestProposal = create_proposal(&e, &test_data, 10_000_000);
    let voter: Address = vote_with_balance(&e, &test_data, proposal.id, 100_000, true);
    verify(&test_data, proposal.id, &Address::generate(&e));

    set_timestamp(&e, VOTING_PERIOD + 1);
    assert!(!test_data.contract_client.is_executable(&proposal.id));

    let before: Proposal = test_data.contract_client.get_proposal(&proposal.id);
    let not_executable_error = test_data
        .contract_client
        .try_execute(&proposal.id)
        .unwrap_err()
        .unwrap();
    assert_eq!(
        not_executable_error,
        ContractErrors::NotExecutable.into()
    );
    assert_eq!(test_data.contract_client.get_proposal(&proposal.id), before);
    assert_eq!(test_data.native_client.balance(&proposal.beneficiary), 0);
    assert_eq!(
        test_data
            .native_client
            .balance(&test_data.fund_client.address),
        20_000_000
    );

    assert_eq!(
        test_data
            .contract_client
            .mock_all_auths()
            .claim_stake(&voter, &proposal.id),
        VOTE_STAKE
    );
    assert_eq!(
        test_data.governance_token_client.balance(&voter),
        100_000
    );

    // The vote failed so the proposer gets the stake back
    assert_eq!(
        test_data
            .contract_client
            .mock_all_auths()
            .claim_proposal_stake(&proposal.id),
        PROPOSAL_STAKE
    );
    assert_eq!(
        test_data
            .governance_token_client
            .balance(&proposal.proposer),
        (PROPOSE_THRESHOLD + PROPOSAL_STAKE) as i128
    );
    assert_eq!(
        test_data
            .contract_client
            .get_proposal(&proposal.id)
            .stake_amount,
        0
    );

    let second_claim_error = test_data
        .contract_client
        .mock_all_auths()
        .try_claim_proposal_stake(&proposal.id)
        .unwrap_err()
        .unwrap();
    assert_eq!(second_claim_error, ContractErrors::NoStake.into());
}

#[test]
fn test_claim_proposal_stake_rules() {
    let e: Env = Env::default();
    let test_data: TestData = create_test_data(&e);
    init_contracts(&test_data);
    fund_treasury(&e, &test_data, 20_000_000);

    let rejected: TestProposal = create_proposal(&e, &test_data, 1_000_000);
    vote_with_balance(&e, &test_data, rejected.id, 300_000, false);

    let open_error = test_data
        .contract_client
        .mock_all_auths()
        .try_claim_proposal_stake(&rejected.id)
        .unwrap_err()
        .unwrap();
    assert_eq!(open_error, ContractErrors::VotingNotEnded.into());

    // Passed but still waiting for a verifier
    let unverified: TestProposal = create_proposal(&e, &test_data, 1_000_000);
    vote_with_balance(&e, &test_data, unverified.id, 300_000, true);

    set_timestamp(&e, VOTING_PERIOD + 1);

    let passed_error = test_data
        .contract_client
        .mock_all_auths()
        .try_claim_proposal_stake(&unverified.id)
        .unwrap_err()
        .unwrap();
    assert_eq!(passed_error, ContractErrors::ProposalPassed.into());

    verify(&test_data, unverified.id, &Address::generate(&e));
    test_data.contract_client.execute(&unverified.id);
    assert_eq!(
        test_data
            .governance_token_client
            .balance(&unverified.proposer),
        (PROPOSE_THRESHOLD + PROPOSAL_STAKE) as i128
    );

    let executed_error = test_data
        .contract_client
        .mock_all_auths()
        .try_claim_proposal_stake(&unverified.id)
        .unwrap_err()
        .unwrap();
    assert_eq!(executed_error, ContractErrors::AlreadyExecuted.into());

    test_data
        .contract_client
        .mock_all_auths()
        .claim_proposal_stake(&rejected.id);
    assert_eq!(
        test_data
            .governance_token_client
            .balance(&rejected.proposer),
        (PROPOSE_THRESHOLD + PROPOSAL_STAKE) as i128
    );
}

#[test]
fn test_execute_requirements() {
    let e: Env = Env::default();
    let test_data: TestData = create_test_data(&e);
    init_contracts(&test_data);
    fund_treasury(&e, &test_data, 20_000_000);

    // Passing votes without a verification
    let unverified: TestProposal = create_proposal(&e, &test_data, 1_000_000);
    vote_with_balance(&e, &test_data, unverified.id, 300_000, true);

    // Quorum reached but the ratio fails: 150k / 310k is below 60%
    let rejected: TestProposal = create_proposal(&e, &test_data, 1_000_000);
    vote_with_balance(&e, &test_data, rejected.id, 150_000, true);
    vote_with_balance(&e, &test_data, rejected.id, 160_000, false);
    verify(&test_data, rejected.id, &Address::generate(&e));

    // Passes the vote but the fund can't cover it
    let too_big: TestProposal = create_proposal(&e, &test_data, 30_000_000);
    vote_with_balance(&e, &test_data, too_big.id, 300_000, true);
    verify(&test_data, too_big.id, &Address::generate(&e));

    set_timestamp(&e, VOTING_PERIOD + 1);

    for id in [unverified.id, rejected.id] {
        let error = test_data
            .contract_client
            .try_execute(&id)
            .unwrap_err()
            .unwrap();
        assert_eq!(error, ContractErrors::NotExecutable.into());
    }

    // The fund error rolls everything back, including the executed flag
    assert!(test_data.contract_client.is_executable(&too_big.id));
    assert!(test_data.contract_client.try_execute(&too_big.id).is_err());
    assert!(!test_data.contract_client.get_proposal(&too_big.id).executed);
    assert!(test_data.contract_client.is_executable(&too_big.id));

    let missing_error = test_data
        .contract_client
        .try_execute(&77)
        .unwrap_err()
        .unwrap();
    assert_eq!(missing_error, ContractErrors::ProposalDoesntExist.into());
}

#[test]
fn test_execute_pays_managers() {
    let e: Env = Env::default();
    let test_data: TestData = create_test_data(&e);
    init_contracts(&test_data);
    fund_treasury(&e, &test_data, 20_000_000);

    let mut managers: Vec<Address> = Vec::new(&e);
    for _ in 0..3 {
        let manager: Address = Address::generate(&e);
        mint_governance_token(&test_data, &manager, MANAGER_STAKE);
        test_data.governance_token_client.mock_all_auths().approve(
            &manager,
            &test_data.contract_client.address,
            &(MANAGER_STAKE as i128),
            &(e.ledger().sequence() + 1_000),
        );
        managers.push_back(manager);
    }
    test_data
        .contract_client
        .mock_all_auths()
        .appoint_managers(&managers, &(VOTING_PERIOD * 10));

    // 1_000_100 * 50 / 1_000_000 = 50, split as 17, 17, 16
    let proposal: TestProposal = create_proposal(&e, &test_data, 1_000_100);
    vote_with_balance(&e, &test_data, proposal.id, 300_000, true);
    let verifier: Address = Address::generate(&e);
    verify(&test_data, proposal.id, &verifier);

    set_timestamp(&e, VOTING_PERIOD + 1);
    test_data.contract_client.execute(&proposal.id);

    assert_eq!(
        test_data.native_client.balance(&proposal.beneficiary),
        900_090
    );
    assert_eq!(test_data.native_client.balance(&verifier), 50);
    assert_eq!(test_data.native_client.balance(&managers.get(0).unwrap()), 17);
    assert_eq!(test_data.native_client.balance(&managers.get(1).unwrap()), 17);
    assert_eq!(test_data.native_client.balance(&managers.get(2).unwrap()), 16);
    assert_eq!(
        test_data.native_client.balance(&test_data.founder),
        100_010 - 100
    );

    assert_eq!(
        test_data.fund_client.get_active_managers(),
        vec![
            &e,
            managers.get(0).unwrap(),
            managers.get(1).unwrap(),
            managers.get(2).unwrap()
        ]
    );
}
