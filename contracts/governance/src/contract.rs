use crate::errors::ContractErrors;
use crate::storage::core::{CoreDataKeys, CoreState, CoreStorageFunc, GovernParams};
use crate::storage::managers::{Manager, ManagersStorageFunc};
use crate::storage::proposals::{
    OptionalAddress, Proposal, ProposalStatus, ProposalsStorageFunc, Vote,
};
use crate::utils::core::{
    charge_stake, get_core_state, get_params, is_capability_holder, release_stake, validate,
    validate_params, MAX_TOKEN_AMOUNT,
};
use crate::utils::managers::{has_duplicates, renewed_term_end};
use crate::utils::proposals::{
    get_proposal, has_passed, has_voting_ended, is_proposal_executable, is_voting_open,
    proposal_status,
};
use crate::{fund, gate};
use log::error;
use soroban_sdk::{
    contract, contractimpl, panic_with_error, symbol_short, token, Address, Env, String, Vec,
};

pub trait GovernanceContractTrait {
    fn init(
        e: Env,
        admin: Address,
        governance_token: Address,
        gate: Address,
        fund: Address,
        params: GovernParams,
    );
    fn set_admin(e: Env, address: Address);
    fn set_verifier(e: Env, address: Address);
    fn set_govern_params(e: Env, params: GovernParams);
    fn get_core_state(e: Env) -> CoreState;
    fn get_params(e: Env) -> GovernParams;

    fn propose(
        e: Env,
        proposer: Address,
        title: String,
        description: String,
        beneficiary: Address,
        amount: u128,
    ) -> u64;
    fn cast_vote(e: Env, voter: Address, id: u64, support: bool);
    fn submit_verification(e: Env, caller: Address, id: u64, verifier: Address);
    fn is_executable(e: Env, id: u64) -> bool;
    fn execute(e: Env, id: u64);
    fn claim_stake(e: Env, voter: Address, id: u64) -> u128;
    fn claim_proposal_stake(e: Env, id: u64) -> u128;
    fn stake_of(e: Env, id: u64, voter: Address) -> u128;
    fn get_vote(e: Env, id: u64, voter: Address) -> Option<Vote>;
    fn get_proposal(e: Env, id: u64) -> Proposal;
    fn get_proposal_status(e: Env, id: u64) -> ProposalStatus;
    fn proposal_count(e: Env) -> u64;

    fn appoint_managers(e: Env, addresses: Vec<Address>, term_end: u64);
    fn remove_managers(e: Env, addresses: Vec<Address>);
    fn claim_manager_stake(e: Env, manager: Address) -> u128;
    fn is_manager(e: Env, address: Address) -> bool;
    fn get_manager(e: Env, address: Address) -> Manager;
    fn get_active_managers(e: Env) -> Vec<Address>;
}

#[contract]
pub struct GovernanceContract;

#[contractimpl]
impl GovernanceContractTrait for GovernanceContract {
    fn init(
        e: Env,
        admin: Address,
        governance_token: Address,
        gate: Address,
        fund: Address,
        params: GovernParams,
    ) {
        if e._core().state().is_some() {
            panic_with_error!(&e, &ContractErrors::AlreadyInitialized);
        }

        validate_params(&e, &params);

        e._core().set_address(&CoreDataKeys::Admin, &admin);
        e._core().set_state(&CoreState {
            governance_token,
            gate,
            fund,
        });
        e._core().set_params(&params);
        e._core().bump();
    }

    fn set_admin(e: Env, address: Address) {
        validate(&e, CoreDataKeys::Admin);
        e._core().set_address(&CoreDataKeys::Admin, &address);
        e._core().bump();
    }

    fn set_verifier(e: Env, address: Address) {
        validate(&e, CoreDataKeys::Admin);
        e._core().set_address(&CoreDataKeys::Verifier, &address);
        e._core().bump();
    }

    fn set_govern_params(e: Env, params: GovernParams) {
        validate(&e, CoreDataKeys::Admin);
        validate_params(&e, &params);
        e._core().set_params(&params);
        e._core().bump();

        e.events()
            .publish((symbol_short!("govern"), symbol_short!("params")), params);
    }

    fn get_core_state(e: Env) -> CoreState {
        e._core().bump();
        get_core_state(&e)
    }

    fn get_params(e: Env) -> GovernParams {
        e._core().bump();
        get_params(&e)
    }

    fn propose(
        e: Env,
        proposer: Address,
        title: String,
        description: String,
        beneficiary: Address,
        amount: u128,
    ) -> u64 {
        proposer.require_auth();

        let core_state: CoreState = get_core_state(&e);
        let params: GovernParams = get_params(&e);

        if gate::Client::new(&e, &core_state.gate).tier(&proposer) < gate::Tier::Propose {
            panic_with_error!(&e, &ContractErrors::Unauthorized);
        }

        if amount == 0
            || amount > MAX_TOKEN_AMOUNT
            || beneficiary == e.current_contract_address()
            || beneficiary == core_state.fund
        {
            panic_with_error!(&e, &ContractErrors::InvalidParameter);
        }

        charge_stake(&e, &core_state, &proposer, &params.proposal_stake);

        let id: u64 = e._core().proposals_count() + 1;
        let now: u64 = e.ledger().timestamp();
        let proposal: Proposal = Proposal {
            id,
            title,
            description,
            beneficiary: beneficiary.clone(),
            amount,
            proposer: proposer.clone(),
            stake_amount: params.proposal_stake,
            created_at: now,
            ends_at: now + params.voting_period,
            votes_for: 0,
            votes_against: 0,
            voters: 0,
            verified: false,
            verifier: OptionalAddress::None,
            executed: false,
        };

        e._proposals().set_proposal(&proposal);
        e._proposals().bump_proposal(&id);
        e._core().set_proposals_count(&id);
        e._core().bump();

        e.events().publish(
            (symbol_short!("proposal"), symbol_short!("created")),
            (id, proposer, beneficiary, amount),
        );

        id
    }

    fn cast_vote(e: Env, voter: Address, id: u64, support: bool) {
        voter.require_auth();

        let core_state: CoreState = get_core_state(&e);
        let params: GovernParams = get_params(&e);

        if gate::Client::new(&e, &core_state.gate).tier(&voter) < gate::Tier::Vote {
            panic_with_error!(&e, &ContractErrors::Unauthorized);
        }

        let mut proposal: Proposal = get_proposal(&e, &id);

        if !is_voting_open(e.ledger().timestamp(), &proposal) {
            panic_with_error!(&e, &ContractErrors::VotingClosed);
        }

        if e._proposals().vote(&id, &voter).is_some() {
            panic_with_error!(&e, &ContractErrors::AlreadyVoted);
        }

        // Weight is read before the vote stake leaves the account
        let balance: i128 =
            token::Client::new(&e, &core_state.governance_token).balance(&voter);
        let weight: u128 = if balance > 0 { balance as u128 } else { 0 };

        charge_stake(&e, &core_state, &voter, &params.vote_stake);

        if support {
            proposal.votes_for = proposal.votes_for.saturating_add(weight);
        } else {
            proposal.votes_against = proposal.votes_against.saturating_add(weight);
        }
        proposal.voters += 1;

        e._proposals().set_vote(
            &id,
            &voter,
            &Vote {
                support,
                weight,
                stake: params.vote_stake,
                claimed: false,
            },
        );
        e._proposals().bump_vote(&id, &voter);
        e._proposals().set_proposal(&proposal);
        e._proposals().bump_proposal(&id);
        e._core().bump();

        e.events().publish(
            (symbol_short!("vote"), symbol_short!("cast")),
            (id, voter, support, weight),
        );
    }

    fn submit_verification(e: Env, caller: Address, id: u64, verifier: Address) {
        caller.require_auth();

        if !is_capability_holder(&e, CoreDataKeys::Admin, &caller)
            && !is_capability_holder(&e, CoreDataKeys::Verifier, &caller)
        {
            panic_with_error!(&e, &ContractErrors::Unauthorized);
        }

        let mut proposal: Proposal = get_proposal(&e, &id);

        if proposal.executed {
            panic_with_error!(&e, &ContractErrors::AlreadyExecuted);
        }

        if proposal.verified {
            panic_with_error!(&e, &ContractErrors::AlreadyVerified);
        }

        proposal.verified = true;
        proposal.verifier = OptionalAddress::Some(verifier.clone());

        e._proposals().set_proposal(&proposal);
        e._proposals().bump_proposal(&id);
        e._core().bump();

        e.events().publish(
            (symbol_short!("proposal"), symbol_short!("verified")),
            (id, verifier),
        );
    }

    fn is_executable(e: Env, id: u64) -> bool {
        let proposal: Proposal = get_proposal(&e, &id);
        is_proposal_executable(e.ledger().timestamp(), &proposal, &get_params(&e))
    }

    fn execute(e: Env, id: u64) {
        let core_state: CoreState = get_core_state(&e);
        let mut proposal: Proposal = get_proposal(&e, &id);

        if proposal.executed {
            panic_with_error!(&e, &ContractErrors::AlreadyExecuted);
        }

        if !is_proposal_executable(e.ledger().timestamp(), &proposal, &get_params(&e)) {
            panic_with_error!(&e, &ContractErrors::NotExecutable);
        }

        let verifier: Address = match proposal.verifier.clone() {
            OptionalAddress::Some(address) => address,
            OptionalAddress::None => panic_with_error!(&e, &ContractErrors::NotExecutable),
        };

        proposal.executed = true;
        e._proposals().set_proposal(&proposal);
        e._proposals().bump_proposal(&id);

        let disbursement: fund::Disbursement = fund::Client::new(&e, &core_state.fund)
            .disburse(&proposal.beneficiary, &proposal.amount, &verifier);

        release_stake(&e, &core_state, &proposal.proposer, &proposal.stake_amount);
        e._core().bump();

        e.events().publish(
            (symbol_short!("proposal"), symbol_short!("executed")),
            (id, disbursement),
        );
    }

    fn claim_stake(e: Env, voter: Address, id: u64) -> u128 {
        voter.require_auth();

        let core_state: CoreState = get_core_state(&e);
        let proposal: Proposal = get_proposal(&e, &id);

        if !has_voting_ended(e.ledger().timestamp(), &proposal) {
            panic_with_error!(&e, &ContractErrors::VotingNotEnded);
        }

        let mut vote: Vote = e._proposals().vote(&id, &voter).unwrap_or_else(|| {
            panic_with_error!(&e, &ContractErrors::NoStake);
        });

        if vote.claimed {
            panic_with_error!(&e, &ContractErrors::AlreadyClaimed);
        }

        vote.claimed = true;
        e._proposals().set_vote(&id, &voter, &vote);
        e._proposals().bump_vote(&id, &voter);

        release_stake(&e, &core_state, &voter, &vote.stake);
        e._core().bump();

        e.events().publish(
            (symbol_short!("vote"), symbol_short!("claimed")),
            (id, voter, vote.stake),
        );

        vote.stake
    }

    fn claim_proposal_stake(e: Env, id: u64) -> u128 {
        let core_state: CoreState = get_core_state(&e);
        let mut proposal: Proposal = get_proposal(&e, &id);
        proposal.proposer.require_auth();

        if proposal.executed {
            panic_with_error!(&e, &ContractErrors::AlreadyExecuted);
        }

        if !has_voting_ended(e.ledger().timestamp(), &proposal) {
            panic_with_error!(&e, &ContractErrors::VotingNotEnded);
        }

        // A passed proposal can still be verified, its stake comes back on execution
        if has_passed(&proposal, &get_params(&e)) {
            panic_with_error!(&e, &ContractErrors::ProposalPassed);
        }

        if proposal.stake_amount == 0 {
            panic_with_error!(&e, &ContractErrors::NoStake);
        }

        let stake: u128 = proposal.stake_amount;
        proposal.stake_amount = 0;
        e._proposals().set_proposal(&proposal);
        e._proposals().bump_proposal(&id);

        release_stake(&e, &core_state, &proposal.proposer, &stake);
        e._core().bump();

        e.events().publish(
            (symbol_short!("proposal"), symbol_short!("reclaimed")),
            (id, proposal.proposer, stake),
        );

        stake
    }

    fn stake_of(e: Env, id: u64, voter: Address) -> u128 {
        match e._proposals().vote(&id, &voter) {
            Some(vote) if !vote.claimed => vote.stake,
            _ => 0,
        }
    }

    fn get_vote(e: Env, id: u64, voter: Address) -> Option<Vote> {
        e._proposals().vote(&id, &voter)
    }

    fn get_proposal(e: Env, id: u64) -> Proposal {
        e._core().bump();
        get_proposal(&e, &id)
    }

    fn get_proposal_status(e: Env, id: u64) -> ProposalStatus {
        proposal_status(e.ledger().timestamp(), &get_proposal(&e, &id))
    }

    fn proposal_count(e: Env) -> u64 {
        e._core().bump();
        e._core().proposals_count()
    }

    fn appoint_managers(e: Env, addresses: Vec<Address>, term_end: u64) {
        validate(&e, CoreDataKeys::Admin);

        if term_end <= e.ledger().timestamp() || addresses.is_empty() || has_duplicates(&addresses)
        {
            panic_with_error!(&e, &ContractErrors::InvalidParameter);
        }

        let core_state: CoreState = get_core_state(&e);
        let params: GovernParams = get_params(&e);
        let fund_client: fund::Client = fund::Client::new(&e, &core_state.fund);

        let mut roster: Vec<Address> = e._managers().roster();
        let mut appointed: Vec<Address> = Vec::new(&e);
        for address in addresses.iter() {
            if !roster.contains(&address) {
                appointed.push_back(address);
            }
        }

        if roster.len() + appointed.len() > fund_client.max_managers() {
            panic_with_error!(&e, &ContractErrors::MaxManagersExceeded);
        }

        let token_client: token::Client = token::Client::new(&e, &core_state.governance_token);
        for address in appointed.iter() {
            let manager: Manager = match e._managers().manager(&address) {
                // Removed earlier but the stake is still locked, no second pull
                Some(previous) => Manager {
                    term_end: renewed_term_end(previous.term_end, term_end),
                    active: true,
                    ..previous
                },
                None => {
                    if params.manager_stake > 0 {
                        let result = token_client.try_transfer_from(
                            &e.current_contract_address(),
                            &address,
                            &e.current_contract_address(),
                            &(params.manager_stake as i128),
                        );

                        if result.is_err() {
                            error!("Manager stake transfer failed");
                            panic_with_error!(&e, &ContractErrors::InsufficientStake);
                        }
                    }

                    Manager {
                        address: address.clone(),
                        term_end,
                        stake_locked: params.manager_stake,
                        active: true,
                    }
                }
            };

            e._managers().set_manager(&manager);
            e._managers().bump_manager(&address);
            roster.push_back(address);
        }

        e._managers().set_roster(&roster);
        if !appointed.is_empty() {
            fund_client.add_managers(&appointed);
        }
        e._core().bump();

        e.events().publish(
            (symbol_short!("managers"), symbol_short!("appointed")),
            (addresses, term_end),
        );
    }

    fn remove_managers(e: Env, addresses: Vec<Address>) {
        validate(&e, CoreDataKeys::Admin);

        let core_state: CoreState = get_core_state(&e);

        let mut removed: Vec<Address> = Vec::new(&e);
        for address in addresses.iter() {
            if let Some(mut manager) = e._managers().manager(&address) {
                if manager.active {
                    manager.active = false;
                    e._managers().set_manager(&manager);
                    e._managers().bump_manager(&address);
                    removed.push_back(address);
                }
            }
        }

        if removed.is_empty() {
            panic_with_error!(&e, &ContractErrors::ManagerDoesntExist);
        }

        let mut roster: Vec<Address> = Vec::new(&e);
        for address in e._managers().roster().iter() {
            if !removed.contains(&address) {
                roster.push_back(address);
            }
        }
        e._managers().set_roster(&roster);
        fund::Client::new(&e, &core_state.fund).remove_managers(&removed);
        e._core().bump();

        e.events().publish(
            (symbol_short!("managers"), symbol_short!("removed")),
            removed,
        );
    }

    fn claim_manager_stake(e: Env, manager: Address) -> u128 {
        manager.require_auth();

        let core_state: CoreState = get_core_state(&e);
        let record: Manager = e._managers().manager(&manager).unwrap_or_else(|| {
            panic_with_error!(&e, &ContractErrors::ManagerDoesntExist);
        });

        if record.active {
            panic_with_error!(&e, &ContractErrors::ManagerStillActive);
        }

        if e.ledger().timestamp() <= record.term_end {
            panic_with_error!(&e, &ContractErrors::TermNotElapsed);
        }

        e._managers().remove_manager(&manager);
        release_stake(&e, &core_state, &manager, &record.stake_locked);
        e._core().bump();

        e.events().publish(
            (symbol_short!("managers"), symbol_short!("claimed")),
            (manager, record.stake_locked),
        );

        record.stake_locked
    }

    fn is_manager(e: Env, address: Address) -> bool {
        e._managers()
            .manager(&address)
            .map_or(false, |manager| manager.active)
    }

    fn get_manager(e: Env, address: Address) -> Manager {
        e._managers().manager(&address).unwrap_or_else(|| {
            panic_with_error!(&e, &ContractErrors::ManagerDoesntExist);
        })
    }

    fn get_active_managers(e: Env) -> Vec<Address> {
        e._managers().roster()
    }
}
