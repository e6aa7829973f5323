use crate::errors::ContractErrors;
use crate::storage::core::{CoreDataKeys, CoreStorageFunc, ValidatorParams};
use crate::storage::proposals::{PayoutProposal, ProposalsStorageFunc, StakeVote};
use crate::utils::core::{
    get_params, get_proposal, has_passed, is_payout_executable, validate_admin, validate_params,
    MAX_TOKEN_AMOUNT,
};
use log::error;
use soroban_sdk::{
    contract, contractimpl, panic_with_error, symbol_short, token, Address, Env, Vec,
};

pub trait ValidatorTreasuryContractTrait {
    fn init(
        e: Env,
        admin: Address,
        stake_token: Address,
        params: ValidatorParams,
        validators: Vec<Address>,
    );
    fn set_admin(e: Env, address: Address);
    fn set_params(e: Env, params: ValidatorParams);
    fn set_validators(e: Env, validators: Vec<Address>);
    fn get_params(e: Env) -> ValidatorParams;
    fn get_validators(e: Env) -> Vec<Address>;
    fn stake_token(e: Env) -> Address;

    fn donate(e: Env, token: Address, donor: Address, amount: u128);
    fn balance(e: Env, token: Address) -> u128;

    fn propose_payout(
        e: Env,
        proposer: Address,
        token: Address,
        recipient: Address,
        amount: u128,
    ) -> u64;
    fn vote(e: Env, voter: Address, id: u64, support: bool, stake: u128);
    fn validate(e: Env, validator: Address, id: u64, approve: bool);
    fn finalize(e: Env, id: u64) -> bool;
    fn is_executable(e: Env, id: u64) -> bool;
    fn execute_payout(e: Env, id: u64);
    fn claim_stake(e: Env, voter: Address, id: u64) -> u128;

    fn get_proposal(e: Env, id: u64) -> PayoutProposal;
    fn proposal_count(e: Env) -> u64;
    fn stake_of(e: Env, id: u64, voter: Address) -> u128;
    fn get_vote(e: Env, id: u64, voter: Address) -> Option<StakeVote>;
}

#[contract]
pub struct ValidatorTreasuryContract;

#[contractimpl]
impl ValidatorTreasuryContractTrait for ValidatorTreasuryContract {
    fn init(
        e: Env,
        admin: Address,
        stake_token: Address,
        params: ValidatorParams,
        validators: Vec<Address>,
    ) {
        if e._core().address(&CoreDataKeys::Admin).is_some() {
            panic_with_error!(&e, &ContractErrors::AlreadyInitialized);
        }

        validate_params(&e, &params);

        e._core().set_address(&CoreDataKeys::Admin, &admin);
        e._core()
            .set_address(&CoreDataKeys::StakeToken, &stake_token);
        e._core().set_params(&params);
        e._core().set_validators(&validators);
        e._core().bump();
    }

    fn set_admin(e: Env, address: Address) {
        validate_admin(&e);
        e._core().set_address(&CoreDataKeys::Admin, &address);
        e._core().bump();
    }

    fn set_params(e: Env, params: ValidatorParams) {
        validate_admin(&e);
        validate_params(&e, &params);
        e._core().set_params(&params);
        e._core().bump();
    }

    fn set_validators(e: Env, validators: Vec<Address>) {
        validate_admin(&e);
        e._core().set_validators(&validators);
        e._core().bump();

        e.events().publish(
            (symbol_short!("valid"), symbol_short!("set")),
            validators,
        );
    }

    fn get_params(e: Env) -> ValidatorParams {
        e._core().bump();
        get_params(&e)
    }

    fn get_validators(e: Env) -> Vec<Address> {
        e._core().bump();
        e._core().validators()
    }

    fn stake_token(e: Env) -> Address {
        e._core()
            .address(&CoreDataKeys::StakeToken)
            .unwrap_or_else(|| {
                panic_with_error!(&e, &ContractErrors::NotStarted);
            })
    }

    fn donate(e: Env, token: Address, donor: Address, amount: u128) {
        donor.require_auth();

        if amount == 0 || amount > MAX_TOKEN_AMOUNT {
            panic_with_error!(&e, &ContractErrors::InvalidParameter);
        }

        let result = token::Client::new(&e, &token).try_transfer(
            &donor,
            &e.current_contract_address(),
            &(amount as i128),
        );

        if result.is_err() {
            error!("Donation transfer failed");
            panic_with_error!(&e, &ContractErrors::InsufficientFunds);
        }

        e.events().publish(
            (symbol_short!("treasury"), symbol_short!("donate")),
            (token, donor, amount),
        );
    }

    fn balance(e: Env, token: Address) -> u128 {
        let balance: i128 = token::Client::new(&e, &token).balance(&e.current_contract_address());
        let balance: u128 = if balance > 0 { balance as u128 } else { 0 };

        if token == Self::stake_token(e.clone()) {
            balance.saturating_sub(e._core().locked_stake())
        } else {
            balance
        }
    }

    fn propose_payout(
        e: Env,
        proposer: Address,
        token: Address,
        recipient: Address,
        amount: u128,
    ) -> u64 {
        proposer.require_auth();

        if amount == 0
            || amount > MAX_TOKEN_AMOUNT
            || recipient == e.current_contract_address()
        {
            panic_with_error!(&e, &ContractErrors::InvalidParameter);
        }

        let params: ValidatorParams = get_params(&e);
        let id: u64 = e._core().proposals_count() + 1;
        let now: u64 = e.ledger().timestamp();

        e._proposals().set_proposal(&PayoutProposal {
            id,
            proposer: proposer.clone(),
            token,
            recipient: recipient.clone(),
            amount,
            created_at: now,
            ends_at: now + params.voting_period,
            votes_for: 0,
            votes_against: 0,
            validator_likes: 0,
            validator_dislikes: 0,
            finalized: false,
            passed: false,
            executed: false,
        });
        e._core().set_proposals_count(&id);
        e._core().bump();

        e.events().publish(
            (symbol_short!("payout"), symbol_short!("created")),
            (id, proposer, recipient, amount),
        );

        id
    }

    fn vote(e: Env, voter: Address, id: u64, support: bool, stake: u128) {
        voter.require_auth();

        if stake == 0 || stake > MAX_TOKEN_AMOUNT {
            panic_with_error!(&e, &ContractErrors::InvalidParameter);
        }

        let mut proposal: PayoutProposal = get_proposal(&e, &id);

        if e.ledger().timestamp() > proposal.ends_at {
            panic_with_error!(&e, &ContractErrors::VotingClosed);
        }

        let mut vote: StakeVote = match e._proposals().vote(&id, &voter) {
            Some(current) if current.support != support => {
                panic_with_error!(&e, &ContractErrors::AlreadyVoted);
            }
            Some(current) => current,
            None => StakeVote {
                support,
                stake: 0,
                claimed: false,
            },
        };

        let result = token::Client::new(&e, &Self::stake_token(e.clone())).try_transfer(
            &voter,
            &e.current_contract_address(),
            &(stake as i128),
        );

        if result.is_err() {
            error!("Stake transfer failed");
            panic_with_error!(&e, &ContractErrors::InsufficientStake);
        }

        vote.stake += stake;
        e._core()
            .set_locked_stake(&(e._core().locked_stake() + stake));
        if support {
            proposal.votes_for = proposal.votes_for.saturating_add(stake);
        } else {
            proposal.votes_against = proposal.votes_against.saturating_add(stake);
        }

        e._proposals().set_vote(&id, &voter, &vote);
        e._proposals().set_proposal(&proposal);
        e._core().bump();

        e.events().publish(
            (symbol_short!("vote"), symbol_short!("cast")),
            (id, voter, support, stake),
        );
    }

    fn validate(e: Env, validator: Address, id: u64, approve: bool) {
        validator.require_auth();

        if !e._core().validators().contains(&validator) {
            panic_with_error!(&e, &ContractErrors::Unauthorized);
        }

        let mut proposal: PayoutProposal = get_proposal(&e, &id);

        if proposal.executed {
            panic_with_error!(&e, &ContractErrors::AlreadyExecuted);
        }

        if e._proposals().validation(&id, &validator).is_some() {
            panic_with_error!(&e, &ContractErrors::AlreadyValidated);
        }

        if approve {
            proposal.validator_likes += 1;
        } else {
            proposal.validator_dislikes += 1;
        }

        e._proposals().set_validation(&id, &validator, &approve);
        e._proposals().set_proposal(&proposal);
        e._core().bump();

        e.events().publish(
            (symbol_short!("payout"), symbol_short!("validated")),
            (id, validator, approve),
        );
    }

    fn finalize(e: Env, id: u64) -> bool {
        let mut proposal: PayoutProposal = get_proposal(&e, &id);

        if e.ledger().timestamp() <= proposal.ends_at {
            panic_with_error!(&e, &ContractErrors::VotingNotEnded);
        }

        if proposal.finalized {
            panic_with_error!(&e, &ContractErrors::AlreadyFinalized);
        }

        proposal.finalized = true;
        proposal.passed = has_passed(&proposal, &get_params(&e));

        e._proposals().set_proposal(&proposal);
        e._core().bump();

        e.events().publish(
            (symbol_short!("payout"), symbol_short!("finalized")),
            (id, proposal.passed),
        );

        proposal.passed
    }

    fn is_executable(e: Env, id: u64) -> bool {
        is_payout_executable(&get_proposal(&e, &id), &get_params(&e))
    }

    fn execute_payout(e: Env, id: u64) {
        let mut proposal: PayoutProposal = get_proposal(&e, &id);

        if proposal.executed {
            panic_with_error!(&e, &ContractErrors::AlreadyExecuted);
        }

        if !is_payout_executable(&proposal, &get_params(&e)) {
            panic_with_error!(&e, &ContractErrors::NotExecutable);
        }

        if Self::balance(e.clone(), proposal.token.clone()) < proposal.amount {
            panic_with_error!(&e, &ContractErrors::InsufficientFunds);
        }

        proposal.executed = true;
        e._proposals().set_proposal(&proposal);

        token::Client::new(&e, &proposal.token).transfer(
            &e.current_contract_address(),
            &proposal.recipient,
            &(proposal.amount as i128),
        );
        e._core().bump();

        e.events().publish(
            (symbol_short!("payout"), symbol_short!("executed")),
            (id, proposal.recipient, proposal.amount),
        );
    }

    fn claim_stake(e: Env, voter: Address, id: u64) -> u128 {
        voter.require_auth();

        let proposal: PayoutProposal = get_proposal(&e, &id);

        if e.ledger().timestamp() <= proposal.ends_at {
            panic_with_error!(&e, &ContractErrors::VotingNotEnded);
        }

        let mut vote: StakeVote = e._proposals().vote(&id, &voter).unwrap_or_else(|| {
            panic_with_error!(&e, &ContractErrors::NoStake);
        });

        if vote.claimed {
            panic_with_error!(&e, &ContractErrors::AlreadyClaimed);
        }

        vote.claimed = true;
        e._proposals().set_vote(&id, &voter, &vote);
        e._core()
            .set_locked_stake(&(e._core().locked_stake() - vote.stake));

        token::Client::new(&e, &Self::stake_token(e.clone())).transfer(
            &e.current_contract_address(),
            &voter,
            &(vote.stake as i128),
        );
        e._core().bump();

        e.events().publish(
            (symbol_short!("vote"), symbol_short!("claimed")),
            (id, voter, vote.stake),
        );

        vote.stake
    }

    fn get_proposal(e: Env, id: u64) -> PayoutProposal {
        e._core().bump();
        get_proposal(&e, &id)
    }

    fn proposal_count(e: Env) -> u64 {
        e._core().bump();
        e._core().proposals_count()
    }

    fn stake_of(e: Env, id: u64, voter: Address) -> u128 {
        match e._proposals().vote(&id, &voter) {
            Some(vote) if !vote.claimed => vote.stake,
            _ => 0,
        }
    }

    fn get_vote(e: Env, id: u64, voter: Address) -> Option<StakeVote> {
        e._proposals().vote(&id, &voter)
    }
}
