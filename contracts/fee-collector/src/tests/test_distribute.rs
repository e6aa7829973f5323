#![cfg(test)]

use crate::errors::ContractErrors;
use crate::storage::core::FeeSplit;
use crate::tests::test_utils::{create_test_data, init_contract, TestData};
use soroban_sdk::testutils::{Address as _, MockAuth, MockAuthInvoke};
use soroban_sdk::{Address, Env, IntoVal};

#[test]
fn test_init_and_fee_split() {
    let e: Env = Env::default();
    let test_data: TestData = create_test_data(&e);

    let not_started_error = test_data
        .contract_client
        .try_get_fee_split()
        .unwrap_err()
        .unwrap();
    assert_eq!(not_started_error, ContractErrors::NotStarted.into());

    let bad_split: FeeSplit = FeeSplit {
        founder_share_bps: 2_001,
        ..test_data.split.clone()
    };
    let invalid_error = test_data
        .contract_client
        .try_init(&test_data.admin, &bad_split)
        .unwrap_err()
        .unwrap();
    assert_eq!(invalid_error, ContractErrors::InvalidParameter.into());

    init_contract(&test_data);
    assert_eq!(test_data.contract_client.get_fee_split(), test_data.split);

    let already_initialized_error = test_data
        .contract_client
        .try_init(&test_data.admin, &test_data.split)
        .unwrap_err()
        .unwrap();
    assert_eq!(
        already_initialized_error,
        ContractErrors::AlreadyInitialized.into()
    );

    let new_split: FeeSplit = FeeSplit {
        dao: Address::generate(&e),
        founder: Address::generate(&e),
        dao_share_bps: 5_000,
        founder_share_bps: 5_000,
    };

    let stranger: Address = Address::generate(&e);
    assert!(test_data
        .contract_client
        .mock_auths(&[MockAuth {
            address: &stranger,
            invoke: &MockAuthInvoke {
                contract: &test_data.contract_client.address,
                fn_name: "set_fee_split",
                args: (new_split.clone(),).into_val(&e),
                sub_invokes: &[],
            },
        }])
        .try_set_fee_split(&new_split)
        .is_err());

    test_data
        .contract_client
        .mock_auths(&[MockAuth {
            address: &test_data.admin,
            invoke: &MockAuthInvoke {
                contract: &test_data.contract_client.address,
                fn_name: "set_fee_split",
                args: (new_split.clone(),).into_val(&e),
                sub_invokes: &[],
            },
        }])
        .set_fee_split(&new_split);
    assert_eq!(test_data.contract_client.get_fee_split(), new_split);

    let bad_split: FeeSplit = FeeSplit {
        dao_share_bps: 10_000,
        ..new_split.clone()
    };
    let invalid_error = test_data
        .contract_client
        .mock_all_auths()
        .try_set_fee_split(&bad_split)
        .unwrap_err()
        .unwrap();
    assert_eq!(invalid_error, ContractErrors::InvalidParameter.into());

    let new_admin: Address = Address::generate(&e);
    test_data
        .contract_client
        .mock_all_auths()
        .set_admin(&new_admin);
}

#[test]
fn test_distribute() {
    let e: Env = Env::default();
    let test_data: TestData = create_test_data(&e);
    init_contract(&test_data);

    test_data
        .token_stellar
        .mock_all_auths()
        .mint(&test_data.contract_client.address, &1_005);

    // Anyone can push collected fees out, they always land on the configured receivers
    assert_eq!(
        test_data
            .contract_client
            .distribute(&test_data.token_client.address, &5),
        (4, 1)
    );
    assert_eq!(test_data.token_client.balance(&test_data.split.dao), 4);
    assert_eq!(test_data.token_client.balance(&test_data.split.founder), 1);

    assert_eq!(
        test_data
            .contract_client
            .distribute(&test_data.token_client.address, &1_000),
        (800, 200)
    );
    assert_eq!(test_data.token_client.balance(&test_data.split.dao), 804);
    assert_eq!(
        test_data.token_client.balance(&test_data.split.founder),
        201
    );
    assert_eq!(
        test_data
            .token_client
            .balance(&test_data.contract_client.address),
        0
    );

    let zero_error = test_data
        .contract_client
        .try_distribute(&test_data.token_client.address, &0)
        .unwrap_err()
        .unwrap();
    assert_eq!(zero_error, ContractErrors::InvalidParameter.into());

    let oversized_error = test_data
        .contract_client
        .try_distribute(&test_data.token_client.address, &(i128::MAX as u128 + 1))
        .unwrap_err()
        .unwrap();
    assert_eq!(oversized_error, ContractErrors::InvalidParameter.into());

    // Nothing left to distribute
    assert!(test_data
        .contract_client
        .try_distribute(&test_data.token_client.address, &10)
        .is_err());
}
