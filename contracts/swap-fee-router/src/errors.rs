use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractErrors {
    NotStarted = 0,
    AlreadyInitialized = 1,
    InvalidParameter = 20,

    DeadlineExpired = 80,
    SlippageExceeded = 81,
}
