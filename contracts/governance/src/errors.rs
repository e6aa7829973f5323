use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractErrors {
    // Core Errors
    NotStarted = 0,
    AlreadyInitialized = 1,
    Unauthorized = 2,
    InvalidParameter = 20,

    // Proposals Errors
    ProposalDoesntExist = 40,
    InsufficientStake = 41,
    AlreadyVerified = 42,
    AlreadyExecuted = 43,
    NotExecutable = 44,
    ProposalPassed = 45,

    // Voting Errors
    VotingClosed = 50,
    VotingNotEnded = 51,
    AlreadyVoted = 52,
    NoStake = 53,
    AlreadyClaimed = 54,

    // Managers Errors
    MaxManagersExceeded = 70,
    ManagerDoesntExist = 71,
    ManagerStillActive = 72,
    TermNotElapsed = 74,
}
