//! Staking Ledger Errors
//!
//! Every failure is a rejected operation, never corruption of stored state:
//! an error returned from any ledger operation means nothing was committed.

use lib_tokens::TokenError;
use lib_types::{Address, Amount, Timestamp};
use thiserror::Error;

use crate::operator::StakeSource;

/// Error during staking operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StakingError {
    // ------------------------------------------------------------------
    // Caller / role violations
    // ------------------------------------------------------------------
    #[error("Caller is not the governance address")]
    NotGovernance,

    #[error("Caller is not the operator's owner or the operator itself")]
    NotOwnerOrOperator,

    #[error("Caller is not the operator's authorizer")]
    NotAuthorizer,

    #[error("Caller is not the application's panic button")]
    NotPanicButton,

    // ------------------------------------------------------------------
    // Operator lifecycle
    // ------------------------------------------------------------------
    #[error("Operator identity already in use: {0}")]
    OperatorAlreadyInUse(Address),

    #[error("Operator not found: {0}")]
    OperatorNotFound(Address),

    #[error("Zero amount not allowed")]
    ZeroAmount,

    #[error("Zero address not allowed")]
    ZeroAddress,

    #[error("Amount {amount} does not exceed the minimum stake {minimum}")]
    BelowMinimumStake { amount: Amount, minimum: Amount },

    #[error("Unstake of {requested} exceeds the {source} stake {staked}")]
    UnstakeExceedsStake {
        source: StakeSource,
        staked: Amount,
        requested: Amount,
    },

    #[error("Remaining {source} stake {remaining} is below the authorization floor {required}")]
    StakeFloorViolated {
        source: StakeSource,
        remaining: Amount,
        required: Amount,
    },

    #[error("Native stake may not drop below the minimum until {unlock_at}")]
    StakeBelowMinimumBeforeUnlock { unlock_at: Timestamp },

    #[error("Operator still has {0} outstanding authorization(s)")]
    AuthorizationsStillActive(usize),

    #[error("Legacy snapshot has not increased; nothing to top up")]
    NothingToTopUp,

    #[error("No delegation found in the legacy system for {0}")]
    DelegationNotFound(Address),

    #[error("Legacy delegation has not authorized this ledger for operator {0}")]
    LedgerNotAuthorizedByDelegation(Address),

    #[error("Legacy amount converts to zero native units")]
    ZeroConversion,

    // ------------------------------------------------------------------
    // Application lifecycle
    // ------------------------------------------------------------------
    #[error("Application not approved: {0}")]
    ApplicationNotApproved(Address),

    #[error("Application disabled: {0}")]
    ApplicationDisabled(Address),

    #[error("Application already approved: {0}")]
    ApplicationAlreadyApproved(Address),

    // ------------------------------------------------------------------
    // Authorization
    // ------------------------------------------------------------------
    #[error("Authorization ceiling reached: at most {0} application(s) may be authorized")]
    AuthorizationCeilingReached(u32),

    #[error("Not enough stake to authorize: available {available}, requested {requested}")]
    NotEnoughStakeToAuthorize {
        available: Amount,
        requested: Amount,
    },

    #[error("Requested decrease {requested} exceeds the authorized amount {authorized}")]
    DecreaseExceedsAuthorized {
        authorized: Amount,
        requested: Amount,
    },

    #[error("No pending authorization decrease for application {0}")]
    NoPendingDecrease(Address),

    #[error("Operator has no authorized applications")]
    NothingAuthorized,

    #[error("Application callback rejected by {application}: {reason}")]
    CallbackRejected { application: Address, reason: String },

    // ------------------------------------------------------------------
    // Slashing
    // ------------------------------------------------------------------
    #[error("Operator list is empty")]
    NoOperators,

    #[error(
        "Operator {operator} has {authorized} authorized to the caller, slashing needs {required}"
    )]
    InsufficientAuthorization {
        operator: Address,
        authorized: Amount,
        required: Amount,
    },

    #[error("Reward multiplier {0} exceeds 100 percent")]
    RewardMultiplierTooHigh(u8),

    #[error("Processing count must be positive")]
    ZeroCount,

    #[error("Slashing queue is fully drained")]
    SlashingQueueDrained,

    // ------------------------------------------------------------------
    // Discrepancy
    // ------------------------------------------------------------------
    #[error("No discrepancy between the cached snapshot and the legacy system")]
    NoDiscrepancy,

    #[error("Legacy system call failed: {0}")]
    LegacyCallFailed(String),

    // ------------------------------------------------------------------
    // Treasury / arithmetic
    // ------------------------------------------------------------------
    #[error("Notifier treasury has {have}, withdrawal needs {need}")]
    InsufficientTreasury { have: Amount, need: Amount },

    #[error("Arithmetic overflow")]
    Overflow,

    #[error("Arithmetic underflow")]
    Underflow,

    #[error(transparent)]
    Token(#[from] TokenError),
}

/// Result type for staking operations
pub type StakingResult<T> = Result<T, StakingError>;
