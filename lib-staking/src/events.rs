//! Staking Ledger Events
//!
//! Every balance, authorization, and queue-state change appends one event
//! carrying the affected identity and the delta. The event log is the source
//! of truth for downstream indexers and audit trails; consumers drain it with
//! [`StakingLedger::take_events`](crate::ledger::StakingLedger::take_events).

use serde::{Deserialize, Serialize};

use lib_types::{Address, Amount};

use crate::operator::StakeSource;

/// Staking ledger events
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StakingEvent {
    /// An operator identity was claimed and its first stake recorded
    Staked {
        source: StakeSource,
        operator: Address,
        owner: Address,
        beneficiary: Address,
        authorizer: Address,
        amount: Amount,
    },

    /// A stake balance increased
    ToppedUp {
        operator: Address,
        source: StakeSource,
        amount: Amount,
    },

    /// A stake balance decreased by owner/operator request
    Unstaked {
        operator: Address,
        source: StakeSource,
        amount: Amount,
    },

    /// An application's authorized amount grew
    AuthorizationIncreased {
        operator: Address,
        application: Address,
        from_amount: Amount,
        to_amount: Amount,
    },

    /// The authorizer asked an application to release stake
    AuthorizationDecreaseRequested {
        operator: Address,
        application: Address,
        amount: Amount,
    },

    /// The application accepted a pending decrease
    AuthorizationDecreaseApproved {
        operator: Address,
        application: Address,
        amount: Amount,
        remaining: Amount,
    },

    /// An authorization was clamped down because the backing stake is gone
    InvoluntaryAuthorizationDecrease {
        operator: Address,
        application: Address,
        from_amount: Amount,
        to_amount: Amount,
    },

    /// Governance approved (or re-approved) an application
    ApplicationApproved { application: Address },

    /// The application's panic button disabled it
    ApplicationPaused { application: Address },

    /// Governance assigned a panic button
    PanicButtonSet {
        application: Address,
        panic_button: Address,
    },

    /// An application appended a slashing event to the queue
    SlashingQueued {
        application: Address,
        operator: Address,
        amount: Amount,
    },

    /// One queue entry was consumed, with the per-source amounts removed
    SlashingProcessed {
        operator: Address,
        index: u64,
        native_slashed: Amount,
        anchor_slashed: Amount,
        boreal_slashed: Amount,
    },

    /// The permissionless processor received its share of the slashed stake
    ProcessorRewarded { processor: Address, amount: Amount },

    /// A seize call paid an immediate notification reward
    NotifierRewarded { notifier: Address, amount: Amount },

    /// A legacy snapshot diverged from the mirror and was re-synchronized
    DiscrepancyPenalized {
        operator: Address,
        source: StakeSource,
        old_snapshot: Amount,
        new_snapshot: Amount,
    },

    /// Governance set the minimum stake amount
    MinimumStakeAmountSet { amount: Amount },

    /// Governance set the authorization ceiling
    AuthorizationCeilingSet { ceiling: u32 },

    /// Governance set the discrepancy penalty and reward multiplier
    StakeDiscrepancyPenaltySet {
        penalty: Amount,
        reward_multiplier: u8,
    },

    /// Governance set the notification reward
    NotificationRewardSet { reward: Amount },

    /// The notifier treasury was funded
    NotificationRewardPushed { from: Address, amount: Amount },

    /// Governance withdrew from the notifier treasury
    NotificationRewardWithdrawn { recipient: Address, amount: Amount },

    /// Governance handed control to a new address
    GovernanceTransferred { previous: Address, new: Address },
}

impl StakingEvent {
    /// The operator this event concerns, if any
    pub fn operator(&self) -> Option<Address> {
        match self {
            StakingEvent::Staked { operator, .. }
            | StakingEvent::ToppedUp { operator, .. }
            | StakingEvent::Unstaked { operator, .. }
            | StakingEvent::AuthorizationIncreased { operator, .. }
            | StakingEvent::AuthorizationDecreaseRequested { operator, .. }
            | StakingEvent::AuthorizationDecreaseApproved { operator, .. }
            | StakingEvent::InvoluntaryAuthorizationDecrease { operator, .. }
            | StakingEvent::SlashingQueued { operator, .. }
            | StakingEvent::SlashingProcessed { operator, .. }
            | StakingEvent::DiscrepancyPenalized { operator, .. } => Some(*operator),
            _ => None,
        }
    }

    /// Stable event type name for indexers
    pub fn event_type(&self) -> &'static str {
        match self {
            StakingEvent::Staked { .. } => "staked",
            StakingEvent::ToppedUp { .. } => "topped_up",
            StakingEvent::Unstaked { .. } => "unstaked",
            StakingEvent::AuthorizationIncreased { .. } => "authorization_increased",
            StakingEvent::AuthorizationDecreaseRequested { .. } => {
                "authorization_decrease_requested"
            }
            StakingEvent::AuthorizationDecreaseApproved { .. } => {
                "authorization_decrease_approved"
            }
            StakingEvent::InvoluntaryAuthorizationDecrease { .. } => {
                "involuntary_authorization_decrease"
            }
            StakingEvent::ApplicationApproved { .. } => "application_approved",
            StakingEvent::ApplicationPaused { .. } => "application_paused",
            StakingEvent::PanicButtonSet { .. } => "panic_button_set",
            StakingEvent::SlashingQueued { .. } => "slashing_queued",
            StakingEvent::SlashingProcessed { .. } => "slashing_processed",
            StakingEvent::ProcessorRewarded { .. } => "processor_rewarded",
            StakingEvent::NotifierRewarded { .. } => "notifier_rewarded",
            StakingEvent::DiscrepancyPenalized { .. } => "discrepancy_penalized",
            StakingEvent::MinimumStakeAmountSet { .. } => "minimum_stake_amount_set",
            StakingEvent::AuthorizationCeilingSet { .. } => "authorization_ceiling_set",
            StakingEvent::StakeDiscrepancyPenaltySet { .. } => "stake_discrepancy_penalty_set",
            StakingEvent::NotificationRewardSet { .. } => "notification_reward_set",
            StakingEvent::NotificationRewardPushed { .. } => "notification_reward_pushed",
            StakingEvent::NotificationRewardWithdrawn { .. } => "notification_reward_withdrawn",
            StakingEvent::GovernanceTransferred { .. } => "governance_transferred",
        }
    }
}
