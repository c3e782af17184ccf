//! The Operator Ledger
//!
//! [`StakingLedger`] is the sole owner of all stake and authorization state.
//! Applications and governance never hold stake directly; they observe and
//! request changes through the operations defined here and in the
//! authorization, slashing, and discrepancy modules.
//!
//! # Atomicity
//!
//! Operations follow a plan / external / commit discipline: all validation
//! and arithmetic happens against immutable state, every fallible
//! collaborator call (token transfers, mirror reads and seizures,
//! application callbacks) runs next, and only then is the planned mutation
//! applied. The commit phase cannot fail, so an error from any operation
//! means the ledger did not change.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use lib_tokens::TokenLedger;
use lib_types::{Address, Amount, Timestamp};

use crate::apps::ApplicationInfo;
use crate::errors::{StakingError, StakingResult};
use crate::events::StakingEvent;
use crate::interfaces::{AnchorStaking, BorealStaking, ConversionOracle};
use crate::operator::{Operator, StakeSource};
use crate::params::{StakingParams, MAX_REWARD_MULTIPLIER};
use crate::slashing::SlashingEvent;

/// The central staking ledger
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StakingLedger {
    /// This ledger's own account in the token ledger (escrow holder)
    pub(crate) address: Address,
    /// Governance identity for the administrative surface
    pub(crate) governance: Address,
    /// Protocol parameters
    pub(crate) params: StakingParams,
    /// All claimed operator identities
    pub(crate) operators: HashMap<Address, Operator>,
    /// Consumer applications, created on first approval
    pub(crate) applications: HashMap<Address, ApplicationInfo>,
    /// Append-only slashing queue
    pub(crate) slashing_queue: Vec<SlashingEvent>,
    /// Index of the first unconsumed queue entry
    pub(crate) slashing_queue_index: usize,
    /// Internal balance funding notification rewards (backed by escrow)
    pub(crate) notifiers_treasury: Amount,
    /// Event log, drained by indexers
    pub(crate) events: Vec<StakingEvent>,
}

impl StakingLedger {
    /// Create a ledger bound to its escrow address and governance identity
    pub fn new(address: Address, governance: Address, params: StakingParams) -> Self {
        Self {
            address,
            governance,
            params,
            operators: HashMap::new(),
            applications: HashMap::new(),
            slashing_queue: Vec::new(),
            slashing_queue_index: 0,
            notifiers_treasury: 0,
            events: Vec::new(),
        }
    }

    // ========================================================================
    // STAKE ORIGINATION
    // ========================================================================

    /// Claim an operator identity with a fresh native stake
    ///
    /// The caller becomes the owner; a zero beneficiary or authorizer
    /// defaults to the caller. The amount must strictly exceed the
    /// configured minimum and is escrowed from the caller's token balance.
    pub fn stake_native(
        &mut self,
        token: &mut TokenLedger,
        caller: Address,
        operator: Address,
        beneficiary: Address,
        authorizer: Address,
        amount: Amount,
        now: Timestamp,
    ) -> StakingResult<()> {
        if operator.is_zero() {
            return Err(StakingError::ZeroAddress);
        }
        self.require_unclaimed(operator)?;
        if amount <= self.params.minimum_stake {
            return Err(StakingError::BelowMinimumStake {
                amount,
                minimum: self.params.minimum_stake,
            });
        }

        let beneficiary = if beneficiary.is_zero() { caller } else { beneficiary };
        let authorizer = if authorizer.is_zero() { caller } else { authorizer };

        token.transfer_from(self.address, caller, self.address, amount)?;

        let mut record = Operator::new(caller, beneficiary, authorizer);
        record.native_stake = amount;
        record.staked_at = now;
        self.operators.insert(operator, record);

        tracing::info!(
            "Operator {:?} staked {} native units (owner {:?})",
            operator,
            amount,
            caller
        );
        self.push_event(StakingEvent::Staked {
            source: StakeSource::Native,
            operator,
            owner: caller,
            beneficiary,
            authorizer,
            amount,
        });
        Ok(())
    }

    /// Claim an operator identity from its Anchor delegation
    ///
    /// Permissionless: roles are copied from the mirror, which must report a
    /// live delegation that has authorized this ledger. The delegated amount
    /// is cached in native denomination; custody stays with the mirror.
    pub fn stake_anchor(
        &mut self,
        anchor: &dyn AnchorStaking,
        oracle: &dyn ConversionOracle,
        operator: Address,
    ) -> StakingResult<()> {
        if operator.is_zero() {
            return Err(StakingError::ZeroAddress);
        }
        self.require_unclaimed(operator)?;

        let owner = anchor.owner_of(operator);
        if owner.is_zero() {
            return Err(StakingError::DelegationNotFound(operator));
        }
        let info = anchor.delegation_info(operator);
        if !info.is_active() || info.amount == 0 {
            return Err(StakingError::DelegationNotFound(operator));
        }
        if !anchor.is_authorized_for_operator(operator, self.address) {
            return Err(StakingError::LedgerNotAuthorizedByDelegation(operator));
        }

        let (converted, _) = oracle.to_native(info.amount);
        if converted == 0 {
            return Err(StakingError::ZeroConversion);
        }

        let beneficiary = match anchor.beneficiary_of(operator) {
            b if b.is_zero() => owner,
            b => b,
        };
        let authorizer = match anchor.authorizer_of(operator) {
            a if a.is_zero() => owner,
            a => a,
        };

        let mut record = Operator::new(owner, beneficiary, authorizer);
        record.anchor_stake = converted;
        self.operators.insert(operator, record);

        tracing::info!(
            "Operator {:?} staked {} native units from the Anchor delegation",
            operator,
            converted
        );
        self.push_event(StakingEvent::Staked {
            source: StakeSource::Anchor,
            operator,
            owner,
            beneficiary,
            authorizer,
            amount: converted,
        });
        Ok(())
    }

    /// Claim an operator identity by merging the caller's Boreal position
    ///
    /// The caller becomes the owner; a zero beneficiary or authorizer
    /// defaults to the caller. The merged amount is cached in native
    /// denomination; custody stays with the mirror.
    pub fn stake_boreal(
        &mut self,
        boreal: &mut dyn BorealStaking,
        oracle: &dyn ConversionOracle,
        caller: Address,
        operator: Address,
        beneficiary: Address,
        authorizer: Address,
    ) -> StakingResult<()> {
        if operator.is_zero() {
            return Err(StakingError::ZeroAddress);
        }
        self.require_unclaimed(operator)?;

        let merged = boreal.request_merge(caller)?;
        if merged == 0 {
            return Err(StakingError::DelegationNotFound(caller));
        }
        let (converted, _) = oracle.to_native(merged);
        if converted == 0 {
            return Err(StakingError::ZeroConversion);
        }

        let beneficiary = if beneficiary.is_zero() { caller } else { beneficiary };
        let authorizer = if authorizer.is_zero() { caller } else { authorizer };

        let mut record = Operator::new(caller, beneficiary, authorizer);
        record.boreal_stake = converted;
        self.operators.insert(operator, record);

        tracing::info!(
            "Operator {:?} staked {} native units from the Boreal position",
            operator,
            converted
        );
        self.push_event(StakingEvent::Staked {
            source: StakeSource::Boreal,
            operator,
            owner: caller,
            beneficiary,
            authorizer,
            amount: converted,
        });
        Ok(())
    }

    // ========================================================================
    // TOP-UPS
    // ========================================================================

    /// Escrow additional native stake for an existing operator
    ///
    /// Any payer may top up any operator.
    pub fn top_up_native(
        &mut self,
        token: &mut TokenLedger,
        caller: Address,
        operator: Address,
        amount: Amount,
    ) -> StakingResult<()> {
        if amount == 0 {
            return Err(StakingError::ZeroAmount);
        }
        let new_native = self
            .operator_ref(operator)?
            .native_stake
            .checked_add(amount)
            .ok_or(StakingError::Overflow)?;

        token.transfer_from(self.address, caller, self.address, amount)?;

        self.operators
            .get_mut(&operator)
            .ok_or(StakingError::OperatorNotFound(operator))?
            .native_stake = new_native;

        tracing::debug!("Operator {:?} topped up {} native units", operator, amount);
        self.push_event(StakingEvent::ToppedUp {
            operator,
            source: StakeSource::Native,
            amount,
        });
        Ok(())
    }

    /// Re-synchronize the Anchor snapshot, accepting only an increase
    ///
    /// The snapshot is a monotonic ratchet: a smaller or equal live amount is
    /// rejected, preventing a decrease smuggled in through a top-up.
    pub fn top_up_anchor(
        &mut self,
        anchor: &dyn AnchorStaking,
        oracle: &dyn ConversionOracle,
        operator: Address,
    ) -> StakingResult<()> {
        let cached = self.operator_ref(operator)?.anchor_stake;

        let info = anchor.delegation_info(operator);
        let live = if info.is_active() { info.amount } else { 0 };
        let (converted, _) = oracle.to_native(live);
        if converted <= cached {
            return Err(StakingError::NothingToTopUp);
        }
        let delta = converted - cached;

        self.operators
            .get_mut(&operator)
            .ok_or(StakingError::OperatorNotFound(operator))?
            .anchor_stake = converted;

        tracing::debug!("Operator {:?} topped up {} anchor units", operator, delta);
        self.push_event(StakingEvent::ToppedUp {
            operator,
            source: StakeSource::Anchor,
            amount: delta,
        });
        Ok(())
    }

    /// Re-merge the owner's Boreal position, accepting only an increase
    pub fn top_up_boreal(
        &mut self,
        boreal: &mut dyn BorealStaking,
        oracle: &dyn ConversionOracle,
        operator: Address,
    ) -> StakingResult<()> {
        let record = self.operator_ref(operator)?;
        let cached = record.boreal_stake;
        let owner = record.owner;

        let merged = boreal.request_merge(owner)?;
        let (converted, _) = oracle.to_native(merged);
        if converted <= cached {
            return Err(StakingError::NothingToTopUp);
        }
        let delta = converted - cached;

        self.operators
            .get_mut(&operator)
            .ok_or(StakingError::OperatorNotFound(operator))?
            .boreal_stake = converted;

        tracing::debug!("Operator {:?} topped up {} boreal units", operator, delta);
        self.push_event(StakingEvent::ToppedUp {
            operator,
            source: StakeSource::Boreal,
            amount: delta,
        });
        Ok(())
    }

    // ========================================================================
    // UNSTAKING
    // ========================================================================

    /// Release part of the native stake back to the owner
    ///
    /// The remaining balance must keep covering the operator's maximum
    /// authorization, and must either stay strictly above the configured
    /// minimum or the stake must have been held for the minimum duration.
    pub fn unstake_native(
        &mut self,
        token: &mut TokenLedger,
        caller: Address,
        operator: Address,
        amount: Amount,
        now: Timestamp,
    ) -> StakingResult<()> {
        if amount == 0 {
            return Err(StakingError::ZeroAmount);
        }
        let record = self.operator_ref(operator)?;
        if !record.is_owner_or_operator(caller, operator) {
            return Err(StakingError::NotOwnerOrOperator);
        }
        if amount > record.native_stake {
            return Err(StakingError::UnstakeExceedsStake {
                source: StakeSource::Native,
                staked: record.native_stake,
                requested: amount,
            });
        }
        let remaining = record.native_stake - amount;
        let floor = record.min_staked(StakeSource::Native);
        if remaining < floor {
            return Err(StakingError::StakeFloorViolated {
                source: StakeSource::Native,
                remaining,
                required: floor,
            });
        }
        let unlock_at = record.staked_at.saturating_add(self.params.minimum_stake_duration);
        if remaining <= self.params.minimum_stake && now < unlock_at {
            return Err(StakingError::StakeBelowMinimumBeforeUnlock { unlock_at });
        }
        let owner = record.owner;

        token.transfer(self.address, owner, amount)?;

        self.operators
            .get_mut(&operator)
            .ok_or(StakingError::OperatorNotFound(operator))?
            .native_stake = remaining;

        tracing::info!("Operator {:?} unstaked {} native units", operator, amount);
        self.push_event(StakingEvent::Unstaked {
            operator,
            source: StakeSource::Native,
            amount,
        });
        Ok(())
    }

    /// Drop the cached Anchor snapshot entirely
    ///
    /// Allowed only when no authorization depends on the Anchor stake.
    pub fn unstake_anchor(&mut self, caller: Address, operator: Address) -> StakingResult<()> {
        let record = self.operator_ref(operator)?;
        if !record.is_owner_or_operator(caller, operator) {
            return Err(StakingError::NotOwnerOrOperator);
        }
        if record.anchor_stake == 0 {
            return Err(StakingError::ZeroAmount);
        }
        let floor = record.min_staked(StakeSource::Anchor);
        if floor > 0 {
            return Err(StakingError::StakeFloorViolated {
                source: StakeSource::Anchor,
                remaining: 0,
                required: floor,
            });
        }
        let amount = record.anchor_stake;

        self.operators
            .get_mut(&operator)
            .ok_or(StakingError::OperatorNotFound(operator))?
            .anchor_stake = 0;

        tracing::info!("Operator {:?} unstaked {} anchor units", operator, amount);
        self.push_event(StakingEvent::Unstaked {
            operator,
            source: StakeSource::Anchor,
            amount,
        });
        Ok(())
    }

    /// Reduce the cached Boreal snapshot
    ///
    /// No minimum-time rule applies; the remaining snapshot must keep the
    /// maximum authorization satisfiable.
    pub fn unstake_boreal(
        &mut self,
        caller: Address,
        operator: Address,
        amount: Amount,
    ) -> StakingResult<()> {
        if amount == 0 {
            return Err(StakingError::ZeroAmount);
        }
        let record = self.operator_ref(operator)?;
        if !record.is_owner_or_operator(caller, operator) {
            return Err(StakingError::NotOwnerOrOperator);
        }
        if amount > record.boreal_stake {
            return Err(StakingError::UnstakeExceedsStake {
                source: StakeSource::Boreal,
                staked: record.boreal_stake,
                requested: amount,
            });
        }
        let remaining = record.boreal_stake - amount;
        let floor = record.min_staked(StakeSource::Boreal);
        if remaining < floor {
            return Err(StakingError::StakeFloorViolated {
                source: StakeSource::Boreal,
                remaining,
                required: floor,
            });
        }

        self.operators
            .get_mut(&operator)
            .ok_or(StakingError::OperatorNotFound(operator))?
            .boreal_stake = remaining;

        tracing::info!("Operator {:?} unstaked {} boreal units", operator, amount);
        self.push_event(StakingEvent::Unstaked {
            operator,
            source: StakeSource::Boreal,
            amount,
        });
        Ok(())
    }

    /// Release everything: refund the native balance and zero all sources
    ///
    /// Hard precondition: the operator has no outstanding authorizations.
    pub fn unstake_all(
        &mut self,
        token: &mut TokenLedger,
        caller: Address,
        operator: Address,
    ) -> StakingResult<()> {
        let record = self.operator_ref(operator)?;
        if !record.is_owner_or_operator(caller, operator) {
            return Err(StakingError::NotOwnerOrOperator);
        }
        if !record.authorized_apps.is_empty() {
            return Err(StakingError::AuthorizationsStillActive(
                record.authorized_apps.len(),
            ));
        }
        let owner = record.owner;
        let (native, anchor, boreal) =
            (record.native_stake, record.anchor_stake, record.boreal_stake);

        if native > 0 {
            token.transfer(self.address, owner, native)?;
        }

        let record = self
            .operators
            .get_mut(&operator)
            .ok_or(StakingError::OperatorNotFound(operator))?;
        record.native_stake = 0;
        record.anchor_stake = 0;
        record.boreal_stake = 0;

        tracing::info!("Operator {:?} unstaked everything", operator);
        for (source, amount) in [
            (StakeSource::Native, native),
            (StakeSource::Anchor, anchor),
            (StakeSource::Boreal, boreal),
        ] {
            if amount > 0 {
                self.push_event(StakingEvent::Unstaked {
                    operator,
                    source,
                    amount,
                });
            }
        }
        Ok(())
    }

    // ========================================================================
    // GOVERNANCE SURFACE
    // ========================================================================

    /// Approve an application, creating or re-enabling it
    pub fn approve_application(
        &mut self,
        caller: Address,
        application: Address,
    ) -> StakingResult<()> {
        self.require_governance(caller)?;
        if application.is_zero() {
            return Err(StakingError::ZeroAddress);
        }
        match self.applications.get_mut(&application) {
            Some(info) if info.approved && !info.disabled => {
                return Err(StakingError::ApplicationAlreadyApproved(application));
            }
            Some(info) => {
                info.approved = true;
                info.disabled = false;
            }
            None => {
                self.applications
                    .insert(application, ApplicationInfo::approved());
            }
        }
        tracing::info!("Application {:?} approved", application);
        self.push_event(StakingEvent::ApplicationApproved { application });
        Ok(())
    }

    /// Assign the emergency role allowed to disable an application
    pub fn set_panic_button(
        &mut self,
        caller: Address,
        application: Address,
        panic_button: Address,
    ) -> StakingResult<()> {
        self.require_governance(caller)?;
        let info = self
            .applications
            .get_mut(&application)
            .ok_or(StakingError::ApplicationNotApproved(application))?;
        info.panic_button = panic_button;
        self.push_event(StakingEvent::PanicButtonSet {
            application,
            panic_button,
        });
        Ok(())
    }

    /// Disable an application; only its panic button may do this
    pub fn pause_application(
        &mut self,
        caller: Address,
        application: Address,
    ) -> StakingResult<()> {
        let info = self
            .applications
            .get_mut(&application)
            .ok_or(StakingError::ApplicationNotApproved(application))?;
        if caller != info.panic_button || info.panic_button.is_zero() {
            return Err(StakingError::NotPanicButton);
        }
        if info.disabled {
            return Err(StakingError::ApplicationDisabled(application));
        }
        info.disabled = true;
        tracing::warn!("Application {:?} disabled by its panic button", application);
        self.push_event(StakingEvent::ApplicationPaused { application });
        Ok(())
    }

    /// Set the minimum native stake amount
    pub fn set_minimum_stake_amount(
        &mut self,
        caller: Address,
        amount: Amount,
    ) -> StakingResult<()> {
        self.require_governance(caller)?;
        self.params.minimum_stake = amount;
        self.push_event(StakingEvent::MinimumStakeAmountSet { amount });
        Ok(())
    }

    /// Set how many applications one operator may authorize (0 = unlimited)
    pub fn set_authorization_ceiling(
        &mut self,
        caller: Address,
        ceiling: u32,
    ) -> StakingResult<()> {
        self.require_governance(caller)?;
        self.params.authorization_ceiling = ceiling;
        self.push_event(StakingEvent::AuthorizationCeilingSet { ceiling });
        Ok(())
    }

    /// Set the discrepancy penalty and the reporter's reward multiplier
    pub fn set_stake_discrepancy_penalty(
        &mut self,
        caller: Address,
        penalty: Amount,
        reward_multiplier: u8,
    ) -> StakingResult<()> {
        self.require_governance(caller)?;
        if reward_multiplier > MAX_REWARD_MULTIPLIER {
            return Err(StakingError::RewardMultiplierTooHigh(reward_multiplier));
        }
        self.params.stake_discrepancy_penalty = penalty;
        self.params.stake_discrepancy_reward_multiplier = reward_multiplier;
        self.push_event(StakingEvent::StakeDiscrepancyPenaltySet {
            penalty,
            reward_multiplier,
        });
        Ok(())
    }

    /// Set the per-operator notification reward
    pub fn set_notification_reward(
        &mut self,
        caller: Address,
        reward: Amount,
    ) -> StakingResult<()> {
        self.require_governance(caller)?;
        self.params.notification_reward = reward;
        self.push_event(StakingEvent::NotificationRewardSet { reward });
        Ok(())
    }

    /// Fund the notifier treasury; anyone may pay in
    pub fn push_notification_reward(
        &mut self,
        token: &mut TokenLedger,
        caller: Address,
        amount: Amount,
    ) -> StakingResult<()> {
        if amount == 0 {
            return Err(StakingError::ZeroAmount);
        }
        let new_treasury = self
            .notifiers_treasury
            .checked_add(amount)
            .ok_or(StakingError::Overflow)?;

        token.transfer_from(self.address, caller, self.address, amount)?;

        self.notifiers_treasury = new_treasury;
        self.push_event(StakingEvent::NotificationRewardPushed {
            from: caller,
            amount,
        });
        Ok(())
    }

    /// Withdraw from the notifier treasury to a recipient
    pub fn withdraw_notification_reward(
        &mut self,
        token: &mut TokenLedger,
        caller: Address,
        recipient: Address,
        amount: Amount,
    ) -> StakingResult<()> {
        self.require_governance(caller)?;
        if amount > self.notifiers_treasury {
            return Err(StakingError::InsufficientTreasury {
                have: self.notifiers_treasury,
                need: amount,
            });
        }

        token.transfer(self.address, recipient, amount)?;

        self.notifiers_treasury -= amount;
        self.push_event(StakingEvent::NotificationRewardWithdrawn { recipient, amount });
        Ok(())
    }

    /// Hand the governance role to a new address
    pub fn transfer_governance(&mut self, caller: Address, new: Address) -> StakingResult<()> {
        self.require_governance(caller)?;
        if new.is_zero() {
            return Err(StakingError::ZeroAddress);
        }
        let previous = self.governance;
        self.governance = new;
        self.push_event(StakingEvent::GovernanceTransferred { previous, new });
        Ok(())
    }

    // ========================================================================
    // VIEWS
    // ========================================================================

    /// The three stake balances of an operator
    pub fn stakes(&self, operator: Address) -> StakingResult<(Amount, Amount, Amount)> {
        let record = self.operator_ref(operator)?;
        Ok((
            record.native_stake,
            record.anchor_stake,
            record.boreal_stake,
        ))
    }

    /// Owner, beneficiary, and authorizer of an operator
    pub fn roles_of(&self, operator: Address) -> StakingResult<(Address, Address, Address)> {
        let record = self.operator_ref(operator)?;
        Ok((record.owner, record.beneficiary, record.authorizer))
    }

    /// When the operator's native stake was created
    pub fn staked_at(&self, operator: Address) -> StakingResult<Timestamp> {
        Ok(self.operator_ref(operator)?.staked_at)
    }

    /// Amount currently authorized to an application
    pub fn authorized_stake(&self, operator: Address, application: Address) -> StakingResult<Amount> {
        Ok(self
            .operator_ref(operator)?
            .authorization(&application)
            .authorized)
    }

    /// Amount pending approval of a requested decrease
    pub fn pending_decrease(&self, operator: Address, application: Address) -> StakingResult<Amount> {
        Ok(self
            .operator_ref(operator)?
            .authorization(&application)
            .deauthorizing)
    }

    /// Applications the operator currently has authorized
    pub fn authorized_applications(&self, operator: Address) -> StakingResult<Vec<Address>> {
        Ok(self.operator_ref(operator)?.authorized_apps.clone())
    }

    /// Registry state of an application, if it was ever approved
    pub fn application(&self, application: Address) -> Option<&ApplicationInfo> {
        self.applications.get(&application)
    }

    /// Current balance of the notifier treasury
    pub fn notifiers_treasury(&self) -> Amount {
        self.notifiers_treasury
    }

    /// Current protocol parameters
    pub fn params(&self) -> &StakingParams {
        &self.params
    }

    /// The governance identity
    pub fn governance(&self) -> Address {
        self.governance
    }

    /// This ledger's escrow address in the token ledger
    pub fn address(&self) -> Address {
        self.address
    }

    /// Events emitted so far
    pub fn events(&self) -> &[StakingEvent] {
        &self.events
    }

    /// Drain the event log
    pub fn take_events(&mut self) -> Vec<StakingEvent> {
        std::mem::take(&mut self.events)
    }

    // ========================================================================
    // INTERNAL HELPERS
    // ========================================================================

    pub(crate) fn require_governance(&self, caller: Address) -> StakingResult<()> {
        if caller != self.governance {
            return Err(StakingError::NotGovernance);
        }
        Ok(())
    }

    pub(crate) fn require_unclaimed(&self, operator: Address) -> StakingResult<()> {
        if self.operators.contains_key(&operator) {
            return Err(StakingError::OperatorAlreadyInUse(operator));
        }
        Ok(())
    }

    pub(crate) fn operator_ref(&self, operator: Address) -> StakingResult<&Operator> {
        self.operators
            .get(&operator)
            .ok_or(StakingError::OperatorNotFound(operator))
    }

    /// Application that must currently be allowed to act (approved and not
    /// disabled)
    pub(crate) fn active_application(&self, application: Address) -> StakingResult<&ApplicationInfo> {
        let info = self
            .applications
            .get(&application)
            .ok_or(StakingError::ApplicationNotApproved(application))?;
        if !info.approved {
            return Err(StakingError::ApplicationNotApproved(application));
        }
        if info.disabled {
            return Err(StakingError::ApplicationDisabled(application));
        }
        Ok(info)
    }

    pub(crate) fn push_event(&mut self, event: StakingEvent) {
        self.events.push(event);
    }
}
