//! The Slashing Pipeline
//!
//! Approved applications append immutable `(operator, amount)` events to a
//! shared queue; a permissionless processor drains it strictly in order.
//! Each event's penalty is apportioned across the three stake sources in a
//! fixed priority: native first, then Anchor, then Boreal. Legacy portions
//! are converted to the legacy denomination and seized live from the
//! corresponding mirror; unconvertible conversion dust stays staked.
//!
//! The processor keeps 5% of the native stake slashed in its batch; the
//! remaining 95% accrues to the notifier treasury.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use lib_types::{Address, Amount};

use crate::authorization::{notify_corrections, AuthorizationCorrection};
use crate::errors::{StakingError, StakingResult};
use crate::events::StakingEvent;
use crate::interfaces::SlashingEnv;
use crate::ledger::StakingLedger;
use crate::params::MAX_REWARD_MULTIPLIER;

/// Share of the slashed native stake paid to the processor, in whole percent
pub const PROCESSOR_REWARD_PERCENT: Amount = 5;

/// An immutable slashing queue entry
///
/// Consumed exactly once, in FIFO order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlashingEvent {
    /// Operator to slash
    pub operator: Address,
    /// Amount to slash, in native denomination
    pub amount: Amount,
}

/// Planned outcome of one queue entry, computed before anything is touched
#[derive(Debug, Clone, Copy)]
struct SlashPlan {
    index: usize,
    operator: Address,
    owner: Address,
    native_slashed: Amount,
    anchor_slashed: Amount,
    anchor_legacy: Amount,
    boreal_slashed: Amount,
    boreal_legacy: Amount,
}

impl StakingLedger {
    // ========================================================================
    // ENQUEUE
    // ========================================================================

    /// Queue a slashing event for each named operator
    ///
    /// The caller self-identifies as an approved, non-disabled application
    /// and must hold at least `amount` of authorization from every operator.
    pub fn slash(
        &mut self,
        caller: Address,
        amount: Amount,
        operators: &[Address],
    ) -> StakingResult<()> {
        let entries = self.check_slashing_request(caller, amount, operators)?;
        self.commit_slashing_request(caller, entries);
        Ok(())
    }

    /// Queue slashing events and immediately reward the notifier who
    /// reported the misbehavior
    ///
    /// The reward is `operators.len() * notification_reward`, scaled by
    /// `reward_multiplier` percent and capped by the notifier treasury.
    pub fn seize(
        &mut self,
        token: &mut lib_tokens::TokenLedger,
        caller: Address,
        amount: Amount,
        reward_multiplier: u8,
        notifier: Address,
        operators: &[Address],
    ) -> StakingResult<()> {
        if reward_multiplier > MAX_REWARD_MULTIPLIER {
            return Err(StakingError::RewardMultiplierTooHigh(reward_multiplier));
        }
        let entries = self.check_slashing_request(caller, amount, operators)?;

        let mut reward = 0;
        if !notifier.is_zero() {
            let base = self
                .params
                .notification_reward
                .checked_mul(operators.len() as Amount)
                .ok_or(StakingError::Overflow)?;
            let scaled = base
                .checked_mul(reward_multiplier as Amount)
                .ok_or(StakingError::Overflow)?
                / 100;
            reward = scaled.min(self.notifiers_treasury);
        }

        if reward > 0 {
            token.transfer(self.address, notifier, reward)?;
            self.notifiers_treasury -= reward;
            self.push_event(StakingEvent::NotifierRewarded {
                notifier,
                amount: reward,
            });
        }
        self.commit_slashing_request(caller, entries);
        Ok(())
    }

    // ========================================================================
    // DRAIN
    // ========================================================================

    /// Consume up to `count` queue entries from the shared index
    ///
    /// Callable by anyone. Processing always continues from the lowest
    /// unconsumed index; overlapping drain requests pick up wherever the
    /// index currently stands.
    pub fn process_slashing(
        &mut self,
        env: &mut SlashingEnv<'_>,
        caller: Address,
        count: usize,
    ) -> StakingResult<()> {
        if count == 0 {
            return Err(StakingError::ZeroCount);
        }
        let start = self.slashing_queue_index;
        if start >= self.slashing_queue.len() {
            return Err(StakingError::SlashingQueueDrained);
        }
        let end = self.slashing_queue.len().min(start + count);

        // Plan: walk the batch against working copies of the balances so a
        // later entry sees what earlier entries already took.
        let mut balances: HashMap<Address, (Amount, Amount, Amount)> = HashMap::new();
        let mut touched: Vec<Address> = Vec::new();
        let mut plans: Vec<SlashPlan> = Vec::with_capacity(end - start);

        for index in start..end {
            let entry = self.slashing_queue[index];
            let record = self.operator_ref(entry.operator)?;
            let owner = record.owner;
            let balance = balances.entry(entry.operator).or_insert_with(|| {
                touched.push(entry.operator);
                (
                    record.native_stake,
                    record.anchor_stake,
                    record.boreal_stake,
                )
            });

            let mut remaining = entry.amount;

            let native_slashed = remaining.min(balance.0);
            balance.0 -= native_slashed;
            remaining -= native_slashed;

            let mut anchor_slashed = 0;
            let mut anchor_legacy = 0;
            if remaining > 0 && balance.1 > 0 {
                let take = remaining.min(balance.1);
                let (legacy, dust) = env.anchor_oracle.from_native(take);
                anchor_slashed = take - dust;
                anchor_legacy = legacy;
                balance.1 -= anchor_slashed;
                remaining -= anchor_slashed;
            }

            let mut boreal_slashed = 0;
            let mut boreal_legacy = 0;
            if remaining > 0 && balance.2 > 0 {
                let take = remaining.min(balance.2);
                let (legacy, dust) = env.boreal_oracle.from_native(take);
                boreal_slashed = take - dust;
                boreal_legacy = legacy;
                balance.2 -= boreal_slashed;
                remaining -= boreal_slashed;
            }

            plans.push(SlashPlan {
                index,
                operator: entry.operator,
                owner,
                native_slashed,
                anchor_slashed,
                anchor_legacy,
                boreal_slashed,
                boreal_legacy,
            });
        }

        let mut total_native: Amount = 0;
        for plan in &plans {
            total_native = total_native
                .checked_add(plan.native_slashed)
                .ok_or(StakingError::Overflow)?;
        }
        let processor_reward = total_native * PROCESSOR_REWARD_PERCENT / 100;
        let treasury_accrual = total_native - processor_reward;

        // Corrections are planned against the post-batch balances so one
        // pass suffices even when several entries hit the same operator.
        let mut corrections: Vec<AuthorizationCorrection> = Vec::new();
        for operator in &touched {
            let (native, anchor, boreal) = balances[operator];
            let total = native.saturating_add(anchor).saturating_add(boreal);
            corrections.extend(self.plan_corrections_for(*operator, total));
        }

        // External: live seizure of the legacy portions, the involuntary
        // decrease callbacks, and the processor payout. Any failure aborts
        // the whole batch with the ledger untouched.
        for plan in &plans {
            if plan.anchor_legacy > 0 {
                env.anchor.seize(
                    plan.anchor_legacy,
                    MAX_REWARD_MULTIPLIER,
                    caller,
                    &[plan.operator],
                )?;
            }
            if plan.boreal_legacy > 0 {
                env.boreal
                    .slash_staker(plan.owner, plan.boreal_legacy, Address::zero(), 0)?;
            }
        }
        notify_corrections(env.apps, &corrections)?;
        if processor_reward > 0 {
            env.token.transfer(self.address, caller, processor_reward)?;
        }

        // Commit.
        for plan in &plans {
            if let Some(record) = self.operators.get_mut(&plan.operator) {
                record.native_stake = record.native_stake.saturating_sub(plan.native_slashed);
                record.anchor_stake = record.anchor_stake.saturating_sub(plan.anchor_slashed);
                record.boreal_stake = record.boreal_stake.saturating_sub(plan.boreal_slashed);
            }
            self.push_event(StakingEvent::SlashingProcessed {
                operator: plan.operator,
                index: plan.index as u64,
                native_slashed: plan.native_slashed,
                anchor_slashed: plan.anchor_slashed,
                boreal_slashed: plan.boreal_slashed,
            });
        }
        self.commit_corrections(&corrections);
        self.slashing_queue_index = end;
        self.notifiers_treasury = self.notifiers_treasury.saturating_add(treasury_accrual);
        if processor_reward > 0 {
            self.push_event(StakingEvent::ProcessorRewarded {
                processor: caller,
                amount: processor_reward,
            });
        }

        tracing::info!(
            "Processed {} slashing event(s): {} native slashed, {} to processor {:?}",
            plans.len(),
            total_native,
            processor_reward,
            caller
        );
        Ok(())
    }

    // ========================================================================
    // VIEWS
    // ========================================================================

    /// Total number of events ever enqueued
    pub fn slashing_queue_length(&self) -> usize {
        self.slashing_queue.len()
    }

    /// Entries still waiting for a processor
    pub fn unprocessed_slashing_count(&self) -> usize {
        self.slashing_queue.len() - self.slashing_queue_index
    }

    // ========================================================================
    // INTERNAL HELPERS
    // ========================================================================

    fn check_slashing_request(
        &self,
        caller: Address,
        amount: Amount,
        operators: &[Address],
    ) -> StakingResult<Vec<SlashingEvent>> {
        self.active_application(caller)?;
        if amount == 0 {
            return Err(StakingError::ZeroAmount);
        }
        if operators.is_empty() {
            return Err(StakingError::NoOperators);
        }
        let mut entries = Vec::with_capacity(operators.len());
        for &operator in operators {
            let authorized = self
                .operator_ref(operator)?
                .authorization(&caller)
                .authorized;
            if authorized < amount {
                return Err(StakingError::InsufficientAuthorization {
                    operator,
                    authorized,
                    required: amount,
                });
            }
            entries.push(SlashingEvent { operator, amount });
        }
        Ok(entries)
    }

    fn commit_slashing_request(&mut self, application: Address, entries: Vec<SlashingEvent>) {
        for entry in entries {
            tracing::info!(
                "Application {:?} queued a slash of {} for operator {:?}",
                application,
                entry.amount,
                entry.operator
            );
            self.slashing_queue.push(entry);
            self.push_event(StakingEvent::SlashingQueued {
                application,
                operator: entry.operator,
                amount: entry.amount,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::StakingParams;
    use crate::testing::{
        FixedRatioConversion, InMemoryAnchorStaking, InMemoryBorealStaking,
        RecordingApplicationHost,
    };
    use lib_tokens::TokenLedger;

    fn addr(id: u8) -> Address {
        Address::new([id; 32])
    }

    const LEDGER: u8 = 100;
    const GOV: u8 = 101;
    const OWNER: u8 = 1;
    const OPERATOR: u8 = 2;
    const APP: u8 = 50;
    const PROCESSOR: u8 = 70;

    struct Fixture {
        ledger: StakingLedger,
        token: TokenLedger,
        anchor: InMemoryAnchorStaking,
        boreal: InMemoryBorealStaking,
        anchor_oracle: FixedRatioConversion,
        boreal_oracle: FixedRatioConversion,
        host: RecordingApplicationHost,
    }

    impl Fixture {
        /// Operator with native-only stake, fully approved application
        fn native_only(native: Amount, authorized: Amount) -> Self {
            let params = StakingParams {
                minimum_stake: 10,
                notification_reward: 10,
                ..StakingParams::default()
            };
            let mut ledger = StakingLedger::new(addr(LEDGER), addr(GOV), params);
            let mut token = TokenLedger::new();
            token.mint(addr(OWNER), 1_000_000).unwrap();
            token.approve(addr(OWNER), addr(LEDGER), Amount::MAX).unwrap();
            ledger
                .stake_native(
                    &mut token,
                    addr(OWNER),
                    addr(OPERATOR),
                    Address::zero(),
                    Address::zero(),
                    native,
                    0,
                )
                .unwrap();
            ledger.approve_application(addr(GOV), addr(APP)).unwrap();

            let mut host = RecordingApplicationHost::new();
            if authorized > 0 {
                ledger
                    .increase_authorization(
                        &mut host,
                        addr(OWNER),
                        addr(OPERATOR),
                        addr(APP),
                        authorized,
                    )
                    .unwrap();
            }
            Self {
                ledger,
                token,
                anchor: InMemoryAnchorStaking::new(),
                boreal: InMemoryBorealStaking::new(),
                anchor_oracle: FixedRatioConversion::identity(),
                boreal_oracle: FixedRatioConversion::identity(),
                host,
            }
        }

        /// Native 500 escrowed, Anchor snapshot worth 300 native (600 legacy
        /// at a 1:2 ratio), authorized 700
        fn mixed_sources() -> Self {
            let params = StakingParams {
                minimum_stake: 100,
                ..StakingParams::default()
            };
            let mut ledger = StakingLedger::new(addr(LEDGER), addr(GOV), params);
            let mut token = TokenLedger::new();
            token.mint(addr(OWNER), 1_000_000).unwrap();
            token.approve(addr(OWNER), addr(LEDGER), Amount::MAX).unwrap();

            let anchor = InMemoryAnchorStaking::new()
                .with_delegation(addr(OPERATOR), addr(OWNER), 600, addr(LEDGER));
            let anchor_oracle = FixedRatioConversion::new(1, 2);

            ledger
                .stake_anchor(&anchor, &anchor_oracle, addr(OPERATOR))
                .unwrap();
            ledger
                .top_up_native(&mut token, addr(OWNER), addr(OPERATOR), 500)
                .unwrap();
            ledger.approve_application(addr(GOV), addr(APP)).unwrap();

            let mut host = RecordingApplicationHost::new();
            ledger
                .increase_authorization(&mut host, addr(OWNER), addr(OPERATOR), addr(APP), 700)
                .unwrap();

            Self {
                ledger,
                token,
                anchor,
                boreal: InMemoryBorealStaking::new(),
                anchor_oracle,
                boreal_oracle: FixedRatioConversion::identity(),
                host,
            }
        }

        fn process(&mut self, count: usize) -> StakingResult<()> {
            let mut env = SlashingEnv {
                token: &mut self.token,
                anchor: &mut self.anchor,
                boreal: &mut self.boreal,
                anchor_oracle: &self.anchor_oracle,
                boreal_oracle: &self.boreal_oracle,
                apps: &mut self.host,
            };
            self.ledger.process_slashing(&mut env, addr(PROCESSOR), count)
        }
    }

    #[test]
    fn test_slash_requires_active_application() {
        let mut fx = Fixture::native_only(1_000, 600);
        let result = fx.ledger.slash(addr(99), 100, &[addr(OPERATOR)]);
        assert_eq!(result, Err(StakingError::ApplicationNotApproved(addr(99))));
    }

    #[test]
    fn test_slash_preconditions() {
        let mut fx = Fixture::native_only(1_000, 600);

        assert_eq!(
            fx.ledger.slash(addr(APP), 0, &[addr(OPERATOR)]),
            Err(StakingError::ZeroAmount)
        );
        assert_eq!(
            fx.ledger.slash(addr(APP), 100, &[]),
            Err(StakingError::NoOperators)
        );
        // More than the per-operator authorization.
        let result = fx.ledger.slash(addr(APP), 601, &[addr(OPERATOR)]);
        assert!(matches!(
            result,
            Err(StakingError::InsufficientAuthorization { .. })
        ));
        assert_eq!(fx.ledger.slashing_queue_length(), 0);
    }

    #[test]
    fn test_slash_checks_every_operator_before_queueing() {
        let mut fx = Fixture::native_only(1_000, 600);
        // Second operator never authorized anything.
        let result = fx.ledger.slash(addr(APP), 100, &[addr(OPERATOR), addr(33)]);
        assert!(matches!(result, Err(StakingError::OperatorNotFound(_))));
        assert_eq!(fx.ledger.slashing_queue_length(), 0);
    }

    #[test]
    fn test_seize_pays_notifier_from_treasury() {
        let mut fx = Fixture::native_only(1_000, 600);
        fx.ledger
            .push_notification_reward(&mut fx.token, addr(OWNER), 1_000)
            .unwrap();

        // reward = 1 operator * 10 reward * 50% = 5
        fx.ledger
            .seize(&mut fx.token, addr(APP), 100, 50, addr(9), &[addr(OPERATOR)])
            .unwrap();

        assert_eq!(fx.token.balance_of(&addr(9)), 5);
        assert_eq!(fx.ledger.notifiers_treasury(), 995);
        assert_eq!(fx.ledger.slashing_queue_length(), 1);
    }

    #[test]
    fn test_seize_reward_capped_by_treasury() {
        let mut fx = Fixture::native_only(1_000, 600);
        fx.ledger
            .push_notification_reward(&mut fx.token, addr(OWNER), 3)
            .unwrap();

        fx.ledger
            .seize(&mut fx.token, addr(APP), 100, 100, addr(9), &[addr(OPERATOR)])
            .unwrap();

        assert_eq!(fx.token.balance_of(&addr(9)), 3);
        assert_eq!(fx.ledger.notifiers_treasury(), 0);
    }

    #[test]
    fn test_seize_rejects_multiplier_above_hundred() {
        let mut fx = Fixture::native_only(1_000, 600);
        let result = fx
            .ledger
            .seize(&mut fx.token, addr(APP), 100, 101, addr(9), &[addr(OPERATOR)]);
        assert_eq!(result, Err(StakingError::RewardMultiplierTooHigh(101)));
    }

    #[test]
    fn test_process_requires_positive_count_and_pending_entries() {
        let mut fx = Fixture::native_only(1_000, 600);
        assert_eq!(fx.process(0), Err(StakingError::ZeroCount));
        assert_eq!(fx.process(1), Err(StakingError::SlashingQueueDrained));
    }

    #[test]
    fn test_process_consumes_exactly_count() {
        let mut fx = Fixture::native_only(1_000, 600);
        for _ in 0..3 {
            fx.ledger.slash(addr(APP), 10, &[addr(OPERATOR)]).unwrap();
        }

        // Requesting 2 must consume exactly 2, never 3.
        fx.process(2).unwrap();
        assert_eq!(fx.ledger.unprocessed_slashing_count(), 1);
    }

    #[test]
    fn test_process_one_never_consumes_two() {
        let mut fx = Fixture::native_only(1_000, 600);
        fx.ledger.slash(addr(APP), 10, &[addr(OPERATOR)]).unwrap();
        fx.ledger.slash(addr(APP), 10, &[addr(OPERATOR)]).unwrap();

        fx.process(1).unwrap();
        assert_eq!(fx.ledger.unprocessed_slashing_count(), 1);

        fx.process(1).unwrap();
        assert_eq!(fx.ledger.unprocessed_slashing_count(), 0);
    }

    #[test]
    fn test_process_count_above_remaining_drains_queue() {
        let mut fx = Fixture::native_only(1_000, 600);
        fx.ledger.slash(addr(APP), 10, &[addr(OPERATOR)]).unwrap();
        fx.ledger.slash(addr(APP), 10, &[addr(OPERATOR)]).unwrap();

        fx.process(100).unwrap();
        assert_eq!(fx.ledger.unprocessed_slashing_count(), 0);
    }

    #[test]
    fn test_processor_reward_split() {
        let mut fx = Fixture::native_only(1_000, 600);
        fx.ledger.slash(addr(APP), 600, &[addr(OPERATOR)]).unwrap();

        fx.process(1).unwrap();

        // 5% of 600 to the processor, 95% to the treasury.
        assert_eq!(fx.token.balance_of(&addr(PROCESSOR)), 30);
        assert_eq!(fx.ledger.notifiers_treasury(), 570);
        assert_eq!(fx.ledger.stakes(addr(OPERATOR)).unwrap(), (400, 0, 0));
    }

    #[test]
    fn test_slash_spills_from_native_into_anchor() {
        // native 500, anchor 300 (600 legacy at 1:2), authorized 700.
        let mut fx = Fixture::mixed_sources();
        fx.ledger.slash(addr(APP), 600, &[addr(OPERATOR)]).unwrap();

        fx.process(1).unwrap();

        // Native fully consumed; Anchor absorbed the remaining 100.
        let (native, anchor, boreal) = fx.ledger.stakes(addr(OPERATOR)).unwrap();
        assert_eq!((native, anchor, boreal), (0, 200, 0));

        // The mirror was seized live for the legacy equivalent (100 * 2).
        assert_eq!(fx.anchor.seizures.len(), 1);
        assert_eq!(fx.anchor.seizures[0].0, 200);

        // Authorization corrected down to the remaining total stake.
        assert_eq!(
            fx.ledger.authorized_stake(addr(OPERATOR), addr(APP)).unwrap(),
            200
        );
        assert_eq!(fx.host.involuntary_decreases, vec![(addr(APP), addr(OPERATOR), 500)]);
    }

    #[test]
    fn test_slash_spills_into_boreal_after_anchor() {
        let mut fx = Fixture::native_only(100, 0);
        // Give the operator a Boreal snapshot as well.
        fx.boreal.set_balance(addr(OWNER), 1_000);
        fx.ledger
            .top_up_boreal(&mut fx.boreal, &fx.boreal_oracle, addr(OPERATOR))
            .unwrap();
        let mut host = RecordingApplicationHost::new();
        fx.ledger
            .increase_authorization(&mut host, addr(OWNER), addr(OPERATOR), addr(APP), 700)
            .unwrap();

        fx.ledger.slash(addr(APP), 400, &[addr(OPERATOR)]).unwrap();
        fx.process(1).unwrap();

        // 100 native, then 300 from Boreal.
        assert_eq!(fx.ledger.stakes(addr(OPERATOR)).unwrap(), (0, 0, 700));
        assert_eq!(fx.boreal.slashes.len(), 1);
        assert_eq!(fx.boreal.slashes[0], (addr(OWNER), 300, Address::zero(), 0));
    }

    #[test]
    fn test_slash_larger_than_stake_takes_everything() {
        let mut fx = Fixture::native_only(1_000, 1_000);
        fx.ledger.slash(addr(APP), 1_000, &[addr(OPERATOR)]).unwrap();
        // Operator unstakes nothing in between; the whole stake goes.
        fx.process(1).unwrap();
        assert_eq!(fx.ledger.stakes(addr(OPERATOR)).unwrap(), (0, 0, 0));
        assert_eq!(
            fx.ledger.authorized_stake(addr(OPERATOR), addr(APP)).unwrap(),
            0
        );
        // Fully deauthorized applications drop off the list.
        assert!(fx
            .ledger
            .authorized_applications(addr(OPERATOR))
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_process_aborts_atomically_when_mirror_fails() {
        let mut fx = Fixture::mixed_sources();
        fx.ledger.slash(addr(APP), 600, &[addr(OPERATOR)]).unwrap();
        fx.anchor.fail_next_seize();

        let result = fx.process(1);
        assert!(matches!(result, Err(StakingError::LegacyCallFailed(_))));

        // Nothing committed: balances, authorization, and the queue index
        // are untouched, so the entry can be processed again.
        assert_eq!(fx.ledger.stakes(addr(OPERATOR)).unwrap(), (500, 300, 0));
        assert_eq!(
            fx.ledger.authorized_stake(addr(OPERATOR), addr(APP)).unwrap(),
            700
        );
        assert_eq!(fx.ledger.unprocessed_slashing_count(), 1);

        fx.process(1).unwrap();
        assert_eq!(fx.ledger.unprocessed_slashing_count(), 0);
    }

    #[test]
    fn test_process_aborts_when_callback_fails() {
        let mut fx = Fixture::native_only(1_000, 600);
        fx.ledger.slash(addr(APP), 600, &[addr(OPERATOR)]).unwrap();
        fx.host.reject(addr(APP));

        let result = fx.process(1);
        assert!(matches!(result, Err(StakingError::CallbackRejected { .. })));
        assert_eq!(fx.ledger.stakes(addr(OPERATOR)).unwrap(), (1_000, 0, 0));
        assert_eq!(fx.ledger.unprocessed_slashing_count(), 1);
    }

    #[test]
    fn test_queue_index_is_monotonic() {
        let mut fx = Fixture::native_only(1_000, 600);
        for _ in 0..3 {
            fx.ledger.slash(addr(APP), 5, &[addr(OPERATOR)]).unwrap();
        }

        let mut seen_indices = Vec::new();
        for _ in 0..3 {
            fx.process(1).unwrap();
            for event in fx.ledger.take_events() {
                if let StakingEvent::SlashingProcessed { index, .. } = event {
                    seen_indices.push(index);
                }
            }
        }
        // Each entry processed exactly once, strictly in order.
        assert_eq!(seen_indices, vec![0, 1, 2]);
        assert_eq!(fx.process(1), Err(StakingError::SlashingQueueDrained));
    }
}
