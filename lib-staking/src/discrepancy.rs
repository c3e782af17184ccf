//! The Discrepancy Reconciler
//!
//! The cached legacy snapshots are only as good as the mirrors behind them.
//! Anyone who notices that a mirror holds less than the ledger's cache (or
//! that the position was withdrawn outright) can report it: the ledger
//! seizes the configured penalty from the mirror, pays the reporter through
//! the mirror's reward mechanism, corrects the cache to the live value, and
//! clamps any authorization the vanished stake was backing.

use lib_types::{Address, Amount};

use crate::authorization::notify_corrections;
use crate::errors::{StakingError, StakingResult};
use crate::events::StakingEvent;
use crate::interfaces::{AnchorStaking, ApplicationHost, BorealStaking, ConversionOracle};
use crate::ledger::StakingLedger;
use crate::operator::StakeSource;

impl StakingLedger {
    /// Report that the Anchor mirror diverged from the cached snapshot
    ///
    /// Callable by anyone. Fails with [`StakingError::NoDiscrepancy`] unless
    /// the cache exceeds the live delegation or the delegation was withdrawn
    /// externally.
    pub fn notify_anchor_discrepancy(
        &mut self,
        anchor: &mut dyn AnchorStaking,
        oracle: &dyn ConversionOracle,
        apps: &mut dyn ApplicationHost,
        caller: Address,
        operator: Address,
    ) -> StakingResult<()> {
        let cached = self.operator_ref(operator)?.anchor_stake;
        if cached == 0 {
            return Err(StakingError::NoDiscrepancy);
        }

        let info = anchor.delegation_info(operator);
        let withdrawn = info.created_at == 0 || info.undelegated_at > 0;
        let (live, _) = oracle.to_native(info.amount);
        if !withdrawn && live >= cached {
            return Err(StakingError::NoDiscrepancy);
        }

        // Seize the penalty from the mirror; the mirror pays the reporter.
        let (penalty_legacy, _) = oracle.from_native(self.params.stake_discrepancy_penalty);
        if penalty_legacy > 0 {
            anchor.seize(
                penalty_legacy,
                self.params.stake_discrepancy_reward_multiplier,
                caller,
                &[operator],
            )?;
        }

        // Re-synchronize against the post-seizure state.
        let new_snapshot = if withdrawn {
            0
        } else {
            oracle.to_native(anchor.delegation_info(operator).amount).0
        };

        self.finish_discrepancy(apps, operator, StakeSource::Anchor, cached, new_snapshot)
    }

    /// Report that the Boreal mirror diverged from the cached snapshot
    pub fn notify_boreal_discrepancy(
        &mut self,
        boreal: &mut dyn BorealStaking,
        oracle: &dyn ConversionOracle,
        apps: &mut dyn ApplicationHost,
        caller: Address,
        operator: Address,
    ) -> StakingResult<()> {
        let record = self.operator_ref(operator)?;
        let cached = record.boreal_stake;
        let owner = record.owner;
        if cached == 0 {
            return Err(StakingError::NoDiscrepancy);
        }

        let (live, _) = oracle.to_native(boreal.staked_balance(owner));
        if live >= cached {
            return Err(StakingError::NoDiscrepancy);
        }

        let (penalty_legacy, _) = oracle.from_native(self.params.stake_discrepancy_penalty);
        if penalty_legacy > 0 {
            let reward = penalty_legacy
                * self.params.stake_discrepancy_reward_multiplier as Amount
                / 100;
            boreal.slash_staker(owner, penalty_legacy, caller, reward)?;
        }

        let new_snapshot = oracle.to_native(boreal.staked_balance(owner)).0;

        self.finish_discrepancy(apps, operator, StakeSource::Boreal, cached, new_snapshot)
    }

    /// Shared tail: correct the cache, clamp authorizations, emit events
    fn finish_discrepancy(
        &mut self,
        apps: &mut dyn ApplicationHost,
        operator: Address,
        source: StakeSource,
        old_snapshot: Amount,
        new_snapshot: Amount,
    ) -> StakingResult<()> {
        let record = self.operator_ref(operator)?;
        let total = match source {
            StakeSource::Anchor => record
                .native_stake
                .saturating_add(new_snapshot)
                .saturating_add(record.boreal_stake),
            StakeSource::Boreal => record
                .native_stake
                .saturating_add(record.anchor_stake)
                .saturating_add(new_snapshot),
            StakeSource::Native => record.total_stake(),
        };
        let corrections = self.plan_corrections_for(operator, total);
        notify_corrections(apps, &corrections)?;

        let record = self
            .operators
            .get_mut(&operator)
            .ok_or(StakingError::OperatorNotFound(operator))?;
        match source {
            StakeSource::Anchor => record.anchor_stake = new_snapshot,
            StakeSource::Boreal => record.boreal_stake = new_snapshot,
            StakeSource::Native => {}
        }
        self.commit_corrections(&corrections);

        tracing::warn!(
            "Operator {:?} {} snapshot corrected {} -> {} after a reported discrepancy",
            operator,
            source,
            old_snapshot,
            new_snapshot
        );
        self.push_event(StakingEvent::DiscrepancyPenalized {
            operator,
            source,
            old_snapshot,
            new_snapshot,
        });
        Ok(())
    }
}
