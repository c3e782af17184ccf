//! Governance-Controlled Protocol Parameters
//!
//! All values are mutated only through the [`StakingLedger`](crate::ledger::StakingLedger)
//! governance surface; the defaults here are the launch configuration.

use serde::{Deserialize, Serialize};

use lib_types::{Amount, Timestamp};

/// Upper bound for reward multipliers, expressed in whole percent.
pub const MAX_REWARD_MULTIPLIER: u8 = 100;

/// Staking protocol parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StakingParams {
    /// A native stake must be created with strictly more than this amount,
    /// and may not drop below it before the minimum holding duration passes
    pub minimum_stake: Amount,
    /// How long a native stake below the minimum stays locked (seconds)
    pub minimum_stake_duration: Timestamp,
    /// Maximum number of applications one operator may authorize concurrently
    /// (0 = unlimited)
    pub authorization_ceiling: u32,
    /// Penalty seized from a legacy mirror when a stake discrepancy is
    /// reported, in native denomination
    pub stake_discrepancy_penalty: Amount,
    /// Share of the discrepancy penalty paid to the reporting caller,
    /// in whole percent (at most [`MAX_REWARD_MULTIPLIER`])
    pub stake_discrepancy_reward_multiplier: u8,
    /// Base reward paid from the notifier treasury per misbehaving operator
    /// named in a seize call
    pub notification_reward: Amount,
}

impl Default for StakingParams {
    fn default() -> Self {
        Self {
            minimum_stake: 10_000_00000000,          // 10,000 MERI (8 decimals)
            minimum_stake_duration: 86_400,          // 24 hours
            authorization_ceiling: 0,                // unlimited
            stake_discrepancy_penalty: 500_00000000, // 500 MERI
            stake_discrepancy_reward_multiplier: 5,  // 5%
            notification_reward: 10_00000000,        // 10 MERI
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_params_are_sane() {
        let params = StakingParams::default();
        assert!(params.minimum_stake > 0);
        assert_eq!(params.minimum_stake_duration, 86_400);
        assert_eq!(params.authorization_ceiling, 0);
        assert!(params.stake_discrepancy_reward_multiplier <= MAX_REWARD_MULTIPLIER);
    }
}
