//! Operator Records
//!
//! An operator is the staking identity applications authorize against and
//! slashing acts upon. Its record carries the three role addresses, the
//! three stake balances, and the per-application authorization table.
//!
//! Role addresses are immutable once the record is created; an operator
//! identity is claimed exactly once across the three stake-origination paths.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use lib_types::{Address, Amount, Timestamp};

/// Identifies one of the three stake balances an operator can hold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StakeSource {
    /// MERI escrowed directly in this ledger
    Native,
    /// Cached snapshot of a delegation custodied by the Anchor predecessor
    Anchor,
    /// Cached snapshot of a merged position custodied by the Boreal predecessor
    Boreal,
}

impl StakeSource {
    /// Human-readable source name
    pub const fn name(&self) -> &'static str {
        match self {
            StakeSource::Native => "native",
            StakeSource::Anchor => "anchor",
            StakeSource::Boreal => "boreal",
        }
    }
}

impl fmt::Display for StakeSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::error::Error for StakeSource {}

/// Per-(operator, application) authorization state
///
/// Invariant: `authorized >= deauthorizing` always.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppAuthorization {
    /// Amount currently granted to the application
    pub authorized: Amount,
    /// Amount pending approval of a requested decrease; at most one request
    /// is outstanding, a new request overwrites the previous one
    pub deauthorizing: Amount,
}

/// A staking identity: roles, balances, and the authorization table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Operator {
    /// Controls funds (unstaking refunds go here)
    pub owner: Address,
    /// Receives rewards
    pub beneficiary: Address,
    /// Controls authorization changes
    pub authorizer: Address,
    /// Stake escrowed directly in this ledger
    pub native_stake: Amount,
    /// Native-denominated snapshot of the Anchor delegation
    pub anchor_stake: Amount,
    /// Native-denominated snapshot of the Boreal position
    pub boreal_stake: Amount,
    /// When the native stake was first created
    pub staked_at: Timestamp,
    /// Authorization state per application
    pub authorizations: HashMap<Address, AppAuthorization>,
    /// Applications with a non-zero authorization. Removal swaps with the
    /// last entry and pops; order is not preserved.
    pub authorized_apps: Vec<Address>,
}

impl Operator {
    /// Create a freshly claimed record with zero balances
    pub fn new(owner: Address, beneficiary: Address, authorizer: Address) -> Self {
        Self {
            owner,
            beneficiary,
            authorizer,
            native_stake: 0,
            anchor_stake: 0,
            boreal_stake: 0,
            staked_at: 0,
            authorizations: HashMap::new(),
            authorized_apps: Vec::new(),
        }
    }

    /// Sum of the three stake balances
    pub fn total_stake(&self) -> Amount {
        self.native_stake
            .saturating_add(self.anchor_stake)
            .saturating_add(self.boreal_stake)
    }

    /// Balance of one stake source
    pub fn stake_of(&self, source: StakeSource) -> Amount {
        match source {
            StakeSource::Native => self.native_stake,
            StakeSource::Anchor => self.anchor_stake,
            StakeSource::Boreal => self.boreal_stake,
        }
    }

    /// Authorization state for an application (zero if never authorized)
    pub fn authorization(&self, application: &Address) -> AppAuthorization {
        self.authorizations
            .get(application)
            .copied()
            .unwrap_or_default()
    }

    /// The largest single-application authorized amount
    pub fn max_authorization(&self) -> Amount {
        self.authorized_apps
            .iter()
            .map(|app| self.authorization(app).authorized)
            .max()
            .unwrap_or(0)
    }

    /// Minimum amount of one stake source that must remain staked, given the
    /// maximum outstanding authorization across all applications
    ///
    /// Policy: the other two sources cover the authorization first; the
    /// queried source's required floor is the residual.
    pub fn min_staked(&self, source: StakeSource) -> Amount {
        let max_authorization = self.max_authorization();
        let covered_by_others = match source {
            StakeSource::Native => self.anchor_stake.saturating_add(self.boreal_stake),
            StakeSource::Anchor => self.native_stake.saturating_add(self.boreal_stake),
            StakeSource::Boreal => self.native_stake.saturating_add(self.anchor_stake),
        };
        max_authorization.saturating_sub(covered_by_others)
    }

    /// Whether `caller` may manage this operator's stake
    pub fn is_owner_or_operator(&self, caller: Address, operator: Address) -> bool {
        caller == self.owner || caller == operator
    }

    /// Remove an application from the authorized list (swap-with-last-and-pop)
    pub fn remove_authorized_app(&mut self, application: &Address) {
        if let Some(pos) = self.authorized_apps.iter().position(|a| a == application) {
            self.authorized_apps.swap_remove(pos);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addr(id: u8) -> Address {
        Address::new([id; 32])
    }

    fn operator_with_auths() -> Operator {
        let mut op = Operator::new(addr(1), addr(2), addr(3));
        op.native_stake = 500;
        op.anchor_stake = 300;
        op.boreal_stake = 200;
        for (app, amount) in [(addr(10), 400u128), (addr(11), 700), (addr(12), 100)] {
            op.authorizations.insert(
                app,
                AppAuthorization {
                    authorized: amount,
                    deauthorizing: 0,
                },
            );
            op.authorized_apps.push(app);
        }
        op
    }

    #[test]
    fn test_total_stake_sums_sources() {
        let op = operator_with_auths();
        assert_eq!(op.total_stake(), 1_000);
        assert_eq!(op.stake_of(StakeSource::Native), 500);
        assert_eq!(op.stake_of(StakeSource::Anchor), 300);
        assert_eq!(op.stake_of(StakeSource::Boreal), 200);
    }

    #[test]
    fn test_max_authorization() {
        let op = operator_with_auths();
        assert_eq!(op.max_authorization(), 700);

        let empty = Operator::new(addr(1), addr(2), addr(3));
        assert_eq!(empty.max_authorization(), 0);
    }

    #[test]
    fn test_authorization_defaults_to_zero() {
        let op = operator_with_auths();
        let auth = op.authorization(&addr(99));
        assert_eq!(auth.authorized, 0);
        assert_eq!(auth.deauthorizing, 0);
    }

    #[test]
    fn test_remove_authorized_app_swaps_last() {
        let mut op = operator_with_auths();
        op.remove_authorized_app(&addr(10));

        assert_eq!(op.authorized_apps.len(), 2);
        assert!(!op.authorized_apps.contains(&addr(10)));
        // Last entry moved into the vacated slot.
        assert_eq!(op.authorized_apps[0], addr(12));
    }

    #[test]
    fn test_min_staked_prefers_other_sources() {
        // max authorization 700; native 500, anchor 300, boreal 200
        let op = operator_with_auths();
        // Anchor (300) + Boreal (200) cover 500 of the 700.
        assert_eq!(op.min_staked(StakeSource::Native), 200);
        // Native (500) + Boreal (200) cover the whole 700.
        assert_eq!(op.min_staked(StakeSource::Anchor), 0);
        // Native (500) + Anchor (300) cover the whole 700.
        assert_eq!(op.min_staked(StakeSource::Boreal), 0);
    }

    #[test]
    fn test_min_staked_zero_without_authorizations() {
        let mut op = Operator::new(addr(1), addr(2), addr(3));
        op.native_stake = 500;
        assert_eq!(op.min_staked(StakeSource::Native), 0);
    }

    #[test]
    fn test_owner_or_operator_check() {
        let op = operator_with_auths();
        let op_addr = addr(40);
        assert!(op.is_owner_or_operator(addr(1), op_addr));
        assert!(op.is_owner_or_operator(op_addr, op_addr));
        assert!(!op.is_owner_or_operator(addr(2), op_addr));
    }
}
