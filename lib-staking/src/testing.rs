//! In-Memory Collaborators
//!
//! Reference implementations of the collaborator traits, used by this
//! crate's tests and handy for downstream consumers wiring the ledger into a
//! simulated environment. They store everything in maps, record the calls
//! they receive, and can be told to fail on demand.

use std::collections::{HashMap, HashSet};

use lib_types::{Address, Amount, Timestamp};

use crate::errors::{StakingError, StakingResult};
use crate::interfaces::{
    AnchorStaking, ApplicationHost, BorealStaking, ConversionOracle, DelegationInfo,
};

// ============================================================================
// APPLICATION HOST
// ============================================================================

/// Records every callback; selected applications can be made to reject
#[derive(Debug, Clone, Default)]
pub struct RecordingApplicationHost {
    /// `(application, operator, amount)` per `authorization_increased`
    pub increases: Vec<(Address, Address, Amount)>,
    /// `(application, operator, amount)` per `authorization_decrease_requested`
    pub decrease_requests: Vec<(Address, Address, Amount)>,
    /// `(application, operator, amount)` per `involuntary_authorization_decrease`
    pub involuntary_decreases: Vec<(Address, Address, Amount)>,
    rejecting: HashSet<Address>,
}

impl RecordingApplicationHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every callback aimed at `application` fail
    pub fn reject(&mut self, application: Address) {
        self.rejecting.insert(application);
    }

    fn check(&self, application: Address) -> StakingResult<()> {
        if self.rejecting.contains(&application) {
            return Err(StakingError::CallbackRejected {
                application,
                reason: "rejected by test host".to_string(),
            });
        }
        Ok(())
    }
}

impl ApplicationHost for RecordingApplicationHost {
    fn authorization_increased(
        &mut self,
        application: Address,
        operator: Address,
        amount: Amount,
    ) -> StakingResult<()> {
        self.check(application)?;
        self.increases.push((application, operator, amount));
        Ok(())
    }

    fn authorization_decrease_requested(
        &mut self,
        application: Address,
        operator: Address,
        amount: Amount,
    ) -> StakingResult<()> {
        self.check(application)?;
        self.decrease_requests.push((application, operator, amount));
        Ok(())
    }

    fn involuntary_authorization_decrease(
        &mut self,
        application: Address,
        operator: Address,
        amount: Amount,
    ) -> StakingResult<()> {
        self.check(application)?;
        self.involuntary_decreases.push((application, operator, amount));
        Ok(())
    }
}

// ============================================================================
// ANCHOR MIRROR
// ============================================================================

#[derive(Debug, Clone)]
struct AnchorDelegation {
    owner: Address,
    beneficiary: Address,
    authorizer: Address,
    amount: Amount,
    created_at: Timestamp,
    undelegated_at: Timestamp,
    authorized_grantee: Address,
}

/// In-memory Anchor predecessor: delegation-style records keyed by operator
#[derive(Debug, Clone, Default)]
pub struct InMemoryAnchorStaking {
    delegations: HashMap<Address, AnchorDelegation>,
    /// `(amount, reward_multiplier, notifier)` per seize call
    pub seizures: Vec<(Amount, u8, Address)>,
    fail_seize: bool,
}

impl InMemoryAnchorStaking {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a live delegation whose roles all point at `owner` and that has
    /// authorized `grantee`
    pub fn with_delegation(
        mut self,
        operator: Address,
        owner: Address,
        amount: Amount,
        grantee: Address,
    ) -> Self {
        self.delegations.insert(
            operator,
            AnchorDelegation {
                owner,
                beneficiary: owner,
                authorizer: owner,
                amount,
                created_at: 1,
                undelegated_at: 0,
                authorized_grantee: grantee,
            },
        );
        self
    }

    /// Overwrite the live delegated amount
    pub fn set_amount(&mut self, operator: Address, amount: Amount) {
        if let Some(delegation) = self.delegations.get_mut(&operator) {
            delegation.amount = amount;
        }
    }

    /// Mark the delegation as withdrawn
    pub fn set_undelegated(&mut self, operator: Address, at: Timestamp) {
        if let Some(delegation) = self.delegations.get_mut(&operator) {
            delegation.undelegated_at = at;
        }
    }

    /// Make the next seize call fail
    pub fn fail_next_seize(&mut self) {
        self.fail_seize = true;
    }
}

impl AnchorStaking for InMemoryAnchorStaking {
    fn delegation_info(&self, operator: Address) -> DelegationInfo {
        self.delegations
            .get(&operator)
            .map(|d| DelegationInfo {
                amount: d.amount,
                created_at: d.created_at,
                undelegated_at: d.undelegated_at,
            })
            .unwrap_or_default()
    }

    fn owner_of(&self, operator: Address) -> Address {
        self.delegations
            .get(&operator)
            .map(|d| d.owner)
            .unwrap_or_else(Address::zero)
    }

    fn beneficiary_of(&self, operator: Address) -> Address {
        self.delegations
            .get(&operator)
            .map(|d| d.beneficiary)
            .unwrap_or_else(Address::zero)
    }

    fn authorizer_of(&self, operator: Address) -> Address {
        self.delegations
            .get(&operator)
            .map(|d| d.authorizer)
            .unwrap_or_else(Address::zero)
    }

    fn is_authorized_for_operator(&self, operator: Address, grantee: Address) -> bool {
        self.delegations
            .get(&operator)
            .map(|d| d.authorized_grantee == grantee)
            .unwrap_or(false)
    }

    fn seize(
        &mut self,
        amount: Amount,
        reward_multiplier: u8,
        notifier: Address,
        operators: &[Address],
    ) -> StakingResult<()> {
        if self.fail_seize {
            self.fail_seize = false;
            return Err(StakingError::LegacyCallFailed(
                "anchor seize refused".to_string(),
            ));
        }
        for operator in operators {
            if let Some(delegation) = self.delegations.get_mut(operator) {
                delegation.amount = delegation.amount.saturating_sub(amount);
            }
        }
        self.seizures.push((amount, reward_multiplier, notifier));
        Ok(())
    }
}

// ============================================================================
// BOREAL MIRROR
// ============================================================================

/// In-memory Boreal predecessor: merge-style balances keyed by owner
#[derive(Debug, Clone, Default)]
pub struct InMemoryBorealStaking {
    balances: HashMap<Address, Amount>,
    /// `(owner, amount, notifier, reward)` per slash call
    pub slashes: Vec<(Address, Amount, Address, Amount)>,
    fail_slash: bool,
}

impl InMemoryBorealStaking {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an owner's staked balance
    pub fn with_balance(mut self, owner: Address, amount: Amount) -> Self {
        self.balances.insert(owner, amount);
        self
    }

    /// Overwrite an owner's staked balance
    pub fn set_balance(&mut self, owner: Address, amount: Amount) {
        self.balances.insert(owner, amount);
    }

    /// Make the next slash call fail
    pub fn fail_next_slash(&mut self) {
        self.fail_slash = true;
    }
}

impl BorealStaking for InMemoryBorealStaking {
    fn request_merge(&mut self, owner: Address) -> StakingResult<Amount> {
        Ok(self.balances.get(&owner).copied().unwrap_or(0))
    }

    fn staked_balance(&self, owner: Address) -> Amount {
        self.balances.get(&owner).copied().unwrap_or(0)
    }

    fn slash_staker(
        &mut self,
        owner: Address,
        amount: Amount,
        notifier: Address,
        reward: Amount,
    ) -> StakingResult<()> {
        if self.fail_slash {
            self.fail_slash = false;
            return Err(StakingError::LegacyCallFailed(
                "boreal slash refused".to_string(),
            ));
        }
        let balance = self.balances.entry(owner).or_insert(0);
        *balance = balance.saturating_sub(amount);
        self.slashes.push((owner, amount, notifier, reward));
        Ok(())
    }
}

// ============================================================================
// CONVERSION ORACLE
// ============================================================================

/// Fixed-ratio unit conversion: `denominator` legacy units are worth
/// `numerator` native units
///
/// Amounts convert in whole chunks; what does not fit a chunk comes back as
/// the remainder, in the input denomination.
#[derive(Debug, Clone, Copy)]
pub struct FixedRatioConversion {
    /// Native units per chunk
    numerator: Amount,
    /// Legacy units per chunk
    denominator: Amount,
}

impl FixedRatioConversion {
    /// `numerator` native units for every `denominator` legacy units
    pub fn new(numerator: Amount, denominator: Amount) -> Self {
        assert!(numerator > 0 && denominator > 0, "ratio must be positive");
        Self {
            numerator,
            denominator,
        }
    }

    /// One-to-one conversion
    pub fn identity() -> Self {
        Self::new(1, 1)
    }
}

impl ConversionOracle for FixedRatioConversion {
    fn to_native(&self, legacy_amount: Amount) -> (Amount, Amount) {
        let chunks = legacy_amount / self.denominator;
        let convertible = chunks * self.denominator;
        (chunks * self.numerator, legacy_amount - convertible)
    }

    fn from_native(&self, native_amount: Amount) -> (Amount, Amount) {
        let chunks = native_amount / self.numerator;
        let convertible = chunks * self.numerator;
        (chunks * self.denominator, native_amount - convertible)
    }
}
