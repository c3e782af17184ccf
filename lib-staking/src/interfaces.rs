//! Collaborator Interfaces
//!
//! The staking core consumes its external collaborators through the narrow
//! traits below; implementations are provided per call site (the way storage
//! backends are passed into token execution). Collaborator calls happen
//! synchronously inside the enclosing atomic unit: a failure aborts the whole
//! operation before the ledger commits anything.

use serde::{Deserialize, Serialize};

use lib_tokens::TokenLedger;
use lib_types::{Address, Amount, Timestamp};

use crate::errors::StakingResult;

/// Snapshot of a delegation held by the Anchor predecessor system
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelegationInfo {
    /// Delegated amount, in the Anchor denomination
    pub amount: Amount,
    /// When the delegation was created (0 = no delegation)
    pub created_at: Timestamp,
    /// When the delegation was withdrawn (0 = still delegated)
    pub undelegated_at: Timestamp,
}

impl DelegationInfo {
    /// Whether a live delegation exists
    pub fn is_active(&self) -> bool {
        self.created_at > 0 && self.undelegated_at == 0
    }
}

/// The Anchor predecessor staking system (delegation-style)
///
/// The ledger only reads snapshot state from the mirror and requests
/// seizure of legacy amounts; custody never moves.
pub trait AnchorStaking {
    /// Delegation snapshot for an operator
    fn delegation_info(&self, operator: Address) -> DelegationInfo;

    /// Owner of the delegation (zero if none)
    fn owner_of(&self, operator: Address) -> Address;

    /// Beneficiary of the delegation
    fn beneficiary_of(&self, operator: Address) -> Address;

    /// Authorizer of the delegation
    fn authorizer_of(&self, operator: Address) -> Address;

    /// Whether the delegation authorized `grantee` to manage the operator's
    /// stake
    fn is_authorized_for_operator(&self, operator: Address, grantee: Address) -> bool;

    /// Seize `amount` (Anchor denomination) from each named operator,
    /// rewarding `notifier` at `reward_multiplier` percent of the mirror's
    /// own tattletale rate
    fn seize(
        &mut self,
        amount: Amount,
        reward_multiplier: u8,
        notifier: Address,
        operators: &[Address],
    ) -> StakingResult<()>;
}

/// The Boreal predecessor staking system (merge-style)
pub trait BorealStaking {
    /// Merge the caller's Boreal position into this ledger and return the
    /// total merged amount (Boreal denomination)
    fn request_merge(&mut self, owner: Address) -> StakingResult<Amount>;

    /// Live staked balance of an owner (Boreal denomination)
    fn staked_balance(&self, owner: Address) -> Amount;

    /// Slash `amount` (Boreal denomination) from the owner's position,
    /// paying `reward` of the slashed amount to `notifier`
    fn slash_staker(
        &mut self,
        owner: Address,
        amount: Amount,
        notifier: Address,
        reward: Amount,
    ) -> StakingResult<()>;
}

/// Unit conversion between a legacy denomination and the native denomination
///
/// Conversion is lossy on amounts that are not whole multiples of the
/// exchange ratio; the second tuple element is the unconvertible remainder,
/// expressed in the input denomination.
pub trait ConversionOracle {
    /// Legacy -> native: `(native_amount, legacy_remainder)`
    fn to_native(&self, legacy_amount: Amount) -> (Amount, Amount);

    /// Native -> legacy: `(legacy_amount, native_remainder)`
    fn from_native(&self, native_amount: Amount) -> (Amount, Amount);
}

/// Routes the synchronous authorization callbacks to a target application
///
/// Each callback's success or failure is part of the enclosing atomic unit.
pub trait ApplicationHost {
    /// The application's authorization grew by `amount`
    fn authorization_increased(
        &mut self,
        application: Address,
        operator: Address,
        amount: Amount,
    ) -> StakingResult<()>;

    /// The authorizer asked the application to release `amount`
    fn authorization_decrease_requested(
        &mut self,
        application: Address,
        operator: Address,
        amount: Amount,
    ) -> StakingResult<()>;

    /// Slashing or a discrepancy shrank the application's authorization
    fn involuntary_authorization_decrease(
        &mut self,
        application: Address,
        operator: Address,
        amount: Amount,
    ) -> StakingResult<()>;
}

/// Collaborators needed to drain the slashing queue
pub struct SlashingEnv<'a> {
    /// Escrow counterparty; pays the processor reward
    pub token: &'a mut TokenLedger,
    /// Anchor mirror, for live seizure of legacy-A portions
    pub anchor: &'a mut dyn AnchorStaking,
    /// Boreal mirror, for live seizure of legacy-B portions
    pub boreal: &'a mut dyn BorealStaking,
    /// Converts native amounts into the Anchor denomination
    pub anchor_oracle: &'a dyn ConversionOracle,
    /// Converts native amounts into the Boreal denomination
    pub boreal_oracle: &'a dyn ConversionOracle,
    /// Delivers involuntary-decrease callbacks
    pub apps: &'a mut dyn ApplicationHost,
}
