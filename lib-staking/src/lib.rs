//! Meridian Staking Ledger
//!
//! Tracks delegated economic stake on behalf of external consumer
//! applications, authorizes portions of that stake to those applications, and
//! enforces penalties when applications report misbehavior.
//!
//! An operator's stake is the union of three balances: MERI escrowed directly
//! in this ledger (native), and cached snapshots of positions still custodied
//! by the two predecessor staking systems, Anchor and Boreal. Applications
//! are authorized against the union; slashing drains the balances in a fixed
//! priority order and shrinks any authorization the lost stake was backing.
//!
//! # Key Types
//!
//! - [`StakingLedger`]: the single owner of all stake and authorization state
//! - [`Operator`]: roles, balances, and the per-application authorization table
//! - [`StakingParams`]: governance-controlled protocol parameters
//! - [`StakingEvent`]: one emitted record per state transition
//!
//! # Execution
//!
//! Every operation is one atomic unit: validation and planning first, then
//! all fallible collaborator calls, then an infallible commit. An error
//! returned from any phase means the ledger did not change.

pub mod apps;
pub mod authorization;
pub mod discrepancy;
pub mod errors;
pub mod events;
pub mod interfaces;
pub mod ledger;
pub mod operator;
pub mod params;
pub mod slashing;
pub mod testing;

pub use apps::ApplicationInfo;
pub use errors::{StakingError, StakingResult};
pub use events::StakingEvent;
pub use interfaces::{
    AnchorStaking, ApplicationHost, BorealStaking, ConversionOracle, DelegationInfo, SlashingEnv,
};
pub use ledger::StakingLedger;
pub use operator::{AppAuthorization, Operator, StakeSource};
pub use params::StakingParams;
pub use slashing::SlashingEvent;
