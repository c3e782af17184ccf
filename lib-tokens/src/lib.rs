//! Meridian Fungible Asset Ledger
//!
//! This crate holds the canonical balance and allowance bookkeeping for the
//! MERI asset. It is the custody counterparty of the staking ledger: stake
//! escrow, refunds, and reward payouts all move through [`TokenLedger`].
//!
//! # Key Types
//!
//! - [`TokenLedger`]: balances, allowances, and supply accounting
//! - [`TokenError`]: loud, typed failures; a failed transfer must abort the
//!   whole enclosing operation
//!
//! # Execution
//!
//! Every mutating call validates before it writes; a returned error means no
//! state changed.

pub mod errors;
pub mod ledger;

pub use errors::{TokenError, TokenResult};
pub use ledger::TokenLedger;
