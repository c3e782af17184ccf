//! Balance and Allowance Bookkeeping
//!
//! The canonical MERI asset ledger. Holders move funds with [`TokenLedger::transfer`],
//! delegate spending rights with [`TokenLedger::approve`], and delegated
//! spenders draw on those rights with [`TokenLedger::transfer_from`].
//!
//! # Enforcement
//!
//! - **Conservation**: `transfer`/`transfer_from` never change `total_supply`
//! - **Loud failure**: insufficient balance or allowance aborts with a typed
//!   error and no state change
//! - **Integer math**: all arithmetic is checked; overflow is an error, never
//!   a wrap

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use lib_types::{Address, Amount};

use crate::errors::{TokenError, TokenResult};

/// The fungible asset ledger: balances, allowances, and supply accounting
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TokenLedger {
    /// Account balances
    balances: HashMap<Address, Amount>,
    /// Allowances for third-party transfers: owner -> spender -> amount
    allowances: HashMap<Address, HashMap<Address, Amount>>,
    /// Current total supply in circulation
    total_supply: Amount,
}

impl TokenLedger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Get balance of an account
    pub fn balance_of(&self, account: &Address) -> Amount {
        self.balances.get(account).copied().unwrap_or(0)
    }

    /// Get allowance granted by `owner` to `spender`
    pub fn allowance(&self, owner: &Address, spender: &Address) -> Amount {
        self.allowances
            .get(owner)
            .and_then(|spenders| spenders.get(spender))
            .copied()
            .unwrap_or(0)
    }

    /// Current total supply
    pub fn total_supply(&self) -> Amount {
        self.total_supply
    }

    /// Mint new units to an account
    pub fn mint(&mut self, to: Address, amount: Amount) -> TokenResult<()> {
        if amount == 0 {
            return Err(TokenError::ZeroAmount);
        }
        if to.is_zero() {
            return Err(TokenError::ZeroAddress);
        }

        let new_supply = self
            .total_supply
            .checked_add(amount)
            .ok_or(TokenError::Overflow)?;
        let new_balance = self
            .balance_of(&to)
            .checked_add(amount)
            .ok_or(TokenError::Overflow)?;

        self.total_supply = new_supply;
        self.balances.insert(to, new_balance);
        Ok(())
    }

    /// Move `amount` from `from` to `to`
    pub fn transfer(&mut self, from: Address, to: Address, amount: Amount) -> TokenResult<()> {
        if amount == 0 {
            return Err(TokenError::ZeroAmount);
        }
        if to.is_zero() {
            return Err(TokenError::ZeroAddress);
        }

        let from_balance = self.balance_of(&from);
        if from_balance < amount {
            return Err(TokenError::InsufficientBalance {
                have: from_balance,
                need: amount,
            });
        }

        let new_from = from_balance
            .checked_sub(amount)
            .ok_or(TokenError::Underflow)?;
        let new_to = self
            .balance_of(&to)
            .checked_add(amount)
            .ok_or(TokenError::Overflow)?;

        self.balances.insert(from, new_from);
        self.balances.insert(to, new_to);
        Ok(())
    }

    /// Authorize `spender` to draw up to `amount` from `owner`
    ///
    /// Overwrites any previous allowance for the pair.
    pub fn approve(&mut self, owner: Address, spender: Address, amount: Amount) -> TokenResult<()> {
        if spender.is_zero() {
            return Err(TokenError::ZeroAddress);
        }
        self.allowances.entry(owner).or_default().insert(spender, amount);
        Ok(())
    }

    /// Move `amount` from `owner` to `to`, drawing on the allowance granted
    /// to `spender`
    pub fn transfer_from(
        &mut self,
        spender: Address,
        owner: Address,
        to: Address,
        amount: Amount,
    ) -> TokenResult<()> {
        if amount == 0 {
            return Err(TokenError::ZeroAmount);
        }

        let allowed = self.allowance(&owner, &spender);
        if allowed < amount {
            return Err(TokenError::InsufficientAllowance {
                have: allowed,
                need: amount,
            });
        }

        self.transfer(owner, to, amount)?;

        // Transfer succeeded; draw down the allowance.
        let remaining = allowed
            .checked_sub(amount)
            .ok_or(TokenError::Underflow)?;
        self.allowances
            .entry(owner)
            .or_default()
            .insert(spender, remaining);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addr(id: u8) -> Address {
        Address::new([id; 32])
    }

    fn funded_ledger() -> TokenLedger {
        let mut ledger = TokenLedger::new();
        ledger.mint(addr(1), 10_000).unwrap();
        ledger
    }

    #[test]
    fn test_mint_and_balance() {
        let ledger = funded_ledger();
        assert_eq!(ledger.balance_of(&addr(1)), 10_000);
        assert_eq!(ledger.total_supply(), 10_000);
        assert_eq!(ledger.balance_of(&addr(2)), 0);
    }

    #[test]
    fn test_transfer_moves_funds() {
        let mut ledger = funded_ledger();
        ledger.transfer(addr(1), addr(2), 1_000).unwrap();

        assert_eq!(ledger.balance_of(&addr(1)), 9_000);
        assert_eq!(ledger.balance_of(&addr(2)), 1_000);
        assert_eq!(ledger.total_supply(), 10_000);
    }

    #[test]
    fn test_transfer_insufficient_balance() {
        let mut ledger = funded_ledger();
        let result = ledger.transfer(addr(2), addr(3), 1);
        assert!(matches!(result, Err(TokenError::InsufficientBalance { .. })));
        assert_eq!(ledger.balance_of(&addr(3)), 0);
    }

    #[test]
    fn test_transfer_zero_amount() {
        let mut ledger = funded_ledger();
        assert_eq!(ledger.transfer(addr(1), addr(2), 0), Err(TokenError::ZeroAmount));
    }

    #[test]
    fn test_transfer_to_zero_address() {
        let mut ledger = funded_ledger();
        let result = ledger.transfer(addr(1), Address::zero(), 1);
        assert_eq!(result, Err(TokenError::ZeroAddress));
    }

    #[test]
    fn test_transfer_from_draws_allowance() {
        let mut ledger = funded_ledger();
        ledger.approve(addr(1), addr(9), 500).unwrap();

        ledger.transfer_from(addr(9), addr(1), addr(2), 300).unwrap();

        assert_eq!(ledger.balance_of(&addr(1)), 9_700);
        assert_eq!(ledger.balance_of(&addr(2)), 300);
        assert_eq!(ledger.allowance(&addr(1), &addr(9)), 200);
    }

    #[test]
    fn test_transfer_from_insufficient_allowance() {
        let mut ledger = funded_ledger();
        ledger.approve(addr(1), addr(9), 100).unwrap();

        let result = ledger.transfer_from(addr(9), addr(1), addr(2), 300);
        assert!(matches!(result, Err(TokenError::InsufficientAllowance { .. })));
        assert_eq!(ledger.balance_of(&addr(1)), 10_000);
        assert_eq!(ledger.allowance(&addr(1), &addr(9)), 100);
    }

    #[test]
    fn test_transfer_from_insufficient_balance_keeps_allowance() {
        let mut ledger = TokenLedger::new();
        ledger.mint(addr(1), 50).unwrap();
        ledger.approve(addr(1), addr(9), 1_000).unwrap();

        let result = ledger.transfer_from(addr(9), addr(1), addr(2), 100);
        assert!(matches!(result, Err(TokenError::InsufficientBalance { .. })));
        assert_eq!(ledger.allowance(&addr(1), &addr(9)), 1_000);
    }

    #[test]
    fn test_approve_overwrites() {
        let mut ledger = funded_ledger();
        ledger.approve(addr(1), addr(9), 500).unwrap();
        ledger.approve(addr(1), addr(9), 200).unwrap();
        assert_eq!(ledger.allowance(&addr(1), &addr(9)), 200);
    }

    #[test]
    fn test_serialization_roundtrip() {
        let mut ledger = funded_ledger();
        ledger.approve(addr(1), addr(9), 500).unwrap();

        let bytes = bincode::serialize(&ledger).unwrap();
        let restored: TokenLedger = bincode::deserialize(&bytes).unwrap();
        assert_eq!(restored.balance_of(&addr(1)), 10_000);
        assert_eq!(restored.allowance(&addr(1), &addr(9)), 500);
    }
}
