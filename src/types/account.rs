//! Account state and balance mutations
//!
//! This module defines the Account structure holding a mutable balance,
//! together with the withdraw and deposit rules that guard it.

use super::error::AccountError;
use rust_decimal::Decimal;

/// Unique identifier for an account
pub type AccountId = u32;

/// Deposit ceiling applied when an account is created without an explicit limit
pub fn default_deposit_limit() -> Decimal {
    Decimal::new(10_000, 0)
}

/// A single account with a mutable balance
///
/// The balance can only be changed through [`Account::deposit`] and
/// [`Account::withdraw`], which validate before mutating. A rejected
/// operation leaves the balance exactly as it was.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    /// Identifier reported in error messages
    id: AccountId,

    /// Current funds
    balance: Decimal,

    /// Largest amount accepted by a single deposit
    deposit_limit: Decimal,
}

impl Account {
    /// Create an account with the given opening balance and the default
    /// deposit limit of 10,000
    pub fn new(id: AccountId, opening_balance: Decimal) -> Self {
        Self::with_deposit_limit(id, opening_balance, default_deposit_limit())
    }

    /// Create an account with an explicit per-deposit ceiling
    pub fn with_deposit_limit(
        id: AccountId,
        opening_balance: Decimal,
        deposit_limit: Decimal,
    ) -> Self {
        Account {
            id,
            balance: opening_balance,
            deposit_limit,
        }
    }

    /// The account identifier
    pub fn id(&self) -> AccountId {
        self.id
    }

    /// The current balance
    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// The per-deposit ceiling
    pub fn deposit_limit(&self) -> Decimal {
        self.deposit_limit
    }

    /// Remove `amount` from the balance
    ///
    /// Fails with [`AccountError::InsufficientFunds`] if `amount` exceeds
    /// the current balance. The check runs before any mutation, so a
    /// failed withdrawal leaves the balance untouched.
    pub fn withdraw(&mut self, amount: Decimal) -> Result<(), AccountError> {
        if amount > self.balance {
            return Err(AccountError::insufficient_funds(
                self.id,
                self.balance,
                amount,
            ));
        }

        self.balance = self
            .balance
            .checked_sub(amount)
            .ok_or_else(|| AccountError::balance_overflow("withdraw", self.id))?;

        Ok(())
    }

    /// Add `amount` to the balance
    ///
    /// Fails with [`AccountError::DepositLimitExceeded`] if `amount`
    /// exceeds the per-deposit ceiling. Amounts equal to the ceiling are
    /// accepted. A failed deposit leaves the balance untouched.
    pub fn deposit(&mut self, amount: Decimal) -> Result<(), AccountError> {
        if amount > self.deposit_limit {
            return Err(AccountError::deposit_limit_exceeded(
                self.id,
                self.deposit_limit,
                amount,
            ));
        }

        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or_else(|| AccountError::balance_overflow("deposit", self.id))?;

        Ok(())
    }
}
