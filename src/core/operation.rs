//! Account operations as executable objects
//!
//! An [`Operation`] packages an account mutation together with its target
//! and amount at construction time, so it can be handed to an invoker and
//! executed later with no further arguments. Executing is the only way an
//! operation touches its account; constructing one changes nothing.

use crate::types::{Account, AccountError};
use rust_decimal::Decimal;

/// An account mutation that can be executed on demand
///
/// Implementations capture everything they need up front. `execute` may
/// be called repeatedly; each call applies the mutation again, and a
/// failed call leaves the account untouched.
pub trait Operation {
    /// Apply the captured mutation to the captured account
    fn execute(&mut self) -> Result<(), AccountError>;
}

/// Deposit a fixed amount into an account
#[derive(Debug)]
pub struct DepositOperation<'a> {
    account: &'a mut Account,
    amount: Decimal,
}

impl<'a> DepositOperation<'a> {
    /// Bind a deposit of `amount` to `account` without applying it
    pub fn new(account: &'a mut Account, amount: Decimal) -> Self {
        DepositOperation { account, amount }
    }
}

impl Operation for DepositOperation<'_> {
    fn execute(&mut self) -> Result<(), AccountError> {
        self.account.deposit(self.amount)
    }
}

/// Withdraw a fixed amount from an account
#[derive(Debug)]
pub struct WithdrawOperation<'a> {
    account: &'a mut Account,
    amount: Decimal,
}

impl<'a> WithdrawOperation<'a> {
    /// Bind a withdrawal of `amount` to `account` without applying it
    pub fn new(account: &'a mut Account, amount: Decimal) -> Self {
        WithdrawOperation { account, amount }
    }
}

impl Operation for WithdrawOperation<'_> {
    fn execute(&mut self) -> Result<(), AccountError> {
        self.account.withdraw(self.amount)
    }
}
