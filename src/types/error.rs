//! Error types for account mutations and payment dispatch
//!
//! This module defines all error types the library can produce. Errors
//! carry the context needed to diagnose the rejection and are formatted
//! for CLI output.
//!
//! # Error Categories
//!
//! - **Account Errors**: Insufficient funds, deposit limit violations,
//!   balance arithmetic overflow
//! - **Payment Errors**: Unknown selector codes, dispatch without a
//!   configured strategy

use super::account::AccountId;
use super::payment::SelectorCode;
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors produced by account balance mutations
///
/// Each variant includes the account and the amounts involved so a
/// rejected operation can be reported without consulting the account
/// again.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AccountError {
    /// Withdrawal amount exceeds the current balance
    ///
    /// The withdrawal is rejected and the account state remains unchanged.
    #[error("Insufficient funds for account {account}: balance {balance}, requested {requested}")]
    InsufficientFunds {
        /// Account ID
        account: AccountId,
        /// Balance at the time of the attempt
        balance: Decimal,
        /// Requested withdrawal amount
        requested: Decimal,
    },

    /// Deposit amount exceeds the account's per-deposit ceiling
    ///
    /// The deposit is rejected and the account state remains unchanged.
    #[error("Deposit limit exceeded for account {account}: limit {limit}, requested {requested}")]
    DepositLimitExceeded {
        /// Account ID
        account: AccountId,
        /// Configured per-deposit ceiling
        limit: Decimal,
        /// Requested deposit amount
        requested: Decimal,
    },

    /// Balance arithmetic would overflow
    ///
    /// The mutation is rejected to keep the stored balance valid.
    #[error("Balance overflow in {operation} for account {account}")]
    BalanceOverflow {
        /// Operation that would overflow
        operation: String,
        /// Account ID
        account: AccountId,
    },
}

/// Errors produced by payment dispatch
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PaymentError {
    /// Selector code does not map to any payment method
    ///
    /// The payment is rejected before any strategy is constructed.
    #[error("Invalid payment type {code}")]
    InvalidPaymentType {
        /// The unrecognized selector code
        code: SelectorCode,
    },

    /// Payment was attempted on a context with no strategy installed
    #[error("No payment strategy configured")]
    NoStrategyConfigured,
}

// Helper functions for creating common errors

impl AccountError {
    /// Create an InsufficientFunds error
    pub fn insufficient_funds(account: AccountId, balance: Decimal, requested: Decimal) -> Self {
        AccountError::InsufficientFunds {
            account,
            balance,
            requested,
        }
    }

    /// Create a DepositLimitExceeded error
    pub fn deposit_limit_exceeded(account: AccountId, limit: Decimal, requested: Decimal) -> Self {
        AccountError::DepositLimitExceeded {
            account,
            limit,
            requested,
        }
    }

    /// Create a BalanceOverflow error
    pub fn balance_overflow(operation: &str, account: AccountId) -> Self {
        AccountError::BalanceOverflow {
            operation: operation.to_string(),
            account,
        }
    }
}

impl PaymentError {
    /// Create an InvalidPaymentType error
    pub fn invalid_payment_type(code: SelectorCode) -> Self {
        PaymentError::InvalidPaymentType { code }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal::Decimal;

    #[rstest]
    #[case::insufficient_funds(
        AccountError::InsufficientFunds { account: 1, balance: Decimal::new(50, 0), requested: Decimal::new(100, 0) },
        "Insufficient funds for account 1: balance 50, requested 100"
    )]
    #[case::deposit_limit_exceeded(
        AccountError::DepositLimitExceeded { account: 1, limit: Decimal::new(10_000, 0), requested: Decimal::new(10_001, 0) },
        "Deposit limit exceeded for account 1: limit 10000, requested 10001"
    )]
    #[case::balance_overflow(
        AccountError::BalanceOverflow { operation: "deposit".to_string(), account: 7 },
        "Balance overflow in deposit for account 7"
    )]
    fn test_account_error_display(#[case] error: AccountError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    #[case::invalid_payment_type(
        PaymentError::InvalidPaymentType { code: 99 },
        "Invalid payment type 99"
    )]
    #[case::negative_code(
        PaymentError::InvalidPaymentType { code: -1 },
        "Invalid payment type -1"
    )]
    #[case::no_strategy(
        PaymentError::NoStrategyConfigured,
        "No payment strategy configured"
    )]
    fn test_payment_error_display(#[case] error: PaymentError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    #[case::insufficient_funds(
        AccountError::insufficient_funds(1, Decimal::new(50, 0), Decimal::new(100, 0)),
        AccountError::InsufficientFunds { account: 1, balance: Decimal::new(50, 0), requested: Decimal::new(100, 0) }
    )]
    #[case::deposit_limit_exceeded(
        AccountError::deposit_limit_exceeded(1, Decimal::new(10_000, 0), Decimal::new(10_001, 0)),
        AccountError::DepositLimitExceeded { account: 1, limit: Decimal::new(10_000, 0), requested: Decimal::new(10_001, 0) }
    )]
    #[case::balance_overflow(
        AccountError::balance_overflow("withdraw", 3),
        AccountError::BalanceOverflow { operation: "withdraw".to_string(), account: 3 }
    )]
    fn test_account_helper_functions(#[case] result: AccountError, #[case] expected: AccountError) {
        assert_eq!(result, expected);
    }

    #[test]
    fn test_invalid_payment_type_helper() {
        assert_eq!(
            PaymentError::invalid_payment_type(42),
            PaymentError::InvalidPaymentType { code: 42 }
        );
    }
}
