//! Cashpoint Library
//! # Overview
//!
//! This library provides a small transactional core: validated account
//! mutations run through executable operations, and payments routed to
//! interchangeable strategies by selector code.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Account, PaymentType, errors)
//! - [`cli`] - CLI arguments parsing
//! - [`crate::core`] - Account mutation machinery:
//!   - [`crate::core::operation`] - Deposit and withdrawal as executable objects
//!   - [`crate::core::invoker`] - Holder that triggers a prepared operation
//! - [`payment`] - Payment strategies, context, and selector-driven dispatch
//!
//! # Account Rules
//!
//! - **Withdraw**: Rejected when the amount exceeds the current balance
//! - **Deposit**: Rejected when the amount exceeds the per-deposit ceiling
//!   (10,000 unless configured otherwise)
//!
//! A rejected operation leaves the balance exactly as it was.
//!
//! # Payment Selectors
//!
//! Payments are dispatched by numeric selector: 1 = credit card,
//! 2 = debit card, 3 = cash. Any other code is rejected before a
//! strategy is constructed.

// Module declarations
pub mod cli;
pub mod core;
pub mod payment;
pub mod types;

pub use crate::core::{DepositOperation, Invoker, Operation, WithdrawOperation};
pub use crate::payment::{
    create_strategy, CashStrategy, CreditCardStrategy, DebitCardStrategy, PaymentContext,
    PaymentDispatcher, PaymentStrategy,
};
pub use crate::types::{Account, AccountError, AccountId, PaymentError, PaymentType, SelectorCode};
