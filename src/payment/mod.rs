//! Payment strategies and dispatch
//!
//! This module organizes payment execution into logical submodules:
//! - [`cash`], [`credit_card`], [`debit_card`]: Concrete strategies
//! - [`context`]: Holder for a swappable strategy
//! - [`dispatcher`]: Routes selector codes to the right strategy
//!
//! Strategies are interchangeable: the context and dispatcher work only
//! through the [`PaymentStrategy`] trait.

pub mod cash;
pub mod context;
pub mod credit_card;
pub mod debit_card;
pub mod dispatcher;

pub use cash::CashStrategy;
pub use context::PaymentContext;
pub use credit_card::CreditCardStrategy;
pub use debit_card::DebitCardStrategy;
pub use dispatcher::PaymentDispatcher;

use crate::types::PaymentType;
use rust_decimal::Decimal;

/// Strategy for executing a payment of a given amount
///
/// Implementations report success or failure as a boolean. They hold no
/// mutable state, so a single strategy value can serve any number of
/// payments.
pub trait PaymentStrategy: Send + Sync {
    /// Human-readable label for this payment method
    fn name(&self) -> &'static str;

    /// Execute a payment of `amount`, returning whether it succeeded
    fn pay(&self, amount: Decimal) -> bool;
}

/// Create the strategy for a payment method
///
/// The mapping is exhaustive over [`PaymentType`], so every method that
/// survives selector validation has a strategy.
pub fn create_strategy(kind: PaymentType) -> Box<dyn PaymentStrategy> {
    match kind {
        PaymentType::CreditCard => Box::new(CreditCardStrategy),
        PaymentType::DebitCard => Box::new(DebitCardStrategy),
        PaymentType::Cash => Box::new(CashStrategy),
    }
}
