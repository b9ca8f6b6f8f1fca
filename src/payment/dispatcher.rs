//! Selector-driven payment dispatch
//!
//! The dispatcher is the public entry point for payments. It validates
//! the raw selector code first, then runs the payment through a
//! [`PaymentContext`] loaded with the matching strategy. Unknown
//! selectors are rejected before any strategy or context exists.

use super::{create_strategy, PaymentContext};
use crate::types::{PaymentError, PaymentType, SelectorCode};
use rust_decimal::Decimal;

/// Routes selector codes to payment strategies
#[derive(Debug, Clone, Copy)]
pub struct PaymentDispatcher;

impl PaymentDispatcher {
    /// Pay `amount` using the method identified by `code`
    ///
    /// The code is validated first: unknown codes fail with
    /// [`PaymentError::InvalidPaymentType`] and nothing else happens.
    pub fn process_payment(
        &self,
        code: SelectorCode,
        amount: Decimal,
    ) -> Result<bool, PaymentError> {
        let kind = PaymentType::try_from(code)?;
        self.dispatch(kind, amount)
    }

    /// Pay `amount` using an already-validated payment method
    pub fn dispatch(&self, kind: PaymentType, amount: Decimal) -> Result<bool, PaymentError> {
        let mut context = PaymentContext::new();
        context.set_strategy(create_strategy(kind));
        context.pay(amount)
    }
}
