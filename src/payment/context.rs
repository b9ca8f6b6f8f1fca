//! Payment context holding a swappable strategy
//!
//! The context is the single seam between callers and concrete
//! strategies. Callers install a strategy, then pay through it; paying
//! with no strategy installed is a typed error, not a panic.

use super::PaymentStrategy;
use crate::types::PaymentError;
use rust_decimal::Decimal;

/// Executes payments through whichever strategy is currently installed
///
/// A fresh context has no strategy. Installing a new strategy replaces
/// any previous one.
pub struct PaymentContext {
    strategy: Option<Box<dyn PaymentStrategy>>,
}

impl PaymentContext {
    /// Create a context with no strategy installed
    pub fn new() -> Self {
        PaymentContext { strategy: None }
    }

    /// Install a strategy, replacing any previous one
    pub fn set_strategy(&mut self, strategy: Box<dyn PaymentStrategy>) {
        self.strategy = Some(strategy);
    }

    /// Label of the installed strategy, if any
    pub fn strategy_name(&self) -> Option<&'static str> {
        self.strategy.as_deref().map(|strategy| strategy.name())
    }

    /// Pay `amount` through the installed strategy
    ///
    /// Fails with [`PaymentError::NoStrategyConfigured`] if no strategy
    /// has been installed.
    pub fn pay(&self, amount: Decimal) -> Result<bool, PaymentError> {
        let strategy = self
            .strategy
            .as_deref()
            .ok_or(PaymentError::NoStrategyConfigured)?;

        Ok(strategy.pay(amount))
    }
}

impl Default for PaymentContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payment::{CashStrategy, CreditCardStrategy};

    #[test]
    fn test_pay_without_strategy_fails() {
        let context = PaymentContext::new();

        assert_eq!(
            context.pay(Decimal::new(100, 0)),
            Err(PaymentError::NoStrategyConfigured)
        );
    }

    #[test]
    fn test_pay_with_strategy_succeeds() {
        let mut context = PaymentContext::new();
        context.set_strategy(Box::new(CashStrategy));

        assert_eq!(context.pay(Decimal::new(100, 0)), Ok(true));
    }

    #[test]
    fn test_set_strategy_replaces_previous() {
        let mut context = PaymentContext::new();
        context.set_strategy(Box::new(CashStrategy));
        context.set_strategy(Box::new(CreditCardStrategy));

        assert_eq!(context.strategy_name(), Some("Credit Card"));
        assert_eq!(context.pay(Decimal::new(100, 0)), Ok(true));
    }

    #[test]
    fn test_strategy_name_is_none_when_unset() {
        let context = PaymentContext::default();
        assert_eq!(context.strategy_name(), None);
    }
}
