//! Invoker that triggers a prepared operation
//!
//! The invoker holds a single boxed [`Operation`] and runs it on request.
//! It knows nothing about accounts or amounts; the operation carries all
//! of that itself.

use super::operation::Operation;
use crate::types::AccountError;

/// Holds one operation and executes it on demand
///
/// The invoker borrows whatever the operation borrows, so it lives at
/// most as long as the account behind the operation. Triggering twice
/// executes the operation twice.
pub struct Invoker<'a> {
    operation: Box<dyn Operation + 'a>,
}

impl<'a> Invoker<'a> {
    /// Create an invoker around a prepared operation
    pub fn new(operation: Box<dyn Operation + 'a>) -> Self {
        Invoker { operation }
    }

    /// Execute the held operation, propagating its result unchanged
    pub fn trigger(&mut self) -> Result<(), AccountError> {
        self.operation.execute()
    }
}
