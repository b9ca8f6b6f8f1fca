//! Core business logic module
//!
//! This module contains the account mutation machinery:
//! - `operation` - Executable account mutations bound at construction
//! - `invoker` - Holder that triggers a prepared operation

pub mod invoker;
pub mod operation;

pub use invoker::Invoker;
pub use operation::{DepositOperation, Operation, WithdrawOperation};
