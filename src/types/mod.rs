//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `account`: Account state and balance mutations
//! - `payment`: Payment method identifiers and selector codes
//! - `error`: Error types for accounts and payment dispatch

pub mod account;
pub mod error;
pub mod payment;

pub use account::{Account, AccountId};
pub use error::{AccountError, PaymentError};
pub use payment::{PaymentType, SelectorCode};
