//! Payment method identifiers
//!
//! This module defines the payment methods the dispatcher can route to,
//! and the numeric selector codes callers use to pick one.

use super::error::PaymentError;

/// Raw selector code supplied by callers to choose a payment method
pub type SelectorCode = i32;

/// Supported payment methods
///
/// Each variant carries a fixed selector code. Codes outside the mapping
/// are rejected by the [`TryFrom`] conversion before any payment
/// machinery is constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentType {
    CreditCard = 1,
    DebitCard = 2,
    Cash = 3,
}

impl PaymentType {
    /// The selector code for this payment method
    pub fn code(self) -> SelectorCode {
        self as SelectorCode
    }
}

impl TryFrom<SelectorCode> for PaymentType {
    type Error = PaymentError;

    fn try_from(code: SelectorCode) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(PaymentType::CreditCard),
            2 => Ok(PaymentType::DebitCard),
            3 => Ok(PaymentType::Cash),
            _ => Err(PaymentError::invalid_payment_type(code)),
        }
    }
}
