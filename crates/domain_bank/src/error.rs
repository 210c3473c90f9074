//! Bank domain errors and operation outcomes

use thiserror::Error;

use core_kernel::AccountNumber;

/// Errors that can occur in the bank domain.
///
/// Insufficient funds is deliberately NOT represented here: a declined
/// withdrawal or transfer is a normal business result, reported through
/// [`Outcome`] so callers cannot conflate it with a validation failure.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BankError {
    /// Malformed input: empty holder name, bad credential format,
    /// same-account transfer
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Missing or non-positive amount
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Unknown account number in an operation that requires existence
    #[error("Account not found: {0}")]
    AccountNotFound(AccountNumber),
}

impl BankError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        BankError::InvalidArgument(message.into())
    }

    pub fn invalid_amount(message: impl Into<String>) -> Self {
        BankError::InvalidAmount(message.into())
    }
}

/// Business outcome of a withdrawal or transfer that passed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "a declined operation must be reported to the caller"]
pub enum Outcome {
    /// The operation was applied
    Completed,
    /// Insufficient funds; no state was mutated
    Declined,
}

impl Outcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, Outcome::Completed)
    }

    pub fn is_declined(&self) -> bool {
        matches!(self, Outcome::Declined)
    }
}
