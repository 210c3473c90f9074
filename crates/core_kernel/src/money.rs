//! Money type with precise decimal arithmetic
//!
//! This module provides a type-safe representation of monetary values
//! using rust_decimal for precise calculations without floating-point errors.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Neg, Sub};
use thiserror::Error;

/// Fractional digits carried by every stored amount.
const SCALE: u32 = 2;

/// Errors that can occur during money operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Overflow during calculation")]
    Overflow,
}

/// A monetary amount with exactly two fractional digits.
///
/// Money uses rust_decimal for precise arithmetic without floating-point
/// errors. Every constructor and arithmetic result is rounded half-up to
/// two decimal places, so a `Money` value never carries a finer scale
/// than the ledger stores.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Creates a new Money value, rounding half-up to two decimal places
    pub fn new(amount: Decimal) -> Self {
        Self(round(amount))
    }

    /// Creates Money from an integer amount of minor units (cents)
    pub fn from_minor(minor_units: i64) -> Self {
        Self(Decimal::new(minor_units, SCALE))
    }

    /// Creates a zero amount
    pub fn zero() -> Self {
        Self(dec!(0.00))
    }

    /// Returns the underlying decimal amount
    pub fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns true if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Returns true if the amount is strictly positive
    pub fn is_positive(&self) -> bool {
        self.0.is_sign_positive() && !self.0.is_zero()
    }

    /// Returns true if the amount is negative
    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// Returns the absolute value
    pub fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Checked addition that reports overflow instead of panicking
    pub fn checked_add(&self, other: &Money) -> Result<Money, MoneyError> {
        self.0
            .checked_add(other.0)
            .map(Self::new)
            .ok_or(MoneyError::Overflow)
    }

    /// Checked subtraction that reports overflow instead of panicking
    pub fn checked_sub(&self, other: &Money) -> Result<Money, MoneyError> {
        self.0
            .checked_sub(other.0)
            .map(Self::new)
            .ok_or(MoneyError::Overflow)
    }
}

/// Rounds to the ledger scale, half-up (midpoint away from zero)
fn round(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(SCALE, RoundingStrategy::MidpointAwayFromZero)
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        self.checked_add(&other).expect("Overflow in Money::add")
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        self.checked_sub(&other).expect("Overflow in Money::sub")
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_creation_rounds_to_two_places() {
        let m = Money::new(dec!(100.505));
        assert_eq!(m.amount(), dec!(100.51));
    }

    #[test]
    fn test_money_rounds_half_up() {
        assert_eq!(Money::new(dec!(2.005)).amount(), dec!(2.01));
        assert_eq!(Money::new(dec!(2.004)).amount(), dec!(2.00));
        // Away from zero on the negative side as well
        assert_eq!(Money::new(dec!(-2.005)).amount(), dec!(-2.01));
    }

    #[test]
    fn test_money_from_minor() {
        let m = Money::from_minor(10050);
        assert_eq!(m.amount(), dec!(100.50));
    }

    #[test]
    fn test_money_arithmetic() {
        let a = Money::new(dec!(100.00));
        let b = Money::new(dec!(50.00));

        assert_eq!((a + b).amount(), dec!(150.00));
        assert_eq!((a - b).amount(), dec!(50.00));
        assert_eq!((-b).amount(), dec!(-50.00));
    }

    #[test]
    fn test_money_ordering() {
        assert!(Money::new(dec!(10.00)) < Money::new(dec!(10.01)));
        assert!(Money::new(dec!(0.00)) > Money::new(dec!(-0.01)));
    }

    #[test]
    fn test_money_sign_predicates() {
        assert!(Money::new(dec!(0.01)).is_positive());
        assert!(!Money::zero().is_positive());
        assert!(!Money::zero().is_negative());
        assert!(Money::new(dec!(-0.01)).is_negative());
    }

    #[test]
    fn test_money_display() {
        assert_eq!(Money::new(dec!(1234.5)).to_string(), "1234.50");
        assert_eq!(Money::zero().to_string(), "0.00");
        assert_eq!(Money::new(dec!(-3)).to_string(), "-3.00");
    }

    #[test]
    fn test_money_serde_round_trip() {
        let m = Money::new(dec!(75.25));
        let json = serde_json::to_string(&m).unwrap();
        let back: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(back, m);
    }
}
