//! Money with precise decimal arithmetic
//!
//! The appraisal product operates in US dollars only, so `Money` is a
//! single-currency fixed-point value backed by rust_decimal. Amounts are
//! stored with two decimal places so that what is calculated is exactly what
//! is persisted and displayed; binary floating point never enters the
//! pipeline.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub, Mul, Neg};
use thiserror::Error;

/// Number of decimal places carried by every amount (cents).
const DECIMAL_PLACES: u32 = 2;

/// Errors that can occur during money operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Division by zero")]
    DivisionByZero,
}

/// A US dollar amount with two-decimal fixed-point precision
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money {
    amount: Decimal,
}

impl Money {
    /// Creates a new Money value, rounding to cents
    pub fn new(amount: Decimal) -> Self {
        Self {
            amount: amount.round_dp(DECIMAL_PLACES),
        }
    }

    /// Creates Money from an integer amount of cents
    pub fn from_minor(cents: i64) -> Self {
        Self {
            amount: Decimal::new(cents, DECIMAL_PLACES),
        }
    }

    /// Creates Money from a whole-dollar amount
    pub fn from_major(dollars: i64) -> Self {
        Self {
            amount: Decimal::new(dollars, 0),
        }
    }

    /// The zero amount
    pub fn zero() -> Self {
        Self { amount: dec!(0) }
    }

    /// Returns the amount
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Returns true if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Returns true if the amount is strictly positive
    pub fn is_positive(&self) -> bool {
        self.amount.is_sign_positive() && !self.amount.is_zero()
    }

    /// Returns true if the amount is negative
    pub fn is_negative(&self) -> bool {
        self.amount.is_sign_negative() && !self.amount.is_zero()
    }

    /// Returns the absolute value
    pub fn abs(&self) -> Self {
        Self {
            amount: self.amount.abs(),
        }
    }

    /// Rounds to the nearest whole dollar.
    ///
    /// Uses round-half-away-from-zero ("round half up" for positive
    /// amounts), the round-to-nearest behavior the estimate formula uses.
    /// The strategy is fixed; callers must not depend on any other midpoint
    /// behavior.
    pub fn round_to_dollar(&self) -> Self {
        Self::nearest_dollar(self.amount)
    }

    /// Rounds a raw decimal amount straight to the nearest whole dollar,
    /// half away from zero.
    ///
    /// For chained modifier math that must be rounded exactly once: going
    /// through `Money::new` first would round the product to cents and can
    /// shift the dollar result (2.4975 -> 2.50 -> 3 instead of 2).
    pub fn nearest_dollar(amount: Decimal) -> Self {
        Self {
            amount: amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero),
        }
    }

    /// Multiplies by a scalar (e.g., a modifier or rate)
    pub fn multiply(&self, factor: Decimal) -> Self {
        Self::new(self.amount * factor)
    }

    /// Divides by a scalar
    pub fn divide(&self, divisor: Decimal) -> Result<Self, MoneyError> {
        if divisor.is_zero() {
            return Err(MoneyError::DivisionByZero);
        }
        Ok(Self::new(self.amount / divisor))
    }

    /// Returns `self / other` as a plain ratio.
    ///
    /// Used for the repair-cost-to-value ratio; the denominator must be
    /// non-zero or `MoneyError::DivisionByZero` is returned.
    pub fn ratio_to(&self, other: &Money) -> Result<Decimal, MoneyError> {
        if other.amount.is_zero() {
            return Err(MoneyError::DivisionByZero);
        }
        Ok(self.amount / other.amount)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.2}", self.amount)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.amount + other.amount)
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.amount - other.amount)
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.amount)
    }
}

impl Mul<Decimal> for Money {
    type Output = Self;

    fn mul(self, factor: Decimal) -> Self {
        self.multiply(factor)
    }
}
