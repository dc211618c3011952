//! Custom Test Assertions
//!
//! Provides specialized assertion helpers for domain types that give
//! more meaningful error messages than standard assertions.

use core_kernel::Money;
use domain_valuation::prequalify::PreQualification;
use rust_decimal::Decimal;

/// Asserts that two Money values are approximately equal within a tolerance
///
/// # Panics
///
/// Panics if the amounts differ by more than tolerance
pub fn assert_money_approx_eq(actual: &Money, expected: &Money, tolerance: Decimal) {
    let diff = (actual.amount() - expected.amount()).abs();
    assert!(
        diff <= tolerance,
        "Money amounts differ by more than tolerance: actual={}, expected={}, diff={}, tolerance={}",
        actual.amount(),
        expected.amount(),
        diff,
        tolerance
    );
}

/// Asserts that a Money value is strictly positive
pub fn assert_money_positive(money: &Money) {
    assert!(money.is_positive(), "Expected positive money, got {money}");
}

/// Asserts that a Money value is zero
pub fn assert_money_zero(money: &Money) {
    assert!(money.is_zero(), "Expected zero money, got {money}");
}

/// Asserts that a Money value carries no cents
pub fn assert_whole_dollars(money: &Money) {
    assert!(
        money.amount().fract().is_zero(),
        "Expected a whole-dollar amount, got {money}"
    );
}

/// Asserts the range invariant of a pre-qualification outcome
pub fn assert_range_valid(quote: &PreQualification) {
    assert!(
        !quote.estimate_min.is_negative(),
        "Range minimum is negative: {}",
        quote.estimate_min
    );
    assert!(
        quote.estimate_min <= quote.estimate_max,
        "Range is inverted: min={}, max={}",
        quote.estimate_min,
        quote.estimate_max
    );
}
