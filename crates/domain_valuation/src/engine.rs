//! The diminished value formula
//!
//! Base loss is 10% of the pre-accident value, scaled down by two banded
//! modifiers: how large the repair bill was relative to the vehicle's value,
//! and how many miles the vehicle had on it. The result is rounded
//! half-away-from-zero to whole dollars.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use core_kernel::Money;

use crate::error::ValuationError;

/// Share of pre-accident value taken as the base loss.
const BASE_LOSS_RATE: Decimal = dec!(0.10);

/// Damage modifier for a repair-cost-to-value ratio.
///
/// Thresholds are left-inclusive: a ratio of exactly 0.10, 0.40, or 0.70
/// selects the higher bracket.
pub fn damage_modifier(ratio: Decimal) -> Decimal {
    if ratio < dec!(0.10) {
        dec!(0.25)
    } else if ratio < dec!(0.40) {
        dec!(0.50)
    } else if ratio < dec!(0.70) {
        dec!(0.75)
    } else {
        dec!(1.00)
    }
}

/// Mileage modifier, descending in 20,000-mile bands.
pub fn mileage_modifier(mileage: u32) -> Decimal {
    match mileage {
        0..=19_999 => dec!(1.00),
        20_000..=39_999 => dec!(0.80),
        40_000..=59_999 => dec!(0.60),
        60_000..=79_999 => dec!(0.40),
        _ => dec!(0.20),
    }
}

/// Computes the diminished value estimate.
///
/// `pre_accident_value` must be strictly positive and `repair_cost`
/// non-negative; anything else is an `InvalidInput`. A zero pre-accident
/// value is rejected here rather than treated as maximum damage, so the
/// ratio division can never hit a zero denominator.
///
/// The function is pure: identical inputs always yield identical output.
pub fn estimate(
    pre_accident_value: Money,
    repair_cost: Money,
    mileage: u32,
) -> Result<Money, ValuationError> {
    if !pre_accident_value.is_positive() {
        return Err(ValuationError::invalid_input(
            "pre_accident_value",
            "pre-accident value must be greater than zero",
        ));
    }
    if repair_cost.is_negative() {
        return Err(ValuationError::invalid_input(
            "repair_cost",
            "repair cost cannot be negative",
        ));
    }

    let ratio = repair_cost
        .ratio_to(&pre_accident_value)
        .map_err(|_| {
            // Unreachable given the positivity check above; surfaced as the
            // same input error rather than a panic.
            ValuationError::invalid_input("pre_accident_value", "pre-accident value must be greater than zero")
        })?;

    // The product is carried at full precision and rounded exactly once.
    // Cent-rounding the intermediates can shift the dollar result when the
    // pre-accident value itself carries cents.
    let raw = pre_accident_value.amount()
        * BASE_LOSS_RATE
        * damage_modifier(ratio)
        * mileage_modifier(mileage);

    Ok(Money::nearest_dollar(raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scenario_moderate_damage_mid_mileage() {
        // ratio ~ 0.158 -> 0.50; 25,400 miles -> 0.80
        // round(2850 * 0.50 * 0.80) = 1140
        let result = estimate(Money::from_major(28_500), Money::from_major(4_500), 25_400).unwrap();
        assert_eq!(result, Money::from_major(1_140));
    }

    #[test]
    fn test_scenario_severe_damage_high_mileage() {
        // ratio 0.90 -> 1.00; 90,000 miles -> 0.20
        // round(1000 * 1.00 * 0.20) = 200
        let result = estimate(Money::from_major(10_000), Money::from_major(9_000), 90_000).unwrap();
        assert_eq!(result, Money::from_major(200));
    }

    #[test]
    fn test_damage_ratio_boundaries_are_left_inclusive() {
        assert_eq!(damage_modifier(dec!(0.0999)), dec!(0.25));
        assert_eq!(damage_modifier(dec!(0.10)), dec!(0.50));
        assert_eq!(damage_modifier(dec!(0.3999)), dec!(0.50));
        assert_eq!(damage_modifier(dec!(0.40)), dec!(0.75));
        assert_eq!(damage_modifier(dec!(0.6999)), dec!(0.75));
        assert_eq!(damage_modifier(dec!(0.70)), dec!(1.00));
        assert_eq!(damage_modifier(dec!(1.50)), dec!(1.00));
    }

    #[test]
    fn test_mileage_band_boundaries() {
        assert_eq!(mileage_modifier(19_999), dec!(1.00));
        assert_eq!(mileage_modifier(20_000), dec!(0.80));
        assert_eq!(mileage_modifier(39_999), dec!(0.80));
        assert_eq!(mileage_modifier(40_000), dec!(0.60));
        assert_eq!(mileage_modifier(59_999), dec!(0.60));
        assert_eq!(mileage_modifier(60_000), dec!(0.40));
        assert_eq!(mileage_modifier(79_999), dec!(0.40));
        assert_eq!(mileage_modifier(80_000), dec!(0.20));
        assert_eq!(mileage_modifier(250_000), dec!(0.20));
    }

    #[test]
    fn test_ratio_boundary_selects_higher_bracket_end_to_end() {
        // repair = exactly 10% of value: ratio 0.10 must select 0.50, not 0.25.
        // round(1000 * 0.50 * 1.00) = 500
        let result = estimate(Money::from_major(10_000), Money::from_major(1_000), 0).unwrap();
        assert_eq!(result, Money::from_major(500));
    }

    #[test]
    fn test_zero_pre_accident_value_rejected() {
        let result = estimate(Money::zero(), Money::from_major(1_000), 10_000);
        assert!(matches!(
            result,
            Err(ValuationError::InvalidInput { field: "pre_accident_value", .. })
        ));
    }

    #[test]
    fn test_negative_pre_accident_value_rejected() {
        let result = estimate(Money::from_major(-5_000), Money::from_major(1_000), 10_000);
        assert!(result.is_err());
    }

    #[test]
    fn test_negative_repair_cost_rejected() {
        let result = estimate(Money::from_major(10_000), Money::from_major(-100), 10_000);
        assert!(matches!(
            result,
            Err(ValuationError::InvalidInput { field: "repair_cost", .. })
        ));
    }

    #[test]
    fn test_zero_repair_cost_is_valid() {
        // ratio 0 -> 0.25; round(1000 * 0.25 * 1.00) = 250
        let result = estimate(Money::from_major(10_000), Money::zero(), 0).unwrap();
        assert_eq!(result, Money::from_major(250));
    }

    #[test]
    fn test_fractional_cent_product_rounds_once() {
        // 99.90 * 0.10 * 0.25 = 2.4975, which rounds to 2. Cent-rounding
        // the intermediate product would give 2.50 and then 3.
        let result = estimate(Money::new(dec!(99.90)), Money::new(dec!(5.00)), 0).unwrap();
        assert_eq!(result, Money::from_major(2));
    }

    #[test]
    fn test_idempotence() {
        let a = estimate(Money::from_major(28_500), Money::from_major(4_500), 25_400).unwrap();
        let b = estimate(Money::from_major(28_500), Money::from_major(4_500), 25_400).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_rounding_to_whole_dollars() {
        // 4567 * 0.10 * 0.25 * 1.00 = 114.175 -> 114
        let result = estimate(Money::from_major(4_567), Money::from_major(100), 5_000).unwrap();
        assert_eq!(result, Money::from_major(114));
    }
}
