//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating random test data
//! that maintains domain invariants.

use core_kernel::Money;
use domain_valuation::vehicle::{FaultStatus, UsState, Vehicle};
use proptest::prelude::*;
use rust_decimal::Decimal;

/// Strategy for generating strictly positive amounts in cents
pub fn positive_amount_minor_strategy() -> impl Strategy<Value = i64> {
    1i64..1_000_000_000i64
}

/// Strategy for generating positive Money values
pub fn positive_money_strategy() -> impl Strategy<Value = Money> {
    positive_amount_minor_strategy().prop_map(Money::from_minor)
}

/// Strategy for generating non-negative repair invoices up to $100k
pub fn repair_cost_strategy() -> impl Strategy<Value = Money> {
    (0i64..10_000_000i64).prop_map(Money::from_minor)
}

/// Strategy for generating plausible pre-accident values ($500 to $200k)
pub fn vehicle_value_strategy() -> impl Strategy<Value = Money> {
    (50_000i64..20_000_000i64).prop_map(Money::from_minor)
}

/// Strategy for generating odometer readings
pub fn mileage_strategy() -> impl Strategy<Value = u32> {
    0u32..300_000u32
}

/// Strategy for generating ratios in [0, 1)
pub fn ratio_strategy() -> impl Strategy<Value = Decimal> {
    (0u32..10_000u32).prop_map(|n| Decimal::new(n as i64, 4))
}

/// Strategy for generating supported states
pub fn state_strategy() -> impl Strategy<Value = UsState> {
    prop_oneof![
        Just(UsState::Georgia),
        Just(UsState::Florida),
        Just(UsState::NorthCarolina),
    ]
}

/// Strategy for generating fault statuses
pub fn fault_strategy() -> impl Strategy<Value = FaultStatus> {
    prop_oneof![
        Just(FaultStatus::NotAtFault),
        Just(FaultStatus::AtFault),
        Just(FaultStatus::Unsure),
    ]
}

/// Strategy for generating valid vehicles from a small make/model pool
pub fn vehicle_strategy() -> impl Strategy<Value = Vehicle> {
    let makes_and_models = prop_oneof![
        Just(("Honda", "Accord")),
        Just(("Toyota", "Camry")),
        Just(("Ford", "F-150")),
        Just(("Chevrolet", "Malibu")),
        Just(("Nissan", "Altima")),
    ];
    (2000i32..=2024i32, makes_and_models).prop_map(|(year, (make, model))| {
        Vehicle::new(year, make, model, None).expect("generated vehicle is valid")
    })
}
