//! Pre-built Test Fixtures
//!
//! Provides ready-to-use test data for common entities across the appraisal
//! system. These fixtures are designed to be consistent and predictable for
//! unit tests.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use core_kernel::{CaseId, LeadId, Money};
use domain_valuation::vehicle::Vehicle;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use uuid::Uuid;

/// Fixture for Money test data
pub struct MoneyFixtures;

impl MoneyFixtures {
    /// Pre-accident value of the reference sedan
    pub fn accord_value() -> Money {
        Money::from_major(28_500)
    }

    /// A typical repairable-accident invoice
    pub fn typical_repair() -> Money {
        Money::from_major(4_500)
    }

    /// A repair invoice near the vehicle's value (severe accident)
    pub fn severe_repair() -> Money {
        Money::from_major(9_000)
    }

    /// The zero amount
    pub fn zero() -> Money {
        Money::zero()
    }

    /// An amount with cents, for rounding tests
    pub fn with_cents() -> Money {
        Money::new(dec!(1140.50))
    }
}

/// Fixture for vehicle test data
///
/// Mirrors the entries shipped in the static market value adapter so tests
/// can pre-qualify without wiring their own source.
pub struct VehicleFixtures;

impl VehicleFixtures {
    /// 2021 Honda Accord, the reference vehicle for formula tests
    pub fn accord() -> Vehicle {
        Vehicle::new(2021, "Honda", "Accord", None).expect("valid fixture vehicle")
    }

    /// 2020 Toyota Camry
    pub fn camry() -> Vehicle {
        Vehicle::new(2020, "Toyota", "Camry", None).expect("valid fixture vehicle")
    }

    /// 2019 Ford F-150
    pub fn f150() -> Vehicle {
        Vehicle::new(2019, "Ford", "F-150", None).expect("valid fixture vehicle")
    }

    /// A vehicle the static market value adapter does not know
    pub fn unknown() -> Vehicle {
        Vehicle::new(1999, "Yugo", "GV", None).expect("valid fixture vehicle")
    }
}

/// Fixture for temporal test data
pub struct TemporalFixtures;

impl TemporalFixtures {
    /// Standard accident date
    pub fn accident_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).expect("valid fixture date")
    }

    /// Standard valuation timestamp
    pub fn estimated_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 4, 1, 12, 0, 0).unwrap()
    }
}

/// Fixture for identifier test data
pub struct IdFixtures;

impl IdFixtures {
    /// Creates a deterministic case ID for testing
    pub fn case_id() -> CaseId {
        CaseId::from_uuid(Uuid::parse_str("550e8400-e29b-41d4-a716-446655440001").unwrap())
    }

    /// Creates a deterministic lead ID for testing
    pub fn lead_id() -> LeadId {
        LeadId::from_uuid(Uuid::parse_str("550e8400-e29b-41d4-a716-446655440002").unwrap())
    }
}

/// Fixture for decimal test data
pub struct DecimalFixtures;

impl DecimalFixtures {
    /// A ratio inside the second damage band
    pub fn moderate_damage_ratio() -> Decimal {
        dec!(0.25)
    }

    /// A ratio in the total-loss band
    pub fn total_loss_ratio() -> Decimal {
        dec!(0.90)
    }
}

/// Fixture for string test data
pub struct StringFixtures;

impl StringFixtures {
    /// Test email address
    pub fn email() -> &'static str {
        "jordan.smith@example.com"
    }

    /// Test phone number
    pub fn phone() -> &'static str {
        "404-555-0100"
    }

    /// Test requester name
    pub fn owner_name() -> &'static str {
        "Jordan Smith"
    }

    /// Test repair shop name
    pub fn shop_name() -> &'static str {
        "Peach State Collision"
    }
}
