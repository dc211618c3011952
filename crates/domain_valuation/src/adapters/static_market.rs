//! Table-backed market value adapter
//!
//! Deterministic stand-in for the external valuation vendor: values are
//! keyed by (year, make, model) from a configured table. Mileage is ignored
//! here; the real vendor quotes by trim and region, and this adapter only
//! needs to be stable and predictable.

use std::collections::HashMap;

use async_trait::async_trait;
use tracing::debug;

use core_kernel::{DomainPort, Money, PortError};

use crate::ports::MarketValuePort;
use crate::vehicle::Vehicle;

/// In-memory market value table
///
/// Lookups are case-insensitive on make and model. A vehicle absent from
/// the table yields `PortError::NotFound`, which the pre-qualification flow
/// reports as a validation problem rather than an outage.
#[derive(Debug, Default)]
pub struct StaticMarketValueAdapter {
    values: HashMap<(i32, String, String), Money>,
}

impl StaticMarketValueAdapter {
    /// Creates an empty adapter
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entry to the value table
    pub fn with_entry(
        mut self,
        year: i32,
        make: impl Into<String>,
        model: impl Into<String>,
        value: Money,
    ) -> Self {
        self.values.insert(Self::key(year, &make.into(), &model.into()), value);
        self
    }

    /// Creates an adapter seeded with a handful of common vehicles, used by
    /// the demo deployment and tests
    pub fn with_samples() -> Self {
        Self::new()
            .with_entry(2021, "Honda", "Accord", Money::from_major(28_500))
            .with_entry(2020, "Toyota", "Camry", Money::from_major(24_000))
            .with_entry(2019, "Ford", "F-150", Money::from_major(32_000))
            .with_entry(2018, "Chevrolet", "Malibu", Money::from_major(15_500))
            .with_entry(2022, "Tesla", "Model 3", Money::from_major(38_000))
            .with_entry(2015, "Nissan", "Altima", Money::from_major(10_000))
    }

    fn key(year: i32, make: &str, model: &str) -> (i32, String, String) {
        (year, make.to_ascii_lowercase(), model.to_ascii_lowercase())
    }
}

impl DomainPort for StaticMarketValueAdapter {}

#[async_trait]
impl MarketValuePort for StaticMarketValueAdapter {
    async fn market_value(&self, vehicle: &Vehicle, _mileage: u32) -> Result<Money, PortError> {
        let key = Self::key(vehicle.year, &vehicle.make, &vehicle.model);
        match self.values.get(&key) {
            Some(value) => {
                debug!(vehicle = %vehicle, value = %value, "market value resolved from table");
                Ok(*value)
            }
            None => Err(PortError::not_found("MarketValue", vehicle)),
        }
    }
}
