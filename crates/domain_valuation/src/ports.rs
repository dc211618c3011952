//! Valuation domain ports
//!
//! The pre-qualification flow does not know the vehicle's pre-accident
//! value; it obtains one through `MarketValuePort`. The production adapter
//! is expected to call an external valuation vendor; this repo ships a
//! deterministic table-backed adapter (see [`crate::adapters`]) until that
//! integration lands.

use async_trait::async_trait;

use core_kernel::{DomainPort, Money, PortError};

use crate::vehicle::Vehicle;

/// Source of fair-market vehicle values
///
/// Implementations must be side-effect free from the caller's perspective:
/// the engine treats a lookup as a pure request/response exchange and owns
/// no caching. Failures are reported through `PortError` so the caller can
/// distinguish a vehicle the source does not know (`NotFound`) from an
/// outage (`is_transient()`).
#[async_trait]
pub trait MarketValuePort: DomainPort {
    /// Returns the fair market value of the vehicle immediately before the
    /// loss.
    ///
    /// # Arguments
    ///
    /// * `vehicle` - The vehicle descriptor (year/make/model/trim)
    /// * `mileage` - Odometer reading, which sources may use to adjust the
    ///   quote
    async fn market_value(&self, vehicle: &Vehicle, mileage: u32) -> Result<Money, PortError>;
}
