//! Pre-qualification flow
//!
//! The free-estimate form collects only the vehicle and accident basics; no
//! repair invoice or appraised pre-accident value exists yet. This flow
//! substitutes a market-value lookup for the pre-accident value, assumes a
//! repair-cost ratio, and widens the resulting point estimate into a range.

use std::sync::Arc;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use core_kernel::Money;

use crate::engine;
use crate::error::ValuationError;
use crate::ports::MarketValuePort;
use crate::vehicle::{FaultStatus, UsState, Vehicle};

/// Assumed repair-cost-to-value ratio when no invoice exists yet.
///
/// 0.25 sits in the middle of the second damage band, selecting the 0.50
/// damage modifier for a typical repairable accident.
const ASSUMED_REPAIR_RATIO: Decimal = dec!(0.25);

/// Spread applied around the point estimate to form the quoted range.
const RANGE_SPREAD: Decimal = dec!(0.15);

/// Inputs to the pre-qualification flow
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreQualificationRequest {
    pub vehicle: Vehicle,
    pub mileage: u32,
    pub state: UsState,
    pub fault: FaultStatus,
}

/// A pre-qualification outcome: an estimate range plus the qualification flag
///
/// Invariant: `0 <= estimate_min <= estimate_max`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreQualification {
    pub estimate_min: Money,
    pub estimate_max: Money,
    pub qualified: bool,
}

/// Runs pre-qualification estimates against a market value source
pub struct PreQualifier {
    market_values: Arc<dyn MarketValuePort>,
}

impl PreQualifier {
    pub fn new(market_values: Arc<dyn MarketValuePort>) -> Self {
        Self { market_values }
    }

    /// Produces an estimate range and qualification flag for a vehicle the
    /// requester has not had appraised yet.
    ///
    /// # Errors
    ///
    /// * `InvalidInput` if the vehicle fails validation or the value source
    ///   does not know the vehicle
    /// * `DependencyUnavailable` if the value source is down or timing out
    pub async fn prequalify(
        &self,
        request: &PreQualificationRequest,
    ) -> Result<PreQualification, ValuationError> {
        let pre_accident_value = self
            .market_values
            .market_value(&request.vehicle, request.mileage)
            .await
            .map_err(|err| {
                if err.is_not_found() {
                    ValuationError::invalid_input(
                        "vehicle",
                        format!("no market value available for {}", request.vehicle),
                    )
                } else {
                    warn!(vehicle = %request.vehicle, error = %err, "market value lookup failed");
                    ValuationError::dependency_unavailable("market value lookup failed")
                }
            })?;

        let assumed_repair_cost = pre_accident_value.multiply(ASSUMED_REPAIR_RATIO);
        let point = engine::estimate(pre_accident_value, assumed_repair_cost, request.mileage)?;

        // Point is non-negative by the engine's contract, so both ends stay
        // non-negative and min <= max.
        let estimate_min = point.multiply(dec!(1) - RANGE_SPREAD).round_to_dollar();
        let estimate_max = point.multiply(dec!(1) + RANGE_SPREAD).round_to_dollar();
        let qualified = request.fault != FaultStatus::AtFault;

        debug!(
            vehicle = %request.vehicle,
            state = %request.state,
            %estimate_min,
            %estimate_max,
            qualified,
            "pre-qualification complete"
        );

        Ok(PreQualification {
            estimate_min,
            estimate_max,
            qualified,
        })
    }
}
