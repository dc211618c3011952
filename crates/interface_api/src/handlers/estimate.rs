//! Estimate handlers

use axum::{extract::State, Json};

use core_kernel::Money;
use domain_valuation::engine;
use domain_valuation::prequalify::{PreQualificationRequest, PreQualifier};
use domain_valuation::vehicle::Vehicle;

use crate::dto::estimate::*;
use crate::{error::ApiError, AppState};

/// Computes a full-appraisal diminished value estimate
pub async fn create_estimate(
    State(_state): State<AppState>,
    Json(request): Json<EstimateRequest>,
) -> Result<Json<EstimateResponse>, ApiError> {
    let pre_accident_value = Money::new(request.pre_accident_value);
    let repair_cost = Money::new(request.repair_cost);

    let diminished_value = engine::estimate(pre_accident_value, repair_cost, request.mileage)?;

    Ok(Json(EstimateResponse {
        diminished_value: diminished_value.amount(),
    }))
}

/// Produces a pre-qualification range for the free-estimate form
pub async fn prequalify(
    State(state): State<AppState>,
    Json(request): Json<PrequalifyRequest>,
) -> Result<Json<PrequalifyResponse>, ApiError> {
    let vehicle = Vehicle::new(request.year, request.make, request.model, request.trim)?;
    let prequalify_request = PreQualificationRequest {
        vehicle,
        mileage: request.mileage,
        state: request.state.parse()?,
        fault: request.fault.parse()?,
    };

    let result = PreQualifier::new(state.market_values.clone())
        .prequalify(&prequalify_request)
        .await?;

    Ok(Json(PrequalifyResponse {
        estimate_min: result.estimate_min.amount(),
        estimate_max: result.estimate_max.amount(),
        qualified: result.qualified,
    }))
}
