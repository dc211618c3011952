//! Estimate DTOs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Full-appraisal estimate: all three formula inputs are known.
#[derive(Debug, Deserialize)]
pub struct EstimateRequest {
    pub pre_accident_value: Decimal,
    pub repair_cost: Decimal,
    pub mileage: u32,
}

#[derive(Debug, Serialize)]
pub struct EstimateResponse {
    pub diminished_value: Decimal,
}

/// Pre-qualification: vehicle and accident basics only, no invoice yet.
#[derive(Debug, Deserialize)]
pub struct PrequalifyRequest {
    pub year: i32,
    pub make: String,
    pub model: String,
    pub trim: Option<String>,
    pub mileage: u32,
    pub state: String,
    pub fault: String,
}

#[derive(Debug, Serialize)]
pub struct PrequalifyResponse {
    pub estimate_min: Decimal,
    pub estimate_max: Decimal,
    pub qualified: bool,
}
