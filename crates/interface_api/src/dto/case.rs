//! Case DTOs

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use domain_case::case::{AccidentDetails, Case, RepairDetails, ValuationOutcome};
use domain_valuation::vehicle::Vehicle;

#[derive(Debug, Deserialize)]
pub struct CreateCaseRequest {
    pub owner_email: Option<String>,
    pub owner_name: Option<String>,
}

/// Wizard sections; each is optional so the wizard can submit one step at a
/// time.
#[derive(Debug, Deserialize)]
pub struct UpdateCaseRequest {
    pub vehicle: Option<VehicleSection>,
    pub accident: Option<AccidentSection>,
    pub repair: Option<RepairSection>,
}

#[derive(Debug, Deserialize)]
pub struct VehicleSection {
    pub year: i32,
    pub make: String,
    pub model: String,
    pub trim: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AccidentSection {
    pub mileage: u32,
    pub state: String,
    pub fault: String,
    pub accident_date: Option<NaiveDate>,
}

#[derive(Debug, Deserialize)]
pub struct RepairSection {
    pub repair_cost: Decimal,
    pub shop_name: Option<String>,
    pub completed: bool,
}

#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: String,
}

/// The appraised pre-accident value; repair cost and mileage come from the
/// case's own sections.
#[derive(Debug, Deserialize)]
pub struct RecordValuationRequest {
    pub pre_accident_value: Decimal,
}

#[derive(Debug, Serialize)]
pub struct CaseResponse {
    pub id: Uuid,
    pub case_number: String,
    pub status: String,
    pub owner_email: Option<String>,
    pub owner_name: Option<String>,
    pub vehicle: Option<VehicleView>,
    pub accident: Option<AccidentView>,
    pub repair: Option<RepairView>,
    pub valuation: Option<ValuationView>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct VehicleView {
    pub year: i32,
    pub make: String,
    pub model: String,
    pub trim: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AccidentView {
    pub mileage: u32,
    pub state: String,
    pub fault: String,
    pub accident_date: Option<NaiveDate>,
}

#[derive(Debug, Serialize)]
pub struct RepairView {
    pub repair_cost: Decimal,
    pub shop_name: Option<String>,
    pub completed: bool,
}

#[derive(Debug, Serialize)]
pub struct ValuationView {
    pub pre_accident_value: Decimal,
    pub diminished_value: Decimal,
    pub estimated_at: DateTime<Utc>,
}

impl From<Case> for CaseResponse {
    fn from(case: Case) -> Self {
        Self {
            id: case.id.into(),
            case_number: case.case_number,
            status: serde_variant(&case.status),
            owner_email: case.owner_email,
            owner_name: case.owner_name,
            vehicle: case.vehicle.map(VehicleView::from),
            accident: case.accident.map(AccidentView::from),
            repair: case.repair.map(RepairView::from),
            valuation: case.valuation.map(ValuationView::from),
            created_at: case.created_at,
            updated_at: case.updated_at,
        }
    }
}

impl From<Vehicle> for VehicleView {
    fn from(v: Vehicle) -> Self {
        Self {
            year: v.year,
            make: v.make,
            model: v.model,
            trim: v.trim,
        }
    }
}

impl From<AccidentDetails> for AccidentView {
    fn from(a: AccidentDetails) -> Self {
        Self {
            mileage: a.mileage,
            state: a.state.code().to_string(),
            fault: serde_variant(&a.fault),
            accident_date: a.accident_date,
        }
    }
}

impl From<RepairDetails> for RepairView {
    fn from(r: RepairDetails) -> Self {
        Self {
            repair_cost: r.repair_cost.amount(),
            shop_name: r.shop_name,
            completed: r.completed,
        }
    }
}

impl From<ValuationOutcome> for ValuationView {
    fn from(v: ValuationOutcome) -> Self {
        Self {
            pre_accident_value: v.pre_accident_value.amount(),
            diminished_value: v.diminished_value.amount(),
            estimated_at: v.estimated_at,
        }
    }
}

/// Renders a unit enum through its serde representation (snake_case).
fn serde_variant<T: Serialize>(value: &T) -> String {
    serde_json::to_value(value)
        .ok()
        .and_then(|v| v.as_str().map(str::to_string))
        .unwrap_or_default()
}
